mod domain;
mod path;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use domain::{ControlRange, ValueDomain};
pub use path::{ConfigPath, ConfigValue, MutationError, MutationResult, PathMutator, ValueKind};

/// The complete style tree. Every sub-object is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub typography: Typography,
    pub button: ButtonStyle,
    pub gallery: GalleryStyle,
    pub layout: LayoutStyle,
    pub stroke: Stroke,
    pub current_layout: LayoutVariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub radius: u32,
    pub shadow: ButtonShadow,
    pub align: Align,
    /// Falls back to the palette primary when unset or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    /// Falls back to the palette text-on-primary when unset or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryStyle {
    pub align: Align,
    pub gap: u32,
    pub radius: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
    pub card_radius: u32,
    pub padding: u32,
    pub bg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub domain: &'static str,
    pub value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {}", self.value, self.domain)
    }
}

impl std::error::Error for ParseEnumError {}

/// Generates the string table, `Display` and `FromStr` for a closed
/// string-valued domain.
macro_rules! string_domain {
    ($ty:ident, $domain:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(ParseEnumError {
                        domain: $domain,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    Inter,
    Roboto,
    Poppins,
    #[serde(rename = "System UI")]
    SystemUi,
}

string_domain!(FontFamily, "font family", {
    Inter => "Inter",
    Roboto => "Roboto",
    Poppins => "Poppins",
    SystemUi => "System UI",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonShadow {
    None,
    Small,
    Medium,
    Large,
}

string_domain!(ButtonShadow, "shadow style", {
    None => "none",
    Small => "small",
    Medium => "medium",
    Large => "large",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

string_domain!(Align, "alignment", {
    Left => "left",
    Center => "center",
    Right => "right",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutVariant {
    #[default]
    A,
    B,
}

string_domain!(LayoutVariant, "layout variant", {
    A => "A",
    B => "B",
});

/// Numeric font weight. Serialized as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum FontWeight {
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    pub const ALL: &'static [FontWeight] = &[
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::SemiBold,
        FontWeight::Bold,
    ];

    pub const fn value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "400",
            Self::Medium => "500",
            Self::SemiBold => "600",
            Self::Bold => "700",
        }
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.value()
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = ParseEnumError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|weight| weight.value() == value)
            .ok_or_else(|| ParseEnumError {
                domain: "font weight",
                value: value.to_string(),
            })
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FontWeight {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let numeric = value.trim().parse::<u16>().map_err(|_| ParseEnumError {
            domain: "font weight",
            value: value.to_string(),
        })?;
        Self::try_from(numeric)
    }
}
