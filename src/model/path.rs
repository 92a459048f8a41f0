use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::domain::ValueDomain;
use super::{Align, ButtonShadow, Config, FontFamily, FontWeight, LayoutVariant};

pub type MutationResult<T> = std::result::Result<T, MutationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("config path `{0}` does not name a leaf")]
    InvalidPath(String),
    #[error("{path} expects a {expected} value, got {found}")]
    TypeMismatch {
        path: ConfigPath,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("`{raw}` is not a valid value for {path}")]
    InvalidValue { path: ConfigPath, raw: String },
}

/// Every addressable leaf of [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigPath {
    TypographyFamily,
    TypographyWeight,
    TypographySize,
    ButtonRadius,
    ButtonShadow,
    ButtonAlign,
    ButtonBg,
    ButtonText,
    GalleryAlign,
    GalleryGap,
    GalleryRadius,
    LayoutCardRadius,
    LayoutPadding,
    LayoutBg,
    StrokeColor,
    StrokeWeight,
    CurrentLayout,
}

impl ConfigPath {
    pub const ALL: &'static [ConfigPath] = &[
        ConfigPath::TypographyFamily,
        ConfigPath::TypographyWeight,
        ConfigPath::TypographySize,
        ConfigPath::ButtonRadius,
        ConfigPath::ButtonShadow,
        ConfigPath::ButtonAlign,
        ConfigPath::ButtonBg,
        ConfigPath::ButtonText,
        ConfigPath::GalleryAlign,
        ConfigPath::GalleryGap,
        ConfigPath::GalleryRadius,
        ConfigPath::LayoutCardRadius,
        ConfigPath::LayoutPadding,
        ConfigPath::LayoutBg,
        ConfigPath::StrokeColor,
        ConfigPath::StrokeWeight,
        ConfigPath::CurrentLayout,
    ];

    /// Dot-delimited key chain as used in the exported document.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypographyFamily => "typography.family",
            Self::TypographyWeight => "typography.weight",
            Self::TypographySize => "typography.size",
            Self::ButtonRadius => "button.radius",
            Self::ButtonShadow => "button.shadow",
            Self::ButtonAlign => "button.align",
            Self::ButtonBg => "button.bg",
            Self::ButtonText => "button.text",
            Self::GalleryAlign => "gallery.align",
            Self::GalleryGap => "gallery.gap",
            Self::GalleryRadius => "gallery.radius",
            Self::LayoutCardRadius => "layout.cardRadius",
            Self::LayoutPadding => "layout.padding",
            Self::LayoutBg => "layout.bg",
            Self::StrokeColor => "stroke.color",
            Self::StrokeWeight => "stroke.weight",
            Self::CurrentLayout => "currentLayout",
        }
    }

    pub const fn kind(self) -> ValueKind {
        match self {
            Self::TypographyFamily => ValueKind::Family,
            Self::TypographyWeight => ValueKind::Weight,
            Self::TypographySize
            | Self::ButtonRadius
            | Self::GalleryGap
            | Self::GalleryRadius
            | Self::LayoutCardRadius
            | Self::LayoutPadding
            | Self::StrokeWeight => ValueKind::Px,
            Self::ButtonShadow => ValueKind::Shadow,
            Self::ButtonAlign | Self::GalleryAlign => ValueKind::Align,
            Self::ButtonBg | Self::ButtonText | Self::LayoutBg | Self::StrokeColor => {
                ValueKind::Color
            }
            Self::CurrentLayout => ValueKind::Layout,
        }
    }

    /// Whether the leaf accepts [`ConfigValue::Unset`].
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::ButtonBg | Self::ButtonText)
    }

    /// Turns raw control input into a typed value for this leaf.
    ///
    /// An empty string clears optional colors.
    pub fn parse_value(self, raw: &str) -> MutationResult<ConfigValue> {
        let invalid = || MutationError::InvalidValue {
            path: self,
            raw: raw.to_string(),
        };
        let value = match self.kind() {
            ValueKind::Family => ConfigValue::Family(raw.parse().map_err(|_| invalid())?),
            ValueKind::Weight => ConfigValue::Weight(raw.parse().map_err(|_| invalid())?),
            ValueKind::Px => ConfigValue::Px(raw.trim().parse().map_err(|_| invalid())?),
            ValueKind::Shadow => ConfigValue::Shadow(raw.parse().map_err(|_| invalid())?),
            ValueKind::Align => ConfigValue::Align(raw.parse().map_err(|_| invalid())?),
            ValueKind::Layout => ConfigValue::Layout(raw.parse().map_err(|_| invalid())?),
            ValueKind::Color if raw.is_empty() && self.is_optional() => ConfigValue::Unset,
            ValueKind::Color if raw.is_empty() => return Err(invalid()),
            ValueKind::Color => ConfigValue::Color(raw.to_string()),
            ValueKind::Unset => return Err(invalid()),
        };
        Ok(value)
    }

    pub fn domain(self) -> ValueDomain {
        ValueDomain::for_path(self)
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigPath {
    type Err = MutationError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == path)
            .ok_or_else(|| MutationError::InvalidPath(path.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Family,
    Weight,
    Px,
    Shadow,
    Align,
    Color,
    Layout,
    Unset,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Family => "font family",
            Self::Weight => "font weight",
            Self::Px => "pixel",
            Self::Shadow => "shadow",
            Self::Align => "alignment",
            Self::Color => "color",
            Self::Layout => "layout variant",
            Self::Unset => "unset",
        };
        f.write_str(name)
    }
}

/// A typed leaf value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Family(FontFamily),
    Weight(FontWeight),
    Px(u32),
    Shadow(ButtonShadow),
    Align(Align),
    Color(String),
    Layout(LayoutVariant),
    /// Clears an optional color so the palette fallback applies.
    Unset,
}

impl ConfigValue {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Family(_) => ValueKind::Family,
            Self::Weight(_) => ValueKind::Weight,
            Self::Px(_) => ValueKind::Px,
            Self::Shadow(_) => ValueKind::Shadow,
            Self::Align(_) => ValueKind::Align,
            Self::Color(_) => ValueKind::Color,
            Self::Layout(_) => ValueKind::Layout,
            Self::Unset => ValueKind::Unset,
        }
    }
}

impl From<u32> for ConfigValue {
    fn from(px: u32) -> Self {
        Self::Px(px)
    }
}

impl From<FontFamily> for ConfigValue {
    fn from(family: FontFamily) -> Self {
        Self::Family(family)
    }
}

impl From<FontWeight> for ConfigValue {
    fn from(weight: FontWeight) -> Self {
        Self::Weight(weight)
    }
}

impl From<ButtonShadow> for ConfigValue {
    fn from(shadow: ButtonShadow) -> Self {
        Self::Shadow(shadow)
    }
}

impl From<Align> for ConfigValue {
    fn from(align: Align) -> Self {
        Self::Align(align)
    }
}

impl From<LayoutVariant> for ConfigValue {
    fn from(variant: LayoutVariant) -> Self {
        Self::Layout(variant)
    }
}

impl From<&str> for ConfigValue {
    fn from(color: &str) -> Self {
        Self::Color(color.to_string())
    }
}

impl Config {
    /// Reads one leaf. Unset optional colors read as [`ConfigValue::Unset`].
    pub fn get(&self, path: ConfigPath) -> ConfigValue {
        let optional_color = |color: &Option<String>| {
            color
                .clone()
                .map_or(ConfigValue::Unset, ConfigValue::Color)
        };
        match path {
            ConfigPath::TypographyFamily => ConfigValue::Family(self.typography.family),
            ConfigPath::TypographyWeight => ConfigValue::Weight(self.typography.weight),
            ConfigPath::TypographySize => ConfigValue::Px(self.typography.size),
            ConfigPath::ButtonRadius => ConfigValue::Px(self.button.radius),
            ConfigPath::ButtonShadow => ConfigValue::Shadow(self.button.shadow),
            ConfigPath::ButtonAlign => ConfigValue::Align(self.button.align),
            ConfigPath::ButtonBg => optional_color(&self.button.bg),
            ConfigPath::ButtonText => optional_color(&self.button.text),
            ConfigPath::GalleryAlign => ConfigValue::Align(self.gallery.align),
            ConfigPath::GalleryGap => ConfigValue::Px(self.gallery.gap),
            ConfigPath::GalleryRadius => ConfigValue::Px(self.gallery.radius),
            ConfigPath::LayoutCardRadius => ConfigValue::Px(self.layout.card_radius),
            ConfigPath::LayoutPadding => ConfigValue::Px(self.layout.padding),
            ConfigPath::LayoutBg => ConfigValue::Color(self.layout.bg.clone()),
            ConfigPath::StrokeColor => ConfigValue::Color(self.stroke.color.clone()),
            ConfigPath::StrokeWeight => ConfigValue::Px(self.stroke.weight),
            ConfigPath::CurrentLayout => ConfigValue::Layout(self.current_layout),
        }
    }
}

/// Copy-on-write leaf replacement over [`Config`].
pub struct PathMutator;

impl PathMutator {
    /// Returns a copy of `config` with the leaf at `path` replaced.
    pub fn set(config: &Config, path: ConfigPath, value: ConfigValue) -> MutationResult<Config> {
        let mut next = config.clone();
        Self::assign(&mut next, path, value)?;
        Ok(next)
    }

    /// Like [`PathMutator::set`], addressing the leaf by its dotted key chain.
    pub fn set_dotted(config: &Config, path: &str, value: ConfigValue) -> MutationResult<Config> {
        Self::set(config, path.parse()?, value)
    }

    fn assign(config: &mut Config, path: ConfigPath, value: ConfigValue) -> MutationResult<()> {
        let mismatch = |found: ValueKind| MutationError::TypeMismatch {
            path,
            expected: path.kind(),
            found,
        };

        match (path, value) {
            (ConfigPath::TypographyFamily, ConfigValue::Family(family)) => {
                config.typography.family = family;
            }
            (ConfigPath::TypographyWeight, ConfigValue::Weight(weight)) => {
                config.typography.weight = weight;
            }
            (ConfigPath::ButtonShadow, ConfigValue::Shadow(shadow)) => {
                config.button.shadow = shadow;
            }
            (ConfigPath::ButtonAlign, ConfigValue::Align(align)) => config.button.align = align,
            (ConfigPath::GalleryAlign, ConfigValue::Align(align)) => config.gallery.align = align,
            (ConfigPath::CurrentLayout, ConfigValue::Layout(variant)) => {
                config.current_layout = variant;
            }
            (ConfigPath::ButtonBg, ConfigValue::Color(color)) => config.button.bg = Some(color),
            (ConfigPath::ButtonBg, ConfigValue::Unset) => config.button.bg = None,
            (ConfigPath::ButtonText, ConfigValue::Color(color)) => {
                config.button.text = Some(color);
            }
            (ConfigPath::ButtonText, ConfigValue::Unset) => config.button.text = None,
            (ConfigPath::LayoutBg, ConfigValue::Color(color)) => config.layout.bg = color,
            (ConfigPath::StrokeColor, ConfigValue::Color(color)) => config.stroke.color = color,
            (path, ConfigValue::Px(px)) if path.kind() == ValueKind::Px => {
                *px_slot(config, path) = px;
            }
            (_, other) => return Err(mismatch(other.kind())),
        }
        Ok(())
    }
}

fn px_slot(config: &mut Config, path: ConfigPath) -> &mut u32 {
    match path {
        ConfigPath::TypographySize => &mut config.typography.size,
        ConfigPath::ButtonRadius => &mut config.button.radius,
        ConfigPath::GalleryGap => &mut config.gallery.gap,
        ConfigPath::GalleryRadius => &mut config.gallery.radius,
        ConfigPath::LayoutCardRadius => &mut config.layout.card_radius,
        ConfigPath::LayoutPadding => &mut config.layout.padding,
        ConfigPath::StrokeWeight => &mut config.stroke.weight,
        other => unreachable!("{other} is not a pixel leaf"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PresetRegistry;

    fn baseline() -> Config {
        PresetRegistry::baseline().clone()
    }

    fn changed_leaves(before: &Config, after: &Config) -> Vec<ConfigPath> {
        ConfigPath::ALL
            .iter()
            .copied()
            .filter(|path| before.get(*path) != after.get(*path))
            .collect()
    }

    #[test]
    fn button_radius_update_leaves_siblings_untouched() {
        let config = baseline();
        let next = PathMutator::set_dotted(&config, "button.radius", ConfigValue::Px(40))
            .expect("button.radius should resolve");

        assert_eq!(next.button.radius, 40);
        assert_eq!(next.button.align, config.button.align);
        assert_eq!(next.typography, config.typography);
        assert_eq!(next.gallery, config.gallery);
        assert_eq!(next.layout, config.layout);
        assert_eq!(next.stroke, config.stroke);
        assert_eq!(config.button.radius, 20, "source config must not change");
    }

    #[test]
    fn every_leaf_update_changes_only_that_leaf() {
        let config = baseline();
        let replacements = [
            (ConfigPath::TypographyFamily, ConfigValue::Family(FontFamily::Roboto)),
            (ConfigPath::TypographyWeight, ConfigValue::Weight(FontWeight::Bold)),
            (ConfigPath::TypographySize, ConfigValue::Px(33)),
            (ConfigPath::ButtonRadius, ConfigValue::Px(3)),
            (ConfigPath::ButtonShadow, ConfigValue::Shadow(ButtonShadow::None)),
            (ConfigPath::ButtonAlign, ConfigValue::Align(Align::Right)),
            (ConfigPath::ButtonBg, ConfigValue::Color("#010203".into())),
            (ConfigPath::ButtonText, ConfigValue::Unset),
            (ConfigPath::GalleryAlign, ConfigValue::Align(Align::Left)),
            (ConfigPath::GalleryGap, ConfigValue::Px(1)),
            (ConfigPath::GalleryRadius, ConfigValue::Px(2)),
            (ConfigPath::LayoutCardRadius, ConfigValue::Px(4)),
            (ConfigPath::LayoutPadding, ConfigValue::Px(5)),
            (ConfigPath::LayoutBg, ConfigValue::Color("#0a0b0c".into())),
            (ConfigPath::StrokeColor, ConfigValue::Color("#0d0e0f".into())),
            (ConfigPath::StrokeWeight, ConfigValue::Px(6)),
            (ConfigPath::CurrentLayout, ConfigValue::Layout(LayoutVariant::B)),
        ];
        assert_eq!(replacements.len(), ConfigPath::ALL.len());

        for (path, value) in replacements {
            let next = PathMutator::set(&config, path, value.clone()).unwrap();
            assert_eq!(next.get(path), value);
            assert_eq!(changed_leaves(&config, &next), vec![path], "path {path}");
        }
    }

    #[test]
    fn unknown_path_is_rejected() {
        let config = baseline();
        let err = PathMutator::set_dotted(&config, "button.colour", ConfigValue::Px(1)).unwrap_err();
        assert_eq!(err, MutationError::InvalidPath("button.colour".into()));

        assert!("button".parse::<ConfigPath>().is_err());
        assert!("button.radius.extra".parse::<ConfigPath>().is_err());
    }

    #[test]
    fn mismatched_value_kind_is_rejected() {
        let config = baseline();
        let err = PathMutator::set(&config, ConfigPath::ButtonRadius, "#fff".into()).unwrap_err();
        assert_eq!(
            err,
            MutationError::TypeMismatch {
                path: ConfigPath::ButtonRadius,
                expected: ValueKind::Px,
                found: ValueKind::Color,
            }
        );

        let err = PathMutator::set(&config, ConfigPath::LayoutBg, ConfigValue::Unset).unwrap_err();
        assert!(matches!(err, MutationError::TypeMismatch { .. }));
    }

    #[test]
    fn dotted_names_round_trip_through_parse() {
        for path in ConfigPath::ALL {
            assert_eq!(path.as_str().parse::<ConfigPath>(), Ok(*path));
        }
    }

    #[test]
    fn parse_value_follows_leaf_kind() {
        assert_eq!(
            ConfigPath::TypographyWeight.parse_value("600"),
            Ok(ConfigValue::Weight(FontWeight::SemiBold))
        );
        assert_eq!(
            ConfigPath::GalleryGap.parse_value(" 12 "),
            Ok(ConfigValue::Px(12))
        );
        assert_eq!(ConfigPath::ButtonBg.parse_value(""), Ok(ConfigValue::Unset));
        assert!(ConfigPath::StrokeColor.parse_value("").is_err());
        assert!(ConfigPath::GalleryGap.parse_value("-3").is_err());
        assert!(ConfigPath::CurrentLayout.parse_value("C").is_err());
    }
}
