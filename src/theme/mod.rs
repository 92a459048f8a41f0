use thiserror::Error;

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    NotFound(String),
}

/// Three-stop background gradient, expressed as utility color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub via: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub fn utility_classes(&self) -> String {
        format!("from-{} via-{} to-{}", self.from, self.via, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub gradient: Gradient,
    pub surface: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub text_on_primary: &'static str,
}

const GLASS_SURFACE: &str = "bg-white/70 backdrop-blur";

static PALETTES: [Palette; 4] = [
    Palette {
        name: "Aurora",
        gradient: Gradient {
            from: "fuchsia-500",
            via: "indigo-500",
            to: "sky-500",
        },
        surface: GLASS_SURFACE,
        primary: "#6D28D9",
        accent: "#22D3EE",
        text_on_primary: "#FFFFFF",
    },
    Palette {
        name: "Sunset",
        gradient: Gradient {
            from: "rose-500",
            via: "orange-500",
            to: "amber-400",
        },
        surface: GLASS_SURFACE,
        primary: "#EA580C",
        accent: "#F59E0B",
        text_on_primary: "#111827",
    },
    Palette {
        name: "Ocean",
        gradient: Gradient {
            from: "cyan-500",
            via: "blue-500",
            to: "indigo-500",
        },
        surface: GLASS_SURFACE,
        primary: "#0EA5E9",
        accent: "#6366F1",
        text_on_primary: "#FFFFFF",
    },
    Palette {
        name: "Forest",
        gradient: Gradient {
            from: "emerald-500",
            via: "teal-500",
            to: "cyan-500",
        },
        surface: GLASS_SURFACE,
        primary: "#059669",
        accent: "#14B8A6",
        text_on_primary: "#FFFFFF",
    },
];

pub const DEFAULT_THEME: &str = "Aurora";

/// Built-in palettes, in declaration order.
pub struct ThemeRegistry;

impl ThemeRegistry {
    pub fn names() -> impl Iterator<Item = &'static str> {
        PALETTES.iter().map(|palette| palette.name)
    }

    pub fn all() -> &'static [Palette] {
        &PALETTES
    }

    pub fn contains(name: &str) -> bool {
        PALETTES.iter().any(|palette| palette.name == name)
    }

    pub fn lookup(name: &str) -> ThemeResult<&'static Palette> {
        PALETTES
            .iter()
            .find(|palette| palette.name == name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))
    }

    pub fn default_palette() -> &'static Palette {
        &PALETTES[0]
    }
}
