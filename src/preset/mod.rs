use std::sync::OnceLock;

use thiserror::Error;

use crate::model::{
    Align, ButtonShadow, ButtonStyle, Config, FontFamily, FontWeight, GalleryStyle, LayoutStyle,
    LayoutVariant, Stroke, Typography,
};

pub type PresetResult<T> = std::result::Result<T, PresetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("unknown preset: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub config: Config,
}

/// Preset the store resets to unless the app config names another one.
pub const BASELINE_PRESET: &str = "Commerce";

fn presets() -> &'static [Preset] {
    static PRESETS: OnceLock<Vec<Preset>> = OnceLock::new();
    PRESETS.get_or_init(|| {
        vec![
            Preset {
                name: "Clean",
                config: Config {
                    typography: Typography {
                        family: FontFamily::Inter,
                        weight: FontWeight::Regular,
                        size: 16,
                    },
                    button: ButtonStyle {
                        radius: 12,
                        shadow: ButtonShadow::Medium,
                        align: Align::Left,
                        bg: Some("#111827".to_string()),
                        text: Some("#ffffff".to_string()),
                    },
                    gallery: GalleryStyle {
                        align: Align::Center,
                        gap: 12,
                        radius: 14,
                    },
                    layout: LayoutStyle {
                        card_radius: 20,
                        padding: 28,
                        bg: "#ffffff".to_string(),
                    },
                    stroke: Stroke {
                        color: "#e5e7eb".to_string(),
                        weight: 1,
                    },
                    current_layout: LayoutVariant::A,
                },
            },
            Preset {
                name: "Commerce",
                config: Config {
                    typography: Typography {
                        family: FontFamily::Poppins,
                        weight: FontWeight::Medium,
                        size: 18,
                    },
                    button: ButtonStyle {
                        radius: 20,
                        shadow: ButtonShadow::Large,
                        align: Align::Center,
                        bg: Some("#4f46e5".to_string()),
                        text: Some("#ffffff".to_string()),
                    },
                    gallery: GalleryStyle {
                        align: Align::Center,
                        gap: 14,
                        radius: 16,
                    },
                    layout: LayoutStyle {
                        card_radius: 24,
                        padding: 32,
                        bg: "#f9fafb".to_string(),
                    },
                    stroke: Stroke {
                        color: "#e2e8f0".to_string(),
                        weight: 1,
                    },
                    current_layout: LayoutVariant::A,
                },
            },
            Preset {
                name: "Contrast",
                config: Config {
                    typography: Typography {
                        family: FontFamily::Roboto,
                        weight: FontWeight::Bold,
                        size: 18,
                    },
                    button: ButtonStyle {
                        radius: 24,
                        shadow: ButtonShadow::Large,
                        align: Align::Right,
                        bg: Some("#111827".to_string()),
                        text: Some("#fbbf24".to_string()),
                    },
                    gallery: GalleryStyle {
                        align: Align::Right,
                        gap: 16,
                        radius: 20,
                    },
                    layout: LayoutStyle {
                        card_radius: 28,
                        padding: 32,
                        bg: "#f3f4f6".to_string(),
                    },
                    stroke: Stroke {
                        color: "#1f2937".to_string(),
                        weight: 2,
                    },
                    current_layout: LayoutVariant::B,
                },
            },
        ]
    })
}

/// Built-in configuration snapshots, in declaration order.
pub struct PresetRegistry;

impl PresetRegistry {
    pub fn names() -> impl Iterator<Item = &'static str> {
        presets().iter().map(|preset| preset.name)
    }

    pub fn all() -> &'static [Preset] {
        presets()
    }

    pub fn contains(name: &str) -> bool {
        presets().iter().any(|preset| preset.name == name)
    }

    pub fn lookup(name: &str) -> PresetResult<&'static Config> {
        presets()
            .iter()
            .find(|preset| preset.name == name)
            .map(|preset| &preset.config)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    pub fn baseline() -> &'static Config {
        presets()
            .iter()
            .find(|preset| preset.name == BASELINE_PRESET)
            .map_or(&presets()[0].config, |preset| &preset.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_declaration_order() {
        let names: Vec<_> = PresetRegistry::names().collect();
        assert_eq!(names, ["Clean", "Commerce", "Contrast"]);
    }

    #[test]
    fn baseline_is_commerce() {
        let baseline = PresetRegistry::baseline();
        assert_eq!(
            baseline,
            PresetRegistry::lookup(BASELINE_PRESET).expect("baseline preset should exist")
        );
        assert_eq!(baseline.typography.family, FontFamily::Poppins);
        assert_eq!(baseline.button.radius, 20);
    }

    #[test]
    fn contrast_preset_uses_sidebar_layout() {
        let contrast = PresetRegistry::lookup("Contrast").unwrap();
        assert_eq!(contrast.current_layout, LayoutVariant::B);
        assert_eq!(contrast.stroke.weight, 2);
        assert_eq!(contrast.button.text.as_deref(), Some("#fbbf24"));
    }

    #[test]
    fn lookup_reports_unknown_names() {
        assert_eq!(
            PresetRegistry::lookup("Brutalist").unwrap_err(),
            PresetError::NotFound("Brutalist".into())
        );
        assert!(PresetRegistry::contains("Clean"));
    }
}
