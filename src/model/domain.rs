use super::path::ConfigPath;
use super::{Align, ButtonShadow, FontFamily, FontWeight, LayoutVariant};

/// Slider bounds exposed to the user. The store never clamps; only
/// interactive controls do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl ControlRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max, step: 1 }
    }

    pub const fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    /// Fill fraction of the slider track, `0.0..=1.0`.
    pub fn fraction(self, value: u32) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        (self.clamp(value) - self.min) as f32 / (self.max - self.min) as f32
    }
}

const FONT_SIZE_RANGE: ControlRange = ControlRange::new(10, 60);
const BUTTON_RADIUS_RANGE: ControlRange = ControlRange::new(0, 40);
const GALLERY_GAP_RANGE: ControlRange = ControlRange::new(0, 32);
const GALLERY_RADIUS_RANGE: ControlRange = ControlRange::new(0, 36);
const CARD_RADIUS_RANGE: ControlRange = ControlRange::new(0, 36);
const PADDING_RANGE: ControlRange = ControlRange::new(0, 48);
const STROKE_WEIGHT_RANGE: ControlRange = ControlRange::new(0, 6);

/// Legal values a control bound to a leaf may emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueDomain {
    Range(ControlRange),
    Options(Vec<&'static str>),
    Color { optional: bool },
}

impl ValueDomain {
    pub fn for_path(path: ConfigPath) -> Self {
        match path {
            ConfigPath::TypographySize => Self::Range(FONT_SIZE_RANGE),
            ConfigPath::ButtonRadius => Self::Range(BUTTON_RADIUS_RANGE),
            ConfigPath::GalleryGap => Self::Range(GALLERY_GAP_RANGE),
            ConfigPath::GalleryRadius => Self::Range(GALLERY_RADIUS_RANGE),
            ConfigPath::LayoutCardRadius => Self::Range(CARD_RADIUS_RANGE),
            ConfigPath::LayoutPadding => Self::Range(PADDING_RANGE),
            ConfigPath::StrokeWeight => Self::Range(STROKE_WEIGHT_RANGE),
            ConfigPath::TypographyFamily => options(FontFamily::ALL, FontFamily::as_str),
            ConfigPath::TypographyWeight => options(FontWeight::ALL, FontWeight::label),
            ConfigPath::ButtonShadow => options(ButtonShadow::ALL, ButtonShadow::as_str),
            ConfigPath::ButtonAlign | ConfigPath::GalleryAlign => {
                options(Align::ALL, Align::as_str)
            }
            ConfigPath::CurrentLayout => options(LayoutVariant::ALL, LayoutVariant::as_str),
            ConfigPath::ButtonBg
            | ConfigPath::ButtonText
            | ConfigPath::LayoutBg
            | ConfigPath::StrokeColor => Self::Color {
                optional: path.is_optional(),
            },
        }
    }

    /// Whether raw control text would be accepted by this domain.
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            Self::Range(range) => raw
                .trim()
                .parse::<u32>()
                .is_ok_and(|value| range.contains(value)),
            Self::Options(options) => options.iter().any(|option| *option == raw),
            Self::Color { optional } => *optional || !raw.is_empty(),
        }
    }
}

fn options<T: Copy>(all: &[T], name: impl Fn(T) -> &'static str) -> ValueDomain {
    ValueDomain::Options(all.iter().copied().map(name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueKind;

    #[test]
    fn numeric_leaves_expose_control_ranges() {
        for path in ConfigPath::ALL {
            let is_range = matches!(path.domain(), ValueDomain::Range(_));
            assert_eq!(is_range, path.kind() == ValueKind::Px, "path {path}");
        }
        assert_eq!(
            ConfigPath::TypographySize.domain(),
            ValueDomain::Range(ControlRange::new(10, 60))
        );
        assert_eq!(
            ConfigPath::StrokeWeight.domain(),
            ValueDomain::Range(ControlRange::new(0, 6))
        );
    }

    #[test]
    fn option_domains_list_catalog_in_order() {
        assert_eq!(
            ConfigPath::TypographyFamily.domain(),
            ValueDomain::Options(vec!["Inter", "Roboto", "Poppins", "System UI"])
        );
        assert_eq!(
            ConfigPath::TypographyWeight.domain(),
            ValueDomain::Options(vec!["400", "500", "600", "700"])
        );
        assert_eq!(
            ConfigPath::ButtonShadow.domain(),
            ValueDomain::Options(vec!["none", "small", "medium", "large"])
        );
    }

    #[test]
    fn domain_accepts_only_in_range_values() {
        let size = ConfigPath::TypographySize.domain();
        assert!(size.accepts("10"));
        assert!(size.accepts("60"));
        assert!(!size.accepts("9"));
        assert!(!size.accepts("61"));
        assert!(!size.accepts("abc"));

        assert!(ConfigPath::ButtonBg.domain().accepts(""));
        assert!(!ConfigPath::LayoutBg.domain().accepts(""));
    }

    #[test]
    fn control_range_clamps_and_reports_fraction() {
        let range = ControlRange::new(10, 60);
        assert_eq!(range.clamp(4), 10);
        assert_eq!(range.clamp(99), 60);
        assert_eq!(range.fraction(10), 0.0);
        assert_eq!(range.fraction(60), 1.0);
        assert_eq!(range.fraction(35), 0.5);
    }
}
