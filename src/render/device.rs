use std::fmt;
use std::str::FromStr;

/// Preview frame the rendered layout sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceFrame {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSpec {
    pub device: DeviceFrame,
    /// `None` fills the available width.
    pub max_width: Option<u32>,
    pub corner_radius: u32,
}

impl DeviceFrame {
    pub const ALL: &'static [DeviceFrame] = &[Self::Desktop, Self::Tablet, Self::Mobile];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Tablet => "Tablet",
            Self::Mobile => "Mobile",
        }
    }

    pub const fn spec(self) -> FrameSpec {
        let (max_width, corner_radius) = match self {
            Self::Desktop => (None, 16),
            Self::Tablet => (Some(768), 16),
            Self::Mobile => (Some(390), 24),
        };
        FrameSpec {
            device: self,
            max_width,
            corner_radius,
        }
    }
}

impl fmt::Display for DeviceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceFrame {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|device| device.as_str() == value)
            .ok_or_else(|| format!("unknown device frame: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_narrow_from_desktop_to_mobile() {
        assert_eq!(DeviceFrame::Desktop.spec().max_width, None);
        assert_eq!(DeviceFrame::Tablet.spec().max_width, Some(768));
        assert_eq!(DeviceFrame::Mobile.spec().max_width, Some(390));
        assert_eq!(DeviceFrame::Mobile.spec().corner_radius, 24);
    }

    #[test]
    fn device_names_parse_back() {
        for device in DeviceFrame::ALL {
            assert_eq!(device.as_str().parse::<DeviceFrame>(), Ok(*device));
        }
        assert!("Watch".parse::<DeviceFrame>().is_err());
    }
}
