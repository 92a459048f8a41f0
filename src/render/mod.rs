//! Pure derivation of concrete preview parameters from a [`Config`] and a
//! [`Palette`].
//!
//! Both layout variants share the same derivation rules and differ only in
//! how the derived pieces are slotted: variant A puts the copy and the
//! gallery into one card, variant B splits them into a sidebar and a main
//! panel. Numeric pixel values are passed through verbatim.

mod device;
mod tokens;
mod variant_a;
mod variant_b;

use crate::model::{Align, ButtonShadow, Config, FontFamily, FontWeight, LayoutVariant};
use crate::theme::Palette;

pub use device::{DeviceFrame, FrameSpec};
pub use tokens::{TileSize, VariantTokens};

const GALLERY_IMAGE_SHADOW: &str = "0 8px 20px rgba(0,0,0,0.08)";

/// Flex justification derived from an [`Align`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Justify {
    Start,
    Center,
    End,
}

impl Justify {
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
        }
    }

    pub const fn utility_class(self) -> &'static str {
        match self {
            Self::Start => "justify-start",
            Self::Center => "justify-center",
            Self::End => "justify-end",
        }
    }
}

impl From<Align> for Justify {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => Self::Start,
            Align::Center => Self::Center,
            Align::Right => Self::End,
        }
    }
}

pub const fn shadow_class(shadow: ButtonShadow) -> &'static str {
    match shadow {
        ButtonShadow::None => "",
        ButtonShadow::Small => "shadow",
        ButtonShadow::Medium => "shadow-md",
        ButtonShadow::Large => "shadow-xl",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStyle {
    pub background: String,
    pub font_family: FontFamily,
    pub padding: u32,
}

/// A bordered container: the single card of A, or a sidebar/main panel of B.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelStyle {
    pub border_color: String,
    pub border_width: u32,
    pub border_radius: u32,
    pub padding: u32,
    pub background: &'static str,
    pub box_shadow: Option<&'static str>,
    pub backdrop_blur: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub weight: Option<FontWeight>,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub justify: Justify,
    pub background: String,
    pub color: String,
    pub radius: u32,
    pub shadow_class: &'static str,
    pub padding_x: u32,
    pub padding_y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegion {
    pub tags: &'static [&'static str],
    pub heading: &'static str,
    pub heading_style: TextStyle,
    pub body: &'static str,
    pub body_style: TextStyle,
    pub button: ButtonSpec,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub radius: u32,
    pub border_width: u32,
    pub border_color: String,
    pub box_shadow: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySpec {
    pub justify: Justify,
    pub gap: u32,
    pub columns: u32,
    pub compact_columns: u32,
    pub tile: TileSize,
    pub compact_tile: TileSize,
    pub images: Vec<GalleryImage>,
}

/// Which structural slots the derived pieces land in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// Copy and gallery share one card.
    Card { card: PanelStyle },
    /// Copy sits in the sidebar, gallery in the main panel.
    Sidebar { sidebar: PanelStyle, main: PanelStyle },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSpec {
    pub variant: LayoutVariant,
    pub section: SectionStyle,
    pub composition: Composition,
    pub content: ContentRegion,
    pub gallery: GallerySpec,
}

impl RenderSpec {
    pub fn panels(&self) -> Vec<&PanelStyle> {
        match &self.composition {
            Composition::Card { card } => vec![card],
            Composition::Sidebar { sidebar, main } => vec![sidebar, main],
        }
    }
}

/// Renders the variant selected by `config.current_layout`.
pub fn render(config: &Config, palette: &Palette) -> RenderSpec {
    render_variant(config.current_layout, config, palette)
}

pub fn render_variant(variant: LayoutVariant, config: &Config, palette: &Palette) -> RenderSpec {
    match variant {
        LayoutVariant::A => variant_a::render(config, palette),
        LayoutVariant::B => variant_b::render(config, palette),
    }
}

pub fn button_background(config: &Config, palette: &Palette) -> String {
    non_empty(config.button.bg.as_deref())
        .unwrap_or(palette.primary)
        .to_string()
}

pub fn button_text_color(config: &Config, palette: &Palette) -> String {
    non_empty(config.button.text.as_deref())
        .unwrap_or(palette.text_on_primary)
        .to_string()
}

fn non_empty(color: Option<&str>) -> Option<&str> {
    color.filter(|color| !color.is_empty())
}

fn section_style(config: &Config) -> SectionStyle {
    SectionStyle {
        background: config.layout.bg.clone(),
        font_family: config.typography.family,
        padding: config.layout.padding,
    }
}

fn panel_style(config: &Config, tokens: &VariantTokens) -> PanelStyle {
    PanelStyle {
        border_color: config.stroke.color.clone(),
        border_width: config.stroke.weight,
        border_radius: config.layout.card_radius,
        padding: config.layout.padding,
        background: tokens.panel_background,
        box_shadow: tokens.panel_shadow,
        backdrop_blur: tokens.panel_blur,
    }
}

fn content_region(config: &Config, palette: &Palette, tokens: &VariantTokens) -> ContentRegion {
    let typography = &config.typography;
    ContentRegion {
        tags: tokens.tags,
        heading: tokens.heading,
        heading_style: TextStyle {
            weight: Some(typography.weight),
            size: typography.size.saturating_add(tokens.heading_size_offset),
        },
        body: tokens.body,
        body_style: TextStyle {
            weight: None,
            size: typography.size,
        },
        button: ButtonSpec {
            label: tokens.button_label,
            justify: config.button.align.into(),
            background: button_background(config, palette),
            color: button_text_color(config, palette),
            radius: config.button.radius,
            shadow_class: shadow_class(config.button.shadow),
            padding_x: tokens.button_padding.0,
            padding_y: tokens.button_padding.1,
        },
    }
}

fn gallery(config: &Config, tokens: &VariantTokens) -> GallerySpec {
    let images = (1..=tokens.image_count)
        .map(|index| GalleryImage {
            src: tokens.image_source(index),
            radius: config.gallery.radius,
            border_width: config.stroke.weight,
            border_color: config.stroke.color.clone(),
            box_shadow: GALLERY_IMAGE_SHADOW,
        })
        .collect();

    GallerySpec {
        justify: config.gallery.align.into(),
        gap: config.gallery.gap,
        columns: tokens.gallery_columns,
        compact_columns: tokens.gallery_compact_columns,
        tile: tokens.tile,
        compact_tile: tokens.compact_tile,
        images,
    }
}
