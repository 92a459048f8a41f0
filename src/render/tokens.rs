/// Fixed per-variant structure. Nothing here is user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantTokens {
    pub tags: &'static [&'static str],
    pub heading: &'static str,
    pub heading_size_offset: u32,
    pub body: &'static str,
    pub button_label: &'static str,
    /// Horizontal and vertical button padding in px.
    pub button_padding: (u32, u32),
    pub panel_background: &'static str,
    pub panel_shadow: Option<&'static str>,
    pub panel_blur: Option<u32>,
    pub gallery_columns: u32,
    pub gallery_compact_columns: u32,
    pub tile: TileSize,
    pub compact_tile: TileSize,
    pub image_count: u32,
    pub image_seed_prefix: &'static str,
    pub image_source_size: TileSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl VariantTokens {
    pub fn image_source(&self, index: u32) -> String {
        format!(
            "https://picsum.photos/seed/{}{index}/{}/{}",
            self.image_seed_prefix, self.image_source_size.width, self.image_source_size.height
        )
    }
}

pub const VARIANT_A_TOKENS: VariantTokens = VariantTokens {
    tags: &["Featured", "New"],
    heading: "Product Card",
    heading_size_offset: 8,
    body: "Edit typography, spacing, borders and button style. Changes show up immediately.",
    button_label: "Explore",
    button_padding: (24, 12),
    panel_background: "linear-gradient(180deg, rgba(255,255,255,0.9), rgba(255,255,255,0.8))",
    panel_shadow: Some("0 20px 40px rgba(0,0,0,0.06)"),
    panel_blur: None,
    gallery_columns: 3,
    gallery_compact_columns: 3,
    tile: TileSize::new(128, 96),
    compact_tile: TileSize::new(112, 80),
    image_count: 6,
    image_seed_prefix: "a",
    image_source_size: TileSize::new(256, 192),
};

pub const VARIANT_B_TOKENS: VariantTokens = VariantTokens {
    tags: &[],
    heading: "Collection",
    heading_size_offset: 6,
    body: "Sidebar variant with adjustable borders and shadows.",
    button_label: "Buy Now",
    button_padding: (20, 10),
    panel_background: "rgba(255,255,255,0.8)",
    panel_shadow: None,
    panel_blur: Some(6),
    gallery_columns: 3,
    gallery_compact_columns: 2,
    tile: TileSize::new(176, 128),
    compact_tile: TileSize::new(160, 112),
    image_count: 6,
    image_seed_prefix: "b",
    image_source_size: TileSize::new(320, 224),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_show_six_images() {
        assert_eq!(VARIANT_A_TOKENS.image_count, 6);
        assert_eq!(VARIANT_B_TOKENS.image_count, 6);
    }

    #[test]
    fn variant_b_uses_larger_tiles() {
        assert!(VARIANT_B_TOKENS.tile.width > VARIANT_A_TOKENS.tile.width);
        assert!(VARIANT_B_TOKENS.tile.height > VARIANT_A_TOKENS.tile.height);
    }

    #[test]
    fn image_source_encodes_seed_and_size() {
        assert_eq!(
            VARIANT_A_TOKENS.image_source(3),
            "https://picsum.photos/seed/a3/256/192"
        );
        assert_eq!(
            VARIANT_B_TOKENS.image_source(6),
            "https://picsum.photos/seed/b6/320/224"
        );
    }
}
