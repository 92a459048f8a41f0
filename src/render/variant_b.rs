use super::tokens::VARIANT_B_TOKENS;
use super::{content_region, gallery, panel_style, section_style, Composition, RenderSpec};
use crate::model::{Config, LayoutVariant};
use crate::theme::Palette;

/// Copy with call-to-action in a sidebar, gallery in the main panel.
pub(super) fn render(config: &Config, palette: &Palette) -> RenderSpec {
    let tokens = &VARIANT_B_TOKENS;
    RenderSpec {
        variant: LayoutVariant::B,
        section: section_style(config),
        composition: Composition::Sidebar {
            sidebar: panel_style(config, tokens),
            main: panel_style(config, tokens),
        },
        content: content_region(config, palette, tokens),
        gallery: gallery(config, tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PresetRegistry;
    use crate::render::Justify;
    use crate::theme::ThemeRegistry;

    #[test]
    fn contrast_preset_renders_sidebar_and_main() {
        let config = PresetRegistry::lookup("Contrast").unwrap();
        let spec = render(config, ThemeRegistry::default_palette());

        let Composition::Sidebar { sidebar, main } = &spec.composition else {
            panic!("variant B should render sidebar and main panels");
        };
        assert_eq!(sidebar, main);
        assert_eq!(sidebar.border_radius, 28);
        assert_eq!(sidebar.border_width, 2);
        assert_eq!(sidebar.backdrop_blur, Some(6));
        assert!(sidebar.box_shadow.is_none());

        assert_eq!(spec.content.heading, "Collection");
        assert_eq!(spec.content.heading_style.size, 24);
        assert!(spec.content.tags.is_empty());
        assert_eq!(spec.content.button.label, "Buy Now");
        assert_eq!(spec.content.button.justify, Justify::End);
        assert_eq!(spec.content.button.color, "#fbbf24");
    }

    #[test]
    fn gallery_uses_larger_tiles() {
        let config = PresetRegistry::lookup("Contrast").unwrap();
        let spec = render(config, ThemeRegistry::default_palette());

        assert_eq!(spec.gallery.compact_columns, 2);
        assert_eq!(spec.gallery.tile.width, 176);
        assert_eq!(spec.gallery.images.len(), 6);
        assert_eq!(
            spec.gallery.images[5].src,
            "https://picsum.photos/seed/b6/320/224"
        );
    }
}
