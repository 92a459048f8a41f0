use super::tokens::VARIANT_A_TOKENS;
use super::{content_region, gallery, panel_style, section_style, Composition, RenderSpec};
use crate::model::{Config, LayoutVariant};
use crate::theme::Palette;

/// Copy with call-to-action and the gallery grid side by side in one card.
pub(super) fn render(config: &Config, palette: &Palette) -> RenderSpec {
    let tokens = &VARIANT_A_TOKENS;
    RenderSpec {
        variant: LayoutVariant::A,
        section: section_style(config),
        composition: Composition::Card {
            card: panel_style(config, tokens),
        },
        content: content_region(config, palette, tokens),
        gallery: gallery(config, tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontWeight;
    use crate::preset::PresetRegistry;
    use crate::render::Justify;
    use crate::theme::ThemeRegistry;

    #[test]
    fn clean_preset_renders_single_card() {
        let config = PresetRegistry::lookup("Clean").unwrap();
        let spec = render(config, ThemeRegistry::default_palette());

        let Composition::Card { card } = &spec.composition else {
            panic!("variant A should render a single card");
        };
        assert_eq!(card.border_radius, 20);
        assert_eq!(card.padding, 28);
        assert_eq!(card.border_color, "#e5e7eb");
        assert_eq!(card.border_width, 1);
        assert!(card.box_shadow.is_some());

        assert_eq!(spec.section.padding, 28);
        assert_eq!(spec.content.heading, "Product Card");
        assert_eq!(spec.content.heading_style.size, 24);
        assert_eq!(spec.content.heading_style.weight, Some(FontWeight::Regular));
        assert_eq!(spec.content.body_style.size, 16);
        assert_eq!(spec.content.tags, ["Featured", "New"]);
        assert_eq!(spec.content.button.label, "Explore");
        assert_eq!(spec.content.button.justify, Justify::Start);
        assert_eq!(spec.content.button.shadow_class, "shadow-md");
    }

    #[test]
    fn gallery_uses_three_column_grid_of_six() {
        let config = PresetRegistry::baseline();
        let spec = render(config, ThemeRegistry::default_palette());

        assert_eq!(spec.gallery.columns, 3);
        assert_eq!(spec.gallery.images.len(), 6);
        assert_eq!(spec.gallery.gap, 14);
        assert_eq!(spec.gallery.justify, Justify::Center);
        assert_eq!(
            spec.gallery.images[0].src,
            "https://picsum.photos/seed/a1/256/192"
        );
    }
}
