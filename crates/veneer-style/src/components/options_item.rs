//! Options list item theme and style generation.
//!
//! An item can be highlighted (pointer or keyboard focus travels over it)
//! and selected at the same time; the combination gets its own background
//! so the highlight stays visible on an already selected row.

use veneer_tokens::Theme;

use crate::block::{StyleBlock, StyleMap};
use crate::component_theme::{ComponentTheme, ComponentThemeGenerator, VariantOverlays};
use crate::generator::StyleGenerator;
use crate::merge::{merged, when};

/// Stable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptionsItemProps {
    /// Indent the item one nesting level.
    pub nested: bool,
    /// Reserve space for a leading icon column.
    pub has_icon: bool,
}

/// Interaction flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptionsItemState {
    /// Pointer or keyboard highlight is on this item.
    pub highlighted: bool,
    /// The item is the current selection.
    pub selected: bool,
}

/// Generator unit for the OptionsItem component kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionsItem;

impl ComponentThemeGenerator for OptionsItem {
    fn component(&self) -> &'static str {
        "OptionsItem"
    }

    fn base(&self, theme: &Theme) -> ComponentTheme {
        ComponentTheme::new()
            .set("fontSize", theme.typography.value("fontSizeMedium"))
            .set("fontFamily", theme.typography.value("fontFamily"))
            .set("fontWeight", theme.typography.value("fontWeightNormal"))
            .set("lineHeight", theme.typography.value("lineHeightCondensed"))
            .set("color", theme.colors.value("textDarkest"))
            .set("background", theme.colors.value("backgroundLightest"))
            .set("highlightedLabelColor", theme.colors.value("textLightest"))
            .set("highlightedBackground", theme.colors.value("backgroundBrand"))
            .set("selectedLabelColor", theme.colors.value("textLightest"))
            .set("selectedBackground", theme.colors.value("backgroundDarkest"))
            .set(
                "selectedHighlightedBackground",
                theme.colors.value("textBrand"),
            )
            .set(
                "padding",
                format!(
                    "{} {}",
                    theme.spacing.value("xSmall"),
                    theme.spacing.value("small")
                ),
            )
            .set("iconPadding", theme.spacing.value("small"))
            .set("nestedPadding", theme.spacing.value("small"))
            .set("descriptionFontSize", theme.typography.value("fontSizeSmall"))
            .set(
                "descriptionFontWeight",
                theme.typography.value("fontWeightNormal"),
            )
            .set("descriptionLineHeight", theme.typography.value("lineHeight"))
            .set("descriptionColor", theme.colors.value("textDark"))
    }

    fn overlays(&self, theme: &Theme) -> VariantOverlays {
        VariantOverlays::none().with(
            veneer_tokens::builtin::CANVAS,
            ComponentTheme::new()
                .set("color", theme.brand.value("fontColorDark"))
                .set("highlightedBackground", theme.brand.value("primary")),
        )
    }
}

impl StyleGenerator for OptionsItem {
    type Props = OptionsItemProps;
    type State = OptionsItemState;

    fn generate_style(
        &self,
        component_theme: &ComponentTheme,
        props: &Self::Props,
        state: &Self::State,
    ) -> StyleMap {
        let base = StyleBlock::new()
            .set("fontSize", component_theme.var("fontSize"))
            .set("fontFamily", component_theme.var("fontFamily"))
            .set("fontWeight", component_theme.var("fontWeight"))
            .set("lineHeight", component_theme.var("lineHeight"))
            .set("color", component_theme.var("color"))
            .set("background", component_theme.var("background"))
            .set("cursor", "pointer");

        let highlighted_style = when(state.highlighted, || {
            StyleBlock::new()
                .set("color", component_theme.var("highlightedLabelColor"))
                .set("background", component_theme.var("highlightedBackground"))
        });

        let selected_style = when(state.selected, || {
            StyleBlock::new()
                .set("color", component_theme.var("selectedLabelColor"))
                .set("background", component_theme.var("selectedBackground"))
        });

        // Both flags at once keeps the highlight visible on the selection.
        let selected_highlighted_style = when(state.selected && state.highlighted, || {
            StyleBlock::new().set(
                "background",
                component_theme.var("selectedHighlightedBackground"),
            )
        });

        let item = merged([
            &base,
            &highlighted_style,
            &selected_style,
            &selected_highlighted_style,
        ]);

        let container = StyleBlock::new()
            .set("padding", component_theme.var("padding"))
            .set_if(
                props.nested,
                "paddingInlineStart",
                component_theme.var("nestedPadding"),
            )
            .set_if(
                props.has_icon,
                "paddingInlineEnd",
                component_theme.var("iconPadding"),
            );

        let description = StyleBlock::new()
            .set("fontSize", component_theme.var("descriptionFontSize"))
            .set("fontWeight", component_theme.var("descriptionFontWeight"))
            .set("lineHeight", component_theme.var("descriptionLineHeight"))
            .set_if(
                !state.highlighted && !state.selected,
                "color",
                component_theme.var("descriptionColor"),
            );

        StyleMap::new()
            .block("item", item)
            .block("container", container)
            .block("description", description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_tokens::builtin;

    fn item_theme() -> ComponentTheme {
        OptionsItem.generate_theme(&builtin::canvas())
    }

    #[test]
    fn resting_item_uses_base_colors() {
        let style = OptionsItem.generate_style(
            &item_theme(),
            &OptionsItemProps::default(),
            &OptionsItemState::default(),
        );
        let item = style.get("item").unwrap();

        assert_eq!(item.text("background"), Some("#FFFFFF"));
        assert_eq!(item.text("color"), Some("#2D3B45"));
    }

    #[test]
    fn highlight_inverts_label_against_brand_background() {
        let theme = builtin::canvas();
        let vars = OptionsItem.generate_theme(&theme);
        let style = OptionsItem.generate_style(
            &vars,
            &OptionsItemProps::default(),
            &OptionsItemState {
                highlighted: true,
                ..Default::default()
            },
        );
        let item = style.get("item").unwrap();

        assert_eq!(
            item.text("background").map(str::to_string),
            Some(theme.brand.value("primary"))
        );
        assert_eq!(item.text("color"), Some("#FFFFFF"));
    }

    #[test]
    fn selected_highlight_gets_its_own_background() {
        let vars = item_theme();
        let selected = OptionsItem.generate_style(
            &vars,
            &OptionsItemProps::default(),
            &OptionsItemState {
                selected: true,
                highlighted: false,
            },
        );
        let both = OptionsItem.generate_style(
            &vars,
            &OptionsItemProps::default(),
            &OptionsItemState {
                selected: true,
                highlighted: true,
            },
        );

        let selected_bg = selected.get("item").unwrap().text("background").unwrap();
        let both_bg = both.get("item").unwrap().text("background").unwrap();
        assert_ne!(selected_bg, both_bg);
        assert_eq!(both_bg, vars.var("selectedHighlightedBackground"));
    }

    #[test]
    fn nesting_and_icon_adjust_container_padding() {
        let style = OptionsItem.generate_style(
            &item_theme(),
            &OptionsItemProps {
                nested: true,
                has_icon: true,
            },
            &OptionsItemState::default(),
        );
        let container = style.get("container").unwrap();

        assert_eq!(container.text("paddingInlineStart"), Some("0.75rem"));
        assert_eq!(container.text("paddingInlineEnd"), Some("0.75rem"));

        let plain = OptionsItem.generate_style(
            &item_theme(),
            &OptionsItemProps::default(),
            &OptionsItemState::default(),
        );
        assert!(!plain.get("container").unwrap().contains("paddingInlineStart"));
    }

    #[test]
    fn description_color_drops_on_interaction() {
        let vars = item_theme();
        let resting = OptionsItem.generate_style(
            &vars,
            &OptionsItemProps::default(),
            &OptionsItemState::default(),
        );
        assert!(resting.get("description").unwrap().contains("color"));

        let highlighted = OptionsItem.generate_style(
            &vars,
            &OptionsItemProps::default(),
            &OptionsItemState {
                highlighted: true,
                ..Default::default()
            },
        );
        assert!(!highlighted.get("description").unwrap().contains("color"));
    }
}
