//! Side navigation item theme and style generation.
//!
//! The one component kind here with two theme overlays: `canvas` swaps in
//! institution brand colors for text, icons, and hover, while
//! `canvas-high-contrast` forces link underlines.

use veneer_tokens::Theme;

use crate::block::{StyleBlock, StyleMap};
use crate::component_theme::{ComponentTheme, ComponentThemeGenerator, VariantOverlays};
use crate::generator::StyleGenerator;
use crate::merge::{merged, when};

/// Stable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SideNavItemProps {
    /// Collapse the label and show the icon only.
    pub minimized: bool,
}

/// Interaction flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SideNavItemState {
    /// The item links to the current location.
    pub selected: bool,
    /// Pointer hover.
    pub hovered: bool,
    /// Keyboard focus.
    pub focused: bool,
}

/// Generator unit for the SideNavItem component kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideNavItem;

impl ComponentThemeGenerator for SideNavItem {
    fn component(&self) -> &'static str {
        "SideNavItem"
    }

    fn base(&self, theme: &Theme) -> ComponentTheme {
        let outline_light = theme.colors.value("textLightest");
        let outline_accent = theme.colors.value("backgroundBrand");

        ComponentTheme::new()
            .set("fontSize", theme.typography.value("fontSizeSmall"))
            .set("fontFamily", theme.typography.value("fontFamily"))
            .set("fontWeight", theme.typography.value("fontWeightNormal"))
            .set("lineHeight", theme.typography.value("lineHeight"))
            .set("fontColor", theme.colors.value("textLightest"))
            .set("iconSize", "1.625rem")
            .set("iconColor", theme.colors.value("textLightest"))
            .set("backgroundColor", "transparent")
            .set("linkTextDecoration", "none")
            .set(
                "hoverBackgroundColor",
                theme.colors.value("backgroundDarkest"),
            )
            .set(
                "outerFocusOutline",
                format!("inset 0 0 0 0.125rem {outline_accent}"),
            )
            .set(
                "innerFocusOutline",
                format!("inset 0 0 0 0.25rem {outline_light}"),
            )
            .set("selectedFontColor", theme.colors.value("textBrand"))
            .set("selectedIconColor", theme.colors.value("textBrand"))
            .set(
                "selectedBackgroundColor",
                theme.colors.value("backgroundLightest"),
            )
            .set(
                "selectedOuterFocusOutline",
                format!("inset 0 0 0 0.125rem {outline_light}"),
            )
            .set(
                "selectedInnerFocusOutline",
                format!("inset 0 0 0 0.25rem {outline_accent}"),
            )
            .set("contentPadding", theme.spacing.value("xxSmall"))
    }

    fn overlays(&self, theme: &Theme) -> VariantOverlays {
        VariantOverlays::none()
            .with(
                veneer_tokens::builtin::CANVAS,
                ComponentTheme::new()
                    .set("fontColor", theme.brand.value("navMenuItemTextColor"))
                    .set("iconColor", theme.brand.value("navIconFill"))
                    .set(
                        "hoverBackgroundColor",
                        theme.brand.value("navLinkHoverBackground"),
                    )
                    .set(
                        "selectedFontColor",
                        theme.brand.value("navMenuItemTextColorActive"),
                    )
                    .set("selectedIconColor", theme.brand.value("navIconFillActive")),
            )
            .with(
                veneer_tokens::builtin::CANVAS_HIGH_CONTRAST,
                ComponentTheme::new().set("linkTextDecoration", "underline"),
            )
    }
}

impl StyleGenerator for SideNavItem {
    type Props = SideNavItemProps;
    type State = SideNavItemState;

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
            .set("color", component_theme.var("fontColor"))
            .set("backgroundColor", component_theme.var("backgroundColor"))
            .set("textDecoration", component_theme.var("linkTextDecoration"))
            .set("padding", component_theme.var("contentPadding"));

        let hover_style = when(state.hovered && !state.selected, || {
            StyleBlock::new().set(
                "backgroundColor",
                component_theme.var("hoverBackgroundColor"),
            )
        });

        let selected_style = when(state.selected, || {
            StyleBlock::new()
                .set("color", component_theme.var("selectedFontColor"))
                .set(
                    "backgroundColor",
                    component_theme.var("selectedBackgroundColor"),
                )
        });

        let focus_outline = if state.selected {
            "selectedOuterFocusOutline"
        } else {
            "outerFocusOutline"
        };
        let focus_style = when(state.focused, || {
            StyleBlock::new().set("boxShadow", component_theme.var(focus_outline))
        });

        let item = merged([&base, &hover_style, &selected_style, &focus_style]);

        let icon = StyleBlock::new()
            .set("width", component_theme.var("iconSize"))
            .set("height", component_theme.var("iconSize"))
            .set(
                "fill",
                component_theme.var(if state.selected {
                    "selectedIconColor"
                } else {
                    "iconColor"
                }),
            );

        let label = StyleBlock::new()
            .set("overflow", "hidden")
            .set("textOverflow", "ellipsis")
            .set("whiteSpace", "nowrap")
            .set_if(props.minimized, "display", "none");

        StyleMap::new()
            .block("item", item)
            .block("icon", icon)
            .block("label", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_tokens::builtin;

    fn nav_theme() -> ComponentTheme {
        SideNavItem.generate_theme(&builtin::canvas())
    }

    #[test]
    fn canvas_overlay_pulls_brand_nav_colors() {
        let theme = builtin::canvas();
        let vars = SideNavItem.generate_theme(&theme);

        assert_eq!(vars.var("fontColor"), theme.brand.value("navMenuItemTextColor"));
        assert_eq!(
            vars.var("hoverBackgroundColor"),
            theme.brand.value("navLinkHoverBackground")
        );
        assert_eq!(
            vars.var("selectedIconColor"),
            theme.brand.value("navIconFillActive")
        );
        // Untouched variables keep their base values
        assert_eq!(vars.var("linkTextDecoration"), "none");
    }

    #[test]
    fn high_contrast_overlay_underlines_links() {
        let vars = SideNavItem.generate_theme(&builtin::canvas_high_contrast());

        assert_eq!(vars.var("linkTextDecoration"), "underline");

        let style = SideNavItem.generate_style(
            &vars,
            &SideNavItemProps::default(),
            &SideNavItemState::default(),
        );
        assert_eq!(
            style.get("item").unwrap().text("textDecoration"),
            Some("underline")
        );
    }

    #[test]
    fn selection_overrides_hover_background() {
        let vars = nav_theme();
        let style = SideNavItem.generate_style(
            &vars,
            &SideNavItemProps::default(),
            &SideNavItemState {
                selected: true,
                hovered: true,
                focused: false,
            },
        );
        let item = style.get("item").unwrap();

        assert_eq!(
            item.text("backgroundColor").map(str::to_string),
            Some(vars.var("selectedBackgroundColor"))
        );
        assert_eq!(
            item.text("color").map(str::to_string),
            Some(vars.var("selectedFontColor"))
        );
    }

    #[test]
    fn focus_outline_follows_selection() {
        let vars = nav_theme();
        let focused = SideNavItemState {
            focused: true,
            ..Default::default()
        };

        let plain = SideNavItem.generate_style(&vars, &SideNavItemProps::default(), &focused);
        assert_eq!(
            plain.get("item").unwrap().text("boxShadow").map(str::to_string),
            Some(vars.var("outerFocusOutline"))
        );

        let selected = SideNavItem.generate_style(
            &vars,
            &SideNavItemProps::default(),
            &SideNavItemState {
                selected: true,
                ..focused
            },
        );
        assert_eq!(
            selected
                .get("item")
                .unwrap()
                .text("boxShadow")
                .map(str::to_string),
            Some(vars.var("selectedOuterFocusOutline"))
        );
    }

    #[test]
    fn minimized_items_hide_the_label() {
        let vars = nav_theme();
        let style = SideNavItem.generate_style(
            &vars,
            &SideNavItemProps { minimized: true },
            &SideNavItemState::default(),
        );
        assert_eq!(style.get("label").unwrap().text("display"), Some("none"));

        let icon = style.get("icon").unwrap();
        assert_eq!(icon.text("width"), Some("1.625rem"));
    }
}
