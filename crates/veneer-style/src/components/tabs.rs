//! Tabs theme and style generation.
//!
//! Scrollable tab lists fade out at the clipped edge with a gradient
//! overlay; the overlays sit on logical inline edges and carry mirrored
//! gradients so the same output is correct in RTL documents.

use veneer_tokens::Theme;

use crate::block::{StyleBlock, StyleMap};
use crate::component_theme::{ComponentTheme, ComponentThemeGenerator};
use crate::generator::StyleGenerator;
use crate::merge::merged;
use crate::variant::Variant;

/// Visual variant of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabsVariant {
    /// Enclosed tab bar on a filled background.
    #[default]
    Default,
    /// Minimal underlined tab bar.
    Secondary,
}

impl Variant for TabsVariant {
    const DOMAIN: &'static [Self] = &[TabsVariant::Default, TabsVariant::Secondary];

    fn name(&self) -> &'static str {
        match self {
            TabsVariant::Default => "default",
            TabsVariant::Secondary => "secondary",
        }
    }
}

/// Behavior when tabs exceed the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabOverflow {
    /// Wrap tabs onto additional rows.
    #[default]
    Stack,
    /// Scroll horizontally behind fade overlays.
    Scroll,
}

impl Variant for TabOverflow {
    const DOMAIN: &'static [Self] = &[TabOverflow::Stack, TabOverflow::Scroll];

    fn name(&self) -> &'static str {
        match self {
            TabOverflow::Stack => "stack",
            TabOverflow::Scroll => "scroll",
        }
    }
}

/// Stable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TabsProps {
    /// Visual variant.
    pub variant: TabsVariant,
    /// Overflow behavior of the tab list.
    pub tab_overflow: TabOverflow,
    /// Fixed height for the whole component, as a CSS length.
    pub fix_height: Option<String>,
}

/// Generator unit for the Tabs component kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tabs;

impl ComponentThemeGenerator for Tabs {
    fn component(&self) -> &'static str {
        "Tabs"
    }

    fn base(&self, theme: &Theme) -> ComponentTheme {
        ComponentTheme::new()
            .set("defaultBackground", theme.colors.value("backgroundLightest"))
            .set("scrollFadeColor", theme.colors.value("backgroundLightest"))
            .set("tabVerticalOffset", theme.borders.value("widthSmall"))
            .set("scrollOverlayWidthDefault", "2rem")
            .set("scrollOverlayWidthSecondary", "3rem")
            .set("zIndex", 1)
    }
}

impl StyleGenerator for Tabs {
    type Props = TabsProps;
    type State = ();

    fn generate_style(
        &self,
        component_theme: &ComponentTheme,
        props: &Self::Props,
        _state: &Self::State,
    ) -> StyleMap {
        let negative_offset = format!(
            "calc({} * -1)",
            component_theme.var("tabVerticalOffset")
        );

        // One entry per variant for each affected block.
        let (container_variant, tabs_variant, overlay_width) = match props.variant {
            TabsVariant::Default => (
                StyleBlock::new().set("background", component_theme.var("defaultBackground")),
                StyleBlock::new().set("marginBottom", negative_offset.clone()),
                component_theme.var("scrollOverlayWidthDefault"),
            ),
            TabsVariant::Secondary => (
                StyleBlock::new(),
                StyleBlock::new(),
                component_theme.var("scrollOverlayWidthSecondary"),
            ),
        };

        let overflow_variant = match props.tab_overflow {
            TabOverflow::Stack => StyleBlock::new().set("flexFlow", "row wrap"),
            TabOverflow::Scroll => StyleBlock::new()
                .set(
                    "marginBottom",
                    if props.variant == TabsVariant::Secondary {
                        negative_offset
                    } else {
                        "0".to_string()
                    },
                )
                .set("overflowX", "auto")
                .set("scrollbarWidth", "none"),
        };

        let fade = component_theme.var("scrollFadeColor");
        let overlay_common = StyleBlock::new()
            .set(
                "height",
                format!(
                    "calc(100% - ({} + 0.25rem))",
                    component_theme.var("tabVerticalOffset")
                ),
            )
            .set("position", "absolute")
            .set("zIndex", component_theme.var("zIndex"))
            .set("top", "0")
            .set("pointerEvents", "none")
            .set("width", overlay_width);

        let start_overlay = merged([
            &StyleBlock::new().set("insetInlineStart", "0").mirrored(
                "background",
                format!("linear-gradient(to right, {fade} 0%, rgba(255, 255, 255, 0) 100%)"),
                format!("linear-gradient(to left, {fade} 0%, rgba(255, 255, 255, 0) 100%)"),
            ),
            &overlay_common,
        ]);
        let end_overlay = merged([
            &StyleBlock::new().set("insetInlineEnd", "0").mirrored(
                "background",
                format!("linear-gradient(to left, {fade} 0%, rgba(255, 255, 255, 0) 100%)"),
                format!("linear-gradient(to right, {fade} 0%, rgba(255, 255, 255, 0) 100%)"),
            ),
            &overlay_common,
        ]);

        let container = merged([
            &StyleBlock::new()
                .set("display", "flex")
                .set("flexDirection", "column")
                .set_if(
                    props.fix_height.is_some(),
                    "height",
                    props.fix_height.clone().unwrap_or_default(),
                ),
            &container_variant,
        ]);

        let panels_container = StyleBlock::new()
            .set("flexShrink", 1)
            .set("flexGrow", 1)
            .set("display", "flex")
            .set("flexDirection", "column")
            .set_if(props.fix_height.is_some(), "overflowY", "hidden");

        StyleMap::new()
            .block(
                "tabs",
                merged([
                    &StyleBlock::new().set("flexShrink", 0).set("flexGrow", 0),
                    &tabs_variant,
                ]),
            )
            .block("container", container)
            .block(
                "tabList",
                merged([
                    &StyleBlock::new().set("display", "flex").set("width", "100%"),
                    &overflow_variant,
                ]),
            )
            .block("panelsContainer", panels_container)
            .block("startScrollOverlay", start_overlay)
            .block("endScrollOverlay", end_overlay)
    }
}
