//! TextInput theme and style generation.
//!
//! The component renders a borderless native input inside a styled facade;
//! the facade carries the border, the focus ring (a `&::before` overlay
//! that fades in), and the invalid/disabled treatments.

use veneer_tokens::Theme;

use crate::block::{StyleBlock, StyleMap};
use crate::component_theme::{ComponentTheme, ComponentThemeGenerator, VariantOverlays};
use crate::generator::StyleGenerator;
use crate::merge::{merged, when};
use crate::variant::{Size, Variant};

/// Horizontal alignment of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputAlign {
    /// Align with the reading direction.
    #[default]
    Start,
    /// Center the text.
    Center,
}

impl Variant for InputAlign {
    const DOMAIN: &'static [Self] = &[InputAlign::Start, InputAlign::Center];

    fn name(&self) -> &'static str {
        match self {
            InputAlign::Start => "start",
            InputAlign::Center => "center",
        }
    }
}

/// Stable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextInputProps {
    /// Control size.
    pub size: Size,
    /// Text alignment inside the input.
    pub text_align: InputAlign,
    /// Keep before/after elements on one line instead of wrapping.
    pub should_not_wrap: bool,
}

/// Component-owned interaction state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextInputState {
    /// The control rejects interaction.
    pub disabled: bool,
    /// The current value failed validation.
    pub invalid: bool,
    /// The input has keyboard focus.
    pub focused: bool,
    /// A before-element is rendered and needs leading padding.
    pub before_element_exists: bool,
    /// Measured width of the after-element; `None` until measured.
    pub after_element_has_width: Option<bool>,
}

/// Generator unit for the TextInput component kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInput;

impl ComponentThemeGenerator for TextInput {
    fn component(&self) -> &'static str {
        "TextInput"
    }

    fn base(&self, theme: &Theme) -> ComponentTheme {
        ComponentTheme::new()
            .set("fontFamily", theme.typography.value("fontFamily"))
            .set("fontWeight", theme.typography.value("fontWeightNormal"))
            .set("color", theme.colors.value("textDarkest"))
            .set("background", theme.colors.value("backgroundLightest"))
            .set("placeholderColor", theme.colors.value("textDark"))
            .set("padding", theme.spacing.value("xSmall"))
            .set("borderWidth", theme.borders.value("widthSmall"))
            .set("borderStyle", theme.borders.value("style"))
            .set("borderColor", theme.colors.value("borderMedium"))
            .set("borderRadius", theme.borders.value("radiusMedium"))
            .set("focusOutlineWidth", theme.borders.value("widthMedium"))
            .set("focusOutlineStyle", theme.borders.value("style"))
            .set("focusOutlineColor", theme.colors.value("borderBrand"))
            .set("errorBorderColor", theme.colors.value("borderDanger"))
            .set("requiredInvalidColor", theme.colors.value("textDanger"))
            .set("smallFontSize", theme.typography.value("fontSizeSmall"))
            .set("mediumFontSize", theme.typography.value("fontSizeMedium"))
            .set("largeFontSize", theme.typography.value("fontSizeLarge"))
            .set("smallHeight", theme.spacing.value("inputHeightSmall"))
            .set("mediumHeight", theme.spacing.value("inputHeightMedium"))
            .set("largeHeight", theme.spacing.value("inputHeightLarge"))
    }

    fn overlays(&self, theme: &Theme) -> VariantOverlays {
        VariantOverlays::none().with(
            veneer_tokens::builtin::CANVAS,
            ComponentTheme::new().set("color", theme.brand.value("fontColorDark")),
        )
    }
}

impl StyleGenerator for TextInput {
    type Props = TextInputProps;
    type State = TextInputState;

    fn generate_style(
        &self,
        component_theme: &ComponentTheme,
        props: &Self::Props,
        state: &Self::State,
    ) -> StyleMap {
        let size_variant = size_variant(component_theme, props.size);

        let invalid_style = when(state.invalid, || {
            StyleBlock::new().set("borderColor", component_theme.var("errorBorderColor"))
        });

        // Focus-ring transition target; both branches are non-empty because
        // the ring transitions between them.
        let focused_style = if state.focused {
            StyleBlock::new().set("opacity", 1).set("transform", "scale(1)")
        } else {
            StyleBlock::new()
                .set("opacity", 0)
                .set("transform", "scale(0.95)")
        };

        let invalid_and_focused_style = when(state.invalid && state.focused, || {
            StyleBlock::new().set("borderColor", component_theme.var("errorBorderColor"))
        });

        let disabled_style = when(state.disabled, || {
            StyleBlock::new()
                .set("cursor", "not-allowed")
                .set("pointerEvents", "none")
                .set("opacity", "0.5")
        });

        let focus_ring_base = StyleBlock::new()
            .set("content", "\"\"")
            .set("pointerEvents", "none")
            .set("position", "absolute")
            .set("display", "block")
            .set("boxSizing", "border-box")
            .set("top", "-0.25rem")
            .set("bottom", "-0.25rem")
            .set("left", "-0.25rem")
            .set("right", "-0.25rem")
            .set(
                "border",
                format!(
                    "{} {} {}",
                    component_theme.var("focusOutlineWidth"),
                    component_theme.var("focusOutlineStyle"),
                    component_theme.var("focusOutlineColor"),
                ),
            )
            .set(
                "borderRadius",
                format!("calc({} * 1.5)", component_theme.var("borderRadius")),
            )
            .set("transition", "all 0.2s");
        let focus_ring = merged([&focus_ring_base, &focused_style, &invalid_and_focused_style]);

        let facade_base = StyleBlock::new()
            .set("position", "relative")
            .set("display", "block")
            .set("boxSizing", "border-box")
            .set(
                "border",
                format!(
                    "{} {} {}",
                    component_theme.var("borderWidth"),
                    component_theme.var("borderStyle"),
                    component_theme.var("borderColor"),
                ),
            )
            .set("borderRadius", component_theme.var("borderRadius"))
            .set("background", component_theme.var("background"))
            .set("color", component_theme.var("color"))
            .set("&::before", focus_ring);
        // Fixed precedence: base, invalid, disabled last.
        let facade = merged([&facade_base, &invalid_style, &disabled_style]);

        let input = merged([
            &StyleBlock::new()
                .set("width", "100%")
                .set("appearance", "none")
                .set("margin", 0)
                .set("display", "block")
                .set("boxSizing", "border-box")
                .set("outline", "none")
                .set("fontFamily", component_theme.var("fontFamily"))
                .set("fontWeight", component_theme.var("fontWeight"))
                .set("color", component_theme.var("color"))
                .set("padding", format!("0 {}", component_theme.var("padding")))
                .set("background", "transparent")
                .set("border", "none")
                .set("verticalAlign", "baseline")
                .set(
                    "&::placeholder",
                    StyleBlock::new().set("color", component_theme.var("placeholderColor")),
                )
                .set("&:focus", StyleBlock::new().set("boxShadow", "initial"))
                .set("textAlign", props.text_align.name()),
            &size_variant,
        ]);

        let flow_base = StyleBlock::new()
            .set("boxSizing", "border-box")
            .set("fontFamily", component_theme.var("fontFamily"))
            .set("maxWidth", "100%")
            .set("overflow", "visible")
            .set("unicodeBidi", "isolate");

        let layout = merged([
            &flow_base,
            &StyleBlock::new()
                .set("display", "flex")
                .set("alignItems", "center")
                .set("justifyContent", "flex-start")
                .set("flexDirection", "row")
                .set_if(!props.should_not_wrap, "flexWrap", "wrap")
                .set_if(
                    state.before_element_exists,
                    "paddingInlineStart",
                    component_theme.var("padding"),
                ),
        ]);

        let input_layout = merged([
            &flow_base,
            &StyleBlock::new()
                .set("display", "flex")
                .set("alignItems", "center")
                .set("justifyContent", "flex-start")
                .set("flexDirection", "row")
                .set("flexGrow", 1),
        ]);

        let after_element = merged([
            &flow_base,
            &StyleBlock::new()
                .set("display", "flex")
                .set("alignItems", "center")
                .set("flexShrink", 0)
                .set("borderRadius", component_theme.var("borderRadius"))
                // The padding override waits for the measured width; the
                // element needs the padding on first render.
                .set_if(
                    state.after_element_has_width == Some(false),
                    "paddingInlineEnd",
                    0,
                ),
            &size_variant,
        ]);

        StyleMap::new()
            .block(
                "requiredInvalid",
                StyleBlock::new().set("color", component_theme.var("requiredInvalidColor")),
            )
            .block("input", input)
            .block("facade", facade)
            .block("layout", layout)
            .block("inputLayout", input_layout)
            .block("afterElement", after_element)
    }
}

/// One entry per size; the height collapses the border into the box.
fn size_variant(component_theme: &ComponentTheme, size: Size) -> StyleBlock {
    let (font_size, height) = match size {
        Size::Small => ("smallFontSize", "smallHeight"),
        Size::Medium => ("mediumFontSize", "mediumHeight"),
        Size::Large => ("largeFontSize", "largeHeight"),
    };
    let inner_height = format!(
        "calc({} - (2 * {}))",
        component_theme.var(height),
        component_theme.var("borderWidth"),
    );

    StyleBlock::new()
        .set("fontSize", component_theme.var(font_size))
        .set("height", inner_height.clone())
        .set("lineHeight", inner_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_tokens::builtin;

    /// Component theme with the literal values from the design reference.
    fn literal_theme() -> ComponentTheme {
        ComponentTheme::new()
            .set("fontFamily", "Helvetica, Arial, sans-serif")
            .set("fontWeight", 400)
            .set("color", "#2D3B45")
            .set("background", "#FFFFFF")
            .set("placeholderColor", "#6B7780")
            .set("padding", "0.5rem")
            .set("borderWidth", "1px")
            .set("borderStyle", "solid")
            .set("borderColor", "#899297")
            .set("borderRadius", "0.25rem")
            .set("focusOutlineWidth", "0.125rem")
            .set("focusOutlineStyle", "solid")
            .set("focusOutlineColor", "#0E68B3")
            .set("errorBorderColor", "#D01A19")
            .set("requiredInvalidColor", "#D01A19")
            .set("smallFontSize", "0.875rem")
            .set("mediumFontSize", "1rem")
            .set("largeFontSize", "1.375rem")
            .set("smallHeight", "1.75rem")
            .set("mediumHeight", "2.375rem")
            .set("largeHeight", "3rem")
    }

    #[test]
    fn enabled_facade_has_plain_border_and_no_opacity() {
        let style = TextInput.generate_style(
            &literal_theme(),
            &TextInputProps::default(),
            &TextInputState::default(),
        );

        let facade = style.get("facade").unwrap();
        assert_eq!(facade.text("border"), Some("1px solid #899297"));
        assert!(!facade.contains("opacity"));
        assert!(!facade.contains("cursor"));
    }

    #[test]
    fn disabled_facade_is_dimmed_and_not_allowed() {
        let state = TextInputState {
            disabled: true,
            ..Default::default()
        };
        let style = TextInput.generate_style(&literal_theme(), &TextInputProps::default(), &state);

        let facade = style.get("facade").unwrap();
        assert_eq!(facade.text("opacity"), Some("0.5"));
        assert_eq!(facade.text("cursor"), Some("not-allowed"));
        assert_eq!(facade.text("pointerEvents"), Some("none"));
    }

    #[test]
    fn disabled_wins_over_invalid_and_focused() {
        let state = TextInputState {
            disabled: true,
            invalid: true,
            focused: true,
            ..Default::default()
        };
        let style = TextInput.generate_style(&literal_theme(), &TextInputProps::default(), &state);

        let facade = style.get("facade").unwrap();
        // Every disabled property survives the other fragments
        assert_eq!(facade.text("opacity"), Some("0.5"));
        assert_eq!(facade.text("cursor"), Some("not-allowed"));
        assert_eq!(facade.text("pointerEvents"), Some("none"));
        // Invalid still colors the border; no disabled property collides
        assert_eq!(facade.text("borderColor"), Some("#D01A19"));
    }

    #[test]
    fn invalid_colors_border_without_dimming() {
        let state = TextInputState {
            invalid: true,
            ..Default::default()
        };
        let style = TextInput.generate_style(&literal_theme(), &TextInputProps::default(), &state);

        let facade = style.get("facade").unwrap();
        assert_eq!(facade.text("borderColor"), Some("#D01A19"));
        assert!(!facade.contains("opacity"));
    }

    #[test]
    fn focus_ring_transitions_with_focus() {
        let theme = literal_theme();
        let props = TextInputProps::default();

        let blurred = TextInput.generate_style(&theme, &props, &TextInputState::default());
        let ring = blurred.get("facade").unwrap().nested("&::before").unwrap();
        assert_eq!(ring.number("opacity"), Some(0.0));
        assert_eq!(ring.text("transform"), Some("scale(0.95)"));

        let focused_state = TextInputState {
            focused: true,
            ..Default::default()
        };
        let focused = TextInput.generate_style(&theme, &props, &focused_state);
        let ring = focused.get("facade").unwrap().nested("&::before").unwrap();
        assert_eq!(ring.number("opacity"), Some(1.0));
        assert_eq!(ring.text("transform"), Some("scale(1)"));
    }

    #[test]
    fn size_variants_scale_the_input() {
        let theme = literal_theme();
        let state = TextInputState::default();

        let small = TextInput.generate_style(
            &theme,
            &TextInputProps {
                size: Size::Small,
                ..Default::default()
            },
            &state,
        );
        let input = small.get("input").unwrap();
        assert_eq!(input.text("fontSize"), Some("0.875rem"));
        assert_eq!(input.text("height"), Some("calc(1.75rem - (2 * 1px))"));

        let large = TextInput.generate_style(
            &theme,
            &TextInputProps {
                size: Size::Large,
                ..Default::default()
            },
            &state,
        );
        assert_eq!(large.get("input").unwrap().text("fontSize"), Some("1.375rem"));
    }

    #[test]
    fn out_of_domain_size_matches_default_size() {
        let theme = literal_theme();
        let state = TextInputState::default();

        let fallback = TextInput.generate_style(
            &theme,
            &TextInputProps {
                size: Size::from_name("jumbo"),
                ..Default::default()
            },
            &state,
        );
        let default = TextInput.generate_style(&theme, &TextInputProps::default(), &state);

        assert_eq!(fallback, default);
    }

    #[test]
    fn wrap_and_before_element_affect_layout() {
        let theme = literal_theme();

        let wrapping = TextInput.generate_style(
            &theme,
            &TextInputProps::default(),
            &TextInputState {
                before_element_exists: true,
                ..Default::default()
            },
        );
        let layout = wrapping.get("layout").unwrap();
        assert_eq!(layout.text("flexWrap"), Some("wrap"));
        assert_eq!(layout.text("paddingInlineStart"), Some("0.5rem"));

        let no_wrap = TextInput.generate_style(
            &theme,
            &TextInputProps {
                should_not_wrap: true,
                ..Default::default()
            },
            &TextInputState::default(),
        );
        assert!(!no_wrap.get("layout").unwrap().contains("flexWrap"));
    }

    #[test]
    fn after_element_padding_clears_once_measured() {
        let theme = literal_theme();
        let props = TextInputProps::default();

        let unmeasured = TextInput.generate_style(&theme, &props, &TextInputState::default());
        assert!(!unmeasured
            .get("afterElement")
            .unwrap()
            .contains("paddingInlineEnd"));

        let measured = TextInput.generate_style(
            &theme,
            &props,
            &TextInputState {
                after_element_has_width: Some(false),
                ..Default::default()
            },
        );
        assert_eq!(
            measured.get("afterElement").unwrap().number("paddingInlineEnd"),
            Some(0.0)
        );
    }

    #[test]
    fn canvas_overlay_uses_brand_font_color() {
        let theme = builtin::canvas();
        let vars = TextInput.generate_theme(&theme);
        assert_eq!(vars.var("color"), theme.brand.value("fontColorDark"));

        let high_contrast = builtin::canvas_high_contrast();
        let vars = TextInput.generate_theme(&high_contrast);
        assert_eq!(vars.var("color"), high_contrast.colors.value("textDarkest"));
    }

    #[test]
    fn generation_is_pure() {
        let theme = literal_theme();
        let props = TextInputProps::default();
        let state = TextInputState {
            invalid: true,
            focused: true,
            ..Default::default()
        };

        assert_eq!(
            TextInput.generate_style(&theme, &props, &state),
            TextInput.generate_style(&theme, &props, &state)
        );
    }
}
