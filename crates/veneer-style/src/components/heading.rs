//! Heading theme and style generation.

use veneer_tokens::Theme;

use crate::block::{StyleBlock, StyleMap};
use crate::component_theme::{ComponentTheme, ComponentThemeGenerator, VariantOverlays};
use crate::generator::StyleGenerator;
use crate::merge::{merged, when};
use crate::variant::Variant;

/// Heading rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl Variant for HeadingLevel {
    const DOMAIN: &'static [Self] = &[
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    fn name(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

/// Heading color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeadingColor {
    /// Darkest text on light backgrounds.
    #[default]
    Primary,
    /// Muted text on light backgrounds.
    Secondary,
    /// Light text on dark backgrounds.
    PrimaryInverse,
    /// Muted light text on dark backgrounds.
    SecondaryInverse,
}

impl Variant for HeadingColor {
    const DOMAIN: &'static [Self] = &[
        HeadingColor::Primary,
        HeadingColor::Secondary,
        HeadingColor::PrimaryInverse,
        HeadingColor::SecondaryInverse,
    ];

    fn name(&self) -> &'static str {
        match self {
            HeadingColor::Primary => "primary",
            HeadingColor::Secondary => "secondary",
            HeadingColor::PrimaryInverse => "primary-inverse",
            HeadingColor::SecondaryInverse => "secondary-inverse",
        }
    }
}

/// Stable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HeadingProps {
    /// Heading rank, selecting the typographic scale.
    pub level: HeadingLevel,
    /// Color role.
    pub color: HeadingColor,
    /// Render a rule under the heading.
    pub border_below: bool,
}

/// Generator unit for the Heading component kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heading;

impl ComponentThemeGenerator for Heading {
    fn component(&self) -> &'static str {
        "Heading"
    }

    fn base(&self, theme: &Theme) -> ComponentTheme {
        ComponentTheme::new()
            .set("lineHeight", theme.typography.value("lineHeightCondensed"))
            .set("h1FontSize", theme.typography.value("fontSizeXXLarge"))
            .set("h1FontWeight", theme.typography.value("fontWeightBold"))
            .set("h2FontSize", theme.typography.value("fontSizeXLarge"))
            .set("h2FontWeight", theme.typography.value("fontWeightNormal"))
            .set("h3FontSize", theme.typography.value("fontSizeLarge"))
            .set("h3FontWeight", theme.typography.value("fontWeightBold"))
            .set("h4FontSize", theme.typography.value("fontSizeMedium"))
            .set("h4FontWeight", theme.typography.value("fontWeightBold"))
            .set("h5FontSize", theme.typography.value("fontSizeSmall"))
            .set("h5FontWeight", theme.typography.value("fontWeightNormal"))
            .set("h6FontSize", theme.typography.value("fontSizeXSmall"))
            .set("h6FontWeight", theme.typography.value("fontWeightNormal"))
            .set("fontFamily", theme.typography.value("fontFamily"))
            .set("primaryColor", theme.colors.value("textDarkest"))
            .set("primaryInverseColor", theme.colors.value("textLightest"))
            .set("secondaryColor", theme.colors.value("textDark"))
            .set("secondaryInverseColor", theme.colors.value("backgroundLight"))
            .set("borderPadding", theme.spacing.value("xxxSmall"))
            .set("borderColor", theme.colors.value("borderLight"))
            .set("borderWidth", theme.borders.value("widthSmall"))
            .set("borderStyle", theme.borders.value("style"))
    }

    fn overlays(&self, theme: &Theme) -> VariantOverlays {
        VariantOverlays::none().with(
            veneer_tokens::builtin::CANVAS,
            ComponentTheme::new().set("primaryColor", theme.brand.value("fontColorDark")),
        )
    }
}

impl StyleGenerator for Heading {
    type Props = HeadingProps;
    type State = ();

    fn generate_style(
        &self,
        component_theme: &ComponentTheme,
        props: &Self::Props,
        _state: &Self::State,
    ) -> StyleMap {
        let level = props.level.name();
        let level_variant = StyleBlock::new()
            .set("fontSize", component_theme.var(&format!("{level}FontSize")))
            .set("fontWeight", component_theme.var(&format!("{level}FontWeight")));

        let color = match props.color {
            HeadingColor::Primary => "primaryColor",
            HeadingColor::Secondary => "secondaryColor",
            HeadingColor::PrimaryInverse => "primaryInverseColor",
            HeadingColor::SecondaryInverse => "secondaryInverseColor",
        };

        let border = when(props.border_below, || {
            StyleBlock::new()
                .set("paddingBottom", component_theme.var("borderPadding"))
                .set(
                    "borderBottom",
                    format!(
                        "{} {} {}",
                        component_theme.var("borderWidth"),
                        component_theme.var("borderStyle"),
                        component_theme.var("borderColor"),
                    ),
                )
        });

        let heading = merged([
            &StyleBlock::new()
                .set("margin", 0)
                .set("fontFamily", component_theme.var("fontFamily"))
                .set("lineHeight", component_theme.var("lineHeight"))
                .set("color", component_theme.var(color)),
            &level_variant,
            &border,
        ]);

        StyleMap::new().block("heading", heading)
    }
}
