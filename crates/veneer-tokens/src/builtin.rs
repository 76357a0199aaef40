//! Built-in themes.
//!
//! The two stock themes share one token shape: `canvas` is the default
//! look, `canvas-high-contrast` swaps in values that meet WCAG AAA contrast
//! against the same backgrounds. Component theme generators key variant
//! overlays off [`Theme::key`], so the two must stay structurally identical.

use crate::{Theme, TokenGroup};

/// Theme key of the default built-in theme.
pub const CANVAS: &str = "canvas";

/// Theme key of the high-contrast built-in theme.
pub const CANVAS_HIGH_CONTRAST: &str = "canvas-high-contrast";

/// Create the default `canvas` theme.
pub fn canvas() -> Theme {
    let mut theme = Theme::new(CANVAS);
    theme.colors = canvas_colors();
    theme.typography = shared_typography();
    theme.spacing = shared_spacing();
    theme.borders = shared_borders();
    theme.brand = canvas_brand();
    theme
}

/// Create the `canvas-high-contrast` theme.
pub fn canvas_high_contrast() -> Theme {
    let mut theme = Theme::new(CANVAS_HIGH_CONTRAST);
    theme.colors = high_contrast_colors();
    theme.typography = shared_typography();
    theme.spacing = shared_spacing();
    theme.borders = shared_borders();
    theme.brand = canvas_brand();
    theme
}

fn canvas_colors() -> TokenGroup {
    [
        ("textDarkest", "#2D3B45"),
        ("textDark", "#6B7780"),
        ("textLightest", "#FFFFFF"),
        ("textBrand", "#0E68B3"),
        ("textDanger", "#D01A19"),
        ("accentViolet", "#7B40BF"),
        ("accentSea", "#0B789B"),
        ("backgroundLightest", "#FFFFFF"),
        ("backgroundLight", "#F5F5F5"),
        ("backgroundMedium", "#C7CDD1"),
        ("backgroundDarkest", "#2D3B45"),
        ("backgroundBrand", "#0E68B3"),
        ("borderLight", "#C7CDD1"),
        ("borderMedium", "#899297"),
        ("borderDark", "#6B7780"),
        ("borderBrand", "#0E68B3"),
        ("borderDanger", "#D01A19"),
    ]
    .into_iter()
    .collect()
}

fn high_contrast_colors() -> TokenGroup {
    [
        ("textDarkest", "#000000"),
        ("textDark", "#2D3B45"),
        ("textLightest", "#FFFFFF"),
        ("textBrand", "#0A5A9E"),
        ("textDanger", "#A30909"),
        ("accentViolet", "#59189E"),
        ("accentSea", "#055E74"),
        ("backgroundLightest", "#FFFFFF"),
        ("backgroundLight", "#F5F5F5"),
        ("backgroundMedium", "#6B7780"),
        ("backgroundDarkest", "#000000"),
        ("backgroundBrand", "#0A5A9E"),
        ("borderLight", "#6B7780"),
        ("borderMedium", "#2D3B45"),
        ("borderDark", "#000000"),
        ("borderBrand", "#0A5A9E"),
        ("borderDanger", "#A30909"),
    ]
    .into_iter()
    .collect()
}

fn shared_typography() -> TokenGroup {
    let mut group: TokenGroup = [
        (
            "fontFamily",
            "\"Lato Extended\", \"Lato\", \"Helvetica Neue\", Helvetica, Arial, sans-serif",
        ),
        ("fontSizeXSmall", "0.75rem"),
        ("fontSizeSmall", "0.875rem"),
        ("fontSizeMedium", "1rem"),
        ("fontSizeLarge", "1.375rem"),
        ("fontSizeXLarge", "1.75rem"),
        ("fontSizeXXLarge", "2.375rem"),
    ]
    .into_iter()
    .collect();

    group.set("fontWeightLight", 300);
    group.set("fontWeightNormal", 400);
    group.set("fontWeightBold", 700);
    group.set("lineHeight", 1.5);
    group.set("lineHeightCondensed", 1.25);
    group
}

fn shared_spacing() -> TokenGroup {
    [
        ("xxxSmall", "0.125rem"),
        ("xxSmall", "0.375rem"),
        ("xSmall", "0.5rem"),
        ("small", "0.75rem"),
        ("medium", "1.5rem"),
        ("large", "2.25rem"),
        ("xLarge", "3rem"),
        ("xxLarge", "3.75rem"),
        // Form control metrics
        ("inputHeightSmall", "1.75rem"),
        ("inputHeightMedium", "2.375rem"),
        ("inputHeightLarge", "3rem"),
    ]
    .into_iter()
    .collect()
}

fn shared_borders() -> TokenGroup {
    [
        ("radiusSmall", "0.125rem"),
        ("radiusMedium", "0.25rem"),
        ("radiusLarge", "0.5rem"),
        ("widthSmall", "0.0625rem"),
        ("widthMedium", "0.125rem"),
        ("widthLarge", "0.25rem"),
        ("style", "solid"),
    ]
    .into_iter()
    .collect()
}

fn canvas_brand() -> TokenGroup {
    [
        ("fontColorDark", "#2D3B45"),
        ("primary", "#0E68B3"),
        ("navMenuItemTextColor", "#FFFFFF"),
        ("navMenuItemTextColorActive", "#0E68B3"),
        ("navIconFill", "#FFFFFF"),
        ("navIconFillActive", "#0E68B3"),
        ("navLinkHoverBackground", "#1A2A33"),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys() {
        assert_eq!(canvas().key(), CANVAS);
        assert_eq!(canvas_high_contrast().key(), CANVAS_HIGH_CONTRAST);
    }

    #[test]
    fn builtins_are_structurally_consistent() {
        let base = canvas();
        let high_contrast = canvas_high_contrast();

        assert!(high_contrast.validate_against(&base).is_ok());
        assert!(base.validate_against(&high_contrast).is_ok());
    }

    #[test]
    fn values_differ_between_variants() {
        let base = canvas();
        let high_contrast = canvas_high_contrast();

        assert_ne!(
            base.colors.value("borderMedium"),
            high_contrast.colors.value("borderMedium")
        );
        // Typography is shared
        assert_eq!(
            base.typography.value("fontSizeMedium"),
            high_contrast.typography.value("fontSizeMedium")
        );
    }
}
