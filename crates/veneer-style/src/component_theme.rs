//! Component theme variables.
//!
//! Each component kind owns one [`ComponentThemeGenerator`]: a pure mapping
//! from a [`Theme`] to the flat set of variables its style generator
//! consumes. Variables are direct token aliases (`fontSize :=
//! typography.fontSizeMedium`) or simple derived expressions (concatenated
//! CSS shorthands).
//!
//! Theme-variant-specific values live in a [`VariantOverlays`] map keyed by
//! theme key, an open/closed set of overlays rather than conditionals
//! inside the generator body. Unrecognized keys get no overlay.

use std::collections::BTreeMap;
use std::collections::HashMap;

use veneer_tokens::{Theme, TokenValue};

/// Flat mapping of component variable name to resolved scalar value.
///
/// Produced by one generator for one theme; pure and deterministic, so the
/// result may be cached per (component kind, theme key) or recomputed
/// redundantly without side effects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentTheme {
    vars: BTreeMap<String, TokenValue>,
}

impl ComponentTheme {
    /// Create an empty variable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, consuming and returning the set (builder style).
    pub fn set(mut self, name: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Get a variable.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.vars.get(name)
    }

    /// Render a variable for CSS interpolation.
    ///
    /// A missing variable renders as an empty string after a `warn!`; the
    /// structural-consistency invariant on themes means this only happens
    /// for variable names the generator never produced.
    pub fn var(&self, name: &str) -> String {
        match self.vars.get(name) {
            Some(v) => v.to_string(),
            None => {
                tracing::warn!("Missing component theme variable '{}'", name);
                String::new()
            }
        }
    }

    /// Check whether a variable is present.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterate over variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if the variable set is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Merge an overlay over these variables, field by field.
    ///
    /// Overlay values win; variables absent from the overlay are kept.
    pub fn apply_overlay(&mut self, overlay: &ComponentTheme) {
        for (name, value) in overlay.iter() {
            self.vars.insert(name.to_string(), value.clone());
        }
    }
}

/// Theme-variant overlays keyed by theme key.
///
/// The explicit replacement for switching on a theme's string key inside a
/// generator: each known variant maps to an overlay fragment, and every
/// other key maps to no overlay at all.
#[derive(Debug, Clone, Default)]
pub struct VariantOverlays {
    overlays: HashMap<String, ComponentTheme>,
}

impl VariantOverlays {
    /// No overlays for any variant.
    pub fn none() -> Self {
        Self::default()
    }

    /// Add an overlay fragment for a variant, builder style.
    pub fn with(mut self, key: impl Into<String>, overlay: ComponentTheme) -> Self {
        self.overlays.insert(key.into(), overlay);
        self
    }

    /// Get the overlay for a theme key, if one is defined.
    pub fn for_key(&self, key: &str) -> Option<&ComponentTheme> {
        self.overlays.get(key)
    }
}

/// Pure mapping from a theme to one component kind's variables.
///
/// Total over every structurally valid theme: the same variable names come
/// back for every theme, only values differ. No side effects.
pub trait ComponentThemeGenerator {
    /// The component kind this generator belongs to (`"TextInput"`).
    fn component(&self) -> &'static str;

    /// Compute the base variables from the theme's token groups.
    fn base(&self, theme: &Theme) -> ComponentTheme;

    /// Theme-variant overlays; defaults to none.
    fn overlays(&self, _theme: &Theme) -> VariantOverlays {
        VariantOverlays::none()
    }

    /// Compute the final variables: base, then the overlay for the theme's
    /// key merged on top field by field.
    fn generate_theme(&self, theme: &Theme) -> ComponentTheme {
        let mut vars = self.base(theme);
        if let Some(overlay) = self.overlays(theme).for_key(theme.key()) {
            vars.apply_overlay(overlay);
        }
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_tokens::builtin;

    struct Badge;

    impl ComponentThemeGenerator for Badge {
        fn component(&self) -> &'static str {
            "Badge"
        }

        fn base(&self, theme: &Theme) -> ComponentTheme {
            ComponentTheme::new()
                .set("color", theme.colors.value("textLightest"))
                .set("background", theme.colors.value("backgroundBrand"))
                .set("fontSize", theme.typography.value("fontSizeXSmall"))
        }

        fn overlays(&self, theme: &Theme) -> VariantOverlays {
            VariantOverlays::none().with(
                builtin::CANVAS,
                ComponentTheme::new().set("background", theme.brand.value("primary")),
            )
        }
    }

    #[test]
    fn overlay_applies_for_matching_key() {
        let theme = builtin::canvas();
        let vars = Badge.generate_theme(&theme);

        assert_eq!(vars.var("background"), theme.brand.value("primary"));
        // Base variables survive the overlay
        assert_eq!(vars.var("fontSize"), "0.75rem");
    }

    #[test]
    fn unrecognized_key_gets_no_overlay() {
        let theme = builtin::canvas_high_contrast();
        let vars = Badge.generate_theme(&theme);

        assert_eq!(vars.var("background"), theme.colors.value("backgroundBrand"));
    }

    #[test]
    fn same_shape_for_every_theme() {
        let base_keys: Vec<String> = Badge
            .generate_theme(&builtin::canvas())
            .iter()
            .map(|(k, _)| k.to_string())
            .collect();
        let variant_keys: Vec<String> = Badge
            .generate_theme(&builtin::canvas_high_contrast())
            .iter()
            .map(|(k, _)| k.to_string())
            .collect();

        assert_eq!(base_keys, variant_keys);
    }

    #[test]
    fn generation_is_deterministic() {
        let theme = builtin::canvas();
        assert_eq!(Badge.generate_theme(&theme), Badge.generate_theme(&theme));
    }
}
