//! The theme data model.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, TokenGroup};

/// A named, immutable set of design tokens.
///
/// A theme is constructed once, at application start or at theme-switch
/// time, and never mutated afterwards; the registry hands out `Arc<Theme>`
/// so concurrent readers need no synchronization.
///
/// Token groups are structurally consistent across all themes in a system
/// (same token names, different values), which keeps every component theme
/// generator total over every theme. [`Theme::validate_against`] checks that
/// invariant for externally loaded themes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Unique theme identifier, e.g. `"canvas"` or `"canvas-high-contrast"`.
    ///
    /// Component theme generators use the key to select variant overlays.
    pub key: String,
    /// Color tokens.
    pub colors: TokenGroup,
    /// Typography tokens (families, sizes, weights, line heights).
    pub typography: TokenGroup,
    /// Spacing scale tokens.
    pub spacing: TokenGroup,
    /// Border tokens (widths, radii, style).
    pub borders: TokenGroup,
    /// Per-institution brand tokens read off the theme root.
    #[serde(default)]
    pub brand: TokenGroup,
}

impl Theme {
    /// Create an empty theme with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            colors: TokenGroup::new(),
            typography: TokenGroup::new(),
            spacing: TokenGroup::new(),
            borders: TokenGroup::new(),
            brand: TokenGroup::new(),
        }
    }

    /// Get the theme key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Iterate over the named token groups.
    pub fn groups(&self) -> impl Iterator<Item = (&'static str, &TokenGroup)> {
        [
            ("colors", &self.colors),
            ("typography", &self.typography),
            ("spacing", &self.spacing),
            ("borders", &self.borders),
            ("brand", &self.brand),
        ]
        .into_iter()
    }

    /// Validate structural consistency against a reference theme.
    ///
    /// Every token name present in the reference must be present in this
    /// theme, and tokens the reference keeps scalar must stay scalar.
    /// Extra tokens are allowed; the brand group is exempt because brand
    /// overrides are per-institution and intentionally sparse.
    ///
    /// Returns the first violation as [`Error::MissingToken`] or
    /// [`Error::TokenShape`].
    pub fn validate_against(&self, reference: &Theme) -> Result<()> {
        for (group_name, reference_group) in reference.groups() {
            let own_group = match group_name {
                "colors" => &self.colors,
                "typography" => &self.typography,
                "spacing" => &self.spacing,
                "borders" => &self.borders,
                _ => continue,
            };

            for (token, reference_value) in reference_group.iter() {
                match own_group.get(token) {
                    None => {
                        return Err(Error::missing_token(&self.key, group_name, token));
                    }
                    Some(value) if reference_value.is_scalar() && !value.is_scalar() => {
                        return Err(Error::token_shape(&self.key, group_name, token));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}
