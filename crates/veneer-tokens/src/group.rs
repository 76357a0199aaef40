//! Token groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TokenValue;

/// A flat, ordered mapping of token name to value.
///
/// Themes organize tokens into named groups (colors, typography, spacing,
/// borders). All themes in a system carry the same token names per group so
/// any component theme generator can run against any theme; only the values
/// differ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenGroup {
    tokens: BTreeMap<String, TokenValue>,
}

impl TokenGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<TokenValue>) {
        self.tokens.insert(name.into(), value.into());
    }

    /// Get a token value.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.tokens.get(name)
    }

    /// Check if a token exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Render a token for CSS interpolation.
    ///
    /// Missing tokens render as an empty string after a `warn!`; a
    /// structurally valid theme never hits that path, so generators stay
    /// total for malformed input instead of panicking mid-render.
    pub fn value(&self, name: &str) -> String {
        match self.tokens.get(name) {
            Some(v) => v.to_string(),
            None => {
                tracing::warn!("Missing token '{}'", name);
                String::new()
            }
        }
    }

    /// Iterate over all tokens in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token names present in `self` but absent from `other`.
    pub fn names_missing_from<'a>(&'a self, other: &TokenGroup) -> Vec<&'a str> {
        self.tokens
            .keys()
            .filter(|name| !other.contains(name))
            .map(|name| name.as_str())
            .collect()
    }
}

impl<S: Into<String>, V: Into<TokenValue>> FromIterator<(S, V)> for TokenGroup {
    fn from_iter<T: IntoIterator<Item = (S, V)>>(iter: T) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_value() {
        let mut group = TokenGroup::new();
        group.set("widthSmall", "0.0625rem");
        group.set("fontWeightBold", 700);

        assert_eq!(group.value("widthSmall"), "0.0625rem");
        assert_eq!(group.value("fontWeightBold"), "700");
        assert!(group.contains("widthSmall"));
    }

    #[test]
    fn missing_token_renders_empty() {
        let group = TokenGroup::new();
        assert_eq!(group.value("nope"), "");
    }

    #[test]
    fn missing_names_diff() {
        let a: TokenGroup = [("x", "1"), ("y", "2")].into_iter().collect();
        let b: TokenGroup = [("x", "9")].into_iter().collect();

        assert_eq!(a.names_missing_from(&b), vec!["y"]);
        assert!(b.names_missing_from(&a).is_empty());
    }
}
