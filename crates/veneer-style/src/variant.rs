//! Enumerated prop variants.
//!
//! Props that select among statically enumerated style fragments (size,
//! layout mode, overflow behavior) are modeled as Rust enums, so selection
//! inside a generator is a total `match`. The out-of-domain case only
//! exists at the textual boundary (theme files, host applications passing
//! strings), where [`Variant::from_name`] resolves unknown names to the
//! documented default instead of failing: style computation is cosmetic,
//! so the policy is fail open, keep rendering.

/// A statically enumerated, mutually exclusive prop domain.
pub trait Variant: Copy + Default + PartialEq + Sized + 'static {
    /// All values in the domain.
    const DOMAIN: &'static [Self];

    /// The canonical name of this value.
    fn name(&self) -> &'static str;

    /// Parse a name, returning `None` for out-of-domain input.
    fn parse(name: &str) -> Option<Self> {
        Self::DOMAIN.iter().copied().find(|v| v.name() == name)
    }

    /// Parse a name, falling back to the default variant with a warning.
    fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            let fallback = Self::default();
            tracing::warn!(
                "Unknown variant '{}', falling back to '{}'",
                name,
                fallback.name()
            );
            fallback
        })
    }
}

/// Component size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    /// Compact controls.
    Small,
    /// The default size.
    #[default]
    Medium,
    /// Prominent controls.
    Large,
}

impl Variant for Size {
    const DOMAIN: &'static [Self] = &[Size::Small, Size::Medium, Size::Large];

    fn name(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!(Size::parse("small"), Some(Size::Small));
        assert_eq!(Size::parse("large"), Some(Size::Large));
        assert_eq!(Size::parse("jumbo"), None);
    }

    #[test]
    fn from_name_falls_back_to_default() {
        assert_eq!(Size::from_name("jumbo"), Size::Medium);
        assert_eq!(Size::from_name("medium"), Size::Medium);
        assert_eq!(Size::from_name("small"), Size::Small);
    }

    #[test]
    fn domain_round_trips() {
        for size in Size::DOMAIN {
            assert_eq!(Size::parse(size.name()), Some(*size));
        }
    }
}
