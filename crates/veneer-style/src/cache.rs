//! Component theme memoization.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use veneer_tokens::Theme;

use crate::component_theme::{ComponentTheme, ComponentThemeGenerator};

/// Cache key: one entry per (component kind, theme key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    component: &'static str,
    theme_key: String,
}

/// Memoization cache for generated component theme variables.
///
/// Generation is pure, so this is an optimization, never a correctness
/// requirement: a miss under contention may recompute redundantly, and both
/// results are identical. Entries are shared as `Arc<ComponentTheme>` so
/// every component instance of a kind reads the same allocation.
#[derive(Default)]
pub struct ComponentThemeCache {
    entries: RwLock<HashMap<CacheKey, Arc<ComponentTheme>>>,
}

impl ComponentThemeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the variables for a (generator, theme) pair, generating on miss.
    pub fn get_or_generate(
        &self,
        generator: &dyn ComponentThemeGenerator,
        theme: &Theme,
    ) -> Arc<ComponentTheme> {
        let key = CacheKey {
            component: generator.component(),
            theme_key: theme.key().to_string(),
        };

        if let Some(cached) = self.entries.read().get(&key) {
            return Arc::clone(cached);
        }

        tracing::debug!(
            "Generating component theme for '{}' under theme '{}'",
            key.component,
            key.theme_key
        );
        let generated = Arc::new(generator.generate_theme(theme));
        self.entries
            .write()
            .entry(key)
            .or_insert(generated)
            .clone()
    }

    /// Drop all entries computed from the given theme key.
    ///
    /// Call after re-registering a theme under an existing key; plain theme
    /// switches need no invalidation because entries are keyed per theme.
    pub fn invalidate_theme(&self, theme_key: &str) {
        self.entries
            .write()
            .retain(|key, _| key.theme_key != theme_key);
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        self.entries.write().clear();
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_tokens::builtin;

    struct Chip;

    impl ComponentThemeGenerator for Chip {
        fn component(&self) -> &'static str {
            "Chip"
        }

        fn base(&self, theme: &Theme) -> ComponentTheme {
            ComponentTheme::new().set("color", theme.colors.value("textDarkest"))
        }
    }

    #[test]
    fn repeated_lookups_share_one_allocation() {
        let cache = ComponentThemeCache::new();
        let theme = builtin::canvas();

        let first = cache.get_or_generate(&Chip, &theme);
        let second = cache.get_or_generate(&Chip, &theme);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn entries_are_keyed_per_theme() {
        let cache = ComponentThemeCache::new();

        let base = cache.get_or_generate(&Chip, &builtin::canvas());
        let variant = cache.get_or_generate(&Chip, &builtin::canvas_high_contrast());

        assert_ne!(base.var("color"), variant.var("color"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn invalidate_theme_drops_matching_entries() {
        let cache = ComponentThemeCache::new();
        cache.get_or_generate(&Chip, &builtin::canvas());
        cache.get_or_generate(&Chip, &builtin::canvas_high_contrast());

        cache.invalidate_theme(builtin::CANVAS);
        assert_eq!(cache.len(), 1);

        cache.invalidate_all();
        assert!(cache.is_empty());
    }
}
