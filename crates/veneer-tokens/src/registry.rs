//! Theme registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{builtin, Error, Result, Theme};

/// Thread-safe registry of themes keyed by theme key.
///
/// Themes are immutable once registered; the registry hands out
/// `Arc<Theme>` so any number of component instances can read the active
/// theme concurrently without locking beyond the lookup itself.
pub struct ThemeRegistry {
    themes: RwLock<HashMap<String, Arc<Theme>>>,
    active: RwLock<Arc<Theme>>,
}

impl ThemeRegistry {
    /// Create a registry seeded with the built-in themes.
    ///
    /// The `canvas` theme starts active.
    pub fn with_builtins() -> Self {
        let canvas = Arc::new(builtin::canvas());
        let high_contrast = Arc::new(builtin::canvas_high_contrast());

        let mut themes = HashMap::new();
        themes.insert(canvas.key().to_string(), Arc::clone(&canvas));
        themes.insert(high_contrast.key().to_string(), high_contrast);

        Self {
            themes: RwLock::new(themes),
            active: RwLock::new(canvas),
        }
    }

    /// Register a theme, replacing any previous theme with the same key.
    pub fn register(&self, theme: Theme) -> Arc<Theme> {
        let theme = Arc::new(theme);
        tracing::info!("Registering theme '{}'", theme.key());
        self.themes
            .write()
            .insert(theme.key().to_string(), Arc::clone(&theme));
        theme
    }

    /// Look up a theme by key.
    pub fn get(&self, key: &str) -> Option<Arc<Theme>> {
        self.themes.read().get(key).cloned()
    }

    /// Make the theme with the given key the active one.
    ///
    /// Callers are expected to re-run their style pipeline afterwards;
    /// the registry does not push invalidations.
    pub fn activate(&self, key: &str) -> Result<Arc<Theme>> {
        let theme = self.get(key).ok_or_else(|| Error::unknown_theme(key))?;
        tracing::info!("Activating theme '{}'", key);
        *self.active.write() = Arc::clone(&theme);
        Ok(theme)
    }

    /// Get the currently active theme.
    pub fn active(&self) -> Arc<Theme> {
        Arc::clone(&self.active.read())
    }

    /// Registered theme keys, unordered.
    pub fn keys(&self) -> Vec<String> {
        self.themes.read().keys().cloned().collect()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
