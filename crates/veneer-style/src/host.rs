//! The style host.
//!
//! The host is the explicit replacement for a cross-cutting style
//! decorator: the component owns a `StyleHost`, calls [`StyleHost::mount`]
//! when it becomes visible and [`StyleHost::update`] from its update hook,
//! and receives the computed [`StyleMap`] as an ordinary value via
//! [`StyleHost::styles`] before committing its render output.
//!
//! Lifecycle: `Unapplied --mount--> Applied --update--> Applied
//! (recomputed when inputs changed) --unmount--> Destroyed`. No style map
//! is visible before the first mount completes or after unmount.
//!
//! All computation is synchronous and pure; a panic inside a generator is
//! not caught here and propagates to the host rendering layer's standard
//! error path.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use veneer_tokens::Theme;

use crate::block::StyleMap;
use crate::cache::ComponentThemeCache;
use crate::component_theme::ComponentThemeGenerator;
use crate::generator::StyleGenerator;

/// Lifecycle phase of a style host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostPhase {
    /// Created, no style computed yet.
    #[default]
    Unapplied,
    /// Mounted; a current style map is available.
    Applied,
    /// Unmounted; the style map has been discarded.
    Destroyed,
}

/// Drives style recomputation across a component's lifecycle.
///
/// `G` implements both generator traits for one component kind. Change
/// detection hashes (theme key, props, state); an update with an unchanged
/// hash skips recomputation.
///
/// # Example
///
/// ```
/// use veneer_style::components::text_input::{TextInput, TextInputProps, TextInputState};
/// use veneer_style::{HostPhase, StyleHost};
/// use veneer_tokens::builtin;
///
/// let theme = builtin::canvas();
/// let mut host = StyleHost::new(TextInput);
/// assert!(host.styles().is_none());
///
/// host.mount(&theme, &TextInputProps::default(), &TextInputState::default());
/// assert_eq!(host.phase(), HostPhase::Applied);
/// assert!(host.styles().unwrap().contains("facade"));
///
/// host.unmount();
/// assert!(host.styles().is_none());
/// ```
pub struct StyleHost<G: ComponentThemeGenerator + StyleGenerator> {
    generator: G,
    cache: Option<Arc<ComponentThemeCache>>,
    phase: HostPhase,
    styles: Option<StyleMap>,
    input_hash: Option<u64>,
}

impl<G> StyleHost<G>
where
    G: ComponentThemeGenerator + StyleGenerator,
    G::Props: Hash,
    G::State: Hash,
{
    /// Create a host that generates component theme variables directly.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            cache: None,
            phase: HostPhase::Unapplied,
            styles: None,
            input_hash: None,
        }
    }

    /// Create a host backed by a shared component theme cache.
    pub fn with_cache(generator: G, cache: Arc<ComponentThemeCache>) -> Self {
        Self {
            cache: Some(cache),
            ..Self::new(generator)
        }
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> HostPhase {
        self.phase
    }

    /// Get the current style map; `None` unless the host is applied.
    pub fn styles(&self) -> Option<&StyleMap> {
        self.styles.as_ref()
    }

    /// Compute styles for the first time and enter the applied phase.
    ///
    /// Mounting a destroyed host is ignored with a warning; the component
    /// must create a fresh host instead.
    pub fn mount(&mut self, theme: &Theme, props: &G::Props, state: &G::State) {
        if self.phase == HostPhase::Destroyed {
            tracing::warn!(
                "Ignoring mount on destroyed style host for '{}'",
                self.generator.component()
            );
            return;
        }
        self.recompute(theme, props, state);
        self.phase = HostPhase::Applied;
    }

    /// Recompute styles if theme, props, or state changed.
    ///
    /// Returns `true` when a recomputation happened. Updates before mount
    /// or after unmount are ignored with a warning.
    pub fn update(&mut self, theme: &Theme, props: &G::Props, state: &G::State) -> bool {
        if self.phase != HostPhase::Applied {
            tracing::warn!(
                "Ignoring update on {:?} style host for '{}'",
                self.phase,
                self.generator.component()
            );
            return false;
        }

        let hash = Self::hash_inputs(theme, props, state);
        if self.input_hash == Some(hash) {
            return false;
        }
        self.recompute(theme, props, state);
        true
    }

    /// Discard the style map and leave the lifecycle.
    pub fn unmount(&mut self) {
        self.phase = HostPhase::Destroyed;
        self.styles = None;
        self.input_hash = None;
    }

    fn recompute(&mut self, theme: &Theme, props: &G::Props, state: &G::State) {
        let style = match &self.cache {
            Some(cache) => {
                let vars = cache.get_or_generate(&self.generator, theme);
                self.generator.generate_style(&vars, props, state)
            }
            None => {
                let vars = self.generator.generate_theme(theme);
                self.generator.generate_style(&vars, props, state)
            }
        };
        self.input_hash = Some(Self::hash_inputs(theme, props, state));
        self.styles = Some(style);
    }

    fn hash_inputs(theme: &Theme, props: &G::Props, state: &G::State) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        theme.key().hash(&mut hasher);
        props.hash(&mut hasher);
        state.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::text_input::{TextInput, TextInputProps, TextInputState};
    use veneer_tokens::builtin;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn no_styles_before_mount() {
        let host = StyleHost::new(TextInput);
        assert_eq!(host.phase(), HostPhase::Unapplied);
        assert!(host.styles().is_none());
    }

    #[test]
    fn mount_applies_styles() {
        let theme = builtin::canvas();
        let mut host = StyleHost::new(TextInput);

        host.mount(&theme, &TextInputProps::default(), &TextInputState::default());

        assert_eq!(host.phase(), HostPhase::Applied);
        assert!(host.styles().unwrap().contains("facade"));
    }

    #[test]
    fn update_skips_unchanged_inputs() {
        let theme = builtin::canvas();
        let props = TextInputProps::default();
        let state = TextInputState::default();
        let mut host = StyleHost::new(TextInput);
        host.mount(&theme, &props, &state);

        assert!(!host.update(&theme, &props, &state));
    }

    #[test]
    fn update_recomputes_on_state_change() {
        let theme = builtin::canvas();
        let props = TextInputProps::default();
        let mut host = StyleHost::new(TextInput);
        host.mount(&theme, &props, &TextInputState::default());

        let focused = TextInputState {
            focused: true,
            ..Default::default()
        };
        assert!(host.update(&theme, &props, &focused));
    }

    #[test]
    fn update_recomputes_on_theme_switch() {
        let props = TextInputProps::default();
        let state = TextInputState::default();
        let mut host = StyleHost::new(TextInput);
        host.mount(&builtin::canvas(), &props, &state);

        assert!(host.update(&builtin::canvas_high_contrast(), &props, &state));
    }

    #[test]
    fn unmount_discards_styles_for_good() {
        init_tracing();
        let theme = builtin::canvas();
        let props = TextInputProps::default();
        let state = TextInputState::default();
        let mut host = StyleHost::new(TextInput);

        host.mount(&theme, &props, &state);
        host.unmount();

        assert_eq!(host.phase(), HostPhase::Destroyed);
        assert!(host.styles().is_none());

        // Destroyed hosts stay destroyed
        host.mount(&theme, &props, &state);
        assert!(host.styles().is_none());
        assert!(!host.update(&theme, &props, &state));
    }

    #[test]
    fn cached_host_produces_identical_styles() {
        let theme = builtin::canvas();
        let props = TextInputProps::default();
        let state = TextInputState::default();
        let cache = Arc::new(ComponentThemeCache::new());

        let mut direct = StyleHost::new(TextInput);
        let mut cached = StyleHost::with_cache(TextInput, Arc::clone(&cache));
        direct.mount(&theme, &props, &state);
        cached.mount(&theme, &props, &state);

        assert_eq!(direct.styles(), cached.styles());
        assert_eq!(cache.len(), 1);
    }
}
