//! The style generator contract.

use crate::block::StyleMap;
use crate::component_theme::ComponentTheme;

/// Pure mapping from (component theme variables, props, state) to a style
/// map.
///
/// `Props` carry stable configuration (size, layout flags); `State` carries
/// the interaction flags the component owns (focused, disabled, invalid).
/// Implementations must be deterministic and total over the declared
/// prop/state domains, select one entry per variant table, and merge state
/// fragments through [`crate::merge::merged`] in the documented order with
/// disabled last.
///
/// The result must be recomputed whenever props or state change in a way
/// that affects any conditional branch; [`crate::host::StyleHost`] handles
/// that for components driven through the lifecycle hooks.
pub trait StyleGenerator {
    /// Stable configuration the style depends on.
    type Props;
    /// Component-owned interaction state the style depends on.
    type State;

    /// Compute the style map.
    fn generate_style(
        &self,
        component_theme: &ComponentTheme,
        props: &Self::Props,
        state: &Self::State,
    ) -> StyleMap;
}
