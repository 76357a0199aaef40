//! Theme-driven style generation for Veneer components.
//!
//! This crate turns design tokens into per-component style maps in two
//! pure stages:
//!
//! - **Component themes**: a [`ComponentThemeGenerator`] flattens a
//!   [`Theme`](veneer_tokens::Theme) into the named variables one
//!   component kind consumes, with per-theme overlays
//! - **Style maps**: a [`StyleGenerator`] combines those variables with
//!   component props and interaction state into named [`StyleBlock`]s
//! - **Ordered merging**: conditional fragments compose with
//!   [`merged`], later fragments winning property by property
//! - **Memoization**: a [`ComponentThemeCache`] shares generated
//!   variables per (component kind, theme)
//! - **Lifecycle**: a [`StyleHost`] recomputes styles across mount,
//!   update, and unmount, skipping work when inputs are unchanged
//!
//! # Example
//!
//! ```
//! use veneer_style::components::text_input::{TextInput, TextInputProps, TextInputState};
//! use veneer_style::StyleHost;
//! use veneer_tokens::builtin;
//!
//! let theme = builtin::canvas();
//! let mut host = StyleHost::new(TextInput);
//! host.mount(&theme, &TextInputProps::default(), &TextInputState::default());
//!
//! let facade = host.styles().unwrap().get("facade").unwrap();
//! assert_eq!(facade.text("border"), Some("0.0625rem solid #899297"));
//! ```

pub mod components;

mod block;
mod cache;
mod component_theme;
mod direction;
mod generator;
mod host;
mod merge;
mod variant;

pub use block::{PropValue, StyleBlock, StyleMap};
pub use cache::ComponentThemeCache;
pub use component_theme::{ComponentTheme, ComponentThemeGenerator, VariantOverlays};
pub use direction::{resolve_direction, TextDirection, RTL_RULE};
pub use generator::StyleGenerator;
pub use host::{HostPhase, StyleHost};
pub use merge::{merge_into, merged, when};
pub use variant::{Size, Variant};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::block::{PropValue, StyleBlock, StyleMap};
    pub use crate::cache::ComponentThemeCache;
    pub use crate::component_theme::{ComponentTheme, ComponentThemeGenerator, VariantOverlays};
    pub use crate::direction::{resolve_direction, TextDirection, RTL_RULE};
    pub use crate::generator::StyleGenerator;
    pub use crate::host::{HostPhase, StyleHost};
    pub use crate::merge::{merge_into, merged, when};
    pub use crate::variant::{Size, Variant};
}
