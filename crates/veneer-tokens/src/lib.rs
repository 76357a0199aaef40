//! Design token themes for the Veneer styling pipeline.
//!
//! A [`Theme`] is a named, immutable mapping of design tokens (colors,
//! typography, spacing, borders) plus optional brand overrides. Themes are
//! the single input every component theme generator derives its variables
//! from, so all themes in a system carry the same token names per group.
//!
//! # Example
//!
//! ```
//! use veneer_tokens::{builtin, ThemeRegistry};
//!
//! let registry = ThemeRegistry::with_builtins();
//! let theme = registry.active();
//!
//! assert_eq!(theme.key(), builtin::CANVAS);
//! assert_eq!(theme.borders.value("style"), "solid");
//!
//! registry.activate(builtin::CANVAS_HIGH_CONTRAST)?;
//! assert_eq!(registry.active().key(), "canvas-high-contrast");
//! # Ok::<(), veneer_tokens::Error>(())
//! ```
//!
//! Custom themes load from TOML or JSON files via [`Theme::from_file`] and
//! should be validated against a built-in with [`Theme::validate_against`]
//! before any generator runs over them.

pub mod builtin;

mod error;
mod group;
mod loader;
mod registry;
mod theme;
mod value;

pub use error::{Error, Result};
pub use group::TokenGroup;
pub use registry::ThemeRegistry;
pub use theme::Theme;
pub use value::TokenValue;
