//! Component kinds shipped with the library.
//!
//! Each module pairs a [`ComponentThemeGenerator`] with a
//! [`StyleGenerator`] on one unit struct, so a single value drives both
//! halves of the pipeline for its kind.
//!
//! [`ComponentThemeGenerator`]: crate::ComponentThemeGenerator
//! [`StyleGenerator`]: crate::StyleGenerator

pub mod heading;
pub mod options_item;
pub mod side_nav_item;
pub mod tabs;
pub mod text_input;
