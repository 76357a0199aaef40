//! Ordered style-fragment merging.
//!
//! This is the single merge primitive in the pipeline. Every generator
//! expresses precedence as an explicit ordered list of fragments handed to
//! [`merged`], so the order is auditable in one place instead of being
//! implied by object-literal syntax.
//!
//! The canonical state-fragment order is: base variant, then `invalid`,
//! then `focused`, then the invalid-and-focused combination, then
//! `disabled`. Disabled merges last so its visuals can never be defeated by
//! another state.

use crate::block::StyleBlock;

/// Merge fragments left to right into a new block.
///
/// Later fragments win on property-name collision. Nested blocks
/// (pseudo-selector keys) are replaced wholesale, matching the spread
/// semantics generators are written against; a generator that needs
/// additive nesting composes the nested block before merging.
///
/// # Example
///
/// ```
/// use veneer_style::{merged, StyleBlock};
///
/// let base = StyleBlock::new().set("opacity", 1).set("cursor", "text");
/// let disabled = StyleBlock::new().set("opacity", "0.5").set("cursor", "not-allowed");
///
/// let style = merged([&base, &disabled]);
/// assert_eq!(style.text("cursor"), Some("not-allowed"));
/// ```
pub fn merged<'a>(fragments: impl IntoIterator<Item = &'a StyleBlock>) -> StyleBlock {
    let mut result = StyleBlock::new();
    for fragment in fragments {
        merge_into(&mut result, fragment);
    }
    result
}

/// Merge `source` onto `target`; properties in `source` win.
pub fn merge_into(target: &mut StyleBlock, source: &StyleBlock) {
    for (name, value) in source.iter() {
        target.insert(name, value.clone());
    }
}

/// A fragment that is empty when `condition` is false.
///
/// The build closure only runs when the condition holds, so generators can
/// interpolate component theme variables without paying for inactive
/// states.
pub fn when(condition: bool, build: impl FnOnce() -> StyleBlock) -> StyleBlock {
    if condition {
        build()
    } else {
        StyleBlock::new()
    }
}
