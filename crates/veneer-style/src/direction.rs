//! Direction-agnostic style output.
//!
//! Mirror-sensitive properties (gradient directions, physical offsets)
//! carry both the default rule and a counterpart under the
//! [`RTL_RULE`] nested key, so one generator invocation is correct in both
//! reading directions. The rendering layer applies the counterpart when the
//! surrounding document direction is reversed; [`resolve_direction`] does
//! that resolution for hosts that want plain property bags.
//!
//! Where the design system defines a logical property
//! (`"insetInlineStart"`), generators use it directly and no mirror rule is
//! needed.

use crate::block::StyleBlock;
use crate::merge::merge_into;

/// Nested key holding property overrides for reversed document direction.
pub const RTL_RULE: &str = "[dir=\"rtl\"] &";

/// Document reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    /// Left-to-right (the default).
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl TextDirection {
    /// Parse an HTML `dir` attribute value; anything unrecognized is LTR.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "rtl" => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }
}

impl StyleBlock {
    /// Set a mirror-sensitive property with both direction values.
    ///
    /// Sets `name` to `ltr` on the block itself and records the `rtl`
    /// counterpart under [`RTL_RULE`], merging with any counterpart rules
    /// already present.
    pub fn mirrored(
        mut self,
        name: &str,
        ltr: impl Into<crate::block::PropValue>,
        rtl: impl Into<crate::block::PropValue>,
    ) -> Self {
        let mut counterpart = self.nested(RTL_RULE).cloned().unwrap_or_default();
        counterpart.insert(name, rtl);

        self.insert(name, ltr);
        self.insert(RTL_RULE, counterpart);
        self
    }
}

/// Resolve a block for a concrete document direction.
///
/// For LTR the counterpart rule is simply dropped; for RTL it is merged
/// over the block. Properties without a counterpart are untouched either
/// way.
pub fn resolve_direction(block: &StyleBlock, direction: TextDirection) -> StyleBlock {
    let mut resolved = block.clone();
    let counterpart = resolved.remove(RTL_RULE);

    if direction == TextDirection::Rtl {
        if let Some(counterpart) = counterpart.as_ref().and_then(|v| v.as_block()) {
            merge_into(&mut resolved, counterpart);
        }
    }
    resolved
}
