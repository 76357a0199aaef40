//! Style property bags.
//!
//! A [`StyleBlock`] is a flat mapping of CSS-like property name to value,
//! with nested blocks permitted under pseudo-selector keys (`"&::before"`,
//! `"&:focus"`). A [`StyleMap`] collects the named blocks one style
//! generator produces for one component ("facade", "input", "layout", ...).
//!
//! Both are plain data: the rendering layer that turns them into visual
//! output is an external collaborator.
//!
//! # Example
//!
//! ```
//! use veneer_style::StyleBlock;
//!
//! let facade = StyleBlock::new()
//!     .set("display", "block")
//!     .set("border", "0.0625rem solid #899297")
//!     .set("&::before", StyleBlock::new().set("content", "\"\""));
//!
//! assert_eq!(facade.text("display"), Some("block"));
//! assert!(facade.nested("&::before").is_some());
//! ```

use std::collections::BTreeMap;

/// A single style property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// A textual value (`"flex"`, `"1px solid #899297"`).
    Text(String),
    /// A numeric value (`opacity`, `flexGrow`, `zIndex`).
    Number(f64),
    /// A nested block keyed by a pseudo-selector or directional rule.
    Block(StyleBlock),
}

impl PropValue {
    /// Get the textual value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the nested block, if any.
    pub fn as_block(&self) -> Option<&StyleBlock> {
        match self {
            PropValue::Block(b) => Some(b),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<StyleBlock> for PropValue {
    fn from(value: StyleBlock) -> Self {
        PropValue::Block(value)
    }
}

/// A named property bag: property name → value.
///
/// Property names use the camelCase convention of the design system
/// (`"borderRadius"`, `"insetInlineStart"`). Ordering is by name, which
/// keeps equality and test output deterministic; merge precedence is
/// carried by [`crate::merge::merged`]'s argument order, never by
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBlock {
    props: BTreeMap<String, PropValue>,
}

impl StyleBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, consuming and returning the block (builder style).
    pub fn set(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Set a property in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        self.props.insert(name.into(), value.into());
    }

    /// Set a property only when `condition` holds.
    ///
    /// The conditional-spread idiom: the false branch contributes nothing.
    pub fn set_if(self, condition: bool, name: &str, value: impl Into<PropValue>) -> Self {
        if condition {
            self.set(name, value)
        } else {
            self
        }
    }

    /// Get a property value.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Get a textual property value.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_text)
    }

    /// Get a numeric property value.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(PropValue::as_number)
    }

    /// Get a nested block.
    pub fn nested(&self, name: &str) -> Option<&StyleBlock> {
        self.get(name).and_then(PropValue::as_block)
    }

    /// Check whether a property is present.
    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        self.props.remove(name)
    }

    /// Iterate over properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of properties.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Check if the block is empty.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// The output of one style generator run: block name → property bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    blocks: BTreeMap<String, StyleBlock>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named block, consuming and returning the map (builder style).
    pub fn block(mut self, name: impl Into<String>, block: StyleBlock) -> Self {
        self.blocks.insert(name.into(), block);
        self
    }

    /// Get a block by name.
    pub fn get(&self, name: &str) -> Option<&StyleBlock> {
        self.blocks.get(name)
    }

    /// Check whether a block is present.
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Iterate over blocks in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleBlock)> {
        self.blocks.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
