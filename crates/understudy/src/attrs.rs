//! Attribute sources consumed by the attribute pipeline.
//!
//! Parsing markup into attributes happens elsewhere. This module defines the
//! two read-only views the pipeline needs, plus [`Attributes`], an in-memory
//! implementation of both.

use std::collections::HashMap;

/// Namespace of the platform's own attributes.
pub const ANDROID_NS: &str = "android";

/// Construction-time attribute source.
pub trait AttributeSet {
    /// Integer resource value of an attribute, or `default` if it is unset or
    /// not a resource reference.
    fn attribute_resource_value(&self, namespace: &str, name: &str, default: i32) -> i32;

    /// Raw string value of an attribute.
    fn attribute_value(&self, namespace: &str, name: &str) -> Option<&str>;
}

/// Composition-time attribute source, one per element of the view tree.
pub trait ViewNodeAttributes {
    /// A boolean attribute, by qualified name (`"android:enabled"`). `None`
    /// means the attribute is absent and should not be applied.
    fn attribute_as_bool(&self, name: &str) -> Option<bool>;

    /// Does this element declare that its subtree takes over focus?
    fn has_request_focus_override(&self) -> bool;
}

/// Attributes held in memory, keyed by qualified name (`"android:id"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Values by qualified name.
    values: HashMap<String, String>,
    /// Focus override directive.
    focus_override: bool,
}

impl Attributes {
    /// An empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute by qualified name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set the focus override directive.
    pub fn with_focus_override(mut self) -> Self {
        self.focus_override = true;
        self
    }

    /// Set an attribute by qualified name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw value by qualified name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value by namespace and local name.
    fn get_ns(&self, namespace: &str, name: &str) -> Option<&str> {
        self.get(&format!("{namespace}:{name}"))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

/// Parse a resource value: decimal or `0x` hex, optionally prefixed by `@`.
fn parse_resource(value: &str) -> Option<i32> {
    let value = value.trim().trim_start_matches('@');
    if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16).ok().map(|v| v as i32)
    } else {
        value.parse().ok()
    }
}

impl AttributeSet for Attributes {
    fn attribute_resource_value(&self, namespace: &str, name: &str, default: i32) -> i32 {
        self.get_ns(namespace, name)
            .and_then(parse_resource)
            .unwrap_or(default)
    }

    fn attribute_value(&self, namespace: &str, name: &str) -> Option<&str> {
        self.get_ns(namespace, name)
    }
}

impl ViewNodeAttributes for Attributes {
    /// Any present value other than "true" (case-insensitive) reads as false.
    fn attribute_as_bool(&self, name: &str) -> Option<bool> {
        self.get(name).map(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    fn has_request_focus_override(&self) -> bool {
        self.focus_override
    }
}
