use serde::{Deserialize, Serialize};

/// Sizing hints a view hands to its parent.
///
/// Dimensions are either exact pixel sizes or one of the sentinel values
/// [`LayoutParams::MATCH_PARENT`] and [`LayoutParams::WRAP_CONTENT`].
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Requested width.
    pub width: i32,
    /// Requested height.
    pub height: i32,
}

impl LayoutParams {
    /// Fill the parent along this axis.
    pub const MATCH_PARENT: i32 = -1;
    /// Size to the content along this axis.
    pub const WRAP_CONTENT: i32 = -2;

    /// Construct layout params with the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Params that fill the parent on both axes.
    pub fn match_parent() -> Self {
        Self::new(Self::MATCH_PARENT, Self::MATCH_PARENT)
    }

    /// Params that wrap content on both axes.
    pub fn wrap_content() -> Self {
        Self::new(Self::WRAP_CONTENT, Self::WRAP_CONTENT)
    }
}
