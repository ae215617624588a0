use serde::{Deserialize, Serialize};

/// Padding on each side of a view.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    /// Left padding.
    pub left: i32,
    /// Top padding.
    pub top: i32,
    /// Right padding.
    pub right: i32,
    /// Bottom padding.
    pub bottom: i32,
}

impl Insets {
    /// Construct insets from each side.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Equal padding on every side.
    pub fn uniform(n: i32) -> Self {
        Self::new(n, n, n, n)
    }

    /// Combined horizontal padding.
    pub fn horizontal(&self) -> i32 {
        self.left.wrapping_add(self.right)
    }

    /// Combined vertical padding.
    pub fn vertical(&self) -> i32 {
        self.top.wrapping_add(self.bottom)
    }
}
