use serde::{Deserialize, Serialize};

/// A rectangle described by its four edges, in parent coordinates.
///
/// Edges are stored verbatim. Nothing stops `right` from being less than
/// `left`, in which case the width is negative.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl Bounds {
    /// Construct bounds from edges.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The zero rectangle.
    pub fn zero() -> Self {
        Self::default()
    }

    /// `right - left`. Wraps on overflow.
    pub fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// `bottom - top`. Wraps on overflow.
    pub fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// True if either span is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Does the rectangle contain the point? Right and bottom edges are
    /// exclusive.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn spans() {
        let b = Bounds::new(10, 20, 110, 70);
        assert_eq!(b.width(), 100);
        assert_eq!(b.height(), 50);
        assert!(!b.is_empty());
        assert!(Bounds::zero().is_empty());
    }

    #[test]
    fn degenerate() {
        let b = Bounds::new(10, 10, 5, 2);
        assert_eq!(b.width(), -5);
        assert_eq!(b.height(), -8);
        assert!(b.is_empty());
        assert!(!b.contains(7, 5));
    }

    #[test]
    fn contains() {
        let b = Bounds::new(0, 0, 10, 10);
        assert!(b.contains(0, 0));
        assert!(b.contains(9, 9));
        assert!(!b.contains(10, 5));
        assert!(!b.contains(-1, 5));
    }

    #[test]
    fn serde_shape() {
        let b = Bounds::new(1, 2, -3, 4);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"left":1,"top":2,"right":-3,"bottom":4}"#);
        assert_eq!(serde_json::from_str::<Bounds>(&json).unwrap(), b);
    }

    proptest! {
        #[test]
        fn spans_match_edges(
            l in -10_000i32..10_000,
            t in -10_000i32..10_000,
            r in -10_000i32..10_000,
            b in -10_000i32..10_000,
        ) {
            let bounds = Bounds::new(l, t, r, b);
            prop_assert_eq!(bounds.width(), r - l);
            prop_assert_eq!(bounds.height(), b - t);
        }
    }
}
