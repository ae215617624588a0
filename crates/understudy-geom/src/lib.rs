//! Geometry primitives used across understudy.

#![warn(missing_docs)]

/// Edge-based rectangles.
mod bounds;
/// Padding insets.
mod insets;
/// Layout parameters handed to parents.
mod layout_params;

pub use bounds::Bounds;
pub use insets::Insets;
pub use layout_params::LayoutParams;

/// Cardinal directions.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Direction {
    /// Upward direction.
    Up,
    /// Downward direction.
    #[default]
    Down,
    /// Leftward direction.
    Left,
    /// Rightward direction.
    Right,
}
