//! Understudy: simulated widget shadows for testing view trees.
//!
//! Each widget under test is represented by a [`Shadow`] held in a [`Stage`].
//! The shadow tracks the state a real widget would expose (geometry, flags,
//! visibility, focus, tags and listeners) without a rendering platform, and
//! the stage links shadows into trees so that tree-dependent behavior works:
//! effective visibility, click gating, root lookup and focus handling.
//!
//! # Quick Start
//!
//! - [`Stage`] - the node arena, with attach and detach
//! - [`Hierarchy`] - read-only tree queries
//! - [`FocusManager`] - focus requests and notification
//! - [`Dispatch`] - clicks, touches and keys
//! - [`AttributePipeline`] - applying attributes at construction and
//!   composition time
//!
//! ```
//! use understudy::prelude::*;
//!
//! # fn main() -> understudy::error::Result<()> {
//! let mut stage = Stage::new();
//! let layout = stage.create("LinearLayout");
//! let button = stage.create("Button");
//! stage.attach(layout, button)?;
//! stage.get_mut(button)?.set_on_click_listener(|_, _| {});
//!
//! stage.get_mut(layout)?.set_visibility(Visibility::Gone);
//! assert!(stage.checked_perform_click(button).is_err());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Attribute sources.
pub mod attrs;
/// Stage configuration.
pub mod config;
/// Click, touch and key delivery.
pub mod dispatch;
/// Diagnostic dumps.
pub mod dump;
/// Core error types.
pub mod error;
/// Input events.
pub mod event;
/// Focus state machine.
pub mod focus;
/// Tree queries.
pub mod hierarchy;
/// Node handles.
pub mod id;
/// Listener slots.
pub mod listener;
/// Per-node state.
pub mod node;
/// Two-phase attribute application.
pub mod pipeline;
/// Commonly used types and traits.
pub mod prelude;
/// The node arena.
pub mod stage;
/// Testing utilities.
#[cfg(feature = "testing")]
pub mod testing;

pub use attrs::{ANDROID_NS, AttributeSet, Attributes, ViewNodeAttributes};
pub use config::{FocusPolicy, StageConfig};
pub use dispatch::Dispatch;
pub use focus::FocusManager;
pub use hierarchy::Hierarchy;
pub use id::NodeId;
pub use node::{Lifecycle, Shadow, Tag, Visibility};
pub use pipeline::{AttributePipeline, Phase};
pub use stage::Stage;
pub use understudy_geom as geom;
