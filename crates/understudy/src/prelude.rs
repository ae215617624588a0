//! Commonly used types and traits.
//!
//! ```
//! use understudy::prelude::*;
//! ```

pub use crate::{
    attrs::{AttributeSet, Attributes, ViewNodeAttributes},
    config::{FocusPolicy, StageConfig},
    dispatch::Dispatch,
    dump::{NoNames, ResourceNames, dump},
    error::{Error, Result},
    event::{KeyEvent, TouchEvent},
    focus::FocusManager,
    geom::{Bounds, Direction, Insets, LayoutParams},
    hierarchy::Hierarchy,
    id::NodeId,
    node::{Lifecycle, Shadow, Visibility},
    pipeline::AttributePipeline,
    stage::Stage,
};
