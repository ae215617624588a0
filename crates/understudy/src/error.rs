use std::{io, result::Result as StdResult};

use thiserror::Error;

use crate::{
    id::NodeId,
    node::Lifecycle,
    pipeline::Phase,
};

/// Result type for understudy operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A checked click hit a node that is hidden, or has a hidden ancestor.
    #[error("view is not visible and cannot be clicked ({0:?})")]
    NotVisible(NodeId),

    /// A checked click hit a disabled node.
    #[error("view is not enabled and cannot be clicked ({0:?})")]
    NotEnabled(NodeId),

    /// The handle does not refer to a live node on this stage.
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Attaching would make a node its own ancestor.
    #[error("cannot attach a node beneath itself or one of its descendants")]
    CircularParentage,

    /// The node already has a parent and must be detached first.
    #[error("node already attached: {0:?}")]
    AlreadyAttached(NodeId),

    /// An attribute phase was run out of order, or more than once.
    #[error("cannot apply {phase} to {node:?} in state {state}")]
    PhaseOrder {
        /// Node the phase was applied to.
        node: NodeId,
        /// The phase that was attempted.
        phase: Phase,
        /// The node's lifecycle state at the time.
        state: Lifecycle,
    },

    /// Writing a diagnostic dump failed.
    #[error("dump: {0}")]
    Dump(String),

    /// A literal value could not be parsed.
    #[error("parse: {0}")]
    Parse(String),

    /// Configuration could not be parsed.
    #[error("config: {0}")]
    Config(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Dump(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
