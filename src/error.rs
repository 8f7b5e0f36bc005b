use thiserror::Error;

use crate::ir::{LoopId, NodeId};

/// Result type for jtir operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for IR construction, rewriting and hierarchy bookkeeping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("unknown loop descriptor {0}")]
    UnknownLoop(LoopId),

    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("node {child} is already owned by {owner}")]
    AlreadyOwned { child: NodeId, owner: String },

    #[error("{kind} expects {expected} child slot(s), found {found}")]
    SlotCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{kind} slot '{slot}' cannot hold a {found} node")]
    SlotKind {
        kind: &'static str,
        slot: &'static str,
        found: &'static str,
    },

    #[error("call to '{name}' expects {expected} argument(s), found {found}")]
    CallArity {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("loop node {0} has no parent to splice into")]
    Detached(NodeId),

    #[error("{kind} node {node} does not support removal")]
    NotRemovable { node: NodeId, kind: &'static str },

    #[error("loop node {node} has a {found} header; expected a block, a statement or nothing")]
    UnexpectedHeader { node: NodeId, found: &'static str },

    #[error("duplicate class '{0}'")]
    DuplicateClass(String),

    #[error("invalid override of '{name}' in '{owner}'")]
    InvalidOverride { name: String, owner: String },

    #[error("Construction error: {message}")]
    Construction { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a construction error
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction { message: message.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
