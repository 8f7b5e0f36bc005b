//! Program intermediate representation
//!
//! A generated program is a tree of [`Node`]s stored in a [`Program`] arena and
//! addressed by [`NodeId`]. Each node has a kind, a result type, a nesting level
//! and the class it was generated in. Supported queries:
//!
//! - [`Program::complexity`]: estimated execution cost of a subtree
//! - [`Program::count_depth`]: deepest nesting level in a subtree
//! - [`Program::accept`]: dispatch to an [`IrVisitor`]
//!
//! The only destructive rewrite is [`Program::remove_self`], which dissolves a
//! loop node into straight-line code in its parent.

mod arena;
mod complexity;
mod functions;
mod loops;
mod nodes;
mod printer;
mod program;
mod report;
mod visitor;

pub use arena::Id;
pub use loops::*;
pub use nodes::*;
pub use printer::*;
pub use program::*;
pub use report::*;
pub use visitor::*;

/// Index of a node in its [`Program`]
pub type NodeId = Id<Node>;

/// Index of a [`LoopDescriptor`] in its [`Program`]
pub type LoopId = Id<LoopDescriptor>;
