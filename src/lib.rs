//! Jittester IR (jtir)
//!
//! Program intermediate representation for random JIT compiler test generation.
//! A generator builds a program tree bottom-up, keeps asking how expensive it
//! has become, and stops growing it once the budget is spent.
//!
//! ## Architecture
//!
//! - **symbols**: variables, functions, override rules and the class hierarchy
//!   index used for call hierarchy analysis
//! - **ir**: the node arena, cost and depth queries, loop removal, visitors
//! - **config**: generation budget
//! - **sample**: a small fixed program used by the command-line tool
//! - **bin**: command-line interface
//!
//! ## Flow
//!
//! ```text
//! TypeHierarchy ─┐
//!                ├─→ Program (bottom-up) → complexity / depth → flatten loops → Printer
//! Symbols ───────┘
//! ```

pub mod config;
pub mod error;
pub mod ir;
pub mod sample;
pub mod symbols;

pub use config::Config;
pub use error::{Error, Result};
pub use ir::{ComplexityReport, FunctionCost, IrVisitor, NodeId, Printer, Program};
pub use symbols::{FunctionInfo, TypeHierarchy, TypeRef};

use tracing::debug;

/// Cost and size of one program tree measured against a budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub complexity: u64,
    pub depth: usize,
    pub admitted: bool,
    pub functions: Vec<FunctionCost>,
}

/// Measure the tree rooted at `root`
pub fn summarize(program: &Program, root: NodeId, hierarchy: &TypeHierarchy, config: &Config) -> Summary {
    let complexity = program.complexity(root, hierarchy);
    let depth = program.count_depth(root);
    let admitted = config.admits(complexity, depth);
    debug!(root = %root, complexity, depth, admitted, "summarized program");
    Summary {
        complexity,
        depth,
        admitted,
        functions: ComplexityReport::collect(program, root, hierarchy),
    }
}
