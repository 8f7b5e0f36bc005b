use super::nodes::NodeKind;
use super::visitor::{IrVisitor, NodeRef};
use super::{NodeId, Program};
use crate::symbols::TypeHierarchy;

/// Estimated cost of one function definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCost {
    /// `Owner::signature`
    pub name: String,
    pub complexity: u64,
}

/// Collects the cost of every function definition in a subtree
pub struct ComplexityReport<'h> {
    hierarchy: &'h TypeHierarchy,
    entries: Vec<FunctionCost>,
}

impl<'h> ComplexityReport<'h> {
    pub fn new(hierarchy: &'h TypeHierarchy) -> Self {
        Self {
            hierarchy,
            entries: Vec::new(),
        }
    }

    pub fn collect(program: &Program, root: NodeId, hierarchy: &'h TypeHierarchy) -> Vec<FunctionCost> {
        let mut report = Self::new(hierarchy);
        program.accept(root, &mut report);
        report.entries
    }

    pub fn entries(&self) -> &[FunctionCost] {
        &self.entries
    }
}

impl IrVisitor for ComplexityReport<'_> {
    type Output = ();

    fn visit_node(&mut self, node: NodeRef<'_>) {
        for child in node.children() {
            child.accept(self);
        }
    }

    fn visit_function_definition(&mut self, node: NodeRef<'_>) {
        if let NodeKind::FunctionDefinition { info, .. } = node.kind() {
            let owner = info.owner().map(|o| o.name()).unwrap_or("?");
            self.entries.push(FunctionCost {
                name: format!("{}::{}", owner, info.signature()),
                complexity: node.program().complexity(node.id(), self.hierarchy),
            });
        }
    }
}
