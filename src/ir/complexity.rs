use super::nodes::*;
use super::{NodeId, Program};
use crate::symbols::TypeHierarchy;

impl Program {
    /// Estimated execution cost of the subtree rooted at `id`.
    ///
    /// Recomputed from the current children on every call. Call sites consult
    /// `hierarchy` for the worst-case dispatch target. Sums saturate.
    pub fn complexity(&self, id: NodeId, hierarchy: &TypeHierarchy) -> u64 {
        let node = &self[id];
        match &node.kind {
            NodeKind::Nothing | NodeKind::Literal(_) | NodeKind::ArgumentDeclaration(_) => 0,
            NodeKind::LocalVariable(_) | NodeKind::VariableDeclaration(_) => 1,
            NodeKind::BinaryOperator(_) | NodeKind::UnaryOperator(_) => {
                self.sum(&node.children, hierarchy).saturating_add(1)
            }
            NodeKind::Statement | NodeKind::Block | NodeKind::Return => self.sum(&node.children, hierarchy),
            NodeKind::Function(info) => self
                .sum(&node.children, hierarchy)
                .saturating_add(hierarchy.dispatch_cost(info)),
            NodeKind::FunctionDefinition { has_return, .. } => {
                let body = self.complexity(node.children[0], hierarchy);
                if *has_return {
                    body.saturating_add(self.complexity(node.children[1], hierarchy))
                } else {
                    body
                }
            }
            NodeKind::Loop {
                kind,
                descriptor,
                iteration_limit,
            } => {
                let parts = &self.loops[descriptor.as_usize()];
                let once = self
                    .complexity(parts.initialization, hierarchy)
                    .saturating_add(self.slots(id, kind.prologue_slots(), hierarchy));
                let per_iteration = self
                    .complexity(parts.condition, hierarchy)
                    .saturating_add(self.complexity(parts.manipulator, hierarchy))
                    .saturating_add(self.iteration_cost(id, hierarchy));
                once.saturating_add(iteration_limit.saturating_mul(per_iteration))
            }
        }
    }

    /// Cost of the loop body slots of one iteration, excluding guard and step
    pub fn iteration_cost(&self, id: NodeId, hierarchy: &TypeHierarchy) -> u64 {
        match self[id].kind {
            NodeKind::Loop { kind, .. } => self.slots(id, kind.iteration_slots(), hierarchy),
            _ => 0,
        }
    }

    fn slots(&self, id: NodeId, slots: &[usize], hierarchy: &TypeHierarchy) -> u64 {
        let children = &self[id].children;
        slots
            .iter()
            .map(|slot| self.complexity(children[*slot], hierarchy))
            .fold(0, u64::saturating_add)
    }

    fn sum(&self, ids: &[NodeId], hierarchy: &TypeHierarchy) -> u64 {
        ids.iter()
            .map(|id| self.complexity(*id, hierarchy))
            .fold(0, u64::saturating_add)
    }
}
