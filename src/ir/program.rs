use std::collections::HashSet;
use std::ops::Index;

use tracing::trace;

use super::nodes::*;
use super::{LoopId, NodeId};
use crate::error::{Error, Result};
use crate::symbols::{TypeRef, VariableInfo};

/// Arena holding every node and loop descriptor of one generated program.
///
/// Nodes are created bottom-up: a constructor takes ownership of the children
/// it is given, and a node can be adopted only once. Ids handed out by one
/// program are not valid in another; indexing with a foreign id panics.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub(crate) nodes: Vec<Node>,
    pub(crate) loops: Vec<LoopDescriptor>,
    owner: Option<TypeRef>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enclosing class recorded on nodes created from now on
    pub fn set_owner(&mut self, owner: Option<TypeRef>) {
        self.owner = owner;
    }

    pub fn owner(&self) -> Option<&TypeRef> {
        self.owner.as_ref()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.as_usize()).ok_or(Error::UnknownNode(id))
    }

    pub fn loop_descriptor(&self, id: LoopId) -> Result<&LoopDescriptor> {
        self.loops.get(id.as_usize()).ok_or(Error::UnknownLoop(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self[id].children
    }

    /// `max(level, depth of every child)`
    pub fn count_depth(&self, id: NodeId) -> usize {
        let node = &self[id];
        node.children
            .iter()
            .map(|child| self.count_depth(*child))
            .fold(node.level, usize::max)
    }

    pub fn nothing(&mut self) -> NodeId {
        self.push_leaf(NodeKind::Nothing, TypeRef::Void, 0)
    }

    pub fn literal(&mut self, value: LiteralValue, ty: TypeRef) -> NodeId {
        self.push_leaf(NodeKind::Literal(value), ty, 0)
    }

    pub fn int_literal(&mut self, value: i32) -> NodeId {
        self.literal(LiteralValue::Int(value), TypeRef::Int)
    }

    pub fn local_variable(&mut self, var: VariableInfo) -> NodeId {
        let ty = var.ty().clone();
        self.push_leaf(NodeKind::LocalVariable(var), ty, 0)
    }

    pub fn variable_declaration(&mut self, level: usize, var: VariableInfo) -> NodeId {
        let ty = var.ty().clone();
        self.push_leaf(NodeKind::VariableDeclaration(var), ty, level)
    }

    pub fn argument_declaration(&mut self, var: VariableInfo) -> NodeId {
        let ty = var.ty().clone();
        self.push_leaf(NodeKind::ArgumentDeclaration(var), ty, 0)
    }

    pub fn binary(&mut self, op: BinaryOp, left: NodeId, right: NodeId, ty: TypeRef) -> Result<NodeId> {
        self.expect_expression("BinaryOperator", "left", left)?;
        self.expect_expression("BinaryOperator", "right", right)?;
        self.push(NodeKind::BinaryOperator(op), ty, 0, vec![left, right])
    }

    pub fn unary(&mut self, op: UnaryOp, operand: NodeId, ty: TypeRef) -> Result<NodeId> {
        self.expect_expression("UnaryOperator", "operand", operand)?;
        self.push(NodeKind::UnaryOperator(op), ty, 0, vec![operand])
    }

    pub fn statement(&mut self, level: usize, expr: NodeId) -> Result<NodeId> {
        self.expect_expression("Statement", "expression", expr)?;
        self.push(NodeKind::Statement, TypeRef::Void, level, vec![expr])
    }

    pub fn block(&mut self, level: usize, children: Vec<NodeId>) -> Result<NodeId> {
        for child in &children {
            if self.node(*child)?.kind.is_expression() {
                return Err(self.slot_kind("Block", "statement", *child));
            }
        }
        self.push(NodeKind::Block, TypeRef::Void, level, children)
    }

    pub fn ret(&mut self, level: usize, value: NodeId) -> Result<NodeId> {
        self.expect_expression("Return", "value", value)?;
        let ty = self[value].result_type.clone();
        self.push(NodeKind::Return, ty, level, vec![value])
    }

    pub(crate) fn push_leaf(&mut self, kind: NodeKind, result_type: TypeRef, level: usize) -> NodeId {
        let id = NodeId::from_usize(self.nodes.len());
        self.nodes.push(Node {
            kind,
            result_type,
            level,
            owner: self.owner.clone(),
            parent: None,
            children: Vec::new(),
            descriptor: None,
            removed: false,
        });
        id
    }

    pub(crate) fn push(
        &mut self,
        kind: NodeKind,
        result_type: TypeRef,
        level: usize,
        children: Vec<NodeId>,
    ) -> Result<NodeId> {
        self.check_adoptable(&children)?;
        let name = kind.name();
        let id = self.push_leaf(kind, result_type, level);
        for child in &children {
            self.nodes[child.as_usize()].parent = Some(id);
        }
        self.nodes[id.as_usize()].children = children;
        trace!(node = %id, kind = name, level, "created node");
        Ok(id)
    }

    /// Every id must exist, be free, and appear once
    pub(crate) fn check_adoptable(&self, ids: &[NodeId]) -> Result<()> {
        let mut seen = HashSet::new();
        for id in ids {
            let node = self.node(*id)?;
            if let Some(parent) = node.parent {
                return Err(Error::AlreadyOwned {
                    child: *id,
                    owner: format!("node {}", parent),
                });
            }
            if let Some(descriptor) = node.descriptor {
                return Err(Error::AlreadyOwned {
                    child: *id,
                    owner: format!("loop descriptor {}", descriptor),
                });
            }
            if node.removed {
                return Err(Error::construction(format!("node {} was removed", id)));
            }
            if !seen.insert(*id) {
                return Err(Error::AlreadyOwned {
                    child: *id,
                    owner: "the same parent twice".to_string(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn expect_expression(&self, kind: &'static str, slot: &'static str, id: NodeId) -> Result<()> {
        if self.node(id)?.kind.is_expression() {
            Ok(())
        } else {
            Err(self.slot_kind(kind, slot, id))
        }
    }

    pub(crate) fn slot_kind(&self, kind: &'static str, slot: &'static str, id: NodeId) -> Error {
        Error::SlotKind {
            kind,
            slot,
            found: self[id].kind.name(),
        }
    }
}

impl Index<NodeId> for Program {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.as_usize()]
    }
}
