//! Loop nodes and their self-removal rewrite

use tracing::debug;

use super::nodes::*;
use super::{LoopId, NodeId, Program};
use crate::error::{Error, Result};
use crate::symbols::{TypeHierarchy, TypeRef};

/// Structural blocks of a `For` node, in [`ForPart`] order
#[derive(Debug, Clone, Copy)]
pub struct ForParts {
    pub header: NodeId,
    pub statement1: NodeId,
    pub statement2: NodeId,
    pub body1: NodeId,
    pub body2: NodeId,
    pub body3: NodeId,
}

/// Structural blocks of a `While` node, in [`WhilePart`] order
#[derive(Debug, Clone, Copy)]
pub struct WhileParts {
    pub header: NodeId,
    pub body1: NodeId,
    pub body2: NodeId,
    pub body3: NodeId,
}

/// Structural blocks of a `DoWhile` node, in [`DoWhilePart`] order
#[derive(Debug, Clone, Copy)]
pub struct DoWhileParts {
    pub header: NodeId,
    pub body1: NodeId,
    pub body2: NodeId,
}

impl Program {
    /// Register the initialization / condition / step of one logical loop.
    ///
    /// The three nodes stay free of any parent; loop nodes refer to them
    /// through the returned id.
    pub fn add_loop(&mut self, initialization: NodeId, condition: NodeId, manipulator: NodeId) -> Result<LoopId> {
        self.check_adoptable(&[initialization, condition, manipulator])?;
        if self[initialization].kind.is_expression() {
            return Err(self.slot_kind("Loop", "initialization", initialization));
        }
        self.expect_expression("Loop", "condition", condition)?;
        self.expect_expression("Loop", "manipulator", manipulator)?;

        let id = LoopId::from_usize(self.loops.len());
        self.loops.push(LoopDescriptor {
            initialization,
            condition,
            manipulator,
        });
        for node in [initialization, condition, manipulator] {
            self.nodes[node.as_usize()].descriptor = Some(id);
        }
        Ok(id)
    }

    pub fn for_loop(&mut self, level: usize, descriptor: LoopId, iteration_limit: u64, parts: ForParts) -> Result<NodeId> {
        let slots = vec![
            parts.header,
            parts.statement1,
            parts.statement2,
            parts.body1,
            parts.body2,
            parts.body3,
        ];
        self.loop_node(LoopKind::For, level, descriptor, iteration_limit, slots)
    }

    pub fn while_loop(
        &mut self,
        level: usize,
        descriptor: LoopId,
        iteration_limit: u64,
        parts: WhileParts,
    ) -> Result<NodeId> {
        let slots = vec![parts.header, parts.body1, parts.body2, parts.body3];
        self.loop_node(LoopKind::While, level, descriptor, iteration_limit, slots)
    }

    pub fn do_while_loop(
        &mut self,
        level: usize,
        descriptor: LoopId,
        iteration_limit: u64,
        parts: DoWhileParts,
    ) -> Result<NodeId> {
        let slots = vec![parts.header, parts.body1, parts.body2];
        self.loop_node(LoopKind::DoWhile, level, descriptor, iteration_limit, slots)
    }

    /// Loop node of any shape from its raw slot list
    pub fn loop_node(
        &mut self,
        kind: LoopKind,
        level: usize,
        descriptor: LoopId,
        iteration_limit: u64,
        slots: Vec<NodeId>,
    ) -> Result<NodeId> {
        self.loop_descriptor(descriptor)?;
        if slots.len() != kind.slot_count() {
            return Err(Error::SlotCount {
                kind: kind.name(),
                expected: kind.slot_count(),
                found: slots.len(),
            });
        }
        for (slot, name) in slots.iter().zip(kind.slot_names()) {
            if self.node(*slot)?.kind.is_expression() {
                return Err(self.slot_kind(kind.name(), name, *slot));
            }
        }
        let header = slots[0];
        self.header_content(header)
            .ok_or_else(|| Error::SlotKind {
                kind: kind.name(),
                slot: "header",
                found: self[header].kind.name(),
            })?;

        self.push(
            NodeKind::Loop {
                kind,
                descriptor,
                iteration_limit,
            },
            TypeRef::Void,
            level,
            slots,
        )
    }

    /// Child of a loop node by slot index
    pub fn loop_slot(&self, id: NodeId, slot: usize) -> Option<NodeId> {
        match self[id].kind {
            NodeKind::Loop { .. } => self[id].children.get(slot).copied(),
            _ => None,
        }
    }

    pub fn descriptor_of(&self, id: NodeId) -> Option<&LoopDescriptor> {
        match self[id].kind {
            NodeKind::Loop { descriptor, .. } => self.loops.get(descriptor.as_usize()),
            _ => None,
        }
    }

    /// Replace the loop node `id` in its parent by its initialization followed
    /// by its header content: the header's children when it is a block, the
    /// header itself when it is a single statement, nothing for `Nothing`.
    ///
    /// When the parent is itself a loop, the spliced nodes are wrapped in a new
    /// block that takes over the loop's slot, so slot counts never change.
    ///
    /// Returns `true` once the loop is gone. The removed node keeps its slots,
    /// minus anything spliced out of them, but is detached for good.
    pub fn remove_self(&mut self, id: NodeId) -> Result<bool> {
        let node = self.node(id)?;
        let (kind, descriptor) = match node.kind {
            NodeKind::Loop { kind, descriptor, .. } => (kind, descriptor),
            ref other => {
                return Err(Error::NotRemovable {
                    node: id,
                    kind: other.name(),
                })
            }
        };
        let parent = node.parent.ok_or(Error::Detached(id))?;
        let header = node.children[0];
        let initialization = self.loops[descriptor.as_usize()].initialization;
        if let Some(owner) = self[initialization].parent {
            return Err(Error::AlreadyOwned {
                child: initialization,
                owner: format!("node {}", owner),
            });
        }
        let content = self.header_content(header).ok_or(Error::UnexpectedHeader {
            node: id,
            found: self[header].kind.name(),
        })?;
        let index = self[parent]
            .children
            .iter()
            .position(|child| *child == id)
            .ok_or_else(|| Error::construction(format!("node {} is missing from its parent {}", id, parent)))?;

        if matches!(self[header].kind, NodeKind::Block) {
            self.nodes[header.as_usize()].children.clear();
        } else if !content.is_empty() {
            // the header itself moves out; leave a placeholder in its slot
            let placeholder = self.push_leaf(NodeKind::Nothing, TypeRef::Void, 0);
            self.nodes[placeholder.as_usize()].parent = Some(id);
            self.nodes[id.as_usize()].children[0] = placeholder;
        }
        let mut spliced = Vec::with_capacity(content.len() + 1);
        spliced.push(initialization);
        spliced.extend(content);
        let count = spliced.len();

        if self[parent].kind.is_loop() {
            // loop slots are fixed; the spliced code takes the slot as one block
            let (level, owner) = (self[id].level, self[id].owner.clone());
            let block = self.push_leaf(NodeKind::Block, TypeRef::Void, level);
            self.nodes[block.as_usize()].owner = owner;
            for node in &spliced {
                self.nodes[node.as_usize()].parent = Some(block);
            }
            self.nodes[block.as_usize()].children = spliced;
            self.nodes[block.as_usize()].parent = Some(parent);
            self.nodes[parent.as_usize()].children[index] = block;
        } else {
            for node in &spliced {
                self.nodes[node.as_usize()].parent = Some(parent);
            }
            self.nodes[parent.as_usize()].children.splice(index..=index, spliced);
        }

        let removed = &mut self.nodes[id.as_usize()];
        removed.parent = None;
        removed.removed = true;
        debug!(node = %id, kind = kind.name(), parent = %parent, index, spliced = count, "removed loop");
        Ok(true)
    }

    /// Remove every loop under `root` whose body blocks cost nothing per
    /// iteration. Returns how many loops were removed.
    pub fn flatten_idle_loops(&mut self, root: NodeId, hierarchy: &TypeHierarchy) -> Result<usize> {
        self.node(root)?;
        let mut removed = 0;
        self.flatten_in(root, hierarchy, &mut removed)?;
        debug!(root = %root, removed, "flattened idle loops");
        Ok(removed)
    }

    fn flatten_in(&mut self, id: NodeId, hierarchy: &TypeHierarchy, removed: &mut usize) -> Result<()> {
        let mut i = 0;
        while i < self[id].children.len() {
            let child = self[id].children[i];
            if self[child].kind.is_loop() && self.iteration_cost(child, hierarchy) == 0 {
                if let Some(owner) = self.spliced_initialization_owner(child) {
                    debug!(node = %child, owner = %owner, "skipped idle loop with an already spliced initialization");
                    self.flatten_in(child, hierarchy, removed)?;
                    i += 1;
                    continue;
                }
                self.remove_self(child)?;
                *removed += 1;
                // the spliced nodes now start at `i`
                continue;
            }
            self.flatten_in(child, hierarchy, removed)?;
            i += 1;
        }
        Ok(())
    }

    /// Parent of the loop's initialization when a sibling sharing its
    /// descriptor was removed first
    fn spliced_initialization_owner(&self, id: NodeId) -> Option<NodeId> {
        let descriptor = self.descriptor_of(id)?;
        self[descriptor.initialization].parent
    }

    /// Nodes a header contributes when its loop is removed; `None` for shapes
    /// that cannot stand in a statement list
    fn header_content(&self, header: NodeId) -> Option<Vec<NodeId>> {
        match self[header].kind {
            NodeKind::Block => Some(self[header].children.clone()),
            NodeKind::Nothing => Some(Vec::new()),
            NodeKind::Statement | NodeKind::VariableDeclaration(_) => Some(vec![header]),
            _ => None,
        }
    }
}
