use super::nodes::*;
use super::{NodeId, Program};
use crate::error::{Error, Result};
use crate::symbols::{FunctionInfo, TypeRef};

impl Program {
    /// Call site of `info`.
    ///
    /// Constructor calls take the declared parameters; other instance calls
    /// take the receiver expression first.
    pub fn call(&mut self, info: FunctionInfo, args: Vec<NodeId>) -> Result<NodeId> {
        let expected = if info.is_constructor() {
            info.params()
                .ok_or_else(|| Error::construction(format!("constructor '{}' has no receiver slot", info.name())))?
                .len()
        } else {
            info.args.len()
        };
        if args.len() != expected {
            return Err(Error::CallArity {
                name: info.name().to_string(),
                expected,
                found: args.len(),
            });
        }
        for arg in &args {
            self.expect_expression("Function", "argument", *arg)?;
        }
        let ty = if info.is_constructor() {
            info.owner().cloned().unwrap_or(TypeRef::Void)
        } else {
            info.return_type().clone()
        };
        self.push(NodeKind::Function(info), ty, 0, args)
    }

    /// Definition of `info`: a block body, an optional `Return` and one
    /// `ArgumentDeclaration` per declared parameter
    pub fn function_definition(
        &mut self,
        level: usize,
        info: FunctionInfo,
        params: Vec<NodeId>,
        body: NodeId,
        ret: Option<NodeId>,
    ) -> Result<NodeId> {
        const KIND: &str = "FunctionDefinition";
        let declared = info
            .params()
            .ok_or_else(|| Error::construction(format!("function '{}' has no receiver slot", info.name())))?
            .len();
        if params.len() != declared {
            return Err(Error::SlotCount {
                kind: KIND,
                expected: declared,
                found: params.len(),
            });
        }
        if !matches!(self.node(body)?.kind, NodeKind::Block) {
            return Err(self.slot_kind(KIND, "body", body));
        }
        if let Some(ret) = ret {
            if !matches!(self.node(ret)?.kind, NodeKind::Return) {
                return Err(self.slot_kind(KIND, "return", ret));
            }
        }
        for param in &params {
            if !matches!(self.node(*param)?.kind, NodeKind::ArgumentDeclaration(_)) {
                return Err(self.slot_kind(KIND, "parameter", *param));
            }
        }

        let mut children = Vec::with_capacity(params.len() + 2);
        children.push(body);
        children.extend(ret);
        children.extend(params);
        let ty = info.return_type().clone();
        let has_return = ret.is_some();
        self.push(NodeKind::FunctionDefinition { info, has_return }, ty, level, children)
    }

    pub fn definition_body(&self, id: NodeId) -> Option<NodeId> {
        match self[id].kind {
            NodeKind::FunctionDefinition { .. } => Some(self[id].children[0]),
            _ => None,
        }
    }

    pub fn definition_return(&self, id: NodeId) -> Option<NodeId> {
        match self[id].kind {
            NodeKind::FunctionDefinition { has_return: true, .. } => Some(self[id].children[1]),
            _ => None,
        }
    }

    pub fn definition_params(&self, id: NodeId) -> &[NodeId] {
        match self[id].kind {
            NodeKind::FunctionDefinition { has_return, .. } => {
                let start = if has_return { 2 } else { 1 };
                &self[id].children[start..]
            }
            _ => &[],
        }
    }
}
