use super::nodes::*;
use super::{NodeId, Program};
use crate::symbols::TypeRef;

/// Borrowed view of one node together with the program it lives in
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    program: &'a Program,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn new(program: &'a Program, id: NodeId) -> Self {
        Self { program, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn program(&self) -> &'a Program {
        self.program
    }

    pub fn node(&self) -> &'a Node {
        &self.program[self.id]
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.node().kind
    }

    pub fn level(&self) -> usize {
        self.node().level
    }

    pub fn result_type(&self) -> &'a TypeRef {
        &self.node().result_type
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        self.node()
            .children
            .get(index)
            .map(|id| NodeRef::new(self.program, *id))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let program = self.program;
        self.node()
            .children
            .iter()
            .map(move |id| NodeRef::new(program, *id))
    }

    /// View of another node of the same program
    pub fn at(&self, id: NodeId) -> NodeRef<'a> {
        NodeRef::new(self.program, id)
    }

    /// Dispatch to the visit method matching this node's kind
    pub fn accept<V: IrVisitor + ?Sized>(self, visitor: &mut V) -> V::Output {
        match self.kind() {
            NodeKind::Nothing => visitor.visit_nothing(self),
            NodeKind::Literal(_) => visitor.visit_literal(self),
            NodeKind::LocalVariable(_) => visitor.visit_local_variable(self),
            NodeKind::VariableDeclaration(_) => visitor.visit_variable_declaration(self),
            NodeKind::ArgumentDeclaration(_) => visitor.visit_argument_declaration(self),
            NodeKind::BinaryOperator(_) => visitor.visit_binary(self),
            NodeKind::UnaryOperator(_) => visitor.visit_unary(self),
            NodeKind::Statement => visitor.visit_statement(self),
            NodeKind::Block => visitor.visit_block(self),
            NodeKind::Return => visitor.visit_return(self),
            NodeKind::Function(_) => visitor.visit_function(self),
            NodeKind::FunctionDefinition { .. } => visitor.visit_function_definition(self),
            NodeKind::Loop { kind: LoopKind::For, .. } => visitor.visit_for(self),
            NodeKind::Loop { kind: LoopKind::While, .. } => visitor.visit_while(self),
            NodeKind::Loop { kind: LoopKind::DoWhile, .. } => visitor.visit_do_while(self),
        }
    }
}

/// Traversal over program nodes.
///
/// Only [`IrVisitor::visit_node`] is required; every kind-specific method
/// falls back to it.
pub trait IrVisitor {
    type Output;

    fn visit_node(&mut self, node: NodeRef<'_>) -> Self::Output;

    fn visit_nothing(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_literal(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_local_variable(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_variable_declaration(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_argument_declaration(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_binary(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_unary(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_statement(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_block(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_return(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_function(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_function_definition(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_for(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_while(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }

    fn visit_do_while(&mut self, node: NodeRef<'_>) -> Self::Output {
        self.visit_node(node)
    }
}

impl Program {
    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(self, id)
    }

    pub fn accept<V: IrVisitor + ?Sized>(&self, id: NodeId, visitor: &mut V) -> V::Output {
        self.node_ref(id).accept(visitor)
    }
}
