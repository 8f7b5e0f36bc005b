use std::fmt;

use super::{LoopId, NodeId};
use crate::symbols::{FunctionInfo, TypeRef, VariableInfo};

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Boolean(bool),
    Char(char),
    Int(i32),
    Long(i64),
    Double(f64),
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Char(c) => write!(f, "'{}'", c.escape_default()),
            LiteralValue::Int(i) => write!(f, "{}", i),
            LiteralValue::Long(l) => write!(f, "{}L", l),
            LiteralValue::Double(d) => write!(f, "{:?}", d),
            LiteralValue::Str(s) => write!(f, "\"{}\"", s.escape_default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Or,
    Assign,
    AddAssign,
    SubAssign,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::SubAssign => "-=",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl UnaryOp {
    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::PostIncrement | UnaryOp::PostDecrement)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::PreIncrement | UnaryOp::PostIncrement => "++",
            UnaryOp::PreDecrement | UnaryOp::PostDecrement => "--",
        };
        f.write_str(s)
    }
}

/// Shape of a loop node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    For,
    While,
    DoWhile,
}

impl LoopKind {
    pub fn name(self) -> &'static str {
        match self {
            LoopKind::For => "For",
            LoopKind::While => "While",
            LoopKind::DoWhile => "DoWhile",
        }
    }

    /// Names of the child slots, in slot order
    pub fn slot_names(self) -> &'static [&'static str] {
        match self {
            LoopKind::For => &ForPart::NAMES,
            LoopKind::While => &WhilePart::NAMES,
            LoopKind::DoWhile => &DoWhilePart::NAMES,
        }
    }

    pub fn slot_count(self) -> usize {
        self.slot_names().len()
    }

    /// Slots that execute once per iteration
    pub fn iteration_slots(self) -> &'static [usize] {
        match self {
            LoopKind::For => &[
                ForPart::Statement2 as usize,
                ForPart::Body1 as usize,
                ForPart::Body2 as usize,
                ForPart::Body3 as usize,
            ],
            LoopKind::While => &[
                WhilePart::Body1 as usize,
                WhilePart::Body2 as usize,
                WhilePart::Body3 as usize,
            ],
            LoopKind::DoWhile => &[DoWhilePart::Body1 as usize, DoWhilePart::Body2 as usize],
        }
    }

    /// Slots that execute once, before the first iteration
    pub fn prologue_slots(self) -> &'static [usize] {
        match self {
            LoopKind::For => &[ForPart::Header as usize, ForPart::Statement1 as usize],
            LoopKind::While => &[WhilePart::Header as usize],
            LoopKind::DoWhile => &[DoWhilePart::Header as usize],
        }
    }
}

/// Child slots of a `For` node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForPart {
    Header = 0,
    Statement1,
    Statement2,
    Body1,
    Body2,
    Body3,
}

impl ForPart {
    pub const NAMES: [&'static str; 6] = ["header", "statement1", "statement2", "body1", "body2", "body3"];
}

/// Child slots of a `While` node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhilePart {
    Header = 0,
    Body1,
    Body2,
    Body3,
}

impl WhilePart {
    pub const NAMES: [&'static str; 4] = ["header", "body1", "body2", "body3"];
}

/// Child slots of a `DoWhile` node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoWhilePart {
    Header = 0,
    Body1,
    Body2,
}

impl DoWhilePart {
    pub const NAMES: [&'static str; 3] = ["header", "body1", "body2"];
}

/// The initialization / condition / step triple shared by the loop nodes
/// generated for one logical loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopDescriptor {
    pub initialization: NodeId,
    pub condition: NodeId,
    pub manipulator: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Empty placeholder
    Nothing,
    Literal(LiteralValue),
    LocalVariable(VariableInfo),
    VariableDeclaration(VariableInfo),
    ArgumentDeclaration(VariableInfo),
    BinaryOperator(BinaryOp),
    UnaryOperator(UnaryOp),
    /// Expression statement; one child
    Statement,
    Block,
    /// One child: the returned value
    Return,
    /// Call site; children are the arguments
    Function(FunctionInfo),
    /// Children: body, optional return, then parameter declarations
    FunctionDefinition { info: FunctionInfo, has_return: bool },
    Loop {
        kind: LoopKind,
        descriptor: LoopId,
        iteration_limit: u64,
    },
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Nothing => "Nothing",
            NodeKind::Literal(_) => "Literal",
            NodeKind::LocalVariable(_) => "LocalVariable",
            NodeKind::VariableDeclaration(_) => "VariableDeclaration",
            NodeKind::ArgumentDeclaration(_) => "ArgumentDeclaration",
            NodeKind::BinaryOperator(_) => "BinaryOperator",
            NodeKind::UnaryOperator(_) => "UnaryOperator",
            NodeKind::Statement => "Statement",
            NodeKind::Block => "Block",
            NodeKind::Return => "Return",
            NodeKind::Function(_) => "Function",
            NodeKind::FunctionDefinition { .. } => "FunctionDefinition",
            NodeKind::Loop { kind, .. } => kind.name(),
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::Literal(_)
                | NodeKind::LocalVariable(_)
                | NodeKind::BinaryOperator(_)
                | NodeKind::UnaryOperator(_)
                | NodeKind::Function(_)
        )
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, NodeKind::Loop { .. })
    }
}

/// One arena slot
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) result_type: TypeRef,
    pub(crate) level: usize,
    pub(crate) owner: Option<TypeRef>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Set while the node is held by a loop descriptor
    pub(crate) descriptor: Option<LoopId>,
    pub(crate) removed: bool,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn result_type(&self) -> &TypeRef {
        &self.result_type
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Enclosing class context
    pub fn owner(&self) -> Option<&TypeRef> {
        self.owner.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }
}
