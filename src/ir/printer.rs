use super::nodes::*;
use super::visitor::{IrVisitor, NodeRef};
use super::{NodeId, Program};

/// Renders a subtree as Java-like source.
///
/// Statements come out fully indented by their level, without a trailing
/// newline; expressions come out inline.
#[derive(Debug, Clone)]
pub struct Printer {
    indent_width: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(indent_width: usize) -> Self {
        Self { indent_width }
    }

    pub fn print(&mut self, program: &Program, root: NodeId) -> String {
        program.accept(root, self)
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.indent_width)
    }

    fn render(&mut self, node: NodeRef<'_>, id: NodeId) -> String {
        node.at(id).accept(self)
    }

    /// Text of a statement for use inside a `for (...)` clause
    fn inline(&mut self, node: NodeRef<'_>, id: NodeId) -> String {
        self.render(node, id).trim().trim_end_matches(';').to_string()
    }

    fn lines(&mut self, node: NodeRef<'_>, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .map(|id| self.render(node, *id))
            .filter(|text| !text.trim().is_empty())
            .collect()
    }

    fn print_loop(&mut self, node: NodeRef<'_>) -> String {
        let kind = match node.kind() {
            NodeKind::Loop { kind, .. } => *kind,
            _ => return String::new(),
        };
        let parts = match node.program().descriptor_of(node.id()) {
            Some(parts) => *parts,
            None => return String::new(),
        };
        let slots = node.node().children().to_vec();
        let level = node.level();
        let outer = self.indent(level);
        let inner = self.indent(level + 1);
        let condition = self.render(node, parts.condition);
        let manipulator = format!("{}{};", inner, self.render(node, parts.manipulator));

        let mut out = self.lines(node, &[parts.initialization, slots[0]]);
        match kind {
            LoopKind::For => {
                let statement1 = self.inline(node, slots[ForPart::Statement1 as usize]);
                let statement2 = self.inline(node, slots[ForPart::Statement2 as usize]);
                out.push(format!("{}for ({}; {}; {}) {{", outer, statement1, condition, statement2));
                out.extend(self.lines(node, &slots[ForPart::Body1 as usize..=ForPart::Body1 as usize]));
                out.push(manipulator);
                out.extend(self.lines(node, &slots[ForPart::Body2 as usize..]));
                out.push(format!("{}}}", outer));
            }
            LoopKind::While => {
                out.push(format!("{}while ({}) {{", outer, condition));
                out.extend(self.lines(node, &slots[WhilePart::Body1 as usize..=WhilePart::Body1 as usize]));
                out.push(manipulator);
                out.extend(self.lines(node, &slots[WhilePart::Body2 as usize..]));
                out.push(format!("{}}}", outer));
            }
            LoopKind::DoWhile => {
                out.push(format!("{}do {{", outer));
                out.extend(self.lines(node, &slots[DoWhilePart::Body1 as usize..=DoWhilePart::Body1 as usize]));
                out.push(manipulator);
                out.extend(self.lines(node, &slots[DoWhilePart::Body2 as usize..]));
                out.push(format!("{}}} while ({});", outer, condition));
            }
        }
        out.join("\n")
    }
}

impl IrVisitor for Printer {
    type Output = String;

    fn visit_node(&mut self, node: NodeRef<'_>) -> String {
        let children: Vec<NodeId> = node.node().children().to_vec();
        self.lines(node, &children).join("\n")
    }

    fn visit_nothing(&mut self, _node: NodeRef<'_>) -> String {
        String::new()
    }

    fn visit_literal(&mut self, node: NodeRef<'_>) -> String {
        match node.kind() {
            NodeKind::Literal(value) => value.to_string(),
            _ => String::new(),
        }
    }

    fn visit_local_variable(&mut self, node: NodeRef<'_>) -> String {
        match node.kind() {
            NodeKind::LocalVariable(var) => var.name().to_string(),
            _ => String::new(),
        }
    }

    fn visit_variable_declaration(&mut self, node: NodeRef<'_>) -> String {
        match node.kind() {
            NodeKind::VariableDeclaration(var) => format!(
                "{}{}{} {};",
                self.indent(node.level()),
                var.symbol.flags.keywords(),
                var.ty(),
                var.name()
            ),
            _ => String::new(),
        }
    }

    fn visit_argument_declaration(&mut self, node: NodeRef<'_>) -> String {
        match node.kind() {
            NodeKind::ArgumentDeclaration(var) => format!("{} {}", var.ty(), var.name()),
            _ => String::new(),
        }
    }

    fn visit_binary(&mut self, node: NodeRef<'_>) -> String {
        let op = match node.kind() {
            NodeKind::BinaryOperator(op) => *op,
            _ => return String::new(),
        };
        let left = node.child(0).map(|c| c.accept(self)).unwrap_or_default();
        let right = node.child(1).map(|c| c.accept(self)).unwrap_or_default();
        match op {
            BinaryOp::Assign | BinaryOp::AddAssign | BinaryOp::SubAssign => format!("{} {} {}", left, op, right),
            _ => format!("({} {} {})", left, op, right),
        }
    }

    fn visit_unary(&mut self, node: NodeRef<'_>) -> String {
        let op = match node.kind() {
            NodeKind::UnaryOperator(op) => *op,
            _ => return String::new(),
        };
        let operand = node.child(0).map(|c| c.accept(self)).unwrap_or_default();
        if op.is_postfix() {
            format!("{}{}", operand, op)
        } else {
            format!("{}{}", op, operand)
        }
    }

    fn visit_statement(&mut self, node: NodeRef<'_>) -> String {
        let expr = node.child(0).map(|c| c.accept(self)).unwrap_or_default();
        format!("{}{};", self.indent(node.level()), expr)
    }

    fn visit_return(&mut self, node: NodeRef<'_>) -> String {
        let value = node.child(0).map(|c| c.accept(self)).unwrap_or_default();
        format!("{}return {};", self.indent(node.level()), value)
    }

    fn visit_function(&mut self, node: NodeRef<'_>) -> String {
        let info = match node.kind() {
            NodeKind::Function(info) => info,
            _ => return String::new(),
        };
        let args: Vec<String> = node.children().map(|c| c.accept(self)).collect();
        let owner = info.owner().map(|o| o.name()).unwrap_or_default();
        if info.is_constructor() {
            format!("new {}({})", owner, args.join(", "))
        } else if info.is_static() {
            format!("{}.{}({})", owner, info.name(), args.join(", "))
        } else {
            match args.split_first() {
                Some((receiver, rest)) => format!("{}.{}({})", receiver, info.name(), rest.join(", ")),
                None => format!("this.{}()", info.name()),
            }
        }
    }

    fn visit_function_definition(&mut self, node: NodeRef<'_>) -> String {
        let info = match node.kind() {
            NodeKind::FunctionDefinition { info, .. } => info,
            _ => return String::new(),
        };
        let program = node.program();
        let params: Vec<String> = program
            .definition_params(node.id())
            .iter()
            .map(|p| self.render(node, *p))
            .collect();
        let outer = self.indent(node.level());
        let head = if info.is_constructor() {
            format!("{}{}{}", outer, info.flags().keywords(), info.name())
        } else {
            format!("{}{}{} {}", outer, info.flags().keywords(), info.return_type(), info.name())
        };

        let mut out = vec![format!("{}({}) {{", head, params.join(", "))];
        let mut tail: Vec<NodeId> = program.definition_body(node.id()).into_iter().collect();
        tail.extend(program.definition_return(node.id()));
        out.extend(self.lines(node, &tail));
        out.push(format!("{}}}", outer));
        out.join("\n")
    }

    fn visit_for(&mut self, node: NodeRef<'_>) -> String {
        self.print_loop(node)
    }

    fn visit_while(&mut self, node: NodeRef<'_>) -> String {
        self.print_loop(node)
    }

    fn visit_do_while(&mut self, node: NodeRef<'_>) -> String {
        self.print_loop(node)
    }
}
