mod common;

use common::*;
use jtir::ir::{BinaryOp, IrVisitor, NodeRef, Printer, Program, UnaryOp};
use jtir::symbols::{FunctionInfo, SymbolFlags, TypeHierarchy, TypeRef, VariableInfo};
use jtir::ComplexityReport;

/// Counts nodes by walking every child
#[derive(Default)]
struct Counter {
    nodes: usize,
    loops: usize,
}

impl IrVisitor for Counter {
    type Output = ();

    fn visit_node(&mut self, node: NodeRef<'_>) {
        self.nodes += 1;
        for child in node.children() {
            child.accept(self);
        }
    }

    fn visit_while(&mut self, node: NodeRef<'_>) {
        self.loops += 1;
        self.visit_node(node);
    }
}

#[test]
fn custom_visitor_overrides_one_kind() {
    let mut p = Program::new();
    let (descriptor, _) = descriptor(&mut p);
    let header = p.nothing();
    let parts = empty_while_parts(&mut p, header);
    let looped = p.while_loop(1, descriptor, 2, parts).unwrap();
    let statement = assign(&mut p, 1, "x", 1);
    let block = p.block(0, vec![looped, statement]).unwrap();

    let mut counter = Counter::default();
    p.accept(block, &mut counter);
    // block, loop + 4 slots, statement + binary + 2 operands
    assert_eq!(counter.nodes, 10);
    assert_eq!(counter.loops, 1);
}

#[test]
fn depth_of_uniform_nesting() {
    let mut p = Program::new();
    let mut current = assign(&mut p, 5, "x", 1);
    for level in (0..5).rev() {
        current = p.block(level, vec![current]).unwrap();
    }
    assert_eq!(p.count_depth(current), 5);
    let leaf = p.int_literal(1);
    assert_eq!(p.count_depth(leaf), 0);
}

#[test]
fn printer_renders_statements_and_calls() {
    let mut p = Program::new();
    let owner = TypeRef::class("Acc");
    let add = FunctionInfo::method(
        "add",
        owner.clone(),
        TypeRef::Int,
        1,
        SymbolFlags::PUBLIC,
        vec![VariableInfo::local("v", TypeRef::Int)],
    );
    let make = FunctionInfo::static_method("make", owner.clone(), owner.clone(), 1, SymbolFlags::PUBLIC, vec![]);

    let decl = p.variable_declaration(1, VariableInfo::local("a", owner.clone()));
    let target = p.local_variable(VariableInfo::local("a", owner.clone()));
    let made = p.call(make, vec![]).unwrap();
    let assign_a = p.binary(BinaryOp::Assign, target, made, owner.clone()).unwrap();
    let first = p.statement(1, assign_a).unwrap();

    let receiver = p.local_variable(VariableInfo::local("a", owner));
    let x = var(&mut p, "x");
    let neg = p.unary(UnaryOp::Neg, x, TypeRef::Int).unwrap();
    let one = p.int_literal(1);
    let sum = p.binary(BinaryOp::Add, neg, one, TypeRef::Int).unwrap();
    let call = p.call(add, vec![receiver, sum]).unwrap();
    let second = p.statement(1, call).unwrap();

    let block = p.block(1, vec![decl, first, second]).unwrap();
    let text = Printer::with_indent(2).print(&p, block);
    assert_eq!(text, "  Acc a;\n  a = Acc.make();\n  a.add((-x + 1));");
}

#[test]
fn printer_renders_loops() {
    let mut p = Program::new();
    let init = assign(&mut p, 1, "i", 0);
    let i = var(&mut p, "i");
    let ten = p.int_literal(10);
    let condition = p.binary(BinaryOp::Lt, i, ten, TypeRef::Boolean).unwrap();
    let i = var(&mut p, "i");
    let step = p.unary(UnaryOp::PostIncrement, i, TypeRef::Int).unwrap();
    let descriptor = p.add_loop(init, condition, step).unwrap();

    let header = p.variable_declaration(1, VariableInfo::local("i", TypeRef::Int));
    let mut parts = empty_while_parts(&mut p, header);
    parts.body1 = assignments(&mut p, 2, 1);
    let looped = p.while_loop(1, descriptor, 10, parts).unwrap();
    let block = p.block(1, vec![looped]).unwrap();

    let text = Printer::new().print(&p, block);
    let expected = [
        "    i = 0;",
        "    int i;",
        "    while ((i < 10)) {",
        "        v0 = 0;",
        "        i++;",
        "    }",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[test]
fn printer_renders_definitions() {
    let mut p = Program::new();
    let info = FunctionInfo::method(
        "twice",
        TypeRef::class("A"),
        TypeRef::Int,
        1,
        SymbolFlags::PUBLIC | SymbolFlags::FINAL,
        vec![VariableInfo::local("n", TypeRef::Int)],
    );
    let param = p.argument_declaration(VariableInfo::local("n", TypeRef::Int));
    let body = p.block(2, vec![]).unwrap();
    let n = var(&mut p, "n");
    let two = p.int_literal(2);
    let product = p.binary(BinaryOp::Mul, n, two, TypeRef::Int).unwrap();
    let ret = p.ret(2, product).unwrap();
    let def = p.function_definition(1, info, vec![param], body, Some(ret)).unwrap();

    let text = Printer::new().print(&p, def);
    assert_eq!(
        text,
        "    public final int twice(int n) {\n        return (n * 2);\n    }"
    );
}

#[test]
fn report_lists_each_definition() {
    let h = TypeHierarchy::new();
    let mut p = Program::new();
    let info = FunctionInfo::static_method("work", TypeRef::class("A"), TypeRef::Void, 1, SymbolFlags::PUBLIC, vec![]);
    let body = assignments(&mut p, 2, 3);
    let def = p.function_definition(1, info, vec![], body, None).unwrap();
    let root = p.block(0, vec![def]).unwrap();

    let entries = ComplexityReport::collect(&p, root, &h);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "A::void work()");
    assert_eq!(entries[0].complexity, 6);
}
