mod common;

use common::*;
use jtir::ir::{BinaryOp, LoopKind, Program};
use jtir::symbols::{FunctionInfo, SymbolFlags, TypeRef, VariableInfo};
use jtir::Error;

#[test]
fn loop_node_checks_slot_count() {
    let mut p = Program::new();
    let (descriptor, _) = descriptor(&mut p);
    let slots: Vec<_> = (0..4).map(|_| p.nothing()).collect();
    assert_eq!(
        p.loop_node(LoopKind::For, 1, descriptor, 10, slots),
        Err(Error::SlotCount {
            kind: "For",
            expected: 6,
            found: 4
        })
    );

    let slots: Vec<_> = (0..4).map(|_| p.nothing()).collect();
    let id = p.loop_node(LoopKind::While, 1, descriptor, 10, slots).unwrap();
    assert_eq!(p.children(id).len(), 4);
}

#[test]
fn loop_slots_must_be_statements() {
    let mut p = Program::new();
    let (descriptor, _) = descriptor(&mut p);
    let header = p.nothing();
    let mut parts = empty_while_parts(&mut p, header);
    parts.body2 = var(&mut p, "x");
    assert_eq!(
        p.while_loop(1, descriptor, 10, parts),
        Err(Error::SlotKind {
            kind: "While",
            slot: "body2",
            found: "LocalVariable"
        })
    );
}

#[test]
fn loop_header_must_be_splicable() {
    let mut p = Program::new();
    let (inner_descriptor, _) = descriptor(&mut p);
    let inner_header = p.nothing();
    let inner_parts = empty_for_parts(&mut p, inner_header);
    let inner = p.for_loop(1, inner_descriptor, 1, inner_parts).unwrap();

    let (descriptor, _) = descriptor(&mut p);
    let parts = empty_while_parts(&mut p, inner);
    assert_eq!(
        p.while_loop(1, descriptor, 10, parts),
        Err(Error::SlotKind {
            kind: "While",
            slot: "header",
            found: "For"
        })
    );
}

#[test]
fn descriptor_parts_are_checked() {
    let mut p = Program::new();
    let cond = var(&mut p, "c");
    let step = var(&mut p, "s");
    let expr_init = var(&mut p, "i");
    assert!(matches!(
        p.add_loop(expr_init, cond, step),
        Err(Error::SlotKind {
            slot: "initialization",
            ..
        })
    ));

    let init = assign(&mut p, 1, "i", 0);
    let statement_cond = assign(&mut p, 1, "c", 1);
    assert!(matches!(
        p.add_loop(init, statement_cond, step),
        Err(Error::SlotKind { slot: "condition", .. })
    ));
}

#[test]
fn descriptor_parts_cannot_be_adopted() {
    let mut p = Program::new();
    let (_, init) = descriptor(&mut p);
    assert!(matches!(
        p.block(1, vec![init]),
        Err(Error::AlreadyOwned { child, .. }) if child == init
    ));
}

#[test]
fn child_is_owned_once() {
    let mut p = Program::new();
    let statement = assign(&mut p, 1, "x", 1);
    let first = p.block(1, vec![statement]).unwrap();
    assert_eq!(p.parent(statement), Some(first));
    assert!(matches!(
        p.block(1, vec![statement]),
        Err(Error::AlreadyOwned { child, .. }) if child == statement
    ));

    let other = assign(&mut p, 1, "y", 2);
    assert!(matches!(
        p.block(1, vec![other, other]),
        Err(Error::AlreadyOwned { .. })
    ));
    assert_eq!(p.parent(other), None);
}

#[test]
fn blocks_reject_bare_expressions() {
    let mut p = Program::new();
    let x = var(&mut p, "x");
    assert!(matches!(p.block(1, vec![x]), Err(Error::SlotKind { kind: "Block", .. })));
    let statement = p.statement(1, x).unwrap();
    assert!(matches!(p.statement(1, statement), Err(Error::SlotKind { kind: "Statement", .. })));
}

#[test]
fn call_arity_counts_receiver_for_methods_only() {
    let mut p = Program::new();
    let owner = TypeRef::class("A");
    let method = FunctionInfo::method("m", owner.clone(), TypeRef::Void, 1, SymbolFlags::PUBLIC, vec![VariableInfo::local("a", TypeRef::Int)]);
    let only_arg = var(&mut p, "a");
    assert_eq!(
        p.call(method.clone(), vec![only_arg]),
        Err(Error::CallArity {
            name: "m".into(),
            expected: 2,
            found: 1
        })
    );
    let receiver = p.local_variable(VariableInfo::local("obj", owner.clone()));
    assert!(p.call(method, vec![receiver, only_arg]).is_ok());

    let ctor = FunctionInfo::constructor(owner, 1, SymbolFlags::PUBLIC, vec![]);
    let stray = var(&mut p, "b");
    assert!(matches!(
        p.call(ctor.clone(), vec![stray]),
        Err(Error::CallArity { expected: 0, found: 1, .. })
    ));
    assert!(p.call(ctor, vec![]).is_ok());
}

#[test]
fn definition_parameters_match_declaration() {
    let mut p = Program::new();
    let info = FunctionInfo::method(
        "m",
        TypeRef::class("A"),
        TypeRef::Int,
        1,
        SymbolFlags::PUBLIC,
        vec![VariableInfo::local("a", TypeRef::Int)],
    );
    let body = p.block(2, vec![]).unwrap();
    assert_eq!(
        p.function_definition(1, info.clone(), vec![], body, None),
        Err(Error::SlotCount {
            kind: "FunctionDefinition",
            expected: 1,
            found: 0
        })
    );

    let param = p.argument_declaration(VariableInfo::local("a", TypeRef::Int));
    let value = var(&mut p, "a");
    let ret = p.ret(2, value).unwrap();
    let def = p.function_definition(1, info, vec![param], body, Some(ret)).unwrap();
    assert_eq!(p.definition_body(def), Some(body));
    assert_eq!(p.definition_return(def), Some(ret));
    assert_eq!(p.definition_params(def), &[param]);
}

#[test]
fn definition_body_must_be_a_block() {
    let mut p = Program::new();
    let info = FunctionInfo::static_method("s", TypeRef::class("A"), TypeRef::Void, 1, SymbolFlags::PUBLIC, vec![]);
    let body = assign(&mut p, 2, "x", 1);
    assert!(matches!(
        p.function_definition(1, info, vec![], body, None),
        Err(Error::SlotKind { slot: "body", .. })
    ));
}

#[test]
fn nodes_record_owner_context() {
    let mut p = Program::new();
    p.set_owner(Some(TypeRef::class("A")));
    let x = var(&mut p, "x");
    p.set_owner(None);
    let y = var(&mut p, "y");
    assert_eq!(p[x].owner(), Some(&TypeRef::class("A")));
    assert_eq!(p[y].owner(), None);
    let sum = p.binary(BinaryOp::Add, x, y, TypeRef::Int).unwrap();
    assert_eq!(p.children(sum), &[x, y]);
    assert_eq!(p.parent(x), Some(sum));
}

#[test]
fn lookups_of_unknown_ids_fail() {
    let mut big = Program::new();
    let _ = big.nothing();
    let far = big.nothing();
    let small = Program::new();
    assert_eq!(small.node(far).err(), Some(Error::UnknownNode(far)));
}
