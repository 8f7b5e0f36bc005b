// Common test utilities
#![allow(dead_code)]

use jtir::ir::{BinaryOp, DoWhileParts, ForParts, LoopId, NodeId, Program, WhileParts};
use jtir::symbols::{TypeRef, VariableInfo};

/// Read of an int local; costs 1
pub fn var(program: &mut Program, name: &str) -> NodeId {
    program.local_variable(VariableInfo::local(name, TypeRef::Int))
}

/// `name = value;`; costs 2
pub fn assign(program: &mut Program, level: usize, name: &str, value: i32) -> NodeId {
    let target = var(program, name);
    let value = program.int_literal(value);
    let expr = program.binary(BinaryOp::Assign, target, value, TypeRef::Int).unwrap();
    program.statement(level, expr).unwrap()
}

/// Descriptor with initialization cost 2, condition cost 1, step cost 1
pub fn descriptor(program: &mut Program) -> (LoopId, NodeId) {
    let init = assign(program, 1, "i", 0);
    let condition = program.local_variable(VariableInfo::local("go", TypeRef::Boolean));
    let step = var(program, "i");
    let id = program.add_loop(init, condition, step).unwrap();
    (id, init)
}

pub fn empty_for_parts(program: &mut Program, header: NodeId) -> ForParts {
    ForParts {
        header,
        statement1: program.nothing(),
        statement2: program.nothing(),
        body1: program.nothing(),
        body2: program.nothing(),
        body3: program.nothing(),
    }
}

pub fn empty_while_parts(program: &mut Program, header: NodeId) -> WhileParts {
    WhileParts {
        header,
        body1: program.nothing(),
        body2: program.nothing(),
        body3: program.nothing(),
    }
}

pub fn empty_do_while_parts(program: &mut Program, header: NodeId) -> DoWhileParts {
    DoWhileParts {
        header,
        body1: program.nothing(),
        body2: program.nothing(),
    }
}

/// A block of `n` cost-2 assignments at `level`
pub fn assignments(program: &mut Program, level: usize, n: usize) -> NodeId {
    let statements = (0..n).map(|i| assign(program, level, &format!("v{}", i), i as i32)).collect();
    program.block(level, statements).unwrap()
}
