//! A small fixed program exercising every node kind.
//!
//! ```text
//! class Base            { Base() /*2*/;    int compute(int x) /*3*/ }
//! class Derived : Base  { Derived() /*1*/; int compute(int x) /*7*/ }
//! final class Test      { int run() }
//! ```
//!
//! `Test.run` declares its locals up front and then holds one loop of each
//! shape. The `while` loop has empty bodies, so
//! [`Program::flatten_idle_loops`] removes it.

use crate::config::Config;
use crate::error::Result;
use crate::ir::*;
use crate::symbols::{FunctionInfo, SymbolFlags, TypeHierarchy, TypeRef, VariableInfo};

pub struct Sample {
    pub program: Program,
    pub hierarchy: TypeHierarchy,
    pub root: NodeId,
}

pub fn build(config: &Config) -> Result<Sample> {
    let mut hierarchy = TypeHierarchy::new();
    let base = hierarchy.add_class("Base", &[], SymbolFlags::PUBLIC)?;
    let derived = hierarchy.add_class("Derived", &["Base"], SymbolFlags::PUBLIC)?;
    let test = hierarchy.add_class("Test", &[], SymbolFlags::PUBLIC | SymbolFlags::FINAL)?;

    let x = VariableInfo::local("x", TypeRef::Int);
    let base_ctor = FunctionInfo::constructor(base.clone(), 2, SymbolFlags::PUBLIC, vec![]);
    let base_compute = FunctionInfo::method("compute", base.clone(), TypeRef::Int, 3, SymbolFlags::PUBLIC, vec![x.clone()]);
    let derived_ctor = FunctionInfo::constructor(derived.clone(), 1, SymbolFlags::PUBLIC, vec![]);
    let derived_compute = FunctionInfo::method("compute", derived.clone(), TypeRef::Int, 7, SymbolFlags::PUBLIC, vec![x]);
    let run = FunctionInfo::method("run", test.clone(), TypeRef::Int, 0, SymbolFlags::PUBLIC, vec![]);
    for info in [&base_ctor, &base_compute, &derived_ctor, &derived_compute, &run] {
        hierarchy.admit_function(info.clone())?;
    }

    let mut program = Program::new();
    let mut builder = Builder { program: &mut program };
    let mut definitions = Vec::new();

    builder.program.set_owner(Some(base));
    definitions.push(builder.compute_definition(base_compute.clone(), 2)?);
    builder.program.set_owner(Some(derived));
    definitions.push(builder.compute_definition(derived_compute, 3)?);
    builder.program.set_owner(Some(test));
    definitions.push(builder.run_definition(run, derived_ctor, base_compute, config.iteration_limit)?);
    builder.program.set_owner(None);

    let root = program.block(0, definitions)?;
    Ok(Sample {
        program,
        hierarchy,
        root,
    })
}

struct Builder<'p> {
    program: &'p mut Program,
}

impl Builder<'_> {
    fn int_var(&mut self, name: &str) -> NodeId {
        self.program.local_variable(VariableInfo::local(name, TypeRef::Int))
    }

    /// `ty name;` in the body of `run`
    fn declare(&mut self, name: &str, ty: TypeRef) -> NodeId {
        self.program.variable_declaration(2, VariableInfo::local(name, ty))
    }

    /// `name = value;`
    fn assign(&mut self, level: usize, name: &str, value: i32) -> Result<NodeId> {
        let target = self.int_var(name);
        let value = self.program.int_literal(value);
        let assign = self.program.binary(BinaryOp::Assign, target, value, TypeRef::Int)?;
        self.program.statement(level, assign)
    }

    /// `name <op> bound`
    fn compare(&mut self, op: BinaryOp, name: &str, bound: i32) -> Result<NodeId> {
        let var = self.int_var(name);
        let bound = self.program.int_literal(bound);
        self.program.binary(op, var, bound, TypeRef::Boolean)
    }

    fn step(&mut self, op: UnaryOp, name: &str) -> Result<NodeId> {
        let var = self.int_var(name);
        self.program.unary(op, var, TypeRef::Int)
    }

    /// `int compute(int x) { return x * factor; }`
    fn compute_definition(&mut self, info: FunctionInfo, factor: i32) -> Result<NodeId> {
        let param = self.program.argument_declaration(VariableInfo::local("x", TypeRef::Int));
        let x = self.int_var("x");
        let factor = self.program.int_literal(factor);
        let product = self.program.binary(BinaryOp::Mul, x, factor, TypeRef::Int)?;
        let ret = self.program.ret(2, product)?;
        let body = self.program.block(2, vec![])?;
        self.program.function_definition(1, info, vec![param], body, Some(ret))
    }

    fn run_definition(
        &mut self,
        info: FunctionInfo,
        ctor: FunctionInfo,
        compute: FunctionInfo,
        iterations: u64,
    ) -> Result<NodeId> {
        let bound = i32::try_from(iterations).unwrap_or(i32::MAX);
        let base = compute.owner().cloned().unwrap_or(TypeRef::Void);
        let mut statements = vec![
            self.declare("i", TypeRef::Int),
            self.declare("acc", TypeRef::Int),
            self.declare("obj", base),
        ];
        statements.push(self.counted_for(ctor, compute, iterations, bound)?);
        statements.push(self.declare("j", TypeRef::Int));
        statements.push(self.idle_while()?);
        statements.push(self.declare("k", TypeRef::Int));
        statements.push(self.accumulating_do_while()?);

        let body = self.program.block(2, statements)?;
        let acc = self.int_var("acc");
        let ret = self.program.ret(2, acc)?;
        self.program.function_definition(1, info, vec![], body, Some(ret))
    }

    /// `for (i = 0; i < bound; i++) acc += obj.compute(i);` with `obj` a `Derived`
    fn counted_for(&mut self, ctor: FunctionInfo, compute: FunctionInfo, iterations: u64, bound: i32) -> Result<NodeId> {
        let base = compute.owner().cloned().unwrap_or(TypeRef::Void);
        let obj = self.program.local_variable(VariableInfo::local("obj", base.clone()));
        let created = self.program.call(ctor, vec![])?;
        let assign_obj = self.program.binary(BinaryOp::Assign, obj, created, base.clone())?;
        let init_obj = self.program.statement(2, assign_obj)?;
        let init_acc = self.assign(2, "acc", 0)?;
        let header = self.program.block(2, vec![init_obj, init_acc])?;

        let init = self.assign(2, "i", 0)?;
        let condition = self.compare(BinaryOp::Lt, "i", bound)?;
        let step = self.step(UnaryOp::PostIncrement, "i")?;
        let descriptor = self.program.add_loop(init, condition, step)?;

        let acc = self.int_var("acc");
        let receiver = self.program.local_variable(VariableInfo::local("obj", base));
        let i = self.int_var("i");
        let call = self.program.call(compute, vec![receiver, i])?;
        let add = self.program.binary(BinaryOp::AddAssign, acc, call, TypeRef::Int)?;
        let statement = self.program.statement(3, add)?;
        let body1 = self.program.block(3, vec![statement])?;

        let parts = ForParts {
            header,
            statement1: self.program.nothing(),
            statement2: self.program.nothing(),
            body1,
            body2: self.program.nothing(),
            body3: self.program.nothing(),
        };
        self.program.for_loop(2, descriptor, iterations, parts)
    }

    /// `j = 10; while (j > 0) { j--; }`
    fn idle_while(&mut self) -> Result<NodeId> {
        let header = self.program.nothing();
        let init = self.assign(2, "j", 10)?;
        let condition = self.compare(BinaryOp::Gt, "j", 0)?;
        let step = self.step(UnaryOp::PostDecrement, "j")?;
        let descriptor = self.program.add_loop(init, condition, step)?;
        let parts = WhileParts {
            header,
            body1: self.program.nothing(),
            body2: self.program.nothing(),
            body3: self.program.nothing(),
        };
        self.program.while_loop(2, descriptor, 10, parts)
    }

    /// `k = 0; do { acc += k; k++; } while (k < 3);`
    fn accumulating_do_while(&mut self) -> Result<NodeId> {
        let header = self.program.nothing();
        let init = self.assign(2, "k", 0)?;
        let condition = self.compare(BinaryOp::Lt, "k", 3)?;
        let step = self.step(UnaryOp::PostIncrement, "k")?;
        let descriptor = self.program.add_loop(init, condition, step)?;

        let acc = self.int_var("acc");
        let k = self.int_var("k");
        let add = self.program.binary(BinaryOp::AddAssign, acc, k, TypeRef::Int)?;
        let statement = self.program.statement(3, add)?;
        let body1 = self.program.block(3, vec![statement])?;
        let parts = DoWhileParts {
            header,
            body1,
            body2: self.program.nothing(),
        };
        self.program.do_while_loop(2, descriptor, 3, parts)
    }
}
