use std::rc::Rc;

use crate::builtins;
use crate::parser::stmt::{Stmt, BlockStmt, Program};
use crate::parser::expr::*;
use crate::runtime::{Value, Environment, Function, RuntimeError};
use crate::runtime::ops::{eval_prefix, eval_infix};


// error and return values short-circuit evaluation, much like `?` does for a Result
macro_rules! try_value {
    ( $value:expr ) => {
        match $value {
            value @ (Value::Error(..) | Value::Return(..)) => return value,
            value => value,
        }
    };
}


/// Any node that can be evaluated on its own
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Statement(&'a Stmt),
    Block(&'a BlockStmt),
    Expression(&'a Expr),
}

impl<'a> From<&'a Program> for NodeRef<'a> {
    fn from(program: &'a Program) -> Self { Self::Program(program) }
}

impl<'a> From<&'a Stmt> for NodeRef<'a> {
    fn from(stmt: &'a Stmt) -> Self { Self::Statement(stmt) }
}

impl<'a> From<&'a BlockStmt> for NodeRef<'a> {
    fn from(block: &'a BlockStmt) -> Self { Self::Block(block) }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self { Self::Expression(expr) }
}


/// Evaluate a node in the given environment.
/// Runtime errors are returned as error values, `Program` evaluation unwraps returned values.
pub fn eval<'a>(node: impl Into<NodeRef<'a>>, env: &Rc<Environment>) -> Value {
    let ctx = EvalContext::from(env);

    match node.into() {
        NodeRef::Program(program) => ctx.eval_program(program),
        NodeRef::Statement(stmt) => ctx.eval_stmt(stmt),
        NodeRef::Block(block) => ctx.eval_block(block),
        NodeRef::Expression(expr) => ctx.eval_expr(expr),
    }
}


// tracks the local scope
pub struct EvalContext<'a> {
    local_env: &'a Rc<Environment>,
}

impl<'a> From<&'a Rc<Environment>> for EvalContext<'a> {
    fn from(local_env: &'a Rc<Environment>) -> Self {
        EvalContext { local_env }
    }
}

impl<'a> EvalContext<'a> {

    /*** Statements ***/

    pub fn eval_program(&self, program: &Program) -> Value {
        let mut result = Value::Null;

        for stmt in program.iter() {
            result = self.eval_stmt(stmt);

            match result {
                Value::Return(value) => return *value,
                Value::Error(..) => return result,
                _ => { },
            }
        }

        result
    }

    // unlike eval_program(), return values are passed up intact to the enclosing call
    pub fn eval_block(&self, block: &BlockStmt) -> Value {
        let mut result = Value::Null;

        for stmt in block.iter() {
            result = self.eval_stmt(stmt);

            if matches!(result, Value::Return(..) | Value::Error(..)) {
                return result;
            }
        }

        result
    }

    pub fn eval_stmt(&self, stmt: &Stmt) -> Value {
        match stmt {
            Stmt::Let(stmt) => {
                let value = try_value!(self.eval_expr(&stmt.value));
                self.local_env.insert_value(Rc::clone(&stmt.name.value), value);
                Value::Null
            },

            Stmt::Return(stmt) => {
                let value = try_value!(self.eval_expr(&stmt.value));
                Value::Return(Box::new(value))
            },

            Stmt::Expression(stmt) => self.eval_expr(&stmt.expr),
        }
    }

    /*** Expressions ***/

    pub fn eval_expr(&self, expr: &Expr) -> Value {
        match expr {
            Expr::Identifier(ident) => self.eval_identifier(ident),

            Expr::IntegerLiteral(literal) => Value::Integer(literal.value),
            Expr::FloatLiteral(literal) => Value::Float(literal.value),
            Expr::StringLiteral(literal) => Value::String(Rc::clone(&literal.value)),
            Expr::Boolean(literal) => Value::Boolean(literal.value),

            Expr::Array(array) => match self.eval_expr_list(&array.elements) {
                Ok(items) => Value::from(items),
                Err(error) => error,
            },

            Expr::Prefix(expr) => {
                let operand = try_value!(self.eval_expr(&expr.right));
                eval_prefix(expr.op, &operand).unwrap_or_else(Value::from)
            },

            Expr::Infix(expr) => {
                let lhs = try_value!(self.eval_expr(&expr.left));
                let rhs = try_value!(self.eval_expr(&expr.right));
                eval_infix(expr.op, &lhs, &rhs).unwrap_or_else(Value::from)
            },

            Expr::If(expr) => self.eval_if(expr),

            Expr::Function(literal) => {
                let func = Function::new(literal, Rc::clone(self.local_env));
                Value::from(func)
            },

            Expr::Call(expr) => self.eval_call(expr),

            Expr::Index(expr) => {
                let collection = try_value!(self.eval_expr(&expr.left));
                let index = try_value!(self.eval_expr(&expr.index));
                Self::eval_index(&collection, &index)
            },
        }
    }

    // user bindings shadow builtins
    fn eval_identifier(&self, ident: &Identifier) -> Value {
        let name = ident.name();

        if let Some(value) = self.local_env.find_value(name) {
            return value;
        }

        match builtins::lookup(name) {
            Some(builtin) => Value::Builtin(builtin),
            None => Value::from(RuntimeError::name_not_defined(name)),
        }
    }

    // evaluates left to right, stopping at the first error or return
    fn eval_expr_list(&self, exprs: &[Expr]) -> Result<Vec<Value>, Value> {
        let mut values = Vec::with_capacity(exprs.len());

        for expr in exprs.iter() {
            let value = self.eval_expr(expr);
            if matches!(value, Value::Error(..) | Value::Return(..)) {
                return Err(value);
            }
            values.push(value);
        }

        Ok(values)
    }

    // the first truthy branch is taken, in source order
    fn eval_if(&self, expr: &IfExpr) -> Value {
        for (condition, consequence) in expr.branches() {
            let condition = try_value!(self.eval_expr(condition));

            if condition.is_truthy() {
                return self.eval_block(consequence);
            }
        }

        match expr.alternative.as_ref() {
            Some(alternative) => self.eval_block(alternative),
            None => Value::Null,
        }
    }

    fn eval_call(&self, expr: &CallExpr) -> Value {
        let callee = try_value!(self.eval_expr(&expr.function));

        let args = match self.eval_expr_list(&expr.args) {
            Ok(args) => args,
            Err(error) => return error,
        };

        apply_function(&callee, args)
    }

    // out of range indexes produce null instead of an error
    fn eval_index(collection: &Value, index: &Value) -> Value {
        match (collection, index) {
            (Value::Array(items), Value::Integer(index)) => usize::try_from(*index).ok()
                .and_then(|index| items.get(index))
                .cloned()
                .unwrap_or(Value::Null),

            _ => Value::from(RuntimeError::index_not_supported(collection, index)),
        }
    }
}


fn apply_function(callee: &Value, args: Vec<Value>) -> Value {
    match callee {
        Value::Function(func) => {
            if args.len() != func.arity() {
                return Value::from(RuntimeError::wrong_argument_count(args.len(), func.arity()));
            }

            log::debug!("call {} with {} args", callee.type_name(), args.len());

            // parameters are bound in a new scope inside the one the function was defined in
            let call_env = func.env().new_local();
            for (param, arg) in func.params().iter().zip(args.into_iter()) {
                call_env.insert_value(Rc::clone(&param.value), arg);
            }

            let result = EvalContext::from(&call_env).eval_block(func.body());
            unwrap_return_value(result)
        },

        Value::Builtin(builtin) => {
            log::debug!("call builtin {} with {} args", builtin.name(), args.len());
            builtin.call(&args)
        },

        _ => Value::from(RuntimeError::not_callable(callee)),
    }
}

fn unwrap_return_value(value: Value) -> Value {
    match value {
        Value::Return(value) => *value,
        value => value,
    }
}
