//! Tree-walking evaluator

mod eval;

pub use eval::{eval, NodeRef, EvalContext};
