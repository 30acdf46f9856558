mod variant;
pub use variant::Value;

pub mod function;
pub mod environment;
pub mod ops;
pub mod errors;

mod tests;

pub use function::{Function, Builtin};
pub use environment::Environment;
pub use errors::{RuntimeError, ErrorKind};


// Default Hasher

pub type DefaultBuildHasher = ahash::RandomState;
