use core::fmt;
use std::rc::Rc;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::runtime::{Value, DefaultBuildHasher};


pub type Namespace = HashMap<Rc<str>, Value, DefaultBuildHasher>;

pub fn new_namespace() -> Namespace {
    Namespace::with_hasher(DefaultBuildHasher::default())
}


/// A lexical scope. Scopes are shared by the child scopes nested inside them
/// and by every closure created while they were current.
pub struct Environment {
    parent: Option<Rc<Environment>>,
    namespace: RefCell<Namespace>,
}

impl Environment {
    /// Create a top-level Environment with no parent.
    pub fn new_root() -> Rc<Environment> {
        Rc::new(Environment {
            parent: None,
            namespace: RefCell::new(new_namespace()),
        })
    }

    /// Create a new local Environment with this one as it's parent.
    pub fn new_local(self: &Rc<Self>) -> Rc<Environment> {
        Rc::new(Environment {
            parent: Some(Rc::clone(self)),
            namespace: RefCell::new(new_namespace()),
        })
    }

    /// Check if the name exists in this Environment
    pub fn has_name(&self, name: &str) -> bool {
        self.namespace.borrow().contains_key(name)
    }

    /// Lookup a value for the given name in this Environment
    pub fn lookup_value(&self, name: &str) -> Option<Value> {
        self.namespace.borrow().get(name).cloned()
    }

    /// Lookup a value for the given name in the innermost Environment in which it can be found.
    pub fn find_value(&self, name: &str) -> Option<Value> {
        let mut next_env = Some(self);
        while let Some(env) = next_env {
            let value = env.lookup_value(name);
            if value.is_some() {
                return value;
            }
            next_env = env.parent.as_deref();
        }
        None
    }

    /// Store a value in this Environment, shadowing any binding in the parents
    pub fn insert_value(&self, name: Rc<str>, value: Value) -> Option<Value> {
        self.namespace.borrow_mut().insert(name, value)
    }

    pub fn names(&self) -> Vec<Rc<str>> {
        self.namespace.borrow().keys().cloned().collect()
    }
}

// the values can include closures that refer back to this environment, so only show names
impl fmt::Debug for Environment {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.names();
        names.sort();

        fmt.debug_struct("Environment")
            .field("names", &names)
            .field("parent", &self.parent)
            .finish()
    }
}
