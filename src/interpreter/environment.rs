use std::collections::HashMap;

use tracing::trace;

use crate::interpreter::value::core::Value;

/// Handle to a scope frame inside an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope, which always exists.
    pub const GLOBAL: Self = Self(0);
}

/// Returned when a name is bound in no scope of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unbound;

/// A single scope: its bindings and the scope that encloses it.
#[derive(Debug, Default)]
struct Frame {
    values: HashMap<String, Value>,
    parent: Option<ScopeId>,
}

/// The chain of variable scopes.
///
/// Scopes live in an arena and refer to their enclosing scope by index.
/// Blocks nest strictly, so the arena behaves as a stack: [`Self::push`]
/// enters a new innermost scope and [`Self::pop`] leaves it. The global scope
/// is never popped.
///
/// # Example
/// ```
/// use lack::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Number(1.0));
///
/// env.push();
/// env.define("x", Value::Number(2.0));
/// assert_eq!(env.get("x"), Some(&Value::Number(2.0)));
/// env.pop();
///
/// assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
/// ```
#[derive(Debug)]
pub struct Environment {
    frames:  Vec<Frame>,
    current: ScopeId,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { frames:  vec![Frame::default()],
               current: ScopeId::GLOBAL, }
    }

    /// The innermost scope.
    #[must_use]
    pub const fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of live scopes, the global scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Enters a new scope enclosed by the current one.
    pub fn push(&mut self) {
        let id = ScopeId(self.frames.len());
        self.frames.push(Frame { values: HashMap::new(),
                                 parent: Some(self.current), });
        self.current = id;
        trace!(depth = self.frames.len(), "entered scope");
    }

    /// Leaves the current scope, discarding its bindings.
    ///
    /// Does nothing when only the global scope is left.
    pub fn pop(&mut self) {
        if self.current == ScopeId::GLOBAL {
            return;
        }

        if let Some(frame) = self.frames.pop() {
            self.current = frame.parent.unwrap_or(ScopeId::GLOBAL);
        }
        trace!(depth = self.frames.len(), "left scope");
    }

    /// Binds `name` in the current scope, replacing any binding of the same
    /// name in that scope and shadowing those of enclosing scopes.
    pub fn define(&mut self, name: &str, value: Value) {
        self.frames[self.current.0].values.insert(name.to_string(), value);
    }

    /// Looks `name` up, walking outward from the current scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.resolve(name).and_then(|id| self.frames[id.0].values.get(name))
    }

    /// Rebinds `name` in the nearest scope that defines it.
    ///
    /// # Errors
    /// Returns [`Unbound`] if no scope in the chain defines `name`; nothing is
    /// changed in that case.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), Unbound> {
        let id = self.resolve(name).ok_or(Unbound)?;

        if let Some(slot) = self.frames[id.0].values.get_mut(name) {
            *slot = value;
        }
        Ok(())
    }

    /// Finds the nearest scope defining `name`.
    fn resolve(&self, name: &str) -> Option<ScopeId> {
        let mut scope = Some(self.current);

        while let Some(id) = scope {
            let frame = &self.frames[id.0];
            if frame.values.contains_key(name) {
                return Some(id);
            }
            scope = frame.parent;
        }

        None
    }
}
