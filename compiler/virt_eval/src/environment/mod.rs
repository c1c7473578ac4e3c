//! Lexical environments.
//!
//! Each [`Environment`] is a handle to one scope. Scopes link to their
//! parent, so a closure keeps the whole chain it was declared in alive.


use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{assign_to_constant, undefined_variable, variable_already_declared};
use crate::{RuntimeError, Value};

/// A single-threaded shared cell for scope data.
///
/// All scope allocations go through [`LocalScope::new`]; the wrapper makes
/// it plain that scopes are `Rc`, not `Arc`.
#[repr(transparent)]
pub(crate) struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus the link outward.
#[derive(Debug, Default)]
pub(crate) struct Scope {
    bindings: FxHashMap<String, Binding>,
    parent: Option<Environment>,
}

#[derive(Debug)]
struct Binding {
    value: Value,
    constant: bool,
}

/// Handle to a scope. Cloning shares the scope.
#[derive(Clone, Debug)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A root environment with no bindings.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A fresh scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(self.clone()),
            }),
        }
    }

    pub fn parent(&self) -> Option<Environment> {
        self.scope.borrow().parent.clone()
    }

    /// Whether `self` and `other` are the same scope.
    pub fn same_scope(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }

    /// Whether `name` is bound in this scope, ignoring parents.
    pub fn has_local(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// Bind `name` in this scope and return the value.
    ///
    /// Fails if this scope already binds `name`; shadowing an outer binding
    /// is fine. The empty name binds nothing.
    pub fn declare_var(
        &self,
        name: &str,
        value: Value,
        constant: bool,
    ) -> Result<Value, RuntimeError> {
        if name.is_empty() {
            return Ok(value);
        }
        let mut scope = self.scope.borrow_mut();
        if scope.bindings.contains_key(name) {
            return Err(variable_already_declared(name));
        }
        scope.bindings.insert(
            name.to_string(),
            Binding {
                value: value.clone(),
                constant,
            },
        );
        Ok(value)
    }

    /// Bind `name` unconditionally, replacing any binding in this scope.
    pub(crate) fn define(&self, name: &str, value: Value, constant: bool) {
        self.scope
            .borrow_mut()
            .bindings
            .insert(name.to_string(), Binding { value, constant });
    }

    /// Overwrite the nearest binding of `name` and return the value.
    pub fn assign_var(&self, name: &str, value: Value) -> Result<Value, RuntimeError> {
        let owner = self.resolve(name)?;
        let mut scope = owner.scope.borrow_mut();
        let binding = scope
            .bindings
            .get_mut(name)
            .ok_or_else(|| undefined_variable(name))?;
        if binding.constant {
            return Err(assign_to_constant(name));
        }
        binding.value = value.clone();
        Ok(value)
    }

    /// The nearest environment, starting here, that binds `name`.
    pub fn resolve(&self, name: &str) -> Result<Environment, RuntimeError> {
        let mut current = self.clone();
        loop {
            if current.has_local(name) {
                return Ok(current);
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => return Err(undefined_variable(name)),
            }
        }
    }

    pub fn lookup_var(&self, name: &str) -> Result<Value, RuntimeError> {
        let owner = self.resolve(name)?;
        let scope = owner.scope.borrow();
        scope
            .bindings
            .get(name)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| undefined_variable(name))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
