use std::collections::HashMap;

use crate::{interpreter::value::Value, utils::RcCell};

/// A scope chain handle. Closures hold one of these, so scopes stay alive
/// for as long as any function that captured them.
pub type ScopeRef = RcCell<Scope>;

/// One frame of the lexical environment: its own bindings plus a pointer
/// to the enclosing frame. Lookups walk outward; the two assignment forms
/// differ only in which frame they write to.
#[derive(Debug, Default)]
pub struct Scope {
	vars:   HashMap<String, Value>,
	parent: Option<ScopeRef>,
}

impl Scope {
	/// A root scope with no parent
	pub fn root() -> ScopeRef { RcCell::new(Scope::default()) }

	/// A child frame; created at block entry and function call
	pub fn child(parent: &ScopeRef) -> ScopeRef {
		RcCell::new(Scope { vars: HashMap::new(), parent: Some(parent.clone()) })
	}

	/// Resolve a name, walking outward through enclosing frames
	pub fn get(&self, name: &str) -> Option<Value> {
		match self.vars.get(name) {
			Some(value) => Some(value.clone()),
			None => self.parent.as_ref().and_then(|p| p.borrow().get(name)),
		}
	}

	/// Local assignment `:=`: always binds in this frame, shadowing any
	/// binding further out
	pub fn put(&mut self, name: impl Into<String>, value: Value) { self.vars.insert(name.into(), value); }

	/// Nonlocal assignment `<-`: update the nearest existing binding, or
	/// bind at the root when the name is nowhere in the chain
	pub fn put_nonlocal(&mut self, name: &str, value: Value) {
		if self.vars.contains_key(name) {
			self.vars.insert(name.to_string(), value);
			return;
		}
		match &self.parent {
			Some(parent) => parent.borrow_mut().put_nonlocal(name, value),
			None => {
				self.vars.insert(name.to_string(), value);
			}
		}
	}
}
