//! Runtime values.
//!
//! Strings, lists, and objects are reference types: binding one to a new
//! name or passing it to a function shares the underlying storage, and a
//! mutation through any alias is visible through all of them. Everything
//! else copies by value. Equality is structural all the way down, and
//! stringification is canonical — object keys print in sorted order so the
//! same object always prints the same way.

use std::{collections::HashMap, fmt::{Debug, Display}, rc::Rc};

use crate::{
	interpreter::native::NativeError,
	parser::Node,
	scope::ScopeRef,
	utils::{RcCell, quote_bytes},
};

/// The storage behind an object value: keys are raw bytes, exactly what
/// key expressions stringify to
pub type ObjectMap = HashMap<Vec<u8>, Value>;

/// A runtime value
#[derive(Debug, Clone)]
pub enum Value {
	/// Explicit absence, written `?`
	Null,
	/// The value of `_`; matches anything in patterns, equals only itself
	Empty,
	Int(i64),
	Float(f64),
	Bool(bool),
	/// An interned symbol like `:name`; equality is by name
	Atom(Rc<str>),
	/// A mutable byte string, shared by reference
	String(RcCell<Vec<u8>>),
	/// A mutable sequence, shared by reference
	List(RcCell<Vec<Value>>),
	/// A mutable keyed mapping, shared by reference
	Object(RcCell<ObjectMap>),
	/// A user function closing over its defining scope
	Fn(Rc<FnValue>),
	/// A host-provided function
	Native(NativeFnValue),
}

/// A user function value: the argument names and body from the literal,
/// plus the scope that was current at its definition. Calls run against a
/// child of that scope, so later mutations of it stay visible — that is
/// what makes mutual recursion through `<-` work.
pub struct FnValue {
	pub name:     Option<String>,
	pub args:     Vec<String>,
	pub rest_arg: Option<String>,
	pub body:     Rc<Node>,
	pub scope:    ScopeRef,
}

impl Debug for FnValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// never debug-print the captured scope; it routinely points back at
		// this function
		f.debug_struct("FnValue").field("name", &self.name).field("args", &self.args).finish_non_exhaustive()
	}
}

pub type NativeFn = Rc<dyn Fn(&[Value]) -> Result<Value, NativeError>>;

#[derive(Clone)]
pub struct NativeFnValue {
	pub name: &'static str,
	pub func: NativeFn,
}

impl Debug for NativeFnValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NativeFnValue").field("name", &self.name).finish_non_exhaustive()
	}
}

impl Value {
	pub fn string(bytes: impl Into<Vec<u8>>) -> Self { Value::String(RcCell::new(bytes.into())) }

	pub fn atom(name: &str) -> Self { Value::Atom(Rc::from(name)) }

	pub fn list(elems: impl Into<Vec<Value>>) -> Self { Value::List(RcCell::new(elems.into())) }

	pub fn object<K: Into<Vec<u8>>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
		Value::Object(RcCell::new(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()))
	}

	pub fn native(name: &'static str, func: NativeFn) -> Self {
		Value::Native(NativeFnValue { name, func })
	}

	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Empty => "empty",
			Value::Int(_) => "int",
			Value::Float(_) => "float",
			Value::Bool(_) => "bool",
			Value::Atom(_) => "atom",
			Value::String(_) => "string",
			Value::List(_) => "list",
			Value::Object(_) => "object",
			Value::Fn(_) | Value::Native(_) => "function",
		}
	}

	/// The byte form a value takes when used as an object key: strings
	/// contribute their bytes, atoms their name, everything else its
	/// canonical printed form
	pub fn to_key(&self) -> Vec<u8> {
		match self {
			Value::String(s) => s.borrow().clone(),
			Value::Atom(name) => name.as_bytes().to_vec(),
			other => other.to_string().into_bytes(),
		}
	}
}

/// Structural, deep equality. Numbers compare by mathematical value across
/// int and float; `empty` equals nothing but `empty`; functions compare by
/// identity.
impl PartialEq for Value {
	fn eq(&self, other: &Value) -> bool {
		use Value::*;
		match (self, other) {
			(Null, Null) => true,
			(Empty, Empty) => true,
			(Int(a), Int(b)) => a == b,
			(Float(a), Float(b)) => a == b,
			(Int(a), Float(b)) | (Float(b), Int(a)) => *a as f64 == *b,
			(Bool(a), Bool(b)) => a == b,
			(Atom(a), Atom(b)) => a == b,
			(String(a), String(b)) => *a.borrow() == *b.borrow(),
			(List(a), List(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
			(Object(a), Object(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
			(Fn(a), Fn(b)) => Rc::ptr_eq(a, b),
			(Native(a), Native(b)) => a.name == b.name,
			_ => false,
		}
	}
}

/// Pairs of numeric operands coerced to a common shape: any float makes
/// the pair float
pub(crate) enum NumberPair {
	Ints(i64, i64),
	Floats(f64, f64),
}

pub(crate) fn number_pair(a: &Value, b: &Value) -> Option<NumberPair> {
	match (a, b) {
		(Value::Int(x), Value::Int(y)) => Some(NumberPair::Ints(*x, *y)),
		(Value::Int(x), Value::Float(y)) => Some(NumberPair::Floats(*x as f64, *y)),
		(Value::Float(x), Value::Int(y)) => Some(NumberPair::Floats(*x, *y as f64)),
		(Value::Float(x), Value::Float(y)) => Some(NumberPair::Floats(*x, *y)),
		_ => None,
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => write!(f, "?"),
			Value::Empty => write!(f, "_"),
			Value::Int(n) => write!(f, "{n}"),
			Value::Float(n) => write!(f, "{n}"),
			Value::Bool(b) => write!(f, "{b}"),
			Value::Atom(name) => write!(f, ":{name}"),
			Value::String(s) => write!(f, "{}", quote_bytes(&s.borrow())),
			Value::List(elems) => {
				let body = elems.borrow().iter().map(Value::to_string).collect::<Vec<_>>().join(", ");
				write!(f, "[{body}]")
			}
			Value::Object(map) => {
				let mut entries: Vec<(Vec<u8>, String)> =
					map.borrow().iter().map(|(k, v)| (k.clone(), v.to_string())).collect();
				entries.sort_by(|a, b| a.0.cmp(&b.0));
				let body = entries
					.into_iter()
					.map(|(k, v)| format!("{}: {v}", String::from_utf8_lossy(&k)))
					.collect::<Vec<_>>()
					.join(", ");
				write!(f, "{{{body}}}")
			}
			Value::Fn(func) => match &func.name {
				Some(name) => write!(f, "fn {name}"),
				None => write!(f, "fn"),
			},
			Value::Native(native) => write!(f, "fn {}", native.name),
		}
	}
}
