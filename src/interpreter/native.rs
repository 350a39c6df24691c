//! The native functions the core installs into every root scope. These are
//! only the value-level helpers the language itself leans on; I/O, math,
//! and the standard library proper are host concerns layered on top
//! through the same registration path.

use std::rc::Rc;

use crate::{interpreter::value::{NativeFn, Value}, scope::ScopeRef};

/// An error reported by a native function. The evaluator attaches the
/// position of the call that raised it.
#[derive(Debug)]
pub enum NativeError {
	/// The native was handed values it has no behavior for; surfaces as a
	/// Runtime error
	Type(String),
	/// A host-side failure, e.g. I/O; surfaces as a System error
	System(String),
}

/// Install every core native into the given root scope
pub(crate) fn install(scope: &ScopeRef) {
	let natives: [(&'static str, NativeFn); 3] =
		[("len", Rc::new(len)), ("string", Rc::new(string)), ("type", Rc::new(type_of))];
	let mut scope = scope.borrow_mut();
	for (name, func) in natives {
		scope.put(name, Value::native(name, func));
	}
}

fn arg(args: &[Value], name: &str) -> Result<Value, NativeError> {
	args.first().cloned().ok_or_else(|| NativeError::Type(format!("{name}() expects an argument")))
}

/// Byte length of a string, element count of a list, entry count of an
/// object
fn len(args: &[Value]) -> Result<Value, NativeError> {
	match arg(args, "len")? {
		Value::String(s) => Ok(Value::Int(s.borrow().len() as i64)),
		Value::List(elems) => Ok(Value::Int(elems.borrow().len() as i64)),
		Value::Object(map) => Ok(Value::Int(map.borrow().len() as i64)),
		other => Err(NativeError::Type(format!(
			"len() expects a string, list, or object, got a {}",
			other.type_name()
		))),
	}
}

/// Canonical string form of a value. A string comes back as itself (the
/// same shared value, not a copy), and an atom contributes its bare name.
fn string(args: &[Value]) -> Result<Value, NativeError> {
	match arg(args, "string")? {
		string @ Value::String(_) => Ok(string),
		Value::Atom(name) => Ok(Value::string(name.as_bytes())),
		other => Ok(Value::string(other.to_string())),
	}
}

/// The type of a value, as an atom
fn type_of(args: &[Value]) -> Result<Value, NativeError> {
	Ok(Value::atom(arg(args, "type")?.type_name()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn len_counts_bytes_elements_and_keys() {
		assert_eq!(len(&[Value::string("Oak")]).unwrap(), Value::Int(3));
		assert_eq!(len(&[Value::list(vec![Value::Null, Value::Null])]).unwrap(), Value::Int(2));
		assert_eq!(len(&[Value::object([("a", Value::Int(1))])]).unwrap(), Value::Int(1));
		assert!(len(&[Value::Int(3)]).is_err());
		assert!(len(&[]).is_err());
	}

	#[test]
	fn string_of_string_shares_the_value() {
		let original = Value::string("Oak");
		let through = string(&[original.clone()]).unwrap();
		if let (Value::String(a), Value::String(b)) = (&original, &through) {
			assert!(a.ptr_eq(b));
		} else {
			panic!("expected both values to be strings");
		}
	}

	#[test]
	fn string_forms() {
		assert_eq!(string(&[Value::atom("atomValue")]).unwrap(), Value::string("atomValue"));
		assert_eq!(string(&[Value::Int(3)]).unwrap(), Value::string("3"));
		assert_eq!(string(&[Value::Float(2.51)]).unwrap(), Value::string("2.51"));
		assert_eq!(string(&[Value::Null]).unwrap(), Value::string("?"));
	}

	#[test]
	fn type_names() {
		assert_eq!(type_of(&[Value::Null]).unwrap(), Value::atom("null"));
		assert_eq!(type_of(&[Value::string("")]).unwrap(), Value::atom("string"));
		assert_eq!(type_of(&[Value::list(vec![])]).unwrap(), Value::atom("list"));
	}
}
