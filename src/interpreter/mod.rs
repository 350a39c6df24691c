//! Oak's evaluator.
//!
//! A `Context` owns a root scope and walks parsed expression trees against
//! it. Each `eval` call runs the whole pipeline — bytes to tokens to nodes
//! to a value — and leaves the root scope as the programs left it, so a
//! sequence of calls behaves like lines typed into a repl.
//!
//! The walk is a straight recursive dispatch on the node variant. Scopes
//! are created at block entry and function call; function values capture
//! the scope handle that was current at their definition, not a copy of
//! it, so bindings added or mutated afterwards stay visible to calls.

pub mod native;
pub mod value;

use std::{cmp::Ordering, io::Read, path::PathBuf, rc::Rc};

use TokenKind::*;
use anyhow::Context as _;
use native::NativeError;
use value::{FnValue, NumberPair, ObjectMap, Value, number_pair};

use crate::{
	error::{OakError, runtime::{RuntimeError, RuntimeErrorReason::{self, *}}},
	lexer::{Lexer, Pos, TokenKind},
	parser::{Node, Parser},
	scope::{Scope, ScopeRef},
	utils::RcCell,
};

/// A persistent evaluation context: feed it programs, get values back
pub struct Context {
	/// Directory that host natives resolve relative paths against. The
	/// core never touches it, but it is part of the embedding contract.
	pub root_dir: PathBuf,
	/// The root scope. Seed or override bindings with
	/// `scope.borrow_mut().put(name, value)`.
	pub scope:    ScopeRef,
}

impl Context {
	pub fn new(root_dir: impl Into<PathBuf>) -> Self {
		Self { root_dir: root_dir.into(), scope: Scope::root() }
	}

	/// Install the core natives into the root scope
	pub fn load_builtins(&mut self) { native::install(&self.scope); }

	/// Evaluate a whole program from a reader, returning the value of its
	/// last top-level expression, or `?` for an empty program
	pub fn eval(&mut self, mut reader: impl Read) -> Result<Value, OakError> {
		let name = "(input)";
		let mut source = String::new();
		reader
			.read_to_string(&mut source)
			.context("Failed to read source input")
			.map_err(|e| OakError::internal(name, e))?;
		self.eval_source(name, &source)
	}

	/// Like [`Context::eval`], with a source name for error positions
	pub fn eval_source(&mut self, name: &str, source: &str) -> Result<Value, OakError> {
		let tokens = Lexer::new(name, source).tokenize()?;
		let nodes = Parser::new(tokens).parse()?;
		let scope = self.scope.clone();
		let mut last = Value::Null;
		for node in &nodes {
			last = self.eval_node(node, &scope)?;
		}
		Ok(last)
	}

	/// Block until work spawned by host natives has drained. The core
	/// spawns nothing; hosts that add concurrent natives hook in here.
	pub fn wait(&mut self) {}

	fn eval_node(&self, node: &Node, scope: &ScopeRef) -> Result<Value, OakError> {
		match node {
			Node::Empty { .. } => Ok(Value::Empty),
			Node::Null { .. } => Ok(Value::Null),
			Node::String { payload, .. } => Ok(Value::string(payload.clone())),
			Node::Int { payload, .. } => Ok(Value::Int(*payload)),
			Node::Float { payload, .. } => Ok(Value::Float(*payload)),
			Node::Bool { payload, .. } => Ok(Value::Bool(*payload)),
			Node::Atom { payload, .. } => Ok(Value::atom(payload)),
			Node::Identifier { payload, pos } => {
				scope.borrow().get(payload).ok_or_else(|| runtime_err(pos, UndefinedName(payload.clone())))
			}
			Node::List { elems, .. } => {
				let mut items = Vec::with_capacity(elems.len());
				for elem in elems {
					items.push(self.eval_node(elem, scope)?);
				}
				Ok(Value::list(items))
			}
			Node::Object { entries, .. } => {
				let mut map = ObjectMap::new();
				for entry in entries {
					let key = self.key_of(&entry.key, scope)?;
					let val = self.eval_node(&entry.val, scope)?;
					map.insert(key, val);
				}
				Ok(Value::Object(RcCell::new(map)))
			}
			Node::Block { exprs, .. } => {
				let block_scope = Scope::child(scope);
				let mut last = Value::Null;
				for expr in exprs {
					last = self.eval_node(expr, &block_scope)?;
				}
				Ok(last)
			}
			Node::Fn { name, args, rest_arg, body, .. } => {
				let func = Value::Fn(Rc::new(FnValue {
					name:     name.clone(),
					args:     args.clone(),
					rest_arg: rest_arg.clone(),
					body:     Rc::clone(body),
					scope:    scope.clone(),
				}));
				// a named function is also a local binding, which is what
				// lets it call itself
				if let Some(name) = name {
					scope.borrow_mut().put(name.clone(), func.clone());
				}
				Ok(func)
			}
			Node::Assignment { local, left, right, .. } => {
				let value = self.eval_node(right, scope)?;
				self.assign(left, value, *local, scope)
			}
			Node::PropertyAccess { left, right, pos } => {
				let target = self.eval_node(left, scope)?;
				self.get_property(&target, right, scope, pos)
			}
			Node::Unary { op, right, pos } => {
				let operand = self.eval_node(right, scope)?;
				match (op, &operand) {
					(Minus, Value::Int(n)) => Ok(Value::Int(-n)),
					(Minus, Value::Float(n)) => Ok(Value::Float(-n)),
					(Bang, Value::Bool(b)) => Ok(Value::Bool(!b)),
					_ => Err(runtime_err(pos, InvalidUnaryOperand {
						op:      op.lexeme(),
						operand: operand.type_name(),
					})),
				}
			}
			Node::Binary { op, left, right, pos } => self.eval_binary(op, left, right, scope, pos),
			Node::Call { callee, args, pos } => {
				let func = self.eval_node(callee, scope)?;
				let mut values = Vec::with_capacity(args.len());
				for arg in args {
					values.push(self.eval_node(arg, scope)?);
				}
				self.call(func, values, pos)
			}
			Node::If { cond, branches, .. } => {
				let cond = self.eval_node(cond, scope)?;
				for branch in branches {
					for target in &branch.targets {
						let target = self.eval_node(target, scope)?;
						if matches!(target, Value::Empty) || target == cond {
							return self.eval_node(&branch.body, scope);
						}
					}
				}
				Ok(Value::Null)
			}
		}
	}

	/// Drive an assignment or destructuring. Identifier targets return the
	/// assigned value, compound patterns return the source, and property
	/// targets return the mutated container.
	fn assign(&self, target: &Node, value: Value, local: bool, scope: &ScopeRef) -> Result<Value, OakError> {
		match target {
			// assigning to `_` discards the value
			Node::Empty { .. } => Ok(value),
			Node::Identifier { payload, .. } => {
				if local {
					scope.borrow_mut().put(payload.clone(), value.clone());
				} else {
					scope.borrow_mut().put_nonlocal(payload, value.clone());
				}
				Ok(value)
			}
			Node::List { elems, pos } => {
				let Value::List(items) = &value else {
					return Err(runtime_err(pos, CannotDestructure {
						pattern: "list",
						value:   value.type_name(),
					}));
				};
				for (i, target) in elems.iter().enumerate() {
					let item = items.borrow().get(i).cloned().unwrap_or(Value::Null);
					self.assign(target, item, local, scope)?;
				}
				Ok(value)
			}
			Node::Object { entries, pos } => {
				let Value::Object(map) = &value else {
					return Err(runtime_err(pos, CannotDestructure {
						pattern: "object",
						value:   value.type_name(),
					}));
				};
				for entry in entries {
					let key = self.key_of(&entry.key, scope)?;
					let item = map.borrow().get(&key).cloned().unwrap_or(Value::Null);
					self.assign(&entry.val, item, local, scope)?;
				}
				Ok(value)
			}
			Node::PropertyAccess { left, right, pos } => {
				let target = self.eval_node(left, scope)?;
				self.set_property(target, right, value, scope, pos)
			}
			other => Err(runtime_err(other.pos(), InvalidAssignmentTarget(other.to_string()))),
		}
	}

	/// Mutate one entry of a compound value in place and return the
	/// mutated container
	fn set_property(
		&self,
		target: Value,
		key_node: &Node,
		value: Value,
		scope: &ScopeRef,
		pos: &Pos,
	) -> Result<Value, OakError> {
		match &target {
			Value::Object(map) => {
				let key = self.key_of(key_node, scope)?;
				// assigning `_` deletes the key
				if matches!(value, Value::Empty) {
					map.borrow_mut().remove(&key);
				} else {
					map.borrow_mut().insert(key, value);
				}
			}
			Value::List(elems) => {
				let index = self.index_of(key_node, scope, pos)?;
				let mut elems = elems.borrow_mut();
				let len = elems.len();
				match usize::try_from(index).ok().filter(|&i| i <= len) {
					// assigning one past the end appends
					Some(i) if i == len => elems.push(value),
					Some(i) => elems[i] = value,
					None => return Err(runtime_err(pos, IndexOutOfBounds { index, len })),
				}
			}
			Value::String(bytes) => {
				let index = self.index_of(key_node, scope, pos)?;
				let Value::String(add) = &value else {
					return Err(runtime_err(pos, InvalidBinaryOperands {
						op:    ":=".to_string(),
						left:  "string",
						right: value.type_name(),
					}));
				};
				let add = add.borrow().clone();
				let mut bytes = bytes.borrow_mut();
				let len = bytes.len();
				let Some(start) = usize::try_from(index).ok().filter(|&i| i <= len) else {
					return Err(runtime_err(pos, IndexOutOfBounds { index, len }));
				};
				// overwrite from the start index, growing past the end
				for (i, byte) in add.into_iter().enumerate() {
					match bytes.get_mut(start + i) {
						Some(slot) => *slot = byte,
						None => bytes.push(byte),
					}
				}
			}
			other => return Err(runtime_err(pos, NoProperty(other.type_name()))),
		}
		Ok(target)
	}

	/// Read one entry of a compound value; out-of-range indexes and
	/// missing keys read as `?`
	fn get_property(
		&self,
		target: &Value,
		key_node: &Node,
		scope: &ScopeRef,
		pos: &Pos,
	) -> Result<Value, OakError> {
		match target {
			Value::Object(map) => {
				let key = self.key_of(key_node, scope)?;
				Ok(map.borrow().get(&key).cloned().unwrap_or(Value::Null))
			}
			Value::List(elems) => {
				let index = self.index_of(key_node, scope, pos)?;
				let elems = elems.borrow();
				Ok(usize::try_from(index).ok().and_then(|i| elems.get(i).cloned()).unwrap_or(Value::Null))
			}
			Value::String(bytes) => {
				let index = self.index_of(key_node, scope, pos)?;
				let bytes = bytes.borrow();
				Ok(usize::try_from(index)
					.ok()
					.and_then(|i| bytes.get(i))
					.map(|&b| Value::string(vec![b]))
					.unwrap_or(Value::Null))
			}
			other => Err(runtime_err(pos, NoProperty(other.type_name()))),
		}
	}

	/// The key a property expression names: a bare identifier is the key
	/// itself, anything else evaluates first
	fn key_of(&self, node: &Node, scope: &ScopeRef) -> Result<Vec<u8>, OakError> {
		Ok(self.key_value(node, scope)?.to_key())
	}

	fn key_value(&self, node: &Node, scope: &ScopeRef) -> Result<Value, OakError> {
		match node {
			Node::Identifier { payload, .. } => Ok(Value::string(payload.as_bytes())),
			_ => self.eval_node(node, scope),
		}
	}

	/// Lists and strings index by integer only
	fn index_of(&self, node: &Node, scope: &ScopeRef, pos: &Pos) -> Result<i64, OakError> {
		match self.key_value(node, scope)? {
			Value::Int(i) => Ok(i),
			other => Err(runtime_err(pos, InvalidIndex(other.to_string()))),
		}
	}

	fn eval_binary(
		&self,
		op: &TokenKind,
		left_node: &Node,
		right_node: &Node,
		scope: &ScopeRef,
		pos: &Pos,
	) -> Result<Value, OakError> {
		let left = self.eval_node(left_node, scope)?;
		// & and | short-circuit on booleans: the right side never runs
		// when the left alone decides
		match (op, &left) {
			(And, Value::Bool(false)) => return Ok(Value::Bool(false)),
			(Or, Value::Bool(true)) => return Ok(Value::Bool(true)),
			_ => {}
		}
		let right = self.eval_node(right_node, scope)?;

		let type_mismatch = |l: &Value, r: &Value| {
			runtime_err(pos, InvalidBinaryOperands {
				op:    op.lexeme(),
				left:  l.type_name(),
				right: r.type_name(),
			})
		};

		match op {
			Plus => match number_pair(&left, &right) {
				Some(NumberPair::Ints(a, b)) => Ok(Value::Int(a + b)),
				Some(NumberPair::Floats(a, b)) => Ok(Value::Float(a + b)),
				None => match (&left, &right) {
					(Value::String(a), Value::String(b)) => {
						let mut out = a.borrow().clone();
						out.extend_from_slice(&b.borrow());
						Ok(Value::string(out))
					}
					(Value::List(a), Value::List(b)) => {
						let mut out = a.borrow().clone();
						out.extend(b.borrow().iter().cloned());
						Ok(Value::list(out))
					}
					// merging objects is right-biased
					(Value::Object(a), Value::Object(b)) => {
						let mut out = a.borrow().clone();
						for (k, v) in b.borrow().iter() {
							out.insert(k.clone(), v.clone());
						}
						Ok(Value::Object(RcCell::new(out)))
					}
					_ => Err(type_mismatch(&left, &right)),
				},
			},
			Minus => match number_pair(&left, &right) {
				Some(NumberPair::Ints(a, b)) => Ok(Value::Int(a - b)),
				Some(NumberPair::Floats(a, b)) => Ok(Value::Float(a - b)),
				None => Err(type_mismatch(&left, &right)),
			},
			Star => match number_pair(&left, &right) {
				Some(NumberPair::Ints(a, b)) => Ok(Value::Int(a * b)),
				Some(NumberPair::Floats(a, b)) => Ok(Value::Float(a * b)),
				None => Err(type_mismatch(&left, &right)),
			},
			// division always produces a float
			Slash => match number_pair(&left, &right) {
				Some(NumberPair::Ints(_, 0)) => Err(runtime_err(pos, DivisionByZero)),
				Some(NumberPair::Floats(_, d)) if d == 0.0 => Err(runtime_err(pos, DivisionByZero)),
				Some(NumberPair::Ints(a, b)) => Ok(Value::Float(a as f64 / b as f64)),
				Some(NumberPair::Floats(a, b)) => Ok(Value::Float(a / b)),
				None => Err(type_mismatch(&left, &right)),
			},
			Percent => match number_pair(&left, &right) {
				Some(NumberPair::Ints(_, 0)) => Err(runtime_err(pos, DivisionByZero)),
				Some(NumberPair::Floats(_, d)) if d == 0.0 => Err(runtime_err(pos, DivisionByZero)),
				Some(NumberPair::Ints(a, b)) => Ok(Value::Int(a % b)),
				Some(NumberPair::Floats(a, b)) => Ok(Value::Float(a % b)),
				None => Err(type_mismatch(&left, &right)),
			},
			Greater | GreaterEqual | Less | LessEqual => match number_pair(&left, &right) {
				Some(NumberPair::Ints(a, b)) => Ok(Value::Bool(compare(op, a.partial_cmp(&b)))),
				Some(NumberPair::Floats(a, b)) => Ok(Value::Bool(compare(op, a.partial_cmp(&b)))),
				None => match (&left, &right) {
					// strings order bytewise; a prefix sorts first
					(Value::String(a), Value::String(b)) => {
						let ord = a.borrow().cmp(&b.borrow());
						Ok(Value::Bool(compare(op, Some(ord))))
					}
					_ => Err(type_mismatch(&left, &right)),
				},
			},
			Equal => Ok(Value::Bool(left == right)),
			BangEqual => Ok(Value::Bool(left != right)),
			And | Or | Xor => match (&left, &right) {
				(Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(match op {
					And => *a && *b,
					Or => *a || *b,
					_ => a != b,
				})),
				// bytewise over strings; the shorter side reads as
				// zero-padded to the longer length
				(Value::String(a), Value::String(b)) => {
					let (a, b) = (a.borrow(), b.borrow());
					let mut out = Vec::with_capacity(a.len().max(b.len()));
					for i in 0..a.len().max(b.len()) {
						let x = a.get(i).copied().unwrap_or(0);
						let y = b.get(i).copied().unwrap_or(0);
						out.push(match op {
							And => x & y,
							Or => x | y,
							_ => x ^ y,
						});
					}
					Ok(Value::string(out))
				}
				_ => Err(type_mismatch(&left, &right)),
			},
			// << mutates and returns its left operand
			PushArrow => match &left {
				Value::String(target) => {
					let add = match &right {
						Value::String(s) => s.borrow().clone(),
						other => other.to_key(),
					};
					target.borrow_mut().extend_from_slice(&add);
					Ok(left.clone())
				}
				Value::List(target) => {
					target.borrow_mut().push(right.clone());
					Ok(left.clone())
				}
				_ => Err(type_mismatch(&left, &right)),
			},
			_ => Err(type_mismatch(&left, &right)),
		}
	}

	/// Call a function value with already-evaluated arguments. Missing
	/// arguments bind as `?`; extras land in the rest argument if the
	/// function declares one, and vanish otherwise.
	fn call(&self, func: Value, args: Vec<Value>, pos: &Pos) -> Result<Value, OakError> {
		match func {
			Value::Fn(func) => {
				let call_scope = Scope::child(&func.scope);
				{
					let mut frame = call_scope.borrow_mut();
					for (i, name) in func.args.iter().enumerate() {
						frame.put(name.clone(), args.get(i).cloned().unwrap_or(Value::Null));
					}
					if let Some(rest) = &func.rest_arg {
						let rest_args = args.get(func.args.len()..).unwrap_or(&[]).to_vec();
						frame.put(rest.clone(), Value::list(rest_args));
					}
				}
				self.eval_node(&func.body, &call_scope)
			}
			Value::Native(native) => (native.func)(&args).map_err(|e| match e {
				NativeError::Type(reason) => runtime_err(pos, Native(reason)),
				NativeError::System(reason) => OakError::System { pos: pos.clone(), reason },
			}),
			other => Err(runtime_err(pos, NotCallable(other.type_name()))),
		}
	}
}

fn runtime_err(pos: &Pos, reason: RuntimeErrorReason) -> OakError {
	RuntimeError::new(pos.clone(), reason).into()
}

fn compare(op: &TokenKind, ord: Option<Ordering>) -> bool {
	let Some(ord) = ord else {
		return false;
	};
	match op {
		Greater => ord.is_gt(),
		GreaterEqual => ord.is_ge(),
		Less => ord.is_lt(),
		LessEqual => ord.is_le(),
		_ => false,
	}
}
