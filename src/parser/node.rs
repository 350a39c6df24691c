use std::{fmt::Display, rc::Rc};

use crate::{lexer::{Pos, TokenKind}, utils::quote_bytes};

/// A syntax tree node. One Oak program parses to a flat sequence of these;
/// everything in Oak is an expression, so there is no statement layer.
///
/// Function bodies and nothing else sit behind an `Rc`: closures keep their
/// body alive past the program walk that defined them.
#[derive(Debug, Clone)]
pub enum Node {
	/// The empty value `_`
	Empty { pos: Pos },
	/// The null literal `?`
	Null { pos: Pos },
	/// A string literal, already unescaped to bytes
	String { payload: Vec<u8>, pos: Pos },
	Int { payload: i64, pos: Pos },
	Float { payload: f64, pos: Pos },
	Bool { payload: bool, pos: Pos },
	/// An atom literal like `:name`
	Atom { payload: String, pos: Pos },
	Identifier { payload: String, pos: Pos },
	List { elems: Vec<Node>, pos: Pos },
	Object { entries: Vec<ObjectEntry>, pos: Pos },
	/// A function literal, optionally named, optionally with a rest argument
	Fn {
		name:     Option<String>,
		args:     Vec<String>,
		rest_arg: Option<String>,
		body:     Rc<Node>,
		pos:      Pos,
	},
	/// `left := right` when local, `left <- right` when nonlocal
	Assignment { local: bool, left: Box<Node>, right: Box<Node>, pos: Pos },
	/// `left.right`, where right may be a name, a number, an atom, or a
	/// parenthesized expression
	PropertyAccess { left: Box<Node>, right: Box<Node>, pos: Pos },
	Unary { op: TokenKind, right: Box<Node>, pos: Pos },
	Binary { op: TokenKind, left: Box<Node>, right: Box<Node>, pos: Pos },
	Call { callee: Box<Node>, args: Vec<Node>, pos: Pos },
	/// `if cond { target, ... -> body, ... }`; a missing condition parses
	/// as the literal `true`
	If { cond: Box<Node>, branches: Vec<IfBranch>, pos: Pos },
	/// `{ expr, expr, ... }` or `( expr, expr, ... )`
	Block { exprs: Vec<Node>, pos: Pos },
}

/// One `key: value` pair in an object literal or object pattern
#[derive(Debug, Clone)]
pub struct ObjectEntry {
	pub key: Node,
	pub val: Node,
}

/// One branch of an if expression: any target matching the condition
/// selects the body
#[derive(Debug, Clone)]
pub struct IfBranch {
	pub targets: Vec<Node>,
	pub body:    Node,
}

impl Node {
	pub fn pos(&self) -> &Pos {
		use Node::*;
		match self {
			Empty { pos }
			| Null { pos }
			| String { pos, .. }
			| Int { pos, .. }
			| Float { pos, .. }
			| Bool { pos, .. }
			| Atom { pos, .. }
			| Identifier { pos, .. }
			| List { pos, .. }
			| Object { pos, .. }
			| Fn { pos, .. }
			| Assignment { pos, .. }
			| PropertyAccess { pos, .. }
			| Unary { pos, .. }
			| Binary { pos, .. }
			| Call { pos, .. }
			| If { pos, .. }
			| Block { pos, .. } => pos,
		}
	}
}

fn join(nodes: &[Node]) -> String {
	nodes.iter().map(Node::to_string).collect::<Vec<_>>().join(", ")
}

impl Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use Node::*;
		match self {
			Empty { .. } => write!(f, "_"),
			Null { .. } => write!(f, "?"),
			String { payload, .. } => write!(f, "{}", quote_bytes(payload)),
			Int { payload, .. } => write!(f, "{payload}"),
			Float { payload, .. } => write!(f, "{payload}"),
			Bool { payload, .. } => write!(f, "{payload}"),
			Atom { payload, .. } => write!(f, ":{payload}"),
			Identifier { payload, .. } => write!(f, "{payload}"),
			List { elems, .. } => write!(f, "[{}]", join(elems)),
			Object { entries, .. } => {
				let entries =
					entries.iter().map(|e| format!("{}: {}", e.key, e.val)).collect::<Vec<_>>().join(", ");
				write!(f, "{{ {entries} }}")
			}
			Fn { name, args, rest_arg, body, .. } => {
				match name {
					Some(name) => write!(f, "fn {name}(")?,
					None => write!(f, "fn(")?,
				}
				let mut args = args.iter().map(std::string::String::to_string).collect::<Vec<_>>();
				if let Some(rest) = rest_arg {
					args.push(format!("{rest}..."));
				}
				write!(f, "{}) {body}", args.join(", "))
			}
			Assignment { local: true, left, right, .. } => write!(f, "{left} := {right}"),
			Assignment { local: false, left, right, .. } => write!(f, "{left} <- {right}"),
			PropertyAccess { left, right, .. } => write!(f, "{left}.{right}"),
			Unary { op, right, .. } => write!(f, "{}{right}", op.lexeme()),
			Binary { op, left, right, .. } => write!(f, "{left} {} {right}", op.lexeme()),
			Call { callee, args, .. } => write!(f, "{callee}({})", join(args)),
			If { cond, branches, .. } => {
				let branches = branches
					.iter()
					.map(|b| format!("{} -> {}", join(&b.targets), b.body))
					.collect::<Vec<_>>()
					.join(", ");
				write!(f, "if {cond} {{{branches}}}")
			}
			Block { exprs, .. } => write!(f, "{{ {} }}", join(exprs)),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::rc::Rc;

	use super::*;
	use crate::lexer::Pos;

	fn at() -> Pos { Pos::new(&Rc::from("(test)"), 1, 1) }

	#[test]
	fn display_forms() {
		let list = Node::List {
			elems: vec![
				Node::Int { payload: 1, pos: at() },
				Node::Atom { payload: "two".into(), pos: at() },
				Node::String { payload: b"three".to_vec(), pos: at() },
			],
			pos:   at(),
		};
		assert_eq!(list.to_string(), "[1, :two, 'three']");

		let assign = Node::Assignment {
			local: true,
			left:  Box::new(Node::Identifier { payload: "x".into(), pos: at() }),
			right: Box::new(Node::Float { payload: 2.5, pos: at() }),
			pos:   at(),
		};
		assert_eq!(assign.to_string(), "x := 2.5");

		let f = Node::Fn {
			name:     Some("each".into()),
			args:     vec!["list".into()],
			rest_arg: Some("rest".into()),
			body:     Rc::new(Node::Block { exprs: vec![], pos: at() }),
			pos:      at(),
		};
		assert_eq!(f.to_string(), "fn each(list, rest...) {  }");
	}
}
