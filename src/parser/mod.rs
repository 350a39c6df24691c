//! Oak's parser: a comma-driven token stream in, a forest of expression
//! nodes out.
//!
//! There are no statements in Oak, so the grammar is one expression layer
//! deep, split across three levels:
//!
//! - `parse_unit`: literals, atoms, lists, braces (block or object),
//!   function literals, `if`, `with`, parenthesized blocks, unary `-`/`!`
//! - `parse_sub_node`: a unit plus its postfix chain of property accesses
//!   and calls
//! - `parse_node`: sub-nodes joined by binary operators (precedence
//!   climbing), pipes, and assignments
//!
//! Operator precedence, loosest to tightest:
//!
//! |Operators|Notes
//! --|--
//! `:=` `<-`|right-associative, looser than everything
//! `\|` `^`|
//! `&`|
//! `=` `!=`|
//! `<` `>` `<=` `>=`|
//! `\|>`|rewritten into the call on its right
//! `<<`|
//! `+` `-`|
//! `*` `/` `%`|
//! unary `-` `!`|
//! `.` and calls|postfix
//!
//! The pipe sits in the same climbing table as the other binary operators,
//! so it binds tighter than equality, comparison, and the logical
//! operators: `1 = 2 |> inc()` compares `1` against `inc(2)`. Its right
//! operand is only ever the call itself; operators tighter than the pipe
//! then apply to the rewritten result, so `n |> double() + 40` is
//! `double(n) + 40`.
//!
//! One wrinkle, settled by the original's behavior: an assignment showing
//! up as the right operand of a binary operator binds into that operand,
//! so `arr << x := 100` pushes the result of `x := 100`.
//!
//! A brace after anything but `fn` opens either a block or an object.
//! `{}` is always the empty object; otherwise the first expression decides:
//! a following `:` commits to an object, anything else commits to a block.
//! `fn {}` is the one exception, parsing as a function with an empty block
//! body.

pub mod node;

use std::rc::Rc;

use TokenKind::*;
pub use node::{IfBranch, Node, ObjectEntry};

use crate::{
	error::parse::{ParseError, ParseErrorReason::*},
	lexer::{Pos, Token, TokenKind},
};

/// A parser over the whole token stream of one program
pub(crate) struct Parser {
	tokens: Vec<Token>,
	index:  usize,
}

impl Parser {
	pub fn new(tokens: Vec<Token>) -> Self { Self { tokens, index: 0 } }

	/// Parse every top-level expression in the stream
	pub fn parse(mut self) -> Result<Vec<Node>, ParseError> {
		let mut nodes = Vec::new();
		while !self.is_eof() {
			nodes.push(self.parse_node()?);
			self.separator()?;
		}
		Ok(nodes)
	}

	fn is_eof(&self) -> bool { self.index >= self.tokens.len() }

	fn peek_kind(&self) -> Option<&TokenKind> { self.tokens.get(self.index).map(|t| &t.kind) }

	fn peek_ahead(&self, n: usize) -> Option<&TokenKind> { self.tokens.get(self.index + n).map(|t| &t.kind) }

	fn peek_pos(&self) -> Pos {
		self.tokens.get(self.index).map(|t| t.pos.clone()).unwrap_or_else(|| self.end_pos())
	}

	fn end_pos(&self) -> Pos {
		self.tokens.last().map(|t| t.pos.clone()).unwrap_or_else(|| Pos::new(&Rc::from("(input)"), 1, 1))
	}

	/// Take the next token, or fail with what was expected there
	fn next(&mut self, expected: &str) -> Result<Token, ParseError> {
		match self.tokens.get(self.index) {
			Some(tok) => {
				let tok = tok.clone();
				self.index += 1;
				Ok(tok)
			}
			None => Err(ParseError::new(self.end_pos(), UnexpectedEof(expected.to_string()))),
		}
	}

	fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
		match self.tokens.get(self.index) {
			Some(tok) if tok.kind == kind => self.next("a token"),
			Some(tok) => Err(ParseError::new(tok.pos.clone(), ExpectedToken {
				expected: kind.to_string(),
				found:    tok.kind.to_string(),
			})),
			None => Err(ParseError::new(self.end_pos(), UnexpectedEof(kind.to_string()))),
		}
	}

	/// Consume one separating comma. Separators are optional immediately
	/// before a closing delimiter and at end of input, which is also where
	/// the lexer never inserts them.
	fn separator(&mut self) -> Result<(), ParseError> {
		match self.peek_kind() {
			Some(Comma) => {
				self.index += 1;
				Ok(())
			}
			Some(RightParen | RightBracket | RightBrace) | None => Ok(()),
			Some(found) => Err(ParseError::new(self.peek_pos(), ExpectedToken {
				expected: "','".to_string(),
				found:    found.to_string(),
			})),
		}
	}

	/// Parse one whole expression: binary operators, pipes, and assignments
	/// over sub-nodes
	fn parse_node(&mut self) -> Result<Node, ParseError> {
		let mut node = self.parse_sub_node()?;
		loop {
			match self.peek_kind() {
				Some(Assign | NonlocalAssign) => return self.parse_assignment(node),
				Some(
					Plus | Minus | Star | Slash | Percent | And | Or | Xor | PushArrow | PipeArrow
					| Equal | BangEqual | Greater | GreaterEqual | Less | LessEqual,
				) => {
					node = self.parse_binary_expr(node, 0)?;
				}
				_ => break,
			}
		}
		Ok(node)
	}

	/// Assignments are right-associative and swallow the rest of the
	/// expression
	fn parse_assignment(&mut self, left: Node) -> Result<Node, ParseError> {
		let tok = self.next("':=' or '<-'")?;
		let local = tok.kind == Assign;
		let right = self.parse_node()?;
		Ok(Node::Assignment { local, left: Box::new(left), right: Box::new(right), pos: tok.pos })
	}

	/// Precedence climbing over binary operators
	fn parse_binary_expr(&mut self, mut left: Node, min_prec: u8) -> Result<Node, ParseError> {
		while let Some(prec) = self.peek_kind().and_then(binary_precedence).filter(|&p| p > min_prec) {
			let op_tok = self.next("an operator")?;
			if self.is_eof() {
				return Err(ParseError::new(self.end_pos(), UnexpectedEof("an operand".to_string())));
			}
			// a pipe rewrites into the call on its right and keeps climbing
			// with the rewritten call as the left operand
			if op_tok.kind == PipeArrow {
				left = self.parse_pipe(left, op_tok.pos)?;
				continue;
			}
			let mut right = self.parse_sub_node()?;
			// an assignment binds into the right operand: `arr << x := 100`
			// pushes the assigned value
			if matches!(self.peek_kind(), Some(Assign | NonlocalAssign)) {
				right = self.parse_assignment(right)?;
			} else if self.peek_kind().and_then(binary_precedence).is_some_and(|p| p > prec) {
				right = self.parse_binary_expr(right, prec)?;
			}
			left = Node::Binary {
				op:    op_tok.kind,
				left:  Box::new(left),
				right: Box::new(right),
				pos:   op_tok.pos,
			};
		}
		Ok(left)
	}

	/// `x |> f(a, b)` rewrites to `f(x, a, b)` at parse time
	fn parse_pipe(&mut self, left: Node, pos: Pos) -> Result<Node, ParseError> {
		match self.parse_sub_node()? {
			Node::Call { callee, mut args, pos: call_pos } => {
				args.insert(0, left);
				Ok(Node::Call { callee, args, pos: call_pos })
			}
			_ => Err(ParseError::new(pos, ExpectedCall("'|>'"))),
		}
	}

	/// A unit with its postfix chain: property accesses and calls
	fn parse_sub_node(&mut self) -> Result<Node, ParseError> {
		let mut node = self.parse_unit()?;
		loop {
			match self.peek_kind() {
				Some(Dot) => {
					let tok = self.next("'.'")?;
					let right = self.parse_unit()?;
					node = Node::PropertyAccess {
						left:  Box::new(node),
						right: Box::new(right),
						pos:   tok.pos,
					};
				}
				Some(LeftParen) => {
					let tok = self.next("'('")?;
					let mut args = Vec::new();
					loop {
						match self.peek_kind() {
							Some(RightParen) => break,
							None => {
								return Err(ParseError::new(
									self.end_pos(),
									UnexpectedEof("')'".to_string()),
								));
							}
							_ => {}
						}
						args.push(self.parse_node()?);
						self.separator()?;
					}
					self.expect(RightParen)?;
					node = Node::Call { callee: Box::new(node), args, pos: tok.pos };
				}
				_ => break,
			}
		}
		Ok(node)
	}

	/// The smallest complete expressions: literals and prefixed forms
	fn parse_unit(&mut self) -> Result<Node, ParseError> {
		let tok = self.next("an expression")?;
		let pos = tok.pos;
		match tok.kind {
			Question => Ok(Node::Null { pos }),
			Underscore => Ok(Node::Empty { pos }),
			True => Ok(Node::Bool { payload: true, pos }),
			False => Ok(Node::Bool { payload: false, pos }),
			StringLiteral(payload) => Ok(Node::String { payload, pos }),
			NumberLiteral(raw) => parse_number(raw, pos),
			Identifier(payload) => Ok(Node::Identifier { payload, pos }),
			Colon => self.parse_atom(pos),
			LeftBracket => self.parse_list(pos),
			LeftBrace => self.parse_brace(pos),
			Fn => self.parse_fn(pos),
			If => self.parse_if(pos),
			With => self.parse_with(pos),
			LeftParen => self.parse_paren_block(pos),
			op @ (Minus | Bang) => {
				let right = self.parse_sub_node()?;
				Ok(Node::Unary { op, right: Box::new(right), pos })
			}
			other => Err(ParseError::new(pos, UnexpectedToken(other.to_string()))),
		}
	}

	/// `:name`; keywords are fine as atom names
	fn parse_atom(&mut self, pos: Pos) -> Result<Node, ParseError> {
		let tok = self.next("an identifier")?;
		let payload = match tok.kind {
			Identifier(name) => name,
			If => "if".to_string(),
			Fn => "fn".to_string(),
			With => "with".to_string(),
			True => "true".to_string(),
			False => "false".to_string(),
			other => return Err(ParseError::new(tok.pos, ExpectedAtomName(other.to_string()))),
		};
		Ok(Node::Atom { payload, pos })
	}

	fn parse_list(&mut self, pos: Pos) -> Result<Node, ParseError> {
		let mut elems = Vec::new();
		loop {
			match self.peek_kind() {
				Some(RightBracket) => break,
				None => return Err(ParseError::new(self.end_pos(), UnexpectedEof("']'".to_string()))),
				_ => {}
			}
			elems.push(self.parse_node()?);
			self.separator()?;
		}
		self.expect(RightBracket)?;
		Ok(Node::List { elems, pos })
	}

	/// `{ ... }`: always an object when empty, otherwise decided by whether
	/// a `:` follows the first inner expression
	fn parse_brace(&mut self, pos: Pos) -> Result<Node, ParseError> {
		if let Some(RightBrace) = self.peek_kind() {
			self.expect(RightBrace)?;
			return Ok(Node::Object { entries: Vec::new(), pos });
		}

		let first = self.parse_node()?;
		if let Some(Colon) = self.peek_kind() {
			self.expect(Colon)?;
			let val = self.parse_node()?;
			self.separator()?;
			let mut entries = vec![ObjectEntry { key: first, val }];
			loop {
				match self.peek_kind() {
					Some(RightBrace) => break,
					None => return Err(ParseError::new(self.end_pos(), UnexpectedEof("'}'".to_string()))),
					_ => {}
				}
				let key = self.parse_node()?;
				self.expect(Colon)?;
				let val = self.parse_node()?;
				self.separator()?;
				entries.push(ObjectEntry { key, val });
			}
			self.expect(RightBrace)?;
			return Ok(Node::Object { entries, pos });
		}

		self.separator()?;
		let mut exprs = vec![first];
		loop {
			match self.peek_kind() {
				Some(RightBrace) => break,
				None => return Err(ParseError::new(self.end_pos(), UnexpectedEof("'}'".to_string()))),
				_ => {}
			}
			exprs.push(self.parse_node()?);
			self.separator()?;
		}
		self.expect(RightBrace)?;
		Ok(Node::Block { exprs, pos })
	}

	/// `fn name?(args)? body`
	fn parse_fn(&mut self, pos: Pos) -> Result<Node, ParseError> {
		let mut name = None;
		if let Some(Identifier(_)) = self.peek_kind() {
			if let Identifier(n) = self.next("a name")?.kind {
				name = Some(n);
			}
		}

		let mut args = Vec::new();
		let mut rest_arg = None;
		if let Some(LeftParen) = self.peek_kind() {
			self.expect(LeftParen)?;
			loop {
				match self.peek_kind() {
					Some(RightParen) => break,
					None => return Err(ParseError::new(self.end_pos(), UnexpectedEof("')'".to_string()))),
					_ => {}
				}
				let tok = self.next("an argument name")?;
				let arg = match tok.kind {
					Identifier(n) => n,
					Underscore => "_".to_string(),
					other => {
						return Err(ParseError::new(tok.pos, ExpectedToken {
							expected: "an argument name".to_string(),
							found:    other.to_string(),
						}));
					}
				};
				if let Some(Ellipsis) = self.peek_kind() {
					self.expect(Ellipsis)?;
					self.separator()?;
					rest_arg = Some(arg);
					if !matches!(self.peek_kind(), Some(RightParen)) {
						return Err(ParseError::new(self.peek_pos(), RestArgNotLast));
					}
					break;
				}
				args.push(arg);
				self.separator()?;
			}
			self.expect(RightParen)?;
		}

		// `fn {}` is a function with an empty block body; the empty-object
		// reading would make a function body out of nothing
		let body = if self.peek_kind() == Some(&LeftBrace) && self.peek_ahead(1) == Some(&RightBrace) {
			let brace = self.next("'{'")?;
			self.next("'}'")?;
			Node::Block { exprs: Vec::new(), pos: brace.pos }
		} else {
			self.parse_node()?
		};

		Ok(Node::Fn { name, args, rest_arg, body: Rc::new(body), pos })
	}

	/// `if cond? { target, ... -> body, ... }`
	fn parse_if(&mut self, pos: Pos) -> Result<Node, ParseError> {
		let cond = if let Some(LeftBrace) = self.peek_kind() {
			// a missing condition means "match against true"
			Node::Bool { payload: true, pos: pos.clone() }
		} else {
			self.parse_node()?
		};
		self.expect(LeftBrace)?;

		let mut branches = Vec::new();
		loop {
			match self.peek_kind() {
				Some(RightBrace) => break,
				None => return Err(ParseError::new(self.end_pos(), UnexpectedEof("'}'".to_string()))),
				_ => {}
			}
			let mut targets = vec![self.parse_node()?];
			while let Some(Comma) = self.peek_kind() {
				self.expect(Comma)?;
				targets.push(self.parse_node()?);
			}
			self.expect(BranchArrow)?;
			let body = self.parse_node()?;
			self.separator()?;
			branches.push(IfBranch { targets, body });
		}
		self.expect(RightBrace)?;

		Ok(Node::If { cond: Box::new(cond), branches, pos })
	}

	/// `with f(a, b) c` rewrites to `f(a, b, c)` at parse time
	fn parse_with(&mut self, pos: Pos) -> Result<Node, ParseError> {
		match self.parse_sub_node()? {
			Node::Call { callee, mut args, pos: call_pos } => {
				args.push(self.parse_node()?);
				Ok(Node::Call { callee, args, pos: call_pos })
			}
			_ => Err(ParseError::new(pos, ExpectedCall("'with'"))),
		}
	}

	/// `( ... )` is a block like `{ ... }`, without the object ambiguity
	fn parse_paren_block(&mut self, pos: Pos) -> Result<Node, ParseError> {
		let mut exprs = Vec::new();
		loop {
			match self.peek_kind() {
				Some(RightParen) => break,
				None => return Err(ParseError::new(self.end_pos(), UnexpectedEof("')'".to_string()))),
				_ => {}
			}
			exprs.push(self.parse_node()?);
			self.separator()?;
		}
		self.expect(RightParen)?;
		Ok(Node::Block { exprs, pos })
	}
}

fn parse_number(raw: String, pos: Pos) -> Result<Node, ParseError> {
	if raw.contains('.') {
		match raw.parse::<f64>() {
			Ok(payload) => Ok(Node::Float { payload, pos }),
			Err(_) => Err(ParseError::new(pos, InvalidNumber(raw))),
		}
	} else {
		match raw.parse::<i64>() {
			Ok(payload) => Ok(Node::Int { payload, pos }),
			Err(_) => Err(ParseError::new(pos, InvalidNumber(raw))),
		}
	}
}

fn binary_precedence(kind: &TokenKind) -> Option<u8> {
	match kind {
		Or | Xor => Some(1),
		And => Some(2),
		Equal | BangEqual => Some(3),
		Greater | GreaterEqual | Less | LessEqual => Some(4),
		PipeArrow => Some(5),
		PushArrow => Some(6),
		Plus | Minus => Some(7),
		Star | Slash | Percent => Some(8),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexer::Lexer;

	fn parse_all(input: &str) -> Vec<Node> {
		let tokens = Lexer::new("(test)", input).tokenize().unwrap();
		Parser::new(tokens).parse().unwrap()
	}

	fn parse_one(input: &str) -> Node {
		let mut nodes = parse_all(input);
		assert_eq!(nodes.len(), 1, "expected exactly one node from {input:?}");
		nodes.remove(0)
	}

	fn parse_err(input: &str) -> String {
		let tokens = Lexer::new("(test)", input).tokenize().unwrap();
		Parser::new(tokens).parse().unwrap_err().to_string()
	}

	#[test]
	fn literals() {
		assert_eq!(parse_one("?").to_string(), "?");
		assert_eq!(parse_one("_").to_string(), "_");
		assert_eq!(parse_one("64710").to_string(), "64710");
		assert_eq!(parse_one("3.141592").to_string(), "3.141592");
		assert_eq!(parse_one("true").to_string(), "true");
		assert_eq!(parse_one(":not_found_404").to_string(), ":not_found_404");
		assert_eq!(parse_one(":if").to_string(), ":if");
		assert_eq!(parse_one("'hi'").to_string(), "'hi'");
		assert!(matches!(parse_one("100.0"), Node::Float { .. }));
		assert!(matches!(parse_one("100"), Node::Int { .. }));
	}

	#[test]
	fn newlines_separate_expressions() {
		assert_eq!(parse_all("1\n2\n3").len(), 3);
		assert_eq!(parse_all("1, 2, 3").len(), 3);
		assert_eq!(parse_all("1 +\n2").len(), 1);
		assert_eq!(parse_all("x := 10 // note\nx + x").len(), 2);
	}

	#[test]
	fn multiplication_binds_tighter_than_addition() {
		let Node::Binary { op: Plus, right, .. } = parse_one("1 + 2 * 3") else {
			panic!("expected a + at the top");
		};
		assert!(matches!(*right, Node::Binary { op: Star, .. }));
	}

	#[test]
	fn push_binds_looser_than_addition() {
		let Node::Binary { op: PushArrow, right, .. } = parse_one("[2] << 1 + 3") else {
			panic!("expected a << at the top");
		};
		assert!(matches!(*right, Node::Binary { op: Plus, .. }));
	}

	#[test]
	fn push_absorbs_assignment_operand() {
		let Node::Binary { op: PushArrow, right, .. } = parse_one("arr << x := 100") else {
			panic!("expected a << at the top");
		};
		assert!(matches!(*right, Node::Assignment { local: true, .. }));
	}

	#[test]
	fn assignment_is_right_associative() {
		let Node::Assignment { local: true, right, .. } = parse_one("a := b := 10") else {
			panic!("expected a := at the top");
		};
		assert!(matches!(*right, Node::Assignment { local: true, .. }));
	}

	#[test]
	fn assignment_to_property_access() {
		let Node::Assignment { left, .. } = parse_one("obj.c.(1).:e := 'hello_e'") else {
			panic!("expected a := at the top");
		};
		assert!(matches!(*left, Node::PropertyAccess { .. }));
	}

	#[test]
	fn empty_braces_are_an_object() {
		assert!(matches!(parse_one("{}"), Node::Object { entries, .. } if entries.is_empty()));
	}

	#[test]
	fn braces_with_colon_are_an_object() {
		let Node::Object { entries, .. } = parse_one("{ a: 'ay', :be: 200, 100: ? }") else {
			panic!("expected an object");
		};
		assert_eq!(entries.len(), 3);
	}

	#[test]
	fn braces_without_colon_are_a_block() {
		let Node::Block { exprs, .. } = parse_one("{ x := 4, 3 }") else {
			panic!("expected a block");
		};
		assert_eq!(exprs.len(), 2);
	}

	#[test]
	fn fn_with_empty_braces_gets_a_block_body() {
		let Node::Fn { name, body, .. } = parse_one("fn do {}") else {
			panic!("expected a function");
		};
		assert_eq!(name.as_deref(), Some("do"));
		assert!(matches!(&*body, Node::Block { exprs, .. } if exprs.is_empty()));
	}

	#[test]
	fn fn_args_and_rest() {
		let Node::Fn { name, args, rest_arg, .. } = parse_one("fn getRest(first, rest...) rest") else {
			panic!("expected a function");
		};
		assert_eq!(name.as_deref(), Some("getRest"));
		assert_eq!(args, vec!["first".to_string()]);
		assert_eq!(rest_arg.as_deref(), Some("rest"));

		let Node::Fn { args, .. } = parse_one("fn getThird(_, _, third) third") else {
			panic!("expected a function");
		};
		assert_eq!(args, vec!["_".to_string(), "_".to_string(), "third".to_string()]);
	}

	#[test]
	fn fn_without_arg_list() {
		let Node::Fn { name, args, body, .. } = parse_one("fn defineX x := 10") else {
			panic!("expected a function");
		};
		assert_eq!(name.as_deref(), Some("defineX"));
		assert!(args.is_empty());
		assert!(matches!(&*body, Node::Assignment { .. }));
	}

	#[test]
	fn if_with_optional_condition() {
		let Node::If { cond, branches, .. } = parse_one("if { false -> 10, true -> 20 }") else {
			panic!("expected an if");
		};
		assert!(matches!(*cond, Node::Bool { payload: true, .. }));
		assert_eq!(branches.len(), 2);
	}

	#[test]
	fn if_branch_with_multiple_targets() {
		let Node::If { branches, .. } = parse_one("if 12 { 10 -> :a, 11, 5 + 7, { 10 + 3 } -> :b }") else {
			panic!("expected an if");
		};
		assert_eq!(branches.len(), 2);
		assert_eq!(branches[0].targets.len(), 1);
		assert_eq!(branches[1].targets.len(), 3);
	}

	#[test]
	fn with_appends_trailing_argument() {
		let Node::Call { callee, args, .. } = parse_one("with add(10) 40") else {
			panic!("expected a call");
		};
		assert!(matches!(*callee, Node::Identifier { .. }));
		assert_eq!(args.len(), 2);
	}

	#[test]
	fn pipe_inserts_first_argument() {
		let Node::Call { args, .. } = parse_one("'hello' |> append('world')") else {
			panic!("expected a call");
		};
		assert_eq!(args.len(), 2);
		assert!(matches!(&args[0], Node::String { .. }));
	}

	#[test]
	fn pipe_into_chained_call() {
		// the piped value lands in the outermost call
		let Node::Call { callee, args, .. } = parse_one("100 |> getAdder(lib)()") else {
			panic!("expected a call");
		};
		assert!(matches!(*callee, Node::Call { .. }));
		assert_eq!(args.len(), 1);
	}

	#[test]
	fn pipe_binds_tighter_than_equality_and_comparison() {
		let Node::Binary { op: Equal, right, .. } = parse_one("1 = 2 |> inc()") else {
			panic!("expected a = at the top");
		};
		assert!(matches!(*right, Node::Call { .. }));

		let Node::Binary { op: Less, left, .. } = parse_one("4 < 2 |> inc()") else {
			panic!("expected a < at the top");
		};
		assert!(matches!(*left, Node::Int { .. }));
	}

	#[test]
	fn pipe_binds_looser_than_addition() {
		// tighter operators apply to the piped result
		let Node::Binary { op: Plus, left, .. } = parse_one("n |> double() + 40") else {
			panic!("expected a + at the top");
		};
		assert!(matches!(*left, Node::Call { .. }));
	}

	#[test]
	fn trailing_separators_are_optional() {
		assert!(matches!(parse_one("[1, 2, 3]"), Node::List { elems, .. } if elems.len() == 3));
		assert!(matches!(parse_one("[1, 2, 3,]"), Node::List { elems, .. } if elems.len() == 3));
		assert!(matches!(parse_one("[\n1\n2\n3\n]"), Node::List { elems, .. } if elems.len() == 3));
	}

	#[test]
	fn destructuring_targets_parse() {
		let Node::Assignment { left, .. } = parse_one("[a, _, c] := x") else {
			panic!("expected a := at the top");
		};
		assert!(matches!(*left, Node::List { .. }));

		let Node::Assignment { left, .. } = parse_one("{a: a, 10 + 2: see} := obj") else {
			panic!("expected a := at the top");
		};
		assert!(matches!(*left, Node::Object { .. }));
	}

	#[test]
	fn parse_errors_carry_positions() {
		assert_eq!(parse_err("1 +"), "Parse error at (test):1:3: Unexpected end of input, expected an operand");
		assert_eq!(parse_err("[1, 2"), "Parse error at (test):1:5: Unexpected end of input, expected ']'");
		assert_eq!(parse_err("x := )"), "Parse error at (test):1:6: Unexpected token ')'");
		assert_eq!(
			parse_err("with 10 20"),
			"Parse error at (test):1:1: Expected a function call after 'with'"
		);
	}
}
