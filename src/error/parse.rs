use crate::lexer::Pos;

/// A tokenization or parsing error with the position it occurred at.
#[derive(thiserror::Error, Debug)]
#[error("Parse error at {pos}: {reason}")]
pub struct ParseError {
	pos:    Pos,
	reason: ParseErrorReason,
}

impl ParseError {
	pub fn new(pos: Pos, reason: ParseErrorReason) -> Self { Self { pos, reason } }
}

/// Reasons a program can fail to tokenize or parse.
#[derive(Debug)]
pub enum ParseErrorReason {
	/// A byte the lexer has no rule for.
	UnexpectedCharacter(char),
	/// A token that cannot start or continue the current production.
	UnexpectedToken(String),
	/// A specific token was required but something else was found.
	ExpectedToken { expected: String, found: String },
	/// Input ended in the middle of a production.
	UnexpectedEof(String),
	/// A number literal that does not fit the numeric types.
	InvalidNumber(String),
	/// `:` must be followed by a name to form an atom.
	ExpectedAtomName(String),
	/// The expression after `with` or `|>` must be a call.
	ExpectedCall(&'static str),
	/// A rest argument must close the argument list.
	RestArgNotLast,
}

impl std::fmt::Display for ParseErrorReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorReason::*;
		match self {
			UnexpectedCharacter(c) => write!(f, "Unexpected character {c:?}"),
			UnexpectedToken(t) => write!(f, "Unexpected token {t}"),
			ExpectedToken { expected, found } => write!(f, "Expected {expected}, found {found}"),
			UnexpectedEof(expected) => write!(f, "Unexpected end of input, expected {expected}"),
			InvalidNumber(raw) => write!(f, "Invalid number literal {raw}"),
			ExpectedAtomName(t) => write!(f, "Expected identifier after ':', found {t}"),
			ExpectedCall(form) => write!(f, "Expected a function call after {form}"),
			RestArgNotLast => write!(f, "A rest argument must be the last argument"),
		}
	}
}
