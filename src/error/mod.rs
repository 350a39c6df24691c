pub mod parse;
pub mod runtime;

use std::rc::Rc;

use crate::lexer::Pos;

/// OakError is the top-level error type for everything that can go wrong
/// between reading source text and producing a value. Every variant
/// renders as `<Category> at <file>:<line>:<col>: <reason>`.
#[derive(thiserror::Error, Debug)]
pub enum OakError {
	/// Tokenization or parsing failure; evaluation never started
	#[error(transparent)]
	Parse(#[from] parse::ParseError),
	/// Evaluation failure: unbound names, type mismatches, bad indexes
	#[error(transparent)]
	Runtime(#[from] runtime::RuntimeError),
	/// Failure reported by a native function, e.g. an I/O error
	#[error("System error at {pos}: {reason}")]
	System { pos: Pos, reason: String },
	/// Failure outside any expression, e.g. an unreadable input stream;
	/// the position names the source that failed, at line 0
	#[error("System error at {pos}: {reason:#}")]
	Internal { pos: Pos, reason: anyhow::Error },
}

impl OakError {
	/// Wrap a host-side failure against position 0:0 of the source it
	/// belongs to, since no expression is involved
	pub fn internal(file: &str, reason: anyhow::Error) -> Self {
		Self::Internal { pos: Pos::new(&Rc::from(file), 0, 0), reason }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn internal_errors_render_with_a_position() {
		let err = OakError::internal("(input)", anyhow::anyhow!("boom"));
		assert_eq!(err.to_string(), "System error at (input):0:0: boom");
	}
}
