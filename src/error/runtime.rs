use crate::lexer::Pos;

/// An evaluation error with the position of the expression that raised it.
#[derive(thiserror::Error, Debug)]
#[error("Runtime error at {pos}: {reason}")]
pub struct RuntimeError {
	pos:    Pos,
	reason: RuntimeErrorReason,
}

impl RuntimeError {
	pub fn new(pos: Pos, reason: RuntimeErrorReason) -> Self { Self { pos, reason } }
}

/// Reasons evaluation can fail.
#[derive(Debug)]
pub enum RuntimeErrorReason {
	/// Lookup of a name with no binding anywhere in the scope chain.
	UndefinedName(String),
	/// A unary operator applied to a value kind it does not support.
	InvalidUnaryOperand { op: String, operand: &'static str },
	/// A binary operator applied to value kinds it does not support.
	InvalidBinaryOperands { op: String, left: &'static str, right: &'static str },
	/// Division or remainder with a zero divisor.
	DivisionByZero,
	/// A call where the callee is not a function.
	NotCallable(&'static str),
	/// Property access on a value that has no properties.
	NoProperty(&'static str),
	/// A list or string indexed by something other than an integer.
	InvalidIndex(String),
	/// An index assignment past the end of a list or string.
	IndexOutOfBounds { index: i64, len: usize },
	/// Assignment into something that is not a bindable pattern.
	InvalidAssignmentTarget(String),
	/// Destructuring a value that does not match the pattern's shape.
	CannotDestructure { pattern: &'static str, value: &'static str },
	/// An error reported by a native function.
	Native(String),
}

impl std::fmt::Display for RuntimeErrorReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use RuntimeErrorReason::*;
		match self {
			UndefinedName(name) => write!(f, "{name} is not defined"),
			InvalidUnaryOperand { op, operand } => write!(f, "Cannot apply {op} to a {operand}"),
			InvalidBinaryOperands { op, left, right } => {
				write!(f, "Cannot apply {op} to a {left} and a {right}")
			}
			DivisionByZero => write!(f, "Division by zero"),
			NotCallable(kind) => write!(f, "A {kind} is not a function"),
			NoProperty(kind) => write!(f, "A {kind} has no properties"),
			InvalidIndex(key) => write!(f, "{key} cannot index a sequence"),
			IndexOutOfBounds { index, len } => {
				write!(f, "Index {index} is out of bounds for length {len}")
			}
			InvalidAssignmentTarget(target) => write!(f, "Cannot assign to {target}"),
			CannotDestructure { pattern, value } => {
				write!(f, "Cannot destructure a {value} with a {pattern} pattern")
			}
			Native(reason) => write!(f, "{reason}"),
		}
	}
}
