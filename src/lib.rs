//! The core runtime of Oak, a small dynamic functional language.
//!
//! One program flows through three stages:
//!
//! ``` text
//! source bytes -> Lexer -> tokens -> Parser -> nodes -> eval(scope) -> Value
//! ```

//! ## Lexing
//!
//! Oak is newline-sensitive without the grammar knowing it: whenever a
//! newline follows a token that can end an expression, the lexer inserts a
//! `,` token. Statements in a file, elements of a list, entries of an
//! object, and expressions in a block are all just comma-separated, and
//! the commas are usually invisible.

//! ## Parsing
//!
//! A recursive descent parser with a precedence-climbing core for binary
//! expressions. `with` and `|>` do not survive parsing: both rewrite into
//! plain call nodes. The only lookahead trick is deciding whether `{`
//! opens a block or an object, which one token after the first inner
//! expression settles.

//! ## Evaluation
//!
//! A tree walk over a chain of scopes. Strings, lists, and objects share
//! by reference, functions capture the scope they were defined in, and
//! `:=` versus `<-` picks which frame an assignment writes to. A
//! [`Context`] keeps its root scope between calls, so embedders and the
//! repl can feed it programs one after another:
//!
//! ```
//! use oak::{Context, Value};
//!
//! let mut ctx = Context::new(".");
//! ctx.load_builtins();
//! ctx.eval_source("(demo)", "fn double(n) 2 * n").unwrap();
//! let result = ctx.eval_source("(demo)", "double(21)").unwrap();
//! assert_eq!(result, Value::Int(42));
//! ```

pub mod cli;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod scope;
mod runner;
mod utils;

pub use error::{OakError, parse::ParseError, runtime::RuntimeError};
pub use interpreter::{Context, native::NativeError, value::Value};
pub use lexer::Pos;
pub use runner::Runner;
pub use scope::{Scope, ScopeRef};
pub use utils::RcCell;

pub type Result<T> = std::result::Result<T, OakError>;
