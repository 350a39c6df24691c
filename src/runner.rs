use std::{fs::File, io::Write, path::Path};

use anyhow::Context as _;

use crate::{OakError, interpreter::Context};

/// Drives the two ways a user runs Oak: pointed at a source file, or
/// interactively at a prompt.
pub struct Runner;

impl Runner {
	/// Evaluate a whole source file. Relative paths inside the program
	/// resolve against the file's own directory.
	pub fn run_file(&self, path: &Path) -> crate::Result<()> {
		let file = File::open(path)
			.with_context(|| format!("Failed to open {}", path.display()))
			.map_err(|e| OakError::internal(&path.to_string_lossy(), e))?;
		let root_dir = path.parent().unwrap_or_else(|| Path::new("."));

		let mut ctx = Context::new(root_dir);
		ctx.load_builtins();
		ctx.eval(file)?;
		ctx.wait();
		Ok(())
	}

	/// Read-eval-print until end of input. The last value is kept around
	/// as `__`, and errors never end the session.
	pub fn run_prompt(&self) {
		let mut ctx = Context::new(".");
		ctx.load_builtins();

		let stdin = std::io::stdin();
		let mut input = String::new();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited oak repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}

			let line = input.trim();
			if line.is_empty() {
				continue;
			}
			match ctx.eval_source("(repl)", line) {
				Ok(value) => {
					println!("{value}");
					ctx.scope.borrow_mut().put("__", value);
				}
				Err(e) => println!("{e}"),
			}
		}
		ctx.wait();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn run_missing_file_reports_a_system_error() {
		let runner = Runner;
		let err = runner.run_file(Path::new("/definitely/not/here.oak")).unwrap_err();
		let message = err.to_string();
		assert!(
			message.starts_with("System error at /definitely/not/here.oak:0:0: Failed to open"),
			"unexpected message: {message}"
		);
	}
}
