#[cfg(test)]
mod tests {
	use std::{fs::File, path::PathBuf};

	use oak::{Context, Value};

	#[test]
	fn eval_oak_file() {
		let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("test.oak");
		let mut ctx = Context::new(path.parent().unwrap());
		ctx.load_builtins();

		let value = ctx.eval(File::open(&path).unwrap()).unwrap();
		assert_eq!(
			value,
			Value::list(vec![
				Value::Int(20),
				Value::list(vec![
					Value::string("acorn"),
					Value::string("leaf"),
					Value::string("twig")
				]),
				Value::string("inventory: 20"),
			])
		);
		ctx.wait();
	}

	#[test]
	fn context_behaves_like_a_repl() {
		let mut ctx = Context::new(".");
		ctx.load_builtins();
		ctx.scope.borrow_mut().put("greeting", Value::string("hello"));

		assert_eq!(
			ctx.eval_source("(repl)", "greeting + ' world'").unwrap(),
			Value::string("hello world")
		);
		// a failed evaluation leaves the context usable
		assert!(ctx.eval_source("(repl)", "missing").is_err());
		assert_eq!(ctx.eval_source("(repl)", "len(greeting)").unwrap(), Value::Int(5));
	}
}
