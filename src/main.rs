use oak::cli::*;
use palc::Parser;

fn main() {
	let runner = oak::Runner;

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = runner.run_file(&path) {
				eprintln!("{e}");
				std::process::exit(1);
			}
		}
		Mode::Repl => runner.run_prompt(),
	}
}
