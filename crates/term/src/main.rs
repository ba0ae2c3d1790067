//! The trellis binary: one grammar prompt per invocation.
//!
//! Draws the session on stderr and prints the committed value on stdout, so
//! `$(trellis --strict cmds.toml)` composes in scripts.

#![allow(unused_crate_dependencies, reason = "the binary shares this manifest with the library")]

use clap::Parser;
use trellis_term::cli::{self, Cli};
use trellis_term::{Session, SessionError};

fn main() -> anyhow::Result<()> {
	let Cli {
		grammar,
		prompt,
		rows,
		strict,
		heading,
		log,
	} = Cli::parse();

	cli::init_logging(log.as_deref())?;

	let grammar = match grammar {
		Some(path) => cli::load_grammar(&path)?,
		None => cli::demo_grammar(),
	};

	let mut session = Session::new(&grammar).prompt(prompt).max_visible(rows).strict(strict);
	if let Some(heading) = heading {
		session = session.heading(heading);
	}

	match session.run() {
		Ok(choice) => {
			println!("{choice}");
			Ok(())
		}
		// Conventional interrupt status; the session already restored the
		// terminal.
		Err(SessionError::Interrupted) => std::process::exit(130),
		Err(err) => Err(err.into()),
	}
}
