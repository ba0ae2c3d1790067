//! CLI schema, grammar-file loading, and logging setup for the binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use trellis_grammar::{Grammar, Node};

use crate::session::{DEFAULT_MAX_VISIBLE, DEFAULT_PROMPT};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(about = "Pick one command from a tree-shaped grammar, with fuzzy completion")]
#[command(version)]
pub struct Cli {
	/// TOML grammar file of [[command]] tables (omit for the built-in demo)
	pub grammar: Option<PathBuf>,

	/// Prompt printed before the input line
	#[arg(long, default_value = DEFAULT_PROMPT)]
	pub prompt: String,

	/// Suggestion panel height
	#[arg(long, default_value_t = DEFAULT_MAX_VISIBLE)]
	pub rows: u16,

	/// Only accept an exact grammar path, re-prompting otherwise
	#[arg(long)]
	pub strict: bool,

	/// Line printed once above the prompt
	#[arg(long)]
	pub heading: Option<String>,

	/// Write a debug log to this file (the terminal stays clean)
	#[arg(long, value_name = "PATH")]
	pub log: Option<PathBuf>,
}

/// On-disk grammar document: a list of `[[command]]` tables, each a label
/// plus optional nested children.
#[derive(Debug, Deserialize)]
struct GrammarFile {
	command: Vec<Node>,
}

pub fn load_grammar(path: &Path) -> anyhow::Result<Grammar> {
	let text = fs::read_to_string(path).with_context(|| format!("reading grammar file {}", path.display()))?;
	let file: GrammarFile =
		toml::from_str(&text).with_context(|| format!("parsing grammar file {}", path.display()))?;
	anyhow::ensure!(!file.command.is_empty(), "grammar file {} defines no commands", path.display());
	Ok(Grammar::new(file.command))
}

/// The grammar used when no file is given: enough shape to exercise every
/// transition, including a third level.
pub fn demo_grammar() -> Grammar {
	Grammar::new([
		Node::branch("device", [Node::leaf("list"), Node::leaf("attach"), Node::leaf("detach")]),
		Node::branch(
			"module",
			[
				Node::branch("install", [Node::leaf("local"), Node::leaf("remote")]),
				Node::leaf("search"),
				Node::leaf("remove"),
			],
		),
		Node::leaf("build"),
		Node::leaf("exit"),
	])
}

/// Logs go to a file when asked for, otherwise warnings-only on stderr;
/// the panel owns the terminal while a session runs, so nothing chatty may
/// share it.
pub fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
	match log_file {
		Some(path) => {
			let file = fs::File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
			let subscriber = tracing_subscriber::fmt()
				.with_max_level(tracing::Level::TRACE)
				.with_writer(std::sync::Mutex::new(file))
				.with_ansi(false)
				.finish();
			tracing::subscriber::set_global_default(subscriber)?;
		}
		None => {
			let subscriber = tracing_subscriber::fmt()
				.with_max_level(tracing::Level::WARN)
				.with_writer(std::io::stderr)
				.finish();
			tracing::subscriber::set_global_default(subscriber)?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn grammar_file_parses_nested_children() {
		let dir = std::env::temp_dir().join("trellis-cli-test");
		fs::create_dir_all(&dir).expect("temp dir");
		let path = dir.join("grammar.toml");
		fs::write(
			&path,
			r#"
				[[command]]
				label = "add"
				children = [{ label = "camera" }, { label = "sms" }]

				[[command]]
				label = "build"
			"#,
		)
		.expect("write grammar");

		let grammar = load_grammar(&path).expect("load grammar");
		assert!(grammar.contains_path("add camera"));
		assert!(grammar.contains_path("build"));
		assert!(!grammar.contains_path("camera"));
	}

	#[test]
	fn empty_grammar_file_is_rejected() {
		let dir = std::env::temp_dir().join("trellis-cli-test");
		fs::create_dir_all(&dir).expect("temp dir");
		let path = dir.join("empty.toml");
		fs::write(&path, "").expect("write grammar");
		assert!(load_grammar(&path).is_err());
	}

	#[test]
	fn demo_grammar_has_depth() {
		let grammar = demo_grammar();
		assert!(grammar.contains_path("module install remote"));
		assert!(grammar.contains_path("exit"));
	}
}
