//! The editing session: a keystroke-driven state machine over one buffer.
//!
//! One session owns the terminal for its whole lifetime. Each iteration
//! consumes a single key, mutates the state, recomputes suggestions from
//! scratch, and redraws; the only accepting transition is Commit. Strict
//! mode wraps the whole thing in a validate-or-reprompt loop.

use std::io::{self, Write};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use thiserror::Error;
use tracing::{debug, trace};
use trellis_grammar::{Grammar, suggest};

use crate::key::{Key, KeySource, TerminalKeys};
use crate::panel::Panel;

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_MAX_VISIBLE: u16 = 5;

const REJECTION_NOTICE: &str = "input was not recognised";

#[derive(Debug, Error)]
pub enum SessionError {
	/// ctrl-c while the session owned the terminal. The panel is torn down
	/// and the terminal restored before this is returned; whether to abort
	/// the process is the caller's call.
	#[error("interrupted")]
	Interrupted,
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// One interactive grammar-constrained prompt.
///
/// Built with defaults and adjusted builder-style:
///
/// ```no_run
/// use trellis_grammar::{Grammar, Node};
/// use trellis_term::Session;
///
/// let grammar = Grammar::new([Node::leaf("yes"), Node::leaf("no")]);
/// let choice = Session::new(&grammar).strict(true).run()?;
/// # Ok::<(), trellis_term::SessionError>(())
/// ```
pub struct Session<'g> {
	grammar: &'g Grammar,
	prompt: String,
	max_visible: u16,
	strict: bool,
	heading: Option<String>,
}

impl<'g> Session<'g> {
	pub fn new(grammar: &'g Grammar) -> Self {
		Self {
			grammar,
			prompt: DEFAULT_PROMPT.to_string(),
			max_visible: DEFAULT_MAX_VISIBLE,
			strict: false,
			heading: None,
		}
	}

	/// Prompt text drawn before the input; suggestions align to its width.
	pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = prompt.into();
		self
	}

	/// Height of the suggestion panel. Clamped to at least one row.
	pub fn max_visible(mut self, rows: u16) -> Self {
		self.max_visible = rows.max(1);
		self
	}

	/// Require the committed value to be an exact grammar path, re-prompting
	/// with a rejection notice otherwise.
	pub fn strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}

	/// Line printed once above the session, before the first prompt.
	pub fn heading(mut self, heading: impl Into<String>) -> Self {
		self.heading = Some(heading.into());
		self
	}

	/// Runs against the real terminal: raw mode for the whole session, keys
	/// from the terminal, frames to stderr (stdout stays free for the
	/// caller's own output). Raw mode is restored on every path out,
	/// including errors (the guard drops either way).
	pub fn run(&self) -> Result<String, SessionError> {
		let _raw = RawMode::enter()?;
		self.run_with(&mut TerminalKeys, &mut io::stderr())
	}

	/// Runs against any key source and byte sink. This is the entire editor;
	/// [`Session::run`] only supplies the terminal plumbing around it.
	pub fn run_with<K: KeySource, W: Write>(&self, keys: &mut K, out: &mut W) -> Result<String, SessionError> {
		if let Some(heading) = &self.heading {
			out.write_all(heading.as_bytes())?;
			out.write_all(b"\r\n")?;
		}

		let panel = Panel::new(self.max_visible, &self.prompt);
		loop {
			let choice = self.collect(&panel, keys, out)?;
			if !self.strict || self.grammar.contains_path(&choice) {
				debug!(value = %choice, "session committed");
				return Ok(choice);
			}
			debug!(value = %choice, "strict session rejected value");
			out.write_all(REJECTION_NOTICE.as_bytes())?;
			out.write_all(b"\r\n")?;
		}
	}

	/// One full input collection: init the panel, run the key loop until a
	/// commit or interrupt, tear the panel down.
	fn collect<K: KeySource, W: Write>(&self, panel: &Panel, keys: &mut K, out: &mut W) -> Result<String, SessionError> {
		panel.init(out, &self.prompt)?;

		let mut state = EditorState::seeded(self.grammar);
		panel.draw(out, &state.buffer, &state.suggestions, state.selected)?;

		loop {
			// draw() flushed, so the sink is current while we block here.
			let key = keys.next_key()?;
			trace!(?key, "keystroke");

			match key {
				Key::Commit => {
					let value = state.committed();
					panel.close(out, &value)?;
					return Ok(value);
				}
				Key::Interrupt => {
					panel.close(out, &state.buffer)?;
					return Err(SessionError::Interrupted);
				}
				other => state.apply(other, self.max_visible, self.grammar),
			}

			panel.draw(out, &state.buffer, &state.suggestions, state.selected)?;
		}
	}
}

/// Enables raw mode for the session's lifetime. On a legacy Windows console
/// this is also the moment virtual-terminal processing gets switched on, so
/// it must precede any escape-sequence output.
struct RawMode;

impl RawMode {
	fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		Ok(Self)
	}
}

impl Drop for RawMode {
	fn drop(&mut self) {
		let _ = disable_raw_mode();
	}
}

/// Live editor state between keystrokes.
struct EditorState {
	buffer: String,
	/// 0 commits the raw buffer; k > 0 commits `suggestions[k-1]`.
	selected: usize,
	/// Current suggestion texts, rank-sorted by the matcher.
	suggestions: Vec<String>,
	/// A separator is owed after a fill but not yet in the buffer.
	pending_space: bool,
}

impl EditorState {
	fn seeded(grammar: &Grammar) -> Self {
		Self {
			buffer: String::new(),
			selected: 0,
			suggestions: texts(grammar, ""),
			pending_space: false,
		}
	}

	fn apply(&mut self, key: Key, max_visible: u16, grammar: &Grammar) {
		match key {
			Key::EraseOne => {
				self.buffer.pop();
				self.pending_space = false;
			}
			Key::Char(c) => {
				// A fill left a separator owed; a literal space settles the
				// debt by itself.
				if std::mem::take(&mut self.pending_space) && c != ' ' {
					self.buffer.push(' ');
				}
				self.buffer.push(c);
			}
			Key::Up => self.selected = self.selected.saturating_sub(1),
			Key::Down => self.selected = (self.selected + 1).min(self.visible(max_visible)),
			Key::Fill => {
				if self.visible(max_visible) > 0 {
					self.buffer = self.suggestions[self.selected.saturating_sub(1)].clone();
					self.selected = 0;
					self.pending_space = true;
				}
			}
			Key::EraseWord => {
				match self.buffer.rfind(' ') {
					Some(space) => self.buffer.truncate(space),
					None => self.buffer.clear(),
				}
				self.selected = 0;
				self.pending_space = false;
			}
			Key::Commit | Key::Interrupt | Key::Other => {}
		}

		self.refresh(max_visible, grammar);
	}

	/// Rebuilds the suggestion list from the buffer and clamps the
	/// selection into the new visible range. The owed separator is part of
	/// the lookup (not the buffer), so a fresh fill already lists the next
	/// token's children instead of re-matching the token just filled.
	fn refresh(&mut self, max_visible: u16, grammar: &Grammar) {
		if self.pending_space {
			let line = format!("{} ", self.buffer);
			self.suggestions = texts(grammar, &line);
		} else {
			self.suggestions = texts(grammar, &self.buffer);
		}
		self.selected = self.selected.min(self.visible(max_visible));
	}

	fn visible(&self, max_visible: u16) -> usize {
		self.suggestions.len().min(max_visible as usize)
	}

	fn committed(&self) -> String {
		if self.selected == 0 {
			self.buffer.clone()
		} else {
			self.suggestions[self.selected - 1].clone()
		}
	}
}

fn texts(grammar: &Grammar, line: &str) -> Vec<String> {
	suggest(grammar, line).into_iter().map(|suggestion| suggestion.text).collect()
}
