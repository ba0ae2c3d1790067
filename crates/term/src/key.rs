//! Keystroke decoding.
//!
//! The session consumes [`Key`] values, already mapped onto editor
//! transitions; where they come from is behind [`KeySource`] so tests can
//! script a session without a terminal.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

/// One decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	/// Enter, either the CR or LF encoding.
	Commit,
	/// Backspace.
	EraseOne,
	Up,
	Down,
	/// Tab: copy the highlighted suggestion into the buffer.
	Fill,
	/// ctrl-w: drop the last token.
	EraseWord,
	/// A printable character.
	Char(char),
	/// ctrl-c.
	Interrupt,
	/// Anything else. Consumed without a state change.
	Other,
}

/// Blocking source of decoded keystrokes, one per call.
pub trait KeySource {
	fn next_key(&mut self) -> io::Result<Key>;
}

/// Decodes crossterm terminal events.
///
/// Key releases are dropped so hosts that report them (Windows, kitty) do
/// not double-fire transitions; non-key events are skipped entirely.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
	fn next_key(&mut self) -> io::Result<Key> {
		loop {
			match read()? {
				Event::Key(key) if key.kind != KeyEventKind::Release => return Ok(decode(key)),
				_ => {}
			}
		}
	}
}

fn decode(key: KeyEvent) -> Key {
	if key.modifiers.contains(KeyModifiers::CONTROL) {
		return match key.code {
			KeyCode::Char('c') => Key::Interrupt,
			KeyCode::Char('w') => Key::EraseWord,
			_ => Key::Other,
		};
	}
	if key.modifiers.contains(KeyModifiers::ALT) {
		return Key::Other;
	}
	match key.code {
		KeyCode::Enter => Key::Commit,
		KeyCode::Backspace => Key::EraseOne,
		KeyCode::Up => Key::Up,
		KeyCode::Down => Key::Down,
		KeyCode::Tab => Key::Fill,
		KeyCode::Char(c) if !c.is_control() => Key::Char(c),
		_ => Key::Other,
	}
}
