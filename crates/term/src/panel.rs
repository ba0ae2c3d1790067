//! The fixed-height suggestion panel.
//!
//! All drawing is cursor-relative: the panel never learns absolute screen
//! coordinates, it only ever steps down into its reserved rows and back up
//! to the input line. Commands are queued against a generic writer so tests
//! capture frames as plain bytes.

use std::io::{self, Write};

use crossterm::cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

/// A suggestion panel of fixed height directly below the input line.
pub struct Panel {
	rows: u16,
	input_col: u16,
}

impl Panel {
	/// `rows` is the panel height; the input column is the prompt's width,
	/// so suggestions line up under the typed text.
	pub fn new(rows: u16, prompt: &str) -> Self {
		Self {
			rows: rows.max(1),
			input_col: prompt.len() as u16,
		}
	}

	/// Scrolls `rows` blank lines into existence below the cursor and prints
	/// the prompt, leaving the cursor at the end of the input line.
	pub fn init<W: Write>(&self, out: &mut W, prompt: &str) -> io::Result<()> {
		queue!(
			out,
			Print("\r\n".repeat(self.rows as usize)),
			MoveToPreviousLine(self.rows),
			Print(prompt),
		)
	}

	/// Draws one frame: every panel row first, then the input line.
	///
	/// The input line must be written last: that write is what parks the
	/// cursor at the right column for the next keystroke.
	pub fn draw<W: Write>(&self, out: &mut W, input: &str, suggestions: &[String], selected: usize) -> io::Result<()> {
		for row in 0..self.rows as usize {
			queue!(out, MoveToNextLine(1), Clear(ClearType::UntilNewLine))?;
			let Some(text) = suggestions.get(row) else {
				continue;
			};
			if row + 1 == selected {
				queue!(
					out,
					SetForegroundColor(Color::Blue),
					Print("-"),
					MoveToColumn(self.input_col),
					Print(text),
					ResetColor,
				)?;
			} else {
				queue!(out, MoveToColumn(self.input_col), Print(text))?;
			}
		}

		queue!(
			out,
			MoveToPreviousLine(self.rows),
			MoveToColumn(self.input_col),
			Clear(ClearType::UntilNewLine),
			Print(input),
		)?;
		out.flush()
	}

	/// Clears every panel row, redraws the final committed line, and leaves
	/// the cursor on a fresh line below it.
	pub fn close<W: Write>(&self, out: &mut W, line: &str) -> io::Result<()> {
		for _ in 0..self.rows {
			queue!(out, MoveToNextLine(1), Clear(ClearType::CurrentLine))?;
		}
		queue!(
			out,
			MoveToPreviousLine(self.rows),
			MoveToColumn(self.input_col),
			Clear(ClearType::UntilNewLine),
			Print(line),
			Print("\r\n"),
		)?;
		out.flush()
	}
}
