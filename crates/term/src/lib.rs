//! Terminal frontend for trellis grammar prompts.
//!
//! Wires the pure matching logic from `trellis-grammar` to a real terminal:
//! keystroke decoding, the fixed-height suggestion panel, and the editing
//! session that runs them in a loop. The session core is generic over its
//! key source and byte sink, so everything here is testable without a tty.

pub mod cli;
pub mod key;
pub mod panel;
pub mod session;

pub use key::{Key, KeySource, TerminalKeys};
pub use session::{Session, SessionError};
