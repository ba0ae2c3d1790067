//! The fuzzy suggestion walk.
//!
//! Matches a partially typed line against the forest segment by segment.
//! Interior segments must match labels exactly (there is no fuzzy recovery
//! halfway down a path) while the final segment, the token under the
//! cursor, is matched approximately and ranked.

use crate::distance::completion_distance;
use crate::tree::{Grammar, Node};

/// Suggestions at or above this rank are noise, not plausible typos, and
/// are dropped from the result.
pub const RANK_CUTOFF: usize = 4;

/// One completion for the token under the cursor.
///
/// `text` is the full path, tokens joined by single spaces. Rank 0 is an
/// exact or structural match; higher is a worse approximation. Suggestions
/// are rebuilt from scratch on every buffer change and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
	pub text: String,
	pub rank: usize,
}

/// Walks `typed` through the grammar and returns ranked completions.
///
/// The line is split on single spaces, so a trailing space produces an
/// empty final segment, the "token boundary just completed" state, which
/// offers each node reachable at that depth at rank 0. The result is
/// stable-sorted ascending by rank (ties keep forest order) and filtered
/// at [`RANK_CUTOFF`].
pub fn suggest(grammar: &Grammar, typed: &str) -> Vec<Suggestion> {
	let segments: Vec<&str> = typed.split(' ').collect();
	let mut found = Vec::new();
	let mut path = Vec::new();
	for root in grammar.roots() {
		walk(root, &segments, &mut path, &mut found);
	}
	debug_assert!(path.is_empty());

	found.sort_by_key(|suggestion| suggestion.rank);
	found.retain(|suggestion| suggestion.rank < RANK_CUTOFF);
	found
}

fn walk<'g>(node: &'g Node, segments: &[&str], path: &mut Vec<&'g str>, found: &mut Vec<Suggestion>) {
	let Some((&segment, rest)) = segments.split_first() else {
		return;
	};

	if !rest.is_empty() {
		// Interior segment: exact label or nothing, and a terminal token is
		// a dead end: there is nothing to suggest past it.
		if node.label() != segment || node.is_terminal() {
			return;
		}
		path.push(node.label());
		for child in node.children() {
			walk(child, rest, path, found);
		}
		path.pop();
		return;
	}

	if segment == node.label() && !node.is_terminal() {
		// The token is already complete: offer what can follow it.
		for child in node.children() {
			found.push(Suggestion {
				text: joined(path, node.label(), Some(child.label())),
				rank: 0,
			});
		}
	} else if segment.is_empty() {
		found.push(Suggestion {
			text: joined(path, node.label(), None),
			rank: 0,
		});
	} else {
		found.push(Suggestion {
			text: joined(path, node.label(), None),
			rank: completion_distance(segment, node.label()),
		});
	}
}

fn joined(path: &[&str], label: &str, child: Option<&str>) -> String {
	let mut text = String::with_capacity(path.iter().map(|token| token.len() + 1).sum::<usize>() + label.len() + 16);
	for token in path {
		text.push_str(token);
		text.push(' ');
	}
	text.push_str(label);
	if let Some(child) = child {
		text.push(' ');
		text.push_str(child);
	}
	text
}
