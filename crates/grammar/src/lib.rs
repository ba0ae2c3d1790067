//! Tree-shaped command grammars with fuzzy completion ranking.
//!
//! A [`Grammar`] is an ordered forest of labeled nodes; every root-to-node
//! path spells one accepted multi-token command. [`suggest`] walks a
//! partially typed line through the forest and returns rank-sorted
//! completions for the token under the cursor, while
//! [`Grammar::contains_path`] answers the strict question of whether a
//! finished line is exactly one of the modeled commands. The two passes are
//! independent: a trailing space opens a node's children for suggestion, but
//! that same unfinished line never validates.

#![cfg_attr(test, allow(unused_crate_dependencies, reason = "bench-only and feature-gated dev-deps"))]

pub mod distance;
pub mod suggest;
pub mod tree;

pub use distance::completion_distance;
pub use suggest::{RANK_CUTOFF, Suggestion, suggest};
pub use tree::{Grammar, Node};
