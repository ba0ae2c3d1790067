//! The grammar forest: ordered, immutable, traversal-only.

/// One accepted token at a given depth of the grammar.
///
/// A node with no children is a terminal token; nothing can be typed past it.
/// Child order is preserved everywhere suggestions are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
	label: String,
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
	children: Vec<Node>,
}

impl Node {
	/// A terminal token.
	pub fn leaf(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			children: Vec::new(),
		}
	}

	/// A token followed by more tokens.
	pub fn branch(label: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
		Self {
			label: label.into(),
			children: children.into_iter().collect(),
		}
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn children(&self) -> &[Node] {
		&self.children
	}

	pub fn is_terminal(&self) -> bool {
		self.children.is_empty()
	}
}

/// An ordered forest of [`Node`] roots.
///
/// Built once per editing session and only ever traversed afterwards. Root
/// order is significant: suggestion order ties to it on rank ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
	roots: Vec<Node>,
}

impl Grammar {
	pub fn new(roots: impl IntoIterator<Item = Node>) -> Self {
		Self {
			roots: roots.into_iter().collect(),
		}
	}

	pub fn roots(&self) -> &[Node] {
		&self.roots
	}

	pub fn is_empty(&self) -> bool {
		self.roots.is_empty()
	}

	/// Strict validation: does `candidate` spell an exact root-to-node path?
	///
	/// Every space-separated segment must equal the label at its depth.
	/// Interior nodes are valid stopping points; extra or misspelled
	/// segments fail. This never consults the fuzzy matcher: a line the
	/// panel happily suggests from (say one with a trailing space) can still
	/// be rejected here.
	pub fn contains_path(&self, candidate: &str) -> bool {
		let segments: Vec<&str> = candidate.split(' ').collect();
		self.roots.iter().any(|root| matches_path(root, &segments))
	}
}

impl FromIterator<Node> for Grammar {
	fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
		Self::new(iter)
	}
}

fn matches_path(node: &Node, segments: &[&str]) -> bool {
	let Some((&segment, rest)) = segments.split_first() else {
		return false;
	};
	if node.label() != segment {
		return false;
	}
	if rest.is_empty() {
		return true;
	}
	node.children().iter().any(|child| matches_path(child, rest))
}

#[cfg(test)]
mod tests;
