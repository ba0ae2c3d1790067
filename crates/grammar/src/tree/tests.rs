use super::*;

fn sample() -> Grammar {
	Grammar::new([
		Node::branch("add", [Node::leaf("camera"), Node::leaf("sms")]),
		Node::leaf("build"),
	])
}

#[test]
fn leaf_and_branch_shapes() {
	let node = Node::branch("add", [Node::leaf("camera")]);
	assert_eq!(node.label(), "add");
	assert!(!node.is_terminal());
	assert_eq!(node.children().len(), 1);
	assert!(node.children()[0].is_terminal());
}

#[test]
fn accepts_full_paths() {
	let grammar = sample();
	assert!(grammar.contains_path("add camera"));
	assert!(grammar.contains_path("add sms"));
	assert!(grammar.contains_path("build"));
}

#[test]
fn accepts_interior_stopping_points() {
	// Any root-to-node path validates, not only root-to-leaf.
	assert!(sample().contains_path("add"));
}

#[test]
fn rejects_unknown_and_partial_tokens() {
	let grammar = sample();
	assert!(!grammar.contains_path("maybe"));
	assert!(!grammar.contains_path("add cam"));
	assert!(!grammar.contains_path("camera"));
	assert!(!grammar.contains_path("Add"));
}

#[test]
fn rejects_trailing_or_extra_segments() {
	let grammar = sample();
	assert!(!grammar.contains_path("add "));
	assert!(!grammar.contains_path("add camera extra"));
	assert!(!grammar.contains_path("build camera"));
}

#[test]
fn rejects_the_empty_string() {
	assert!(!sample().contains_path(""));
	assert!(!Grammar::default().contains_path(""));
}

#[test]
fn roots_preserve_order() {
	let grammar = sample();
	let labels: Vec<&str> = grammar.roots().iter().map(Node::label).collect();
	assert_eq!(labels, ["add", "build"]);
}

#[cfg(feature = "serde")]
#[test]
fn nodes_deserialize_with_defaulted_children() {
	#[derive(serde::Deserialize)]
	struct File {
		command: Vec<Node>,
	}

	let file: File = toml::from_str(
		r#"
			[[command]]
			label = "add"
			children = [{ label = "camera" }, { label = "sms" }]

			[[command]]
			label = "build"
		"#,
	)
	.expect("grammar document parses");

	let grammar = Grammar::new(file.command);
	assert_eq!(suggest_labels(&grammar), ["add", "build"]);
	assert!(grammar.contains_path("add camera"));
	assert!(grammar.roots()[1].is_terminal());
}

#[cfg(feature = "serde")]
fn suggest_labels(grammar: &Grammar) -> Vec<&str> {
	grammar.roots().iter().map(Node::label).collect()
}
