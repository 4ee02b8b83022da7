use uuid::Uuid;

use super::types::{Edge, Graph, Node};

/// Top-left slot of the first node; later nodes cascade diagonally from it.
pub const ORIGIN_X: f64 = 200.0;
pub const ORIGIN_Y: f64 = 100.0;
pub const CASCADE_STEP: f64 = 30.0;

/// Completion lines after the root line that become child nodes.
pub const MAX_COMPLETION_CHILDREN: usize = 4;

const DEMO_ROOT_BODY: &str = "Root topic";
const DEMO_CHILDREN: [(&str, &str); 2] = [("A", "Detail A"), ("B", "Detail B")];
const EXPAND_SUFFIX: &str = "more";
const EXPAND_BODY: &str = "More information";

fn next_id() -> String {
	Uuid::new_v4().to_string()
}

impl Graph {
	/// Node with `id`, if present.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Appends a node in the next cascade slot and returns its id.
	pub fn add_node(&mut self, title: impl Into<String>, body: Option<String>) -> String {
		let slot = self.nodes.len() as f64;
		let id = next_id();
		self.nodes.push(Node {
			id: id.clone(),
			title: title.into(),
			body,
			x: ORIGIN_X + slot * CASCADE_STEP,
			y: ORIGIN_Y + slot * CASCADE_STEP,
		});
		id
	}

	/// Adds an edge; endpoints are not checked.
	pub fn connect(&mut self, from: &str, to: &str) {
		self.edges.push(Edge {
			from: from.to_owned(),
			to: to.to_owned(),
		});
	}

	/// Offline content: the topic plus two fixed children. Returns the root id.
	pub fn seed_demo(&mut self, topic: &str) -> String {
		let root = self.add_node(topic, Some(DEMO_ROOT_BODY.into()));
		for (suffix, body) in DEMO_CHILDREN {
			let child = self.add_node(format!("{topic} - {suffix}"), Some(body.into()));
			self.connect(&root, &child);
		}
		root
	}

	/// Builds a root and up to four children from completion text.
	///
	/// The first non-blank line becomes the root body (the topic when the
	/// text is blank); each following line becomes a child title.
	pub fn seed_from_completion(&mut self, topic: &str, text: &str) -> String {
		let mut lines = text.lines().filter(|l| !l.trim().is_empty());
		let body = lines.next().unwrap_or(topic).to_owned();
		let root = self.add_node(topic, Some(body));
		for line in lines.take(MAX_COMPLETION_CHILDREN) {
			let child = self.add_node(line.trim(), None);
			self.connect(&root, &child);
		}
		root
	}

	/// Appends one placeholder child under `parent_id`.
	///
	/// Returns `None` and leaves the graph untouched if the parent is gone.
	pub fn expand(&mut self, parent_id: &str) -> Option<String> {
		let title = format!("{} {EXPAND_SUFFIX}", self.node(parent_id)?.title);
		let child = self.add_node(title, Some(EXPAND_BODY.into()));
		self.connect(parent_id, &child);
		Some(child)
	}
}
