use super::types::Graph;

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
pub const NODE_WIDTH: f64 = 120.0;
pub const NODE_HEIGHT: f64 = 40.0;
pub const NODE_CORNER: f64 = 6.0;
pub const LABEL_X: f64 = 10.0;
pub const LABEL_Y: f64 = 22.0;

// Edges attach at this offset from a node's top-left corner.
const ANCHOR_X: f64 = 50.0;
const ANCHOR_Y: f64 = 20.0;

/// Placeholder frame shown while the map is empty.
pub const EMPTY_FRAME: (f64, f64, f64, f64) = (50.0, 50.0, 700.0, 500.0);
pub const EMPTY_HINT: &str = "Enter a topic and press Generate to start your mind map";

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeLine {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeBox {
	pub id: String,
	pub title: String,
	pub x: f64,
	pub y: f64,
}

impl NodeBox {
	pub fn transform(&self) -> String {
		format!("translate({}, {})", self.x, self.y)
	}
}

/// Everything the SVG layer draws, computed from the graph alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub lines: Vec<EdgeLine>,
	pub boxes: Vec<NodeBox>,
}

impl Scene {
	pub fn is_empty(&self) -> bool {
		self.boxes.is_empty()
	}
}

pub fn scene(graph: &Graph) -> Scene {
	Scene {
		lines: edge_lines(graph),
		boxes: graph
			.nodes
			.iter()
			.map(|n| NodeBox {
				id: n.id.clone(),
				title: n.title.clone(),
				x: n.x,
				y: n.y,
			})
			.collect(),
	}
}

/// One line per edge whose endpoints both exist; dangling edges are dropped.
fn edge_lines(graph: &Graph) -> Vec<EdgeLine> {
	graph
		.edges
		.iter()
		.filter_map(|edge| {
			let (from, to) = (graph.node(&edge.from)?, graph.node(&edge.to)?);
			Some(EdgeLine {
				x1: from.x + ANCHOR_X,
				y1: from.y + ANCHOR_Y,
				x2: to.x + ANCHOR_X,
				y2: to.y + ANCHOR_Y,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::mind_map::{Edge, Node};

	fn node(id: &str, x: f64, y: f64) -> Node {
		Node {
			id: id.into(),
			title: id.to_uppercase(),
			body: None,
			x,
			y,
		}
	}

	fn edge(from: &str, to: &str) -> Edge {
		Edge {
			from: from.into(),
			to: to.into(),
		}
	}

	#[test]
	fn lines_join_anchor_points() {
		let graph = Graph {
			nodes: vec![node("a", 200.0, 100.0), node("b", 230.0, 130.0)],
			edges: vec![edge("a", "b")],
		};

		let scene = scene(&graph);
		assert_eq!(
			scene.lines,
			[EdgeLine {
				x1: 250.0,
				y1: 120.0,
				x2: 280.0,
				y2: 150.0
			}]
		);
		assert_eq!(scene.boxes[1].transform(), "translate(230, 130)");
		assert_eq!(scene.boxes[1].title, "B");
	}

	#[test]
	fn dangling_edges_are_skipped() {
		let graph = Graph {
			nodes: vec![node("a", 0.0, 0.0), node("b", 10.0, 10.0)],
			edges: vec![
				edge("a", "missing"),
				edge("missing", "b"),
				edge("a", "b"),
				edge("a", "b"),
			],
		};

		let scene = scene(&graph);
		assert_eq!(scene.lines.len(), 2);
		assert_eq!(scene.boxes.len(), 2);
	}

	#[test]
	fn empty_graph_has_empty_scene() {
		let graph = Graph {
			nodes: vec![],
			edges: vec![edge("a", "b")],
		};
		let scene = scene(&graph);
		assert!(scene.is_empty());
		assert!(scene.lines.is_empty());
	}
}
