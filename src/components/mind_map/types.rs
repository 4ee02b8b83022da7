use serde::{Deserialize, Deserializer, Serialize};

/// A single idea on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
	/// Unique within a map; kept verbatim on import.
	pub id: String,
	/// Text drawn in the box.
	pub title: String,
	/// Shown in the side panel when selected.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
	/// Left edge of the box.
	pub x: f64,
	/// Top edge of the box.
	pub y: f64,
}

/// Directed parent to child connection. Endpoints are not checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
	/// Parent node id.
	pub from: String,
	/// Child node id.
	pub to: String,
}

/// Nodes and edges together; the unit of persistence and export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
	/// Nodes in creation order.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub nodes: Vec<Node>,
	/// Edges in creation order.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub edges: Vec<Edge>,
}

// `null` reads the same as a missing field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
