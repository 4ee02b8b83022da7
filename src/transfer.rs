//! JSON export to a file download and import from a user-chosen file.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

use crate::components::mind_map::Graph;
use crate::config::EXPORT_FILE_NAME;
use crate::error::{ExportError, ImportError};

/// Pretty-printed document written by export.
pub fn export_json(graph: &Graph) -> Result<String, serde_json::Error> {
	serde_json::to_string_pretty(graph)
}

/// Parses a whole document before anything is replaced.
///
/// Missing or `null` `nodes`/`edges` read as empty.
pub fn import_json(text: &str) -> Result<Graph, ImportError> {
	Ok(serde_json::from_str(text)?)
}

impl Graph {
	/// Replaces this graph with the document in `text`.
	///
	/// Nothing changes unless the whole document parses.
	pub fn replace_from_json(&mut self, text: &str) -> Result<(), ImportError> {
		*self = import_json(text)?;
		Ok(())
	}
}

/// Downloads `graph` as `mindmap.json`.
pub fn export(graph: &Graph) -> Result<(), ExportError> {
	let text = export_json(graph)?;
	download_json(EXPORT_FILE_NAME, &text).map_err(|e| ExportError::Download(format!("{e:?}")))
}

/// Offers `contents` as a JSON file download named `file_name`.
pub fn download_json(file_name: &str, contents: &str) -> Result<(), JsValue> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("No document"))?;

	let parts = js_sys::Array::of1(&JsValue::from_str(contents));
	let options = BlobPropertyBag::new();
	options.set_type("application/json");
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(file_name);
	anchor.click();
	Url::revoke_object_url(&url)
}

/// Reads the whole file as UTF-8 text.
pub async fn read_text(file: &File) -> Result<String, ImportError> {
	let value = JsFuture::from(file.text())
		.await
		.map_err(|e| ImportError::Read(format!("{e:?}")))?;
	value
		.as_string()
		.ok_or_else(|| ImportError::Read("file contents are not text".into()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn export_then_import_is_identity() {
		let mut graph = Graph::default();
		let root = graph.seed_demo("Rust");
		graph.expand(&root);
		graph.seed_from_completion("Other", "body\nchild");

		let text = export_json(&graph).unwrap();
		assert!(text.contains("\n  \"nodes\": ["));
		assert_eq!(import_json(&text).unwrap(), graph);
	}

	#[test]
	fn missing_fields_default_to_empty() {
		let graph = import_json(r#"{"edges":[{"from":"a","to":"b"}]}"#).unwrap();
		assert!(graph.nodes.is_empty());
		assert_eq!(graph.edges.len(), 1);

		let graph = import_json(r#"{"nodes":[{"id":"a","title":"A","x":1,"y":2}]}"#).unwrap();
		assert_eq!(graph.nodes[0].body, None);
		assert_eq!(graph.nodes[0].x, 1.0);
		assert!(graph.edges.is_empty());

		assert_eq!(import_json(r#"{"nodes":null}"#).unwrap(), Graph::default());
		assert_eq!(import_json("{}").unwrap(), Graph::default());
	}

	#[test]
	fn invalid_json_is_rejected() {
		let err = import_json("{\"nodes\": [").unwrap_err();
		assert!(matches!(err, ImportError::Parse(_)));
		assert!(err.to_string().starts_with("Failed to parse file"));
	}

	#[test]
	fn failed_import_keeps_existing_graph() {
		let mut graph = Graph::default();
		graph.seed_demo("Rust");
		let before = graph.clone();

		assert!(graph.replace_from_json("{\"nodes\": [").is_err());
		assert!(graph.replace_from_json(r#"{"nodes": 3}"#).is_err());
		assert_eq!(graph, before);
	}

	#[test]
	fn successful_import_replaces_wholesale() {
		let mut graph = Graph::default();
		graph.seed_demo("Rust");

		graph
			.replace_from_json(r#"{"nodes":[{"id":"n","title":"New","x":0,"y":0}]}"#)
			.unwrap();
		assert_eq!(graph.nodes.len(), 1);
		assert_eq!(graph.nodes[0].title, "New");
		assert!(graph.edges.is_empty());
	}

	#[test]
	fn download_failure_reads_as_export_error() {
		let err = ExportError::Download("blocked".into());
		assert_eq!(err.to_string(), "Failed to export map: blocked");
	}

	#[test]
	fn absent_body_is_not_written() {
		let mut graph = Graph::default();
		graph.seed_from_completion("T", "root body\nchild");
		let text = export_json(&graph).unwrap();
		assert_eq!(text.matches("\"body\"").count(), 1);
	}
}
