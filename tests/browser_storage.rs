//! Browser-backed storage tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use mindmap_canvas::Graph;
use mindmap_canvas::config::{CREDENTIAL_KEY, GRAPH_KEY};
use mindmap_canvas::storage::{self, BrowserStorage, KeyValueStore, StorageArea};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn credential_lives_in_session_storage() {
	let session = BrowserStorage::open(StorageArea::Session).unwrap();
	storage::clear_credential(&session);

	assert!(storage::save_credential(&session, "   ").is_err());
	assert_eq!(session.get(CREDENTIAL_KEY).unwrap(), None);

	storage::save_credential(&session, " sk-test ").unwrap();
	assert_eq!(session.get(CREDENTIAL_KEY).unwrap().as_deref(), Some("sk-test"));

	let local = BrowserStorage::open(StorageArea::Local).unwrap();
	assert_eq!(local.get(CREDENTIAL_KEY).unwrap(), None);

	storage::clear_credential(&session);
	assert_eq!(storage::load_credential(&session), None);
}

#[wasm_bindgen_test]
fn graph_round_trips_through_local_storage() {
	let local = storage::open(StorageArea::Local);
	let graph: Graph = serde_json::from_str(
		r#"{"nodes":[{"id":"r","title":"Rust","x":200,"y":100}],"edges":[]}"#,
	)
	.unwrap();

	storage::save_graph(&*local, &graph).unwrap();
	assert!(local.get(GRAPH_KEY).unwrap().unwrap().contains("\"Rust\""));
	assert_eq!(storage::load_graph(&*local), graph);

	local.remove(GRAPH_KEY).unwrap();
	assert_eq!(storage::load_graph(&*local), Graph::default());
}
