//! Browser storage: the session-scoped API credential and the durable graph.
//!
//! Both sit behind [`KeyValueStore`] so the logic runs against an in-memory
//! map in native tests and against `window.sessionStorage` /
//! `window.localStorage` in the browser.

use crate::components::mind_map::Graph;
use crate::config::{CREDENTIAL_KEY, GRAPH_KEY};
use crate::error::{CredentialError, StorageError};

/// String key/value storage with the Web Storage semantics.
pub trait KeyValueStore {
	/// Value under `key`, `None` if absent.
	fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
	/// Stores `value` under `key`, replacing any previous value.
	fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
	/// Deletes `key`; absent keys are not an error.
	fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Which Web Storage area to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
	/// `window.localStorage`; survives the browser session.
	Local,
	/// `window.sessionStorage`; cleared when the session ends.
	Session,
}

/// A `web_sys::Storage` area.
pub struct BrowserStorage(web_sys::Storage);

impl BrowserStorage {
	/// Binds to the window's `area`.
	pub fn open(area: StorageArea) -> Result<Self, StorageError> {
		let window = web_sys::window().ok_or(StorageError::Unavailable)?;
		let storage = match area {
			StorageArea::Local => window.local_storage(),
			StorageArea::Session => window.session_storage(),
		};
		storage
			.map_err(|e| StorageError::Access(format!("{e:?}")))?
			.map(Self)
			.ok_or(StorageError::Unavailable)
	}
}

/// Opens `area`, falling back to a store that keeps nothing.
pub fn open(area: StorageArea) -> Box<dyn KeyValueStore> {
	match BrowserStorage::open(area) {
		Ok(storage) => Box::new(storage),
		Err(e) => {
			log::warn!("{area:?} storage unavailable: {e}");
			Box::new(Detached)
		}
	}
}

/// Reads find nothing and writes fail.
struct Detached;

impl KeyValueStore for Detached {
	fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
		Ok(None)
	}

	fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
		Err(StorageError::Unavailable)
	}

	fn remove(&self, _key: &str) -> Result<(), StorageError> {
		Err(StorageError::Unavailable)
	}
}

impl KeyValueStore for BrowserStorage {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		self.0
			.get_item(key)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.0
			.set_item(key, value)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		self.0
			.remove_item(key)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}
}

/// Stored credential, if any.
pub fn load_credential(store: &dyn KeyValueStore) -> Option<String> {
	match store.get(CREDENTIAL_KEY) {
		Ok(value) => value,
		Err(e) => {
			log::warn!("could not read credential: {e}");
			None
		}
	}
}

/// Trims and stores `input`, returning the stored value.
///
/// Blank input is rejected before storage is touched.
pub fn save_credential(store: &dyn KeyValueStore, input: &str) -> Result<String, CredentialError> {
	let key = input.trim();
	if key.is_empty() {
		return Err(CredentialError::Empty);
	}
	if let Err(e) = store.set(CREDENTIAL_KEY, key) {
		// The in-memory copy still works for this page load.
		log::warn!("could not persist credential: {e}");
	}
	Ok(key.to_owned())
}

/// Forgets the stored credential.
pub fn clear_credential(store: &dyn KeyValueStore) {
	if let Err(e) = store.remove(CREDENTIAL_KEY) {
		log::warn!("could not remove credential: {e}");
	}
}

/// The saved graph; empty when nothing is stored or the entry is corrupt.
pub fn load_graph(store: &dyn KeyValueStore) -> Graph {
	let raw = match store.get(GRAPH_KEY) {
		Ok(Some(raw)) => raw,
		Ok(None) => return Graph::default(),
		Err(e) => {
			log::warn!("could not read saved map: {e}");
			return Graph::default();
		}
	};
	serde_json::from_str(&raw).unwrap_or_else(|e| {
		log::warn!("failed to parse saved map: {e}");
		Graph::default()
	})
}

/// Writes `graph` as compact JSON.
pub fn save_graph(store: &dyn KeyValueStore, graph: &Graph) -> Result<(), StorageError> {
	let raw = serde_json::to_string(graph)?;
	store.set(GRAPH_KEY, &raw)
}

#[cfg(test)]
mod memory {
	use std::cell::RefCell;
	use std::collections::HashMap;

	use super::KeyValueStore;
	use crate::error::StorageError;

	#[derive(Default)]
	pub struct MemoryStore(RefCell<HashMap<String, String>>);

	impl KeyValueStore for MemoryStore {
		fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
			Ok(self.0.borrow().get(key).cloned())
		}

		fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
			self.0.borrow_mut().insert(key.into(), value.into());
			Ok(())
		}

		fn remove(&self, key: &str) -> Result<(), StorageError> {
			self.0.borrow_mut().remove(key);
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::memory::MemoryStore;
	use super::*;

	#[test]
	fn blank_credential_leaves_store_untouched() {
		let store = MemoryStore::default();
		assert_eq!(save_credential(&store, "   "), Err(CredentialError::Empty));
		assert_eq!(load_credential(&store), None);

		save_credential(&store, "sk-old").unwrap();
		assert_eq!(save_credential(&store, "\t\n"), Err(CredentialError::Empty));
		assert_eq!(load_credential(&store).as_deref(), Some("sk-old"));
	}

	#[test]
	fn credential_is_trimmed_and_clearable() {
		let store = MemoryStore::default();
		assert_eq!(save_credential(&store, "  sk-abc \n").unwrap(), "sk-abc");
		assert_eq!(store.get(CREDENTIAL_KEY).unwrap().as_deref(), Some("sk-abc"));

		clear_credential(&store);
		assert_eq!(load_credential(&store), None);
	}

	#[test]
	fn graph_survives_save_and_load() {
		let store = MemoryStore::default();
		let mut graph = Graph::default();
		graph.seed_demo("Rust");

		save_graph(&store, &graph).unwrap();
		assert_eq!(load_graph(&store), graph);
	}

	#[test]
	fn one_handle_serves_every_save() {
		let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::default());
		let mut graph = Graph::default();
		for topic in ["a", "b", "c"] {
			graph.seed_demo(topic);
			save_graph(&*store, &graph).unwrap();
			assert_eq!(load_graph(&*store), graph);
		}
		assert_eq!(load_graph(&*store).nodes.len(), 9);
	}

	#[test]
	fn detached_store_still_accepts_credential() {
		assert_eq!(save_credential(&Detached, " sk-x ").unwrap(), "sk-x");
		assert_eq!(load_credential(&Detached), None);
		assert!(save_graph(&Detached, &Graph::default()).is_err());
	}

	#[test]
	fn missing_or_corrupt_graph_loads_empty() {
		let store = MemoryStore::default();
		assert_eq!(load_graph(&store), Graph::default());

		store.set(GRAPH_KEY, "{not json").unwrap();
		assert_eq!(load_graph(&store), Graph::default());
	}
}
