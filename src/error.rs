//! Error types. `Display` is the text shown to the user.

use std::fmt::Display;

use thiserror::Error;

/// Failures of the generate action.
#[derive(Debug, Error)]
pub enum GenerateError {
	/// No topic entered.
	#[error("Please enter a topic")]
	EmptyTopic,

	/// HTTP 429 whose message mentions quota.
	#[error(
		"AI call failed (429: Quota exceeded).\n\
		 - Set up a payment method and credits under OpenAI Billing.\n\
		 - Check that the organization/project in use has credit.\n\
		 - If needed, try filling in the Organization/Project fields below.\n\
		 Details: {message}"
	)]
	QuotaExceeded {
		/// Message extracted from the response body.
		message: String,
	},

	/// Any other non-2xx response.
	#[error("AI call failed ({status}). Details: {message}")]
	Http {
		/// HTTP status code.
		status: u16,
		/// Message extracted from the response body.
		message: String,
	},

	/// The request never produced an HTTP response, or its body was unreadable.
	#[error("AI call failed: {0}")]
	Request(String),
}

/// Rejected API key input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
	/// Blank or whitespace-only key.
	#[error("Please enter a valid API key")]
	Empty,
}

/// Failures reading an imported map.
#[derive(Debug, Error)]
pub enum ImportError {
	/// Not a valid map document.
	#[error("Failed to parse file: {0}")]
	Parse(#[from] serde_json::Error),

	/// The browser could not read the file.
	#[error("Failed to read file: {0}")]
	Read(String),
}

/// Failures exporting the map.
#[derive(Debug, Error)]
pub enum ExportError {
	/// The graph could not be serialized.
	#[error("Failed to export map: {0}")]
	Serialize(#[from] serde_json::Error),

	/// The browser refused the download.
	#[error("Failed to export map: {0}")]
	Download(String),
}

/// Failures of the Web Storage areas.
#[derive(Debug, Error)]
pub enum StorageError {
	/// No window or no storage area.
	#[error("browser storage is unavailable")]
	Unavailable,

	/// The browser threw on access, e.g. quota or privacy mode.
	#[error("storage access failed: {0}")]
	Access(String),

	/// Stored text is not a valid graph.
	#[error("stored value is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Shows `err` in a blocking alert and mirrors it to the console.
pub fn report(err: &dyn Display) {
	let message = err.to_string();
	log::warn!("{message}");
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(&message);
	}
}
