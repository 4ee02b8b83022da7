//! Chat-completion client for live generation.
//!
//! One POST per call, no retry and no timeout. The response text is handed
//! back raw; turning it into nodes is the graph's job.

use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

use crate::config::{COMPLETIONS_URL, GenerationSettings};
use crate::error::GenerateError;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
	model: &'a str,
	messages: [ChatMessage<'a>; 1],
	max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
	role: &'a str,
	content: &'a str,
}

impl<'a> ChatRequest<'a> {
	fn new(settings: &'a GenerationSettings, prompt: &'a str) -> Self {
		Self {
			model: &settings.model,
			messages: [ChatMessage {
				role: "user",
				content: prompt,
			}],
			max_tokens: settings.max_tokens,
		}
	}
}

/// How a generate request will be served.
#[derive(Debug, PartialEq, Eq)]
pub enum Plan<'a> {
	/// No credential: fixed placeholder nodes, no network.
	Demo,
	/// One live request authorized with this key.
	Live {
		/// Bearer credential for the request.
		api_key: &'a str,
	},
}

/// Picks demo or live mode for `topic`.
///
/// Only an empty topic is rejected; whitespace is a topic like any other.
pub fn plan<'a>(topic: &str, api_key: Option<&'a str>) -> Result<Plan<'a>, GenerateError> {
	if topic.is_empty() {
		return Err(GenerateError::EmptyTopic);
	}
	Ok(match api_key {
		Some(api_key) => Plan::Live { api_key },
		None => Plan::Demo,
	})
}

/// Sends `prompt` and returns the completion text.
pub async fn complete(
	settings: &GenerationSettings,
	api_key: &str,
	prompt: &str,
) -> Result<String, GenerateError> {
	log::debug!("AI request prompt: {prompt}");

	let mut request = Request::post(COMPLETIONS_URL)
		.header("Content-Type", "application/json")
		.header("Authorization", &format!("Bearer {api_key}"));
	if let Some(org) = settings.organization() {
		request = request.header("OpenAI-Organization", org);
	}
	if let Some(project) = settings.project() {
		request = request.header("OpenAI-Project", project);
	}

	let response = request
		.json(&ChatRequest::new(settings, prompt))
		.map_err(|e| GenerateError::Request(e.to_string()))?
		.send()
		.await
		.map_err(|e| GenerateError::Request(e.to_string()))?;

	let status = response.status();
	let body = response
		.text()
		.await
		.map_err(|e| GenerateError::Request(e.to_string()))?;

	if !response.ok() {
		let err = classify_failure(status, &body);
		log::error!("AI response error: {status} {err:?}");
		return Err(err);
	}

	let data: Value =
		serde_json::from_str(&body).map_err(|e| GenerateError::Request(e.to_string()))?;
	log::debug!("AI response: {data}");
	Ok(completion_text(&data))
}

/// `choices[0].message.content`, else `choices[0].text`, else empty.
pub fn completion_text(data: &Value) -> String {
	let choice = &data["choices"][0];
	[&choice["message"]["content"], &choice["text"]]
		.into_iter()
		.filter_map(Value::as_str)
		.find(|s| !s.is_empty())
		.unwrap_or_default()
		.to_owned()
}

/// Message for a failed call: `error.message`, else the JSON body, else the raw text.
pub fn error_message(body: &str) -> String {
	match serde_json::from_str::<Value>(body) {
		Ok(json) => match json["error"]["message"].as_str() {
			Some(message) if !message.is_empty() => message.to_owned(),
			_ => json.to_string(),
		},
		Err(_) => body.to_owned(),
	}
}

/// Maps a non-2xx response to the error shown to the user.
pub fn classify_failure(status: u16, body: &str) -> GenerateError {
	let message = error_message(body);
	if status == 429 && message.to_lowercase().contains("quota") {
		GenerateError::QuotaExceeded { message }
	} else {
		GenerateError::Http { status, message }
	}
}
