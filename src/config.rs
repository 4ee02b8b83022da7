//! Fixed endpoints, storage keys and the user-editable generation settings.

/// Chat-completion endpoint every live request goes to.
pub const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Session storage key for the raw API credential.
pub const CREDENTIAL_KEY: &str = "ai_api_key";

/// Local storage key for the serialized graph.
pub const GRAPH_KEY: &str = "ai_mindmap";

/// File name offered for exported maps.
pub const EXPORT_FILE_NAME: &str = "mindmap.json";

/// Placeholder replaced by the topic when rendering the prompt.
pub const TOPIC_PLACEHOLDER: &str = "{{topic}}";

/// Lower bound of the `max_tokens` form field.
pub const MIN_MAX_TOKENS: u32 = 32;
/// Upper bound of the `max_tokens` form field.
pub const MAX_MAX_TOKENS: u32 = 1000;
/// Step of the `max_tokens` form field.
pub const MAX_TOKENS_STEP: u32 = 10;

/// Form-backed settings for a live generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
	/// Prompt with a `{{topic}}` placeholder.
	pub template: String,
	/// Model name sent with the request.
	pub model: String,
	/// Optional `OpenAI-Organization` header value.
	pub organization: String,
	/// Optional `OpenAI-Project` header value.
	pub project: String,
	/// Token limit sent as `max_tokens`.
	pub max_tokens: u32,
}

impl Default for GenerationSettings {
	fn default() -> Self {
		Self {
			template: format!(
				"Write a short document about {TOPIC_PLACEHOLDER} with 3 bullet points."
			),
			model: "gpt-4o-mini".into(),
			organization: String::new(),
			project: String::new(),
			max_tokens: 200,
		}
	}
}

impl GenerationSettings {
	/// Substitutes the first placeholder occurrence with `topic`.
	pub fn render_prompt(&self, topic: &str) -> String {
		self.template.replacen(TOPIC_PLACEHOLDER, topic, 1)
	}

	/// Trimmed organization id, `None` when blank.
	pub fn organization(&self) -> Option<&str> {
		non_blank(&self.organization)
	}

	/// Trimmed project id, `None` when blank.
	pub fn project(&self) -> Option<&str> {
		non_blank(&self.project)
	}
}

fn non_blank(value: &str) -> Option<&str> {
	Some(value.trim()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_template_renders_topic() {
		let settings = GenerationSettings::default();
		assert_eq!(
			settings.render_prompt("Rust"),
			"Write a short document about Rust with 3 bullet points."
		);
		assert_eq!(settings.max_tokens, 200);
		assert_eq!(settings.model, "gpt-4o-mini");
	}

	#[test]
	fn only_first_placeholder_is_replaced() {
		let settings = GenerationSettings {
			template: "{{topic}} and {{topic}}".into(),
			..Default::default()
		};
		assert_eq!(settings.render_prompt("x"), "x and {{topic}}");
	}

	#[test]
	fn blank_identifiers_are_omitted() {
		let settings = GenerationSettings {
			organization: "  org_1 ".into(),
			project: "   ".into(),
			..Default::default()
		};
		assert_eq!(settings.organization(), Some("org_1"));
		assert_eq!(settings.project(), None);
	}
}
