//! Provider-neutral chat types.
//!
//! Prompts produce [`GenericMessage`]s and backends hand back a
//! [`GenericChatCompletionResponse`]; each backend crate converts to and from
//! its own wire structs.
use serde::{Deserialize, Serialize};

/// One role-tagged chat message. `content` is `None` when a provider sent a
/// message without text, e.g. a refusal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: Option<String>,
    pub role: GenericRole,
    pub name: Option<String>,
}

impl GenericMessage {
    /// ```rust
    /// use hilal_core::generic::{GenericMessage, GenericRole};
    ///
    /// let system = GenericMessage::new("Only output JSON.".into(), GenericRole::System);
    /// assert_eq!(system.text(), Some("Only output JSON."));
    /// ```
    pub fn new(text: String, role: GenericRole) -> Self {
        Self {
            content: Some(text),
            role,
            name: None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// Output-format instructions. The JSON shape goes here.
    System,
    Assistant,
    User,
}

/// Everything a provider hands back for one request.
///
/// `completions` keeps the provider's candidate order; callers normally only
/// look at the first one.
#[derive(Debug, Clone, Default)]
pub struct GenericChatCompletionResponse {
    pub completions: Vec<GenericMessage>,
    pub usage: Option<GenericUsageReport>,
}

impl GenericChatCompletionResponse {
    /// Text of the first candidate, if the provider produced one.
    pub fn first_text(&self) -> Option<&str> {
        self.completions.first().and_then(GenericMessage::text)
    }
}

/// Token accounting as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
