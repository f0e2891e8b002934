//! Prompt strategies.
//!
//! A prompt is a value that knows two things: the messages to send
//! ([`IntoPrompt`]) and the type its answer parses into
//! ([`PromptTemplate::Output`]). Prompts that need a runtime parameter, such
//! as an event name, take it in their constructor; none of them do I/O.
//!
//! ```rust
//! use hilal_core::generic::{GenericMessage, GenericRole};
//! use hilal_core::model::{Model, OpenAiModel};
//! use hilal_core::template::{IntoPrompt, PromptTemplate};
//! use schemars::JsonSchema;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize, JsonSchema)]
//! struct Verse { surah: String, ayat: String }
//!
//! struct VersePrompt;
//!
//! impl IntoPrompt for VersePrompt {
//!     type Message = GenericMessage;
//!
//!     fn into_prompt(self) -> Vec<GenericMessage> {
//!         vec![GenericMessage::new("Get random quran verse.".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for VersePrompt {
//!     type Output = Verse;
//!     const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4o20241120);
//! }
//! ```
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};

use crate::{generic::GenericMessage, model::Model};

/// A prompt bound to its response shape.
///
/// `Output::default()` is serialized and shown to the model as the example
/// reply (see [`crate::shape::describe_shape`]), so every field must have a
/// meaningful empty value.
pub trait PromptTemplate: IntoPrompt {
    type Output: Default + Serialize + DeserializeOwned + JsonSchema + Send + 'static;

    /// Model used unless the client overrides it.
    const MODEL: Model;
}

/// Anything that expands into an ordered list of chat messages.
pub trait IntoPrompt {
    type Message: Send + Sync + 'static;

    fn into_prompt(self) -> Vec<Self::Message>;
}

impl IntoPrompt for GenericMessage {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<GenericMessage> {
        vec![self]
    }
}
