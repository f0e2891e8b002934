//! Model identifiers.
//!
//! Prompts pick an enum variant instead of typing literal strings such as
//! `"gpt-4o-2024-11-20"`; the provider crate maps the variant onto its own
//! naming scheme.
//!
//! # Adding more models
//!
//! 1. Add the variant to the provider sub-enum (`OpenAiModel`, …).
//! 2. Update the mapping in the provider crate
//!    (`hilal-openai::model_map::map_model`).
//!
//! # Example
//!
//! ```rust
//! use hilal_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4oMini),
//!            Model::OpenAi(OpenAiModel::Gpt4oMini));
//! ```
use std::{borrow::Cow, fmt::Display};

/// Universal identifier for an LLM model.
///
/// * `OpenAi` – models the OpenAI backend knows by name.
/// * `Custom` – any other model id, passed through verbatim. Configuration
///   overrides end up here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    OpenAi(OpenAiModel),
    Custom(Cow<'static, str>),
}

impl Model {
    /// Wrap a runtime model id, e.g. one read from configuration.
    pub fn custom(id: impl Into<Cow<'static, str>>) -> Self {
        Model::Custom(id.into())
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Model::OpenAi(model) => write!(f, "openai:{model:?}"),
            Model::Custom(id) => write!(f, "{id}"),
        }
    }
}

/// Models officially supported by the OpenAI backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    /// Pinned snapshot used by the event-detail prompts.
    Gpt4o20241120,
    Gpt4o,
    Gpt4oMini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
