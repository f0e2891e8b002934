use std::borrow::Cow;

use hilal_core::model::{Model, OpenAiModel};

pub const GPT4_O_2024_11_20: &str = "gpt-4o-2024-11-20";
pub const GPT4_O: &str = "gpt-4o";
pub const GPT4_O_MINI: &str = "gpt-4o-mini";

/// Translate a [`Model`] into the id the OpenAI API expects.
///
/// Returns `None` for ids the API can never accept (currently: empty custom
/// ids).
pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) if custom.trim().is_empty() => None,
        Model::Custom(custom) => Some(custom.clone()),
        Model::OpenAi(OpenAiModel::Gpt4o20241120) => Some(GPT4_O_2024_11_20.into()),
        Model::OpenAi(OpenAiModel::Gpt4o) => Some(GPT4_O.into()),
        Model::OpenAi(OpenAiModel::Gpt4oMini) => Some(GPT4_O_MINI.into()),
    }
}
