//! Prompt variants. Each one supplies the user instruction through
//! [`IntoPrompt`](hilal_core::template::IntoPrompt) and names its response
//! shape through [`PromptTemplate`](hilal_core::template::PromptTemplate).
//! None of them perform I/O.
use hilal_core::model::{Model, OpenAiModel};

mod event_detail;
mod hadith;
mod quran;

pub use event_detail::EventDetailPrompt;
pub use hadith::HadithPrompt;
pub use quran::QuranPrompt;

/// Model shared by every prompt in this crate.
pub(crate) const DEFAULT_MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4o20241120);
