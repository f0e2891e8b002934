//! The response shapes the service asks the model for, and the prompts that
//! ask for them.
//!
//! | Prompt                 | Output            |
//! |------------------------|-------------------|
//! | [`EventDetailPrompt`]  | [`EventDetail`]   |
//! | [`HadithPrompt`]       | [`HadithOfTheDay`]|
//! | [`QuranPrompt`]        | [`QuranOfTheDay`] |
pub mod outputs;
pub mod prompts;

pub use outputs::{EventDetail, HadithOfTheDay, QuranOfTheDay};
pub use prompts::{EventDetailPrompt, HadithPrompt, QuranPrompt};
