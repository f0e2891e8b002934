//! Concatenate several [`IntoPrompt`] values into one message list.
//!
//! ```rust
//! use hilal_core::generic::{GenericMessage, GenericRole};
//! use hilal_prompt::{PromptChain, StaticFragment};
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(StaticFragment::new("Answer in one paragraph.", GenericRole::User))
//!     .with(StaticFragment::new("Get random quran verse.", GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
use hilal_core::template::IntoPrompt;

/// Ordered accumulator; the messages come out in the order the parts went in.
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, part: impl IntoPrompt<Message = Message>) -> Self {
        self.0.extend(part.into_prompt());
        self
    }

    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
