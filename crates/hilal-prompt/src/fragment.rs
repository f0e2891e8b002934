//! A minimal fragment that injects a fixed string into the prompt.
//!
//! ```rust
//! use hilal_prompt::StaticFragment;
//! use hilal_core::generic::GenericRole;
//!
//! let user = StaticFragment::new("Give me random islamic hadith", GenericRole::User);
//! ```
//!
//! The `From<&str>` impl defaults to [`GenericRole::User`]: in this service
//! the system message is reserved for the JSON shape instruction.
use std::borrow::Cow;

use hilal_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// A (possibly borrowed) string bundled with a chat role.
pub struct StaticFragment<'a> {
    text: Cow<'a, str>,
    role: GenericRole,
}

impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value, GenericRole::User)
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(text: impl Into<Cow<'a, str>>, role: GenericRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.text.into_owned(), self.role)]
    }
}
