use hilal_core::{
    generic::{GenericMessage, GenericRole},
    model::Model,
    template::{IntoPrompt, PromptTemplate},
};
use hilal_prompt::StaticFragment;

use crate::outputs::HadithOfTheDay;

const INSTRUCTION: &str = "Give me random islamic hadith";

/// Asks for a random hadith. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct HadithPrompt;

impl HadithPrompt {
    pub fn instruction(&self) -> &'static str {
        INSTRUCTION
    }
}

impl IntoPrompt for HadithPrompt {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        StaticFragment::new(self.instruction(), GenericRole::User).into_prompt()
    }
}

impl PromptTemplate for HadithPrompt {
    type Output = HadithOfTheDay;
    const MODEL: Model = super::DEFAULT_MODEL;
}
