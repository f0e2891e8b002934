use hilal_core::{
    generic::{GenericMessage, GenericRole},
    model::Model,
    template::{IntoPrompt, PromptTemplate},
};
use hilal_prompt::StaticFragment;

use crate::outputs::QuranOfTheDay;

const INSTRUCTION: &str = "Get random quran verse.";

/// Asks for a random Quran verse with its translation. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuranPrompt;

impl QuranPrompt {
    pub fn instruction(&self) -> &'static str {
        INSTRUCTION
    }
}

impl IntoPrompt for QuranPrompt {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        StaticFragment::new(self.instruction(), GenericRole::User).into_prompt()
    }
}

impl PromptTemplate for QuranPrompt {
    type Output = QuranOfTheDay;
    const MODEL: Model = super::DEFAULT_MODEL;
}

#[cfg(test)]
mod tests {
    use hilal_core::shape::describe_shape;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn describes_quran_shape() {
        assert_eq!(
            describe_shape::<QuranOfTheDay>().unwrap(),
            r#"{"quranTranslation":"","surah":"","ayat":""}"#
        );
    }

    #[test]
    fn parses_model_reply() {
        let verse: QuranOfTheDay = hilal_core::client::parse_reply(
            "```json\n{\"quranTranslation\":\"Say, He is Allah, the One.\",\"surah\":\"Al-Ikhlas\",\"ayat\":\"1\"}\n```",
        )
        .unwrap();

        assert_eq!(verse.surah, "Al-Ikhlas");
        assert_eq!(verse.ayat, "1");
    }
}
