use hilal_core::{
    generic::{GenericMessage, GenericRole},
    model::Model,
    template::{IntoPrompt, PromptTemplate},
};
use hilal_prompt::{PromptChain, StaticFragment};

use crate::outputs::EventDetail;

/// Asks for the origin of a named event and the sunnah of its day.
///
/// The event name is bound at construction; the instruction is rendered when
/// the prompt is consumed.
///
/// ```rust
/// use hilal_core::template::IntoPrompt;
/// use hilal_types::EventDetailPrompt;
///
/// let messages = EventDetailPrompt::new("Day of Ashura").into_prompt();
/// assert!(messages[0].text().unwrap().contains("Day of Ashura"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetailPrompt {
    event_name: String,
}

impl EventDetailPrompt {
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn instruction(&self) -> String {
        format!(
            "Get the origin of the event {} and sunnah to do on the day. \
             In a paragraph not list. Please include reference link.",
            self.event_name
        )
    }
}

impl IntoPrompt for EventDetailPrompt {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::new(self.instruction(), GenericRole::User))
            .build()
    }
}

impl PromptTemplate for EventDetailPrompt {
    type Output = EventDetail;
    const MODEL: Model = super::DEFAULT_MODEL;
}

#[cfg(test)]
mod tests {
    use hilal_core::shape::describe_shape;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn binds_event_name_into_instruction() {
        let prompt = EventDetailPrompt::new("Eid al Fitr");

        assert_eq!(
            prompt.instruction(),
            "Get the origin of the event Eid al Fitr and sunnah to do on the day. \
             In a paragraph not list. Please include reference link."
        );

        let messages = prompt.into_prompt();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, GenericRole::User);
    }

    #[test]
    fn shape_lists_every_detail_field() {
        assert_eq!(
            describe_shape::<EventDetail>().unwrap(),
            r#"{"eventName":"","origin":"","originRefLink":"","sunnah":"","sunnahRefLink":""}"#
        );
    }
}
