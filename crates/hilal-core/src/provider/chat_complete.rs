use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::GenericChatCompletionResponse, model::Model};

/// The transport boundary: send role-tagged messages to a model, get back
/// every candidate completion as text.
///
/// Implementations perform exactly one round-trip per call and report
/// network, auth and rate-limit failures as
/// [`HilalError::Transport`](crate::error::HilalError::Transport). A request
/// the backend cannot express (unknown model) is
/// [`HilalError::InvalidRequest`](crate::error::HilalError::InvalidRequest).
/// Reading the text is left to [`crate::client`].
///
/// Returns a boxed future instead of using `async fn` so the trait stays
/// usable behind generics that need `Send`.
pub trait ChatCompletionProvider: Send + Sync {
    /// Wire message type of this backend.
    type Message: Send + Sync + 'static;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Send + Sync + 'p;
}

/// Messages plus the knobs sent with them.
#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M> {
    pub messages: Vec<M>,
    pub model: Model,
    /// `None` leaves the provider default in place.
    pub temperature: Option<f64>,
}

impl<M> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }
}
