//! Client that runs a [`PromptTemplate`] against a single [`ChatCompletionProvider`]
//! and hands back a typed value.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! checks that generic messages convert into whatever the backend expects,
//! without dynamic dispatch in user code.
//!
//! ```rust,ignore
//! let backend = hilal_openai::OpenAiAdapterBuilder::new_from_env().build()?;
//! let client = TypedCompletionClient::new(backend);
//! let detail = client.fetch_typed(EventDetailPrompt::new("Day of Ashura")).await?;
//! ```
use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    error::{HilalError, Result},
    generic::{GenericMessage, GenericRole},
    model::Model,
    normalize::strip_code_fence,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    shape::describe_shape,
    template::{IntoPrompt, PromptTemplate},
};

/// Build the system instruction that pins the reply to `example`.
pub fn json_shape_instruction(example: &str) -> String {
    format!("Respond only in this JSON shape: {example}. Only output JSON.")
}

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc` and is shared by all
/// in-flight requests.
#[derive(Debug)]
pub struct TypedCompletionClient<B> {
    backend: Arc<B>,
    model: Option<Model>,
    temperature: Option<f64>,
}

impl<B> Clone for TypedCompletionClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

impl<B> TypedCompletionClient<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            model: None,
            temperature: None,
        }
    }

    /// Use `model` for every prompt instead of the prompt's own
    /// [`PromptTemplate::MODEL`].
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Send `prompt` and parse the reply into `P::Output`.
    ///
    /// Performs exactly one provider call. Nothing is cached or retried.
    ///
    /// # Errors
    ///
    /// * [`HilalError::ShapeDescription`] – `P::Output` has no usable example.
    /// * [`HilalError::Transport`] – forwarded from the backend.
    /// * [`HilalError::EmptyCompletion`] – no candidate, or blank text.
    /// * [`HilalError::MalformedResponse`] – the normalized text did not parse.
    pub async fn fetch_typed<P>(&self, prompt: P) -> Result<P::Output>
    where
        P: PromptTemplate,
        <P as IntoPrompt>::Message: Into<GenericMessage>,
    {
        let output_type = std::any::type_name::<P::Output>();

        let example = describe_shape::<P::Output>()?;
        debug!(output = output_type, %example, "Expected JSON shape");

        let mut messages = vec![GenericMessage::new(
            json_shape_instruction(&example),
            GenericRole::System,
        )];
        messages.extend(prompt.into_prompt().into_iter().map(Into::into));

        let model = self.model.clone().unwrap_or(P::MODEL);
        info!(%model, output = output_type, "Sending prompt to model");

        let mut params = ChatCompleteParameters::new(messages, model);
        if let Some(temperature) = self.temperature {
            params = params.with_temperature(temperature);
        }

        let response = self.backend.chat_complete(params).await?;
        info!(
            candidates = response.completions.len(),
            usage = ?response.usage,
            "Received completion"
        );

        let raw = response
            .first_text()
            .filter(|text| !text.trim().is_empty())
            .ok_or(HilalError::EmptyCompletion)?;
        debug!(%raw, "Raw completion");

        parse_reply(raw)
    }
}

/// Normalize `raw` and deserialize it into `T`.
///
/// Exposed so callers holding text from elsewhere apply the same rules as
/// [`TypedCompletionClient::fetch_typed`].
pub fn parse_reply<T>(raw: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let normalized = strip_code_fence(raw);
    debug!(%normalized, "Normalized completion");

    serde_json::from_str(normalized).map_err(|source| HilalError::MalformedResponse {
        raw: normalized.to_owned(),
        source,
    })
}
