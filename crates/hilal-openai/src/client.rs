use std::time::Duration;

use reqwest::{Client, header::HeaderValue};

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper around `POST {base}/chat/completions`.
///
/// One call is one HTTP round-trip; there is no streaming and no retry. The
/// inner `reqwest::Client` pools connections and is shared by clones.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: Client,
    base: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Wrap an already configured `reqwest::Client`. A trailing `/` on
    /// `base_url` is ignored; `None` targets the public OpenAI API.
    pub fn with_http(api_key: impl Into<String>, http: Client, base_url: Option<String>) -> Self {
        let base = match base_url {
            Some(url) => url.trim_end_matches('/').to_owned(),
            None => DEFAULT_BASE_URL.to_owned(),
        };

        Self {
            api_key: api_key.into(),
            http,
            base,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Send `request` and decode the reply.
    ///
    /// A non-2xx status becomes [`OpenAiError::Api`] carrying the response
    /// body, so rate-limit and context-length messages reach the caller.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let mut authorization = HeaderValue::try_from(format!("Bearer {}", self.api_key))?;
        authorization.set_sensitive(true);

        let endpoint = format!("{}/chat/completions", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(%endpoint, model = %request.model, messages = request.messages.len(), "Sending chat completion");

        let response = self
            .http
            .post(&endpoint)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(%status, %body, "Chat completion rejected");

            return Err(OpenAiError::Api { status, body });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
