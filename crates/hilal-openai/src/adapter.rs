use std::{env, sync::Arc, time::Duration};

use hilal_core::error::{HilalError, Result};

use crate::{
    client::{DEFAULT_TIMEOUT, OpenAiClient},
    error::OpenAiError,
};

/// The OpenAI backend for [`hilal_core::TypedCompletionClient`].
///
/// Holds one [`OpenAiClient`] behind an `Arc`, so every in-flight request
/// shares the same connection pool.
#[derive(Debug)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Collects credentials and HTTP settings for an [`OpenAiAdapter`].
///
/// ```rust,no_run
/// use std::time::Duration;
/// use hilal_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .with_timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), hilal_core::HilalError>(())
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// No key, default endpoint, default timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `OPENAI_API_KEY` and, if present, `OPENAI_BASE_URL` from the
    /// environment.
    ///
    /// Never panics. A missing key only surfaces during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout enforced by the HTTP client. Defaults to 30 s.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the HTTP client.
    ///
    /// # Errors
    ///
    /// * [`HilalError::Invalid`] – if the API key is missing or blank.
    /// * [`HilalError::Transport`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| HilalError::Invalid("missing env variable: `OPENAI_API_KEY`".into()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(OpenAiError::from)?;
        let client = OpenAiClient::with_http(api_key, http, self.base_url);

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_invalid() {
        let err = OpenAiAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, HilalError::Invalid(_)));

        let err = OpenAiAdapterBuilder::new()
            .with_api_key("   ")
            .build()
            .unwrap_err();
        assert!(matches!(err, HilalError::Invalid(_)));
    }

    #[test]
    fn base_url_defaults_and_overrides() {
        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("sk-test")
            .build()
            .unwrap();
        assert_eq!(adapter.base_url(), "https://api.openai.com/v1");

        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("sk-test")
            .with_base_url("http://localhost:8081/v1/")
            .build()
            .unwrap();
        assert_eq!(adapter.base_url(), "http://localhost:8081/v1");
    }
}
