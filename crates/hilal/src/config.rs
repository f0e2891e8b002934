//! Command-line and environment configuration for the `hilal` binary.
use std::{net::SocketAddr, time::Duration};

use clap::Parser;
use hilal_core::{Result, TypedCompletionClient, model::Model};
use hilal_openai::{OpenAiAdapter, OpenAiAdapterBuilder};

/// Every flag also reads from the environment variable named next to it.
#[derive(Clone, Parser)]
#[command(name = "hilal", version, about = "Hijri event timeline service")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "HILAL_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// OpenAI-compatible endpoint, e.g. a local proxy.
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    /// Model id sent with every prompt, replacing each prompt's default.
    #[arg(long, env = "HILAL_MODEL")]
    pub model: Option<String>,

    #[arg(long, env = "HILAL_TEMPERATURE")]
    pub temperature: Option<f64>,

    #[arg(long, env = "HILAL_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Log filter used when `HILAL_LOG` is unset.
    #[arg(long, env = "HILAL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind", &self.bind)
            .field("openai_base_url", &self.openai_base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Build the OpenAI backend and wrap it in a [`TypedCompletionClient`].
    ///
    /// # Errors
    ///
    /// Whatever [`OpenAiAdapterBuilder::build`] reports, e.g. a blank key.
    pub fn client(&self) -> Result<TypedCompletionClient<OpenAiAdapter>> {
        let mut builder = OpenAiAdapterBuilder::new()
            .with_api_key(self.openai_api_key.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs));
        if let Some(base_url) = &self.openai_base_url {
            builder = builder.with_base_url(base_url.clone());
        }

        let mut client = TypedCompletionClient::new(builder.build()?);
        if let Some(model) = self.model.as_deref().filter(|m| !m.trim().is_empty()) {
            client = client.with_model(Model::custom(model.trim().to_owned()));
        }
        if let Some(temperature) = self.temperature {
            client = client.with_temperature(temperature);
        }

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use hilal_core::HilalError;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "hilal",
            "--openai-api-key",
            "sk-test",
            "--bind",
            "127.0.0.1:9000",
            "--openai-base-url",
            "http://localhost:1234/v1/",
            "--request-timeout-secs",
            "5",
        ])
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.request_timeout_secs, 5);

        let client = config.client().unwrap();
        assert_eq!(client.backend().base_url(), "http://localhost:1234/v1");
    }

    #[test]
    fn debug_hides_the_api_key() {
        let config =
            Config::try_parse_from(["hilal", "--openai-api-key", "sk-secret"]).unwrap();
        assert!(!format!("{config:?}").contains("sk-secret"));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let config = Config::try_parse_from(["hilal", "--openai-api-key", "  "]).unwrap();
        assert!(matches!(config.client(), Err(HilalError::Invalid(_))));
    }
}
