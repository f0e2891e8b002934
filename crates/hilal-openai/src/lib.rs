//! OpenAI backend for [`hilal_core::TypedCompletionClient`].
//!
//! Only the non-streaming `chat/completions` endpoint is used: one request,
//! one response, candidates handed back as plain text.
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::OpenAiClient;
