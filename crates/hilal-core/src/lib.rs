//! Provider-agnostic core of the **hilal** workspace: turn a prompt plus a
//! desired result type into a validated, strongly typed value.
//!
//! * [`template`] – what a prompt is (`IntoPrompt`, `PromptTemplate`).
//! * [`shape`] – example JSON shown to the model for `PromptTemplate::Output`.
//! * [`normalize`] – markdown fence stripping applied to raw replies.
//! * [`client`] – [`TypedCompletionClient::fetch_typed`], the one entry point.
//! * [`provider`] – the transport boundary a backend crate implements.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod shape;
pub mod template;

pub use client::TypedCompletionClient;
pub use error::{HilalError, Result};
