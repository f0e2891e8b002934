//! # `hilal` – Hijri timeline service
//!
//! The umbrella crate glues the workspace together and hosts the HTTP
//! surface:
//!
//! | Crate                | What it provides                                                  |
//! |----------------------|-------------------------------------------------------------------|
//! | **`hilal-core`**     | `TypedCompletionClient`, shape describer, fence stripping, errors |
//! | **`hilal-prompt`**   | `PromptChain` and `StaticFragment` for composing messages         |
//! | **`hilal-types`**    | Response shapes and the event/hadith/Quran prompts                |
//! | **`hilal-calendar`** | Umm al-Qura Hijri calendar and the annual event timeline          |
//! | **`hilal-openai`**   | OpenAI chat-completions backend *(feature `openai`)*              |
//!
//! ## Endpoints
//!
//! * `GET /api/timeline` – this Hijri year's events with Gregorian dates.
//! * `GET /api/timeline/{id}?eventName=…` – origin and sunnah of one event,
//!   written by the model.
//! * `GET /api/today` – today's dates plus a hadith and a Quran verse.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use hilal::{TypedCompletionClient, server::{AppState, router}};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = hilal::openai::OpenAiAdapterBuilder::new_from_env().build()?;
//!     let app = router(AppState::new(TypedCompletionClient::new(backend)));
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
#[cfg(feature = "openai")]
pub mod config;
pub mod error;
pub mod server;

pub use hilal_calendar as calendar;
pub use hilal_core::*;
pub use hilal_prompt as prompt;
pub use hilal_types as types;

#[cfg(feature = "openai")]
pub use hilal_openai as openai;
