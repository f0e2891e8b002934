//! HTTP surface: router, handlers and response bodies.
//!
//! The router is generic over the completion backend so tests can mount it
//! on a stub provider.
use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::Local;
use hilal_calendar::{HijriDate, TimelineEvent, enumerate, hijri::format_gregorian_long};
use hilal_core::{TypedCompletionClient, generic::GenericMessage, provider::ChatCompletionProvider};
use hilal_types::{EventDetailPrompt, HadithOfTheDay, HadithPrompt, QuranOfTheDay, QuranPrompt};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::error::ApiError;

/// State shared by every handler.
#[derive(Debug)]
pub struct AppState<B> {
    client: TypedCompletionClient<B>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<B> AppState<B> {
    pub fn new(client: TypedCompletionClient<B>) -> Self {
        Self { client }
    }
}

/// Body of `GET /api/timeline/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDetail {
    pub id: u64,
    /// The event name the caller asked about.
    pub title: String,
    pub origin: String,
    pub origin_ref: String,
    pub sunnah: String,
    pub sunnah_ref: String,
}

/// Body of `GET /api/today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    /// e.g. `"1 Ramadan 1446 AH"`.
    pub islamic_date: String,
    /// e.g. `"March 1, 2025"`.
    pub gregorian_date: String,
    pub hadith: HadithOfTheDay,
    pub quran: QuranOfTheDay,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailQuery {
    event_name: Option<String>,
}

pub fn router<B>(state: AppState<B>) -> Router
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    Router::new()
        .route("/api/timeline", get(timeline))
        .route("/api/timeline/{id}", get(timeline_detail::<B>))
        .route("/api/today", get(today::<B>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve<B>(addr: SocketAddr, state: AppState<B>) -> std::io::Result<()>
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(err) => {
            error!(%err, "Cannot listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}

async fn timeline() -> Result<Json<Vec<TimelineEvent>>, ApiError> {
    let year = HijriDate::today()?.year();
    Ok(Json(enumerate(year)))
}

async fn timeline_detail<B>(
    State(state): State<AppState<B>>,
    Path(id): Path<u64>,
    Query(query): Query<DetailQuery>,
) -> Result<Json<TimelineDetail>, ApiError>
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let event_name = query
        .event_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing query parameter `eventName`".into()))?;

    info!(id, %event_name, "Fetching event detail");
    let detail = state
        .client
        .fetch_typed(EventDetailPrompt::new(event_name.clone()))
        .await?;

    Ok(Json(TimelineDetail {
        id,
        title: event_name,
        origin: detail.origin,
        origin_ref: detail.origin_ref_link,
        sunnah: detail.sunnah,
        sunnah_ref: detail.sunnah_ref_link,
    }))
}

async fn today<B>(State(state): State<AppState<B>>) -> Result<Json<TodayResponse>, ApiError>
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let gregorian = Local::now().date_naive();
    let hijri = HijriDate::from_gregorian(gregorian)?;

    let (hadith, quran) = tokio::try_join!(
        state.client.fetch_typed(HadithPrompt),
        state.client.fetch_typed(QuranPrompt),
    )?;

    Ok(Json(TodayResponse {
        islamic_date: hijri.to_string(),
        gregorian_date: format_gregorian_long(gregorian),
        hadith,
        quran,
    }))
}
