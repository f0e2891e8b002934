use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use hilal::{
    HilalError, TypedCompletionClient,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    server::{AppState, TimelineDetail, TodayResponse, router},
};

/// Answers by looking at the user message, and remembers every one it saw.
#[derive(Default)]
struct StubProvider {
    fail: bool,
    seen: Arc<Mutex<Vec<String>>>,
}

fn reply_for(prompt: &str) -> &'static str {
    if prompt.contains("hadith") {
        r#"{"content":"Actions are judged by intentions.","status":"Sahih","reference":"Bukhari 1"}"#
    } else if prompt.contains("quran") {
        "```json\n{\"quranTranslation\":\"Indeed, with hardship comes ease.\",\"surah\":\"Ash-Sharh\",\"ayat\":\"94:6\"}\n```"
    } else {
        r#"{"eventName":"Day of Ashura","origin":"Musa was saved.","originRefLink":"https://sunnah.com/bukhari:2004","sunnah":"Fast the day.","sunnahRefLink":"https://sunnah.com/muslim:1162"}"#
    }
}

impl ChatCompletionProvider for StubProvider {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = hilal::Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let fail = self.fail;
        let seen = Arc::clone(&self.seen);

        Box::pin(async move {
            if fail {
                return Err(HilalError::Transport("connection refused".into()));
            }

            let user = params
                .into_messages()
                .into_iter()
                .map(Into::<GenericMessage>::into)
                .filter(|m| m.role == GenericRole::User)
                .filter_map(|m| m.content)
                .collect::<Vec<_>>()
                .join("\n");
            let reply = reply_for(&user.to_lowercase());
            seen.lock().unwrap().push(user);

            Ok(GenericChatCompletionResponse {
                completions: vec![GenericMessage::new(reply.into(), GenericRole::Assistant)],
                usage: None,
            })
        })
    }
}

fn app(provider: StubProvider) -> axum::Router {
    router(AppState::new(TypedCompletionClient::new(provider)))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn timeline_lists_ten_events_in_order() {
    let (status, body) = get(app(StubProvider::default()), "/api/timeline").await;

    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 10);
    assert_eq!(events[0]["id"], json!(1));
    assert_eq!(events[0]["eventName"], json!("Start of the Hijri Year"));
    assert_eq!(events[9]["id"], json!(10));
    assert_eq!(events[9]["eventName"], json!("Eid al Adha"));
    assert!(events.iter().all(|e| e["eventDate"].as_str().unwrap().len() == 10));
}

#[tokio::test]
async fn detail_asks_about_the_named_event() {
    let provider = StubProvider::default();
    let seen = Arc::clone(&provider.seen);

    let (status, body) = get(
        app(provider),
        "/api/timeline/2?eventName=Day%20of%20Ashura",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_value::<TimelineDetail>(body).unwrap(),
        TimelineDetail {
            id: 2,
            title: "Day of Ashura".into(),
            origin: "Musa was saved.".into(),
            origin_ref: "https://sunnah.com/bukhari:2004".into(),
            sunnah: "Fast the day.".into(),
            sunnah_ref: "https://sunnah.com/muslim:1162".into(),
        }
    );

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("Get the origin of the event Day of Ashura"));
}

#[tokio::test]
async fn detail_without_event_name_is_a_bad_request() {
    let provider = StubProvider::default();
    let seen = Arc::clone(&provider.seen);

    let (status, body) = get(app(provider), "/api/timeline/2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("eventName"));

    let (status, _) = get(app(StubProvider::default()), "/api/timeline/2?eventName=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn transport_failure_is_a_bad_gateway() {
    let provider = StubProvider {
        fail: true,
        ..Default::default()
    };

    let (status, body) = get(app(provider), "/api/timeline/1?eventName=Eid%20al%20Fitr").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": "upstream model request failed" }));
}

#[tokio::test]
async fn today_combines_dates_hadith_and_quran() {
    let provider = StubProvider::default();
    let seen = Arc::clone(&provider.seen);

    let (status, body) = get(app(provider), "/api/today").await;
    assert_eq!(status, StatusCode::OK);

    let today: TodayResponse = serde_json::from_value(body).unwrap();
    assert!(today.islamic_date.ends_with(" AH"));
    assert!(today.gregorian_date.contains(", "));
    assert_eq!(today.hadith.status, "Sahih");
    assert_eq!(today.quran.surah, "Ash-Sharh");
    assert_eq!(today.quran.ayat, "94:6");

    assert_eq!(seen.lock().unwrap().len(), 2);
}
