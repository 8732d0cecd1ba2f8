//! End-to-end relay tests: HTTP trigger in, WebSocket broadcast out.
//!
//! Each test spins up the real application router on an ephemeral port with
//! a wiremock server standing in for the external weather webhook.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::StreamExt;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::{sleep, timeout};
use tokio_tungstenite::tungstenite::Message;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weather_gateway::config::GatewayConfig;
use weather_gateway::server::{build_app, build_state};

/// Starts the gateway against the given webhook URL and returns its address.
async fn spawn_gateway(webhook_url: String) -> SocketAddr {
    let config = GatewayConfig {
        listen_addr: "127.0.0.1:0".parse().unwrap_or_else(|_| {
            panic!("valid addr");
        }),
        webhook_url,
        upstream_timeout_secs: 5,
    };
    let state = match build_state(&config) {
        Ok(state) => state,
        Err(e) => panic!("state construction failed: {e}"),
    };
    let app = build_app(state);

    let listener = match TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => panic!("bind failed: {e}"),
    };
    let addr = match listener.local_addr() {
        Ok(addr) => addr,
        Err(e) => panic!("local_addr failed: {e}"),
    };

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}

/// Connects a WebSocket subscriber and waits briefly so the server-side
/// admission completes before the test proceeds.
async fn connect_subscriber(
    addr: SocketAddr,
) -> tokio_tungstenite::WebSocketStream<
    tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
> {
    let result = tokio_tungstenite::connect_async(format!("ws://{addr}/ws")).await;
    let Ok((stream, _response)) = result else {
        panic!("websocket connect failed");
    };
    sleep(Duration::from_millis(100)).await;
    stream
}

/// Reads the next text frame as JSON, or panics after the timeout.
async fn next_json<S>(stream: &mut S) -> Value
where
    S: StreamExt<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    let frame = timeout(Duration::from_secs(2), stream.next()).await;
    let Ok(Some(Ok(Message::Text(text)))) = frame else {
        panic!("expected a text frame");
    };
    serde_json::from_str(text.as_str()).unwrap_or_default()
}

/// Asserts that no frame arrives within a short window.
async fn assert_silent<S>(stream: &mut S)
where
    S: StreamExt<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    let frame = timeout(Duration::from_millis(300), stream.next()).await;
    assert!(frame.is_err(), "subscriber unexpectedly received a frame");
}

fn mogi_observation() -> Value {
    json!({
        "location": { "name": "Mogi" },
        "current": {
            "temp_c": 21,
            "condition": { "text": "Clear", "icon": "x" },
            "humidity": 60,
            "wind_kph": 5
        }
    })
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let provider = MockServer::start().await;
    let addr = spawn_gateway(provider.uri()).await;

    let response = reqwest::get(format!("http://{addr}/api/health")).await;
    let Ok(response) = response else {
        panic!("health request failed");
    };
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap_or_default();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn fetch_broadcasts_to_all_subscribers() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/clima"))
        .and(body_json(json!({ "name": "Mogi" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([mogi_observation()])))
        .mount(&provider)
        .await;

    let addr = spawn_gateway(format!("{}/webhook/clima", provider.uri())).await;

    let mut sub_a = connect_subscriber(addr).await;
    let mut sub_b = connect_subscriber(addr).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/api/get-weather"))
        .json(&json!({ "city": "Mogi" }))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("trigger request failed");
    };
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap_or_default();
    assert_eq!(
        body,
        json!({ "message": "Weather data fetched and broadcasted successfully." })
    );

    // Every subscriber receives exactly the provider's first element.
    assert_eq!(next_json(&mut sub_a).await, mogi_observation());
    assert_eq!(next_json(&mut sub_b).await, mogi_observation());
}

#[tokio::test]
async fn empty_provider_response_fails_and_stays_silent() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&provider)
        .await;

    let addr = spawn_gateway(provider.uri()).await;
    let mut subscriber = connect_subscriber(addr).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/api/get-weather"))
        .json(&json!({ "city": "Mogi" }))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("trigger request failed");
    };
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap_or_default();
    assert_eq!(body, json!({ "error": "Failed to fetch weather data." }));

    assert_silent(&mut subscriber).await;
}

#[tokio::test]
async fn provider_error_status_fails_and_stays_silent() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&provider)
        .await;

    let addr = spawn_gateway(provider.uri()).await;
    let mut subscriber = connect_subscriber(addr).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/api/get-weather"))
        .json(&json!({ "city": "Mogi" }))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("trigger request failed");
    };
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap_or_default();
    assert_eq!(body, json!({ "error": "Failed to fetch weather data." }));

    assert_silent(&mut subscriber).await;
}

#[tokio::test]
async fn missing_city_is_rejected_without_calling_provider() {
    let provider = MockServer::start().await;
    // Verified on drop at the end of the test.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;

    let addr = spawn_gateway(provider.uri()).await;
    let client = reqwest::Client::new();

    for body in [json!({}), json!({ "city": "" }), json!({ "city": "   " })] {
        let response = client
            .post(format!("http://{addr}/api/get-weather"))
            .json(&body)
            .send()
            .await;
        let Ok(response) = response else {
            panic!("trigger request failed");
        };
        assert_eq!(response.status(), 400);
        let json_body: Value = response.json().await.unwrap_or_default();
        assert_eq!(json_body, json!({ "error": "City is required." }));
    }
}

#[tokio::test]
async fn late_subscriber_gets_no_replay() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([mogi_observation()])))
        .mount(&provider)
        .await;

    let addr = spawn_gateway(provider.uri()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/api/get-weather"))
        .json(&json!({ "city": "Mogi" }))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("trigger request failed");
    };
    assert_eq!(response.status(), 200);

    // Connecting after the broadcast must not replay the earlier event.
    let mut late = connect_subscriber(addr).await;
    assert_silent(&mut late).await;
}

#[tokio::test]
async fn disconnected_subscriber_does_not_affect_others() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([mogi_observation()])))
        .mount(&provider)
        .await;

    let addr = spawn_gateway(provider.uri()).await;

    let gone = connect_subscriber(addr).await;
    let mut kept = connect_subscriber(addr).await;
    drop(gone);
    sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/api/get-weather"))
        .json(&json!({ "city": "Mogi" }))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("trigger request failed");
    };
    assert_eq!(response.status(), 200);

    assert_eq!(next_json(&mut kept).await, mogi_observation());
}
