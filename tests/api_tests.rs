use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use weathernow::api;
use weathernow::clients::WeatherProvider;
use weathernow::config::Config;
use weathernow::state::SharedState;

/// Stand-in for the remote weather API: a fixed payload or a failure.
struct StubWeather {
    payload: Option<Value>,
}

impl StubWeather {
    fn ok(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            payload: Some(payload),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self { payload: None })
    }
}

#[async_trait::async_trait]
impl WeatherProvider for StubWeather {
    async fn current_weather(&self, _city: &str) -> anyhow::Result<Map<String, Value>> {
        match &self.payload {
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(_) => anyhow::bail!("stub payload is not an object"),
            None => anyhow::bail!("simulated provider outage"),
        }
    }
}

async fn spawn_app(weather: Arc<StubWeather>) -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    // A single pooled connection keeps every query on the same in-memory
    // database.
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;

    let shared = SharedState::with_weather_provider(config, weather)
        .await
        .expect("Failed to create app state");

    api::router(api::create_app_state(Arc::new(shared)))
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_search_merges_favorite_flag_and_records_history() {
    let app = spawn_app(StubWeather::ok(json!({"temp": 15}))).await;

    let (status, body) = send_json(&app, "POST", "/api/weather", json!({"city": "Paris"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"temp": 15, "isFavorite": false}));

    let (status, history) = get_json(&app, "/api/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history, json!(["Paris"]));
}

#[tokio::test]
async fn test_search_flags_favorited_city() {
    let app = spawn_app(StubWeather::ok(json!({"temp": 15, "name": "London"}))).await;

    let (_, body) = send_json(
        &app,
        "POST",
        "/api/favorites",
        json!({"city": "London", "action": "add"}),
    )
    .await;
    assert_eq!(body, json!({"success": true}));

    let (status, body) = send_json(&app, "POST", "/api/weather", json!({"city": "London"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isFavorite"], json!(true));
    assert_eq!(body["temp"], json!(15));

    let (_, history) = get_json(&app, "/api/history").await;
    assert_eq!(history, json!(["London"]));
}

#[tokio::test]
async fn test_failed_lookup_returns_fixed_envelope_and_no_history() {
    let app = spawn_app(StubWeather::failing()).await;

    let (status, body) = send_json(&app, "POST", "/api/weather", json!({"city": "Nowhere"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "City not found or API error."}));

    let (_, history) = get_json(&app, "/api/history").await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn test_favorite_add_is_idempotent() {
    let app = spawn_app(StubWeather::failing()).await;

    for _ in 0..2 {
        let (status, body) = send_json(
            &app,
            "POST",
            "/api/favorites",
            json!({"city": "London", "action": "add"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
    }

    let (_, favorites) = get_json(&app, "/api/favorites").await;
    assert_eq!(favorites, json!(["London"]));
}

#[tokio::test]
async fn test_favorites_listing_is_sorted() {
    let app = spawn_app(StubWeather::failing()).await;

    for city in ["Tokyo", "Berlin", "Sydney"] {
        send_json(
            &app,
            "POST",
            "/api/favorites",
            json!({"city": city, "action": "add"}),
        )
        .await;
    }

    let (_, favorites) = get_json(&app, "/api/favorites").await;
    assert_eq!(favorites, json!(["Berlin", "Sydney", "Tokyo"]));
}

#[tokio::test]
async fn test_favorite_remove_reports_outcome() {
    let app = spawn_app(StubWeather::failing()).await;

    send_json(
        &app,
        "POST",
        "/api/favorites",
        json!({"city": "Oslo", "action": "add"}),
    )
    .await;

    let (_, body) = send_json(
        &app,
        "POST",
        "/api/favorites",
        json!({"city": "Oslo", "action": "remove"}),
    )
    .await;
    assert_eq!(body, json!({"success": true}));

    let (_, body) = send_json(
        &app,
        "POST",
        "/api/favorites",
        json!({"city": "Oslo", "action": "remove"}),
    )
    .await;
    assert_eq!(body, json!({"success": false}));
}

#[tokio::test]
async fn test_history_is_capped_at_ten_newest_first() {
    let app = spawn_app(StubWeather::ok(json!({"temp": 1}))).await;

    for i in 0..12 {
        send_json(
            &app,
            "POST",
            "/api/weather",
            json!({"city": format!("City{i:02}")}),
        )
        .await;
    }

    let (_, history) = get_json(&app, "/api/history").await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 10);
    assert_eq!(history.first().unwrap(), &json!("City11"));
    assert_eq!(history.last().unwrap(), &json!("City02"));
}

#[tokio::test]
async fn test_history_delete_removes_all_matches() {
    let app = spawn_app(StubWeather::ok(json!({"temp": 1}))).await;

    for city in ["Paris", "Lyon", "Paris"] {
        send_json(&app, "POST", "/api/weather", json!({"city": city})).await;
    }

    let (_, body) = send_json(&app, "DELETE", "/api/history", json!({"city": "Paris"})).await;
    assert_eq!(body, json!({"success": true}));

    let (_, history) = get_json(&app, "/api/history").await;
    assert_eq!(history, json!(["Lyon"]));
}

#[tokio::test]
async fn test_history_delete_of_unknown_city_fails() {
    let app = spawn_app(StubWeather::failing()).await;

    let (status, body) = send_json(&app, "DELETE", "/api/history", json!({"city": "Paris"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": false}));
}

#[tokio::test]
async fn test_system_status() {
    let app = spawn_app(StubWeather::failing()).await;

    let (status, body) = get_json(&app, "/api/system/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], json!("ok"));
    assert!(body["version"].is_string());
}
