use std::sync::Arc;

use anyhow::anyhow;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use timezone_bridge::channel::ChannelRegistry;
use timezone_bridge::handlers::{TimezoneQueryHandler, TIMEZONE_CHANNEL};
use timezone_bridge::providers::{FixedTimezoneProvider, TimezoneProvider};
use timezone_bridge::services::gateway::GatewayService;

struct FailingTimezoneProvider;

impl TimezoneProvider for FailingTimezoneProvider {
    fn current_timezone(&self) -> anyhow::Result<String> {
        Err(anyhow!("tzdata unavailable"))
    }
}

fn gateway_with_provider(provider: Arc<dyn TimezoneProvider>) -> TestServer {
    let mut registry = ChannelRegistry::new();
    registry
        .register(TIMEZONE_CHANNEL, Arc::new(TimezoneQueryHandler::new(provider)))
        .expect("Failed to bind timezone channel");

    let gateway = GatewayService::new(Arc::new(registry));
    TestServer::new(gateway.router).expect("Failed to create test server")
}

fn test_gateway() -> TestServer {
    gateway_with_provider(Arc::new(FixedTimezoneProvider::new("America/New_York")))
}

#[tokio::test]
async fn test_timezone_call_succeeds_over_http() {
    let server = test_gateway();

    let response = server
        .post("/call")
        .json(&json!({
            "channel": TIMEZONE_CHANNEL,
            "method": "getLocalTimezone",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["value"], "America/New_York");
}

#[tokio::test]
async fn test_extra_arguments_do_not_change_the_answer() {
    let server = test_gateway();

    let response = server
        .post("/call")
        .json(&json!({
            "channel": TIMEZONE_CHANNEL,
            "method": "getLocalTimezone",
            "arguments": {"unused": 1},
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["value"], "America/New_York");
}

#[tokio::test]
async fn test_unrecognized_method_maps_to_501() {
    let server = test_gateway();

    let response = server
        .post("/call")
        .json(&json!({
            "channel": TIMEZONE_CHANNEL,
            "method": "setLocalTimezone",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_IMPLEMENTED);

    let body: Value = response.json();
    assert_eq!(body["status"], "not_implemented");
    assert!(body.get("value").is_none());
}

#[tokio::test]
async fn test_unbound_channel_maps_to_501() {
    let server = test_gateway();

    let response = server
        .post("/call")
        .json(&json!({
            "channel": "antigravity/battery",
            "method": "getLocalTimezone",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn test_host_query_failure_maps_to_500() {
    let server = gateway_with_provider(Arc::new(FailingTimezoneProvider));

    let response = server
        .post("/call")
        .json(&json!({
            "channel": TIMEZONE_CHANNEL,
            "method": "getLocalTimezone",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "host_query_failed");
}
