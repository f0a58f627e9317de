use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::channel::{CallOutcome, ChannelRegistry, MethodCall};

/// One round trip over the gateway: a named call addressed to a channel.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelCallRequest {
    pub channel: String,
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Clone)]
pub struct GatewayState {
    pub registry: Arc<ChannelRegistry>,
}

/// HTTP surface for the method-call channel.
///
/// The gateway is a transport only: it frames one request/response round
/// trip and maps call outcomes onto status codes, adding no semantics of
/// its own.
pub struct GatewayService {
    pub router: Router,
}

impl GatewayService {
    pub fn new(registry: Arc<ChannelRegistry>) -> Self {
        let state = GatewayState { registry };

        let router = Router::new()
            .route("/call", post(dispatch_call))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(state);

        Self { router }
    }
}

async fn dispatch_call(
    State(state): State<GatewayState>,
    Json(request): Json<ChannelCallRequest>,
) -> (StatusCode, Json<CallOutcome>) {
    let call = MethodCall::with_arguments(request.method, request.arguments);
    let outcome = state.registry.dispatch(&request.channel, &call);

    let status = match &outcome {
        CallOutcome::Success { .. } => StatusCode::OK,
        CallOutcome::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        CallOutcome::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(outcome))
}
