/// HTTP gateway exposing the channel registry to the host
pub mod gateway;
/// Health check endpoints
pub mod health;
