//! # Timezone Bridge
//!
//! A small request/response service that bridges a host application to the
//! operating system's timezone configuration over a named method-call channel.
//!
//! ## Features
//! - Named channel registry with one-time handler binding
//! - `getLocalTimezone` answered with the host's current IANA timezone identifier
//! - Explicit not-implemented responses for unrecognized call names
//! - HTTP gateway and health endpoints for the embedding host

/// Method-call model, handler trait, and the channel registry
pub mod channel;
/// Configuration management and environment variables
pub mod config;
/// Call handlers bound to channels
pub mod handlers;
/// Injected host capabilities such as the timezone read
pub mod providers;
/// HTTP-facing services: the call gateway and health checks
pub mod services;
/// Utility functions for logging and formatting
pub mod utils;
