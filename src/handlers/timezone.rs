use std::sync::Arc;

use crate::channel::{CallOutcome, MethodCall, MethodCallHandler};
use crate::providers::TimezoneProvider;

/// Channel the timezone handler binds to at startup.
pub const TIMEZONE_CHANNEL: &str = "antigravity/timezone";

/// The one call name this handler recognizes. Matching is exact and
/// case-sensitive.
pub const GET_LOCAL_TIMEZONE: &str = "getLocalTimezone";

/// Error code surfaced when the host timezone read fails or returns an
/// unusable value.
pub const HOST_QUERY_FAILED: &str = "host_query_failed";

/// Answers `getLocalTimezone` with the host's current timezone identifier.
///
/// Stateless and side-effect-free: every call reads the injected provider
/// fresh, arguments are ignored, and any other call name gets an explicit
/// not-implemented answer.
pub struct TimezoneQueryHandler {
    provider: Arc<dyn TimezoneProvider>,
}

impl TimezoneQueryHandler {
    pub fn new(provider: Arc<dyn TimezoneProvider>) -> Self {
        Self { provider }
    }

    fn local_timezone(&self) -> CallOutcome {
        match self.provider.current_timezone() {
            Ok(timezone) if timezone.trim().is_empty() => CallOutcome::error(
                HOST_QUERY_FAILED,
                "Host reported an empty timezone identifier",
            ),
            Ok(timezone) => CallOutcome::success(timezone),
            Err(e) => CallOutcome::error(HOST_QUERY_FAILED, e.to_string()),
        }
    }
}

impl MethodCallHandler for TimezoneQueryHandler {
    fn handle(&self, call: &MethodCall) -> CallOutcome {
        if call.method == GET_LOCAL_TIMEZONE {
            self.local_timezone()
        } else {
            CallOutcome::NotImplemented
        }
    }
}
