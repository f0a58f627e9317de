use anyhow::{anyhow, Result};
use std::sync::Mutex;

/// Reads the host's currently configured timezone identifier.
///
/// The identifier is never cached by callers; every call reads the provider
/// fresh so a timezone change on the host is reflected by the next query.
pub trait TimezoneProvider: Send + Sync {
    fn current_timezone(&self) -> Result<String>;
}

/// Production provider backed by the operating system's timezone setting.
pub struct SystemTimezoneProvider;

impl SystemTimezoneProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemTimezoneProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneProvider for SystemTimezoneProvider {
    fn current_timezone(&self) -> Result<String> {
        iana_time_zone::get_timezone()
            .map_err(|e| anyhow!("Failed to read host timezone: {}", e))
    }
}

/// Provider answering with a fixed, settable identifier.
///
/// Substituted for the system provider in tests to make the handler
/// deterministic and to simulate a timezone change between calls.
pub struct FixedTimezoneProvider {
    timezone: Mutex<String>,
}

impl FixedTimezoneProvider {
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: Mutex::new(timezone.into()),
        }
    }

    pub fn set(&self, timezone: impl Into<String>) {
        if let Ok(mut tz) = self.timezone.lock() {
            *tz = timezone.into();
        }
    }
}

impl TimezoneProvider for FixedTimezoneProvider {
    fn current_timezone(&self) -> Result<String> {
        self.timezone
            .lock()
            .map(|tz| tz.clone())
            .map_err(|_| anyhow!("Timezone value poisoned"))
    }
}
