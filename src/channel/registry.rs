use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Arc;

use crate::channel::call::{CallOutcome, MethodCall, MethodCallHandler};
use crate::utils::logging;

/// Maps channel names to their handlers.
///
/// Bindings are established once at startup and never reconfigured at
/// runtime, so dispatch only ever reads the map and needs no locking.
pub struct ChannelRegistry {
    handlers: HashMap<String, Arc<dyn MethodCallHandler>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Binds a handler to a channel name.
    ///
    /// Rebinding an already-bound channel is a startup programming error and
    /// is rejected rather than silently replacing the existing handler.
    pub fn register(
        &mut self,
        channel: impl Into<String>,
        handler: Arc<dyn MethodCallHandler>,
    ) -> Result<()> {
        let channel = channel.into();
        if channel.trim().is_empty() {
            return Err(anyhow!("Channel name cannot be empty"));
        }
        if self.handlers.contains_key(&channel) {
            return Err(anyhow!("Channel '{}' is already bound", channel));
        }
        logging::log_system_event("channel_bound", Some(&channel));
        self.handlers.insert(channel, handler);
        Ok(())
    }

    /// Routes a call to the handler bound to `channel`.
    ///
    /// A call on an unbound channel answers not-implemented, matching host
    /// runtimes that reply the same way when no handler is attached.
    pub fn dispatch(&self, channel: &str, call: &MethodCall) -> CallOutcome {
        logging::log_call_start(channel, &call.method);

        let Some(handler) = self.handlers.get(channel) else {
            logging::log_call_not_implemented(channel, &call.method);
            return CallOutcome::NotImplemented;
        };

        let outcome = handler.handle(call);
        match &outcome {
            CallOutcome::Success { .. } => logging::log_call_success(channel, &call.method),
            CallOutcome::NotImplemented => {
                logging::log_call_not_implemented(channel, &call.method)
            }
            CallOutcome::Error { code, message } => {
                logging::log_call_error(channel, &call.method, code, message)
            }
        }
        outcome
    }

    pub fn is_bound(&self, channel: &str) -> bool {
        self.handlers.contains_key(channel)
    }

    pub fn bound_channels(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
