/// Method-call and outcome types exchanged over a channel
pub mod call;
/// Channel-name to handler bindings and call dispatch
pub mod registry;

pub use call::{CallOutcome, MethodCall, MethodCallHandler};
pub use registry::ChannelRegistry;
