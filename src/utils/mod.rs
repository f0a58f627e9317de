/// Consistent log formats for call dispatch and system events
pub mod logging;
