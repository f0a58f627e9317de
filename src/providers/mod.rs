/// Timezone identifier read from the operating environment
pub mod timezone;

pub use timezone::{FixedTimezoneProvider, SystemTimezoneProvider, TimezoneProvider};
