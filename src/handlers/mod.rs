/// Handler answering timezone queries on the timezone channel
pub mod timezone;

pub use timezone::{TimezoneQueryHandler, GET_LOCAL_TIMEZONE, TIMEZONE_CHANNEL};
