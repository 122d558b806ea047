mod utils;

pub mod time;

#[doc(hidden)]
pub use static_assertions;

pub use crate::time::{Duration, DurationError, ParseDurationError, Unit};
