mod perf;

pub mod maths_utils;
pub mod time_utils;

pub use time_utils::{AppInstant, TimeUtils, epoch_ms_to_date_string, now_timestamp_ms};
