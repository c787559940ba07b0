use chrono::DateTime;

/// Monotonic clock that also works in the browser
pub use web_time::Instant as AppInstant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Plot x coordinate for a timestamp: fractional days since the epoch.
    pub fn epoch_ms_to_plot_x(epoch_ms: i64) -> f64 {
        epoch_ms as f64 / Self::MS_IN_D as f64
    }

    pub fn plot_x_to_epoch_ms(x: f64) -> i64 {
        (x * Self::MS_IN_D as f64).round() as i64
    }
}

// Time Helper functions

/// Formats for display. Out-of-range timestamps come back empty rather than panicking.
pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn now_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_x_round_trips_whole_days() {
        let ms = 19_700 * TimeUtils::MS_IN_D;
        assert_eq!(TimeUtils::epoch_ms_to_plot_x(ms), 19_700.0);
        assert_eq!(TimeUtils::plot_x_to_epoch_ms(19_700.0), ms);
    }

    #[test]
    fn formats_dates_in_utc() {
        // 2024-03-01T00:00:00Z
        assert_eq!(epoch_ms_to_date_string(1_709_251_200_000), "2024-03-01");
    }
}
