//! Debugging feature flags.

/// Activate trace_time macro (scope-level timing)
pub const LOG_PERFORMANCE: bool = false;

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit one line per fetch request and its outcome.
    pub log_fetch: bool,

    /// Log rows dropped while decoding upstream bars.
    pub log_dropped_rows: bool,

    /// Anything about appending to the session store
    pub log_session: bool,

    pub log_figure_build: bool,

    /// Form validation rejections
    pub log_validation: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_session: true,

    log_dropped_rows: false,
    log_figure_build: false,
    log_validation: false,
};
