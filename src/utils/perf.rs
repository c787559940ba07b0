/// Times `$block` and logs a warning when it runs longer than `$threshold_micros`.
/// Compiles down to the bare block when `LOG_PERFORMANCE` is off.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $threshold_micros:expr, $block:block) => {{
        if $crate::config::LOG_PERFORMANCE {
            let start = $crate::utils::AppInstant::now();
            let result = $block;
            let micros = start.elapsed().as_micros();
            if micros > $threshold_micros {
                let build = if cfg!(debug_assertions) { "debug" } else { "release" };
                log::warn!(
                    "SLOW [{}] '{}': {:.3}ms (limit {:.3}ms)",
                    build,
                    $name,
                    micros as f64 / 1000.0,
                    $threshold_micros as f64 / 1000.0
                );
            }
            result
        } else {
            $block
        }
    }};
}
