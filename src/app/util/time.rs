use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn current_time_in_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or_default()
}

/// Seconds with one decimal and a trailing unit, e.g. `4.2s`.
pub fn format_elapsed_secs(elapsed: Duration) -> String {
    format!("{:.1}s", elapsed.as_secs_f64())
}
