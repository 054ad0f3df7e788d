//! Pure derivations of the countdown state used for rendering.

/// Length of the countdown: eight hours.
pub const TOTAL_DURATION_SECS: u32 = 8 * 60 * 60;

/// Format a number of seconds as `HH:MM:SS`.
///
/// Every field is zero-padded to two digits. The hours field only grows past
/// two digits for durations of 100 hours or more.
pub fn format_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Elapsed fraction of `total`, in `[0, 1]`.
///
/// `0.0` with the full duration remaining, `1.0` once expired. A zero total is
/// treated as already expired.
pub fn progress_fraction(remaining: u32, total: u32) -> f64 {
    if total == 0 {
        return 1.0;
    }
    let remaining = remaining.min(total);
    1.0 - f64::from(remaining) / f64::from(total)
}
