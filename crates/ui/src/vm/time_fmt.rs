use chrono::Duration;

/// `m:ss`, or `h:mm:ss` past an hour. Negative durations render as zero.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let total = value.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
