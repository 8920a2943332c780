//! This module provides common utility functions

use std::time::Duration;

/// Format a [`Duration`] with the most readable unit and two decimal places
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();
    if seconds >= 60.0 {
        let minutes = duration.as_secs() / 60;
        format!("{minutes}m {:.2}s", seconds - (minutes * 60) as f64)
    } else if seconds >= 1.0 {
        format!("{seconds:.2}s")
    } else if seconds >= 0.001 {
        format!("{:.2}ms", seconds * 1e3)
    } else {
        format!("{:.2}µs", seconds * 1e6)
    }
}
