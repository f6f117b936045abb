use chrono::{DateTime, Utc};
use colored::*;

pub fn format_relative_time(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        let now = Utc::now();
        let duration = now.signed_duration_since(parsed);

        if duration.num_days() > 365 {
            format!("{}y ago", duration.num_days() / 365)
        } else if duration.num_days() > 30 {
            format!("{}mo ago", duration.num_days() / 30)
        } else if duration.num_days() > 0 {
            format!("{}d ago", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{}h ago", duration.num_hours())
        } else if duration.num_minutes() > 0 {
            format!("{}m ago", duration.num_minutes())
        } else {
            "just now".to_string()
        }
    } else {
        "unknown".to_string()
    }
}

/// Minutes to a compact "1h 23m" display. Negative minutes read as overdue.
pub fn format_minutes(minutes: i64) -> String {
    let abs = minutes.unsigned_abs();
    let formatted = if abs >= 60 {
        format!("{}h {}m", abs / 60, abs % 60)
    } else {
        format!("{}m", abs)
    };
    if minutes < 0 {
        format!("{} overdue", formatted)
    } else {
        formatted
    }
}

/// Signed delta with an arrow, for the KPI trend line.
pub fn format_trend(change: i64) -> ColoredString {
    if change > 0 {
        format!("▲ +{}", change).red()
    } else if change < 0 {
        format!("▼ {}", change).green()
    } else {
        "— 0".dimmed()
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(83), "1h 23m");
        assert_eq!(format_minutes(-30), "30m overdue");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long string", 10), "a very ...");
    }
}
