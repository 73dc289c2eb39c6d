//! Relative-time formatting for feed display.

use chrono::{DateTime, Utc};

/// Format how long ago `then` happened, relative to `now`.
///
/// Buckets: seconds under a minute, minutes under an hour, hours under a
/// day, then days. Hours and days pluralize; seconds and minutes keep their
/// abbreviated unit. A `then` in the future clamps to `0 sec ago`.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    if seconds < 60 {
        return format!("{seconds} sec ago");
    }
    if seconds < 3_600 {
        return format!("{} min ago", seconds / 60);
    }
    if seconds < 86_400 {
        let hours = seconds / 3_600;
        return format!("{hours} hour{} ago", if hours > 1 { "s" } else { "" });
    }

    let days = seconds / 86_400;
    format!("{days} day{} ago", if days > 1 { "s" } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn seconds_under_a_minute() {
        assert_eq!(format_time_ago(now() - Duration::seconds(0), now()), "0 sec ago");
        assert_eq!(format_time_ago(now() - Duration::seconds(59), now()), "59 sec ago");
    }

    #[test]
    fn minutes_under_an_hour() {
        assert_eq!(format_time_ago(now() - Duration::seconds(60), now()), "1 min ago");
        assert_eq!(format_time_ago(now() - Duration::minutes(59), now()), "59 min ago");
    }

    #[test]
    fn hours_pluralize() {
        assert_eq!(format_time_ago(now() - Duration::hours(1), now()), "1 hour ago");
        assert_eq!(format_time_ago(now() - Duration::hours(2), now()), "2 hours ago");
        assert_eq!(format_time_ago(now() - Duration::hours(23), now()), "23 hours ago");
    }

    #[test]
    fn days_pluralize() {
        assert_eq!(format_time_ago(now() - Duration::days(1), now()), "1 day ago");
        assert_eq!(format_time_ago(now() - Duration::days(12), now()), "12 days ago");
    }

    #[test]
    fn future_timestamps_clamp_to_zero() {
        assert_eq!(format_time_ago(now() + Duration::minutes(5), now()), "0 sec ago");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Every elapsed duration renders as a non-negative "... ago".
            #[test]
            fn always_renders_a_non_negative_bucket(offset in -86_400i64..10_000_000) {
                let then = now() - Duration::seconds(offset);
                let rendered = format_time_ago(then, now());
                prop_assert!(rendered.ends_with(" ago"));
                prop_assert!(!rendered.contains('-'));
            }
        }
    }
}
