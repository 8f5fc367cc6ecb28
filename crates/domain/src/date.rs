use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Converts an epoch-millisecond timestamp into the process-local
/// timezone. `None` only for timestamps outside the representable range.
pub fn to_local(ts_millis: i64) -> Option<DateTime<Local>> {
    Utc.timestamp_millis_opt(ts_millis)
        .single()
        .map(|dt| dt.with_timezone(&Local))
}

pub fn local_date(ts_millis: i64) -> Option<NaiveDate> {
    to_local(ts_millis).map(|dt| dt.date_naive())
}

/// `HH:MM` wall-clock rendering used in digests and nag messages.
pub fn format_local_time(ts_millis: i64) -> String {
    to_local(ts_millis)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "??:??".to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timestamps_on_the_same_instant_share_a_date() {
        let ts = 1613862000000; // Feb 2021
        assert_eq!(local_date(ts), local_date(ts + 999));
        assert!(local_date(ts).is_some());
    }

    #[test]
    fn formats_wall_clock_time() {
        let formatted = format_local_time(1613862000000);
        assert_eq!(formatted.len(), 5);
        assert_eq!(&formatted[2..3], ":");
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        assert!(to_local(i64::MAX).is_none());
    }
}
