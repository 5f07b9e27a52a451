//! Due-date formatting and countdown buckets.
//!
//! The books page renders two kinds of time text: an absolute
//! `DD/MM/YYYY HH:MM` stamp and a minute-resolution countdown against the
//! borrow's due date. Malformed timestamps degrade to empty text instead of
//! surfacing an error; a row with a bad date is simply blank in that column.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Formats a timestamp as `DD/MM/YYYY HH:MM`, or `""` when unparseable.
///
/// Accepts RFC 3339 timestamps as exported by the server, plus the naive
/// `YYYY-MM-DDTHH:MM:SS` and bare `YYYY-MM-DD` forms older exports used.
/// Offset-carrying stamps are normalized to UTC first, so the stamp and
/// the countdown next to it always agree on the wall clock.
pub fn format_date_time(value: &str) -> String {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return stamp.with_timezone(&Utc).format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return stamp.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return format!("{} 00:00", date.format("%d/%m/%Y"));
    }
    String::new()
}

/// Day/hour/minute buckets between now and a due date.
///
/// Buckets are computed at minute resolution with flooring division, so a
/// due date 90 seconds in the past counts as 2 minutes late and one
/// 90 seconds ahead counts as 1 minute left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub overdue: bool,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Countdown {
    /// Computes buckets for a due timestamp against the supplied wall clock.
    /// Returns `None` when the due value does not parse.
    pub fn until(due: &str, now: DateTime<Utc>) -> Option<Countdown> {
        let due = DateTime::parse_from_rfc3339(due).ok()?.with_timezone(&Utc);
        let diff = due - now;
        let total_minutes = diff.num_seconds().div_euclid(60);

        if diff.num_seconds() >= 0 {
            Some(Countdown {
                overdue: false,
                days: total_minutes / (60 * 24),
                hours: (total_minutes % (60 * 24)) / 60,
                minutes: total_minutes % 60,
            })
        } else {
            let late = -total_minutes;
            Some(Countdown {
                overdue: true,
                days: late / (60 * 24),
                hours: (late % (60 * 24)) / 60,
                minutes: late % 60,
            })
        }
    }

    /// Human-readable countdown text for the due column.
    pub fn label(&self) -> String {
        if self.overdue {
            format!("overdue by {} d, {} h, {} min", self.days, self.hours, self.minutes)
        } else {
            format!("{} d, {} h, {} min left", self.days, self.hours, self.minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).expect("test timestamp").with_timezone(&Utc)
    }

    #[test]
    fn formats_rfc3339_stamps() {
        assert_eq!(format_date_time("2026-08-29T14:05:00Z"), "29/08/2026 14:05");
        assert_eq!(format_date_time("2026-01-02T03:04:05+00:00"), "02/01/2026 03:04");
    }

    #[test]
    fn offset_stamps_normalize_to_utc() {
        assert_eq!(format_date_time("2026-08-29T14:05:00+02:00"), "29/08/2026 12:05");
        assert_eq!(format_date_time("2026-01-01T01:30:00-05:00"), "01/01/2026 06:30");
    }

    #[test]
    fn formats_naive_and_date_only_stamps() {
        assert_eq!(format_date_time("2026-08-29T14:05:00"), "29/08/2026 14:05");
        assert_eq!(format_date_time("2026-08-29"), "29/08/2026 00:00");
    }

    #[test]
    fn malformed_dates_render_empty() {
        assert_eq!(format_date_time(""), "");
        assert_eq!(format_date_time("not-a-date"), "");
        assert_eq!(format_date_time("2026-13-45T99:99:99Z"), "");
    }

    #[test]
    fn countdown_buckets_remaining_time() {
        let now = at("2026-08-29T12:00:00Z");
        let cd = Countdown::until("2026-08-31T14:30:00Z", now).expect("countdown");
        assert!(!cd.overdue);
        assert_eq!((cd.days, cd.hours, cd.minutes), (2, 2, 30));
        assert_eq!(cd.label(), "2 d, 2 h, 30 min left");
    }

    #[test]
    fn countdown_buckets_overdue_time() {
        let now = at("2026-08-29T12:00:00Z");
        let cd = Countdown::until("2026-08-28T10:15:00Z", now).expect("countdown");
        assert!(cd.overdue);
        assert_eq!((cd.days, cd.hours, cd.minutes), (1, 1, 45));
        assert_eq!(cd.label(), "overdue by 1 d, 1 h, 45 min");
    }

    #[test]
    fn countdown_floors_partial_minutes() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
        // 90 seconds ahead floors to 1 full minute left.
        let ahead = Countdown::until("2026-08-29T12:01:30Z", now).unwrap();
        assert_eq!((ahead.overdue, ahead.minutes), (false, 1));
        // 90 seconds behind floors to 2 minutes late.
        let behind = Countdown::until("2026-08-29T11:58:30Z", now).unwrap();
        assert_eq!((behind.overdue, behind.minutes), (true, 2));
    }

    #[test]
    fn countdown_rejects_malformed_due() {
        let now = at("2026-08-29T12:00:00Z");
        assert_eq!(Countdown::until("soon", now), None);
        assert_eq!(Countdown::until("", now), None);
    }
}
