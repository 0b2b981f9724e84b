//! Time-window evaluation for timed records: classify an item against the
//! current instant and expose the relevant span as truncated day/hour/minute
//! parts for display.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStatus {
    Upcoming,
    Active,
    Expired,
    Unknown,
}

/// Classification plus the span it refers to: time until activation
/// (Upcoming), time until expiry (Active, `None` when unbounded), or time
/// since expiry (Expired). Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub status: WindowStatus,
    pub span: Option<Duration>,
}

impl Window {
    pub fn parts(&self) -> Option<DurationParts> {
        self.span.map(DurationParts::from_duration)
    }
}

/// Classify a record by its optional activation/expiry instants (epoch ms).
///
/// An item with no activation but a future expiry is Active (there is no
/// Upcoming without an activation bound); an item with neither timestamp is
/// Unknown. Millisecond values chrono cannot represent count as absent.
pub fn classify(activation_ms: Option<i64>, expiry_ms: Option<i64>, now: DateTime<Utc>) -> Window {
    let activation = activation_ms.and_then(DateTime::<Utc>::from_timestamp_millis);
    let expiry = expiry_ms.and_then(DateTime::<Utc>::from_timestamp_millis);

    if activation.is_none() && expiry.is_none() {
        return Window {
            status: WindowStatus::Unknown,
            span: None,
        };
    }

    if let Some(start) = activation {
        if now < start {
            return Window {
                status: WindowStatus::Upcoming,
                span: Some(start - now),
            };
        }
    }

    match expiry {
        Some(end) if now >= end => Window {
            status: WindowStatus::Expired,
            span: Some(now - end),
        },
        Some(end) => Window {
            status: WindowStatus::Active,
            span: Some(end - now),
        },
        None => Window {
            status: WindowStatus::Active,
            span: None,
        },
    }
}

/// A span broken into whole days plus remaining hours and minutes.
/// Truncation, not rounding: 23h59m59s is 0 days, 23 hours, 59 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl DurationParts {
    pub fn from_duration(d: Duration) -> Self {
        let secs = d.num_seconds().max(0);
        Self {
            days: secs / 86_400,
            hours: (secs % 86_400) / 3_600,
            minutes: (secs % 3_600) / 60,
        }
    }

    /// Compact form: `"3天2时"` past a day, `"2时5分"` under one.
    pub fn fmt_short(&self) -> String {
        if self.days > 0 {
            format!("{}天{}时", self.days, self.hours)
        } else {
            format!("{}时{}分", self.hours, self.minutes)
        }
    }

    /// Long form used by the trader and archon sections: `"3天 2小时"`.
    pub fn fmt_days_hours(&self) -> String {
        format!("{}天 {}小时", self.days, self.hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    const HOUR_MS: i64 = 3_600_000;
    const DAY_MS: i64 = 24 * HOUR_MS;

    #[test]
    fn test_neither_timestamp_is_unknown() {
        let w = classify(None, None, at(0));
        assert_eq!(w.status, WindowStatus::Unknown);
        assert_eq!(w.span, None);
    }

    #[test]
    fn test_upcoming_spans_to_activation() {
        // activation = now + 3d, expiry = now + 10d
        let now = at(DAY_MS);
        let w = classify(Some(DAY_MS * 4), Some(DAY_MS * 11), now);
        assert_eq!(w.status, WindowStatus::Upcoming);
        let parts = w.parts().unwrap();
        assert_eq!(parts.days, 3);
        assert_eq!(parts.fmt_short(), "3天0时");
    }

    #[test]
    fn test_active_spans_to_expiry() {
        // activation = now - 1h, expiry = now + 2h
        let now = at(HOUR_MS * 10);
        let w = classify(Some(HOUR_MS * 9), Some(HOUR_MS * 12), now);
        assert_eq!(w.status, WindowStatus::Active);
        assert_eq!(w.parts().unwrap().fmt_short(), "2时0分");
    }

    #[test]
    fn test_no_activation_future_expiry_is_active() {
        let w = classify(None, Some(HOUR_MS), at(0));
        assert_eq!(w.status, WindowStatus::Active);
    }

    #[test]
    fn test_no_expiry_is_active_unbounded() {
        let w = classify(Some(0), None, at(HOUR_MS));
        assert_eq!(w.status, WindowStatus::Active);
        assert_eq!(w.span, None);
    }

    #[test]
    fn test_exact_expiry_instant_is_expired() {
        let w = classify(Some(0), Some(HOUR_MS), at(HOUR_MS));
        assert_eq!(w.status, WindowStatus::Expired);
        assert_eq!(w.span, Some(Duration::zero()));
    }

    #[test]
    fn test_spans_are_non_negative() {
        for (a, e, now) in [
            (Some(0), Some(HOUR_MS), at(DAY_MS)),
            (Some(DAY_MS), Some(DAY_MS * 2), at(0)),
            (Some(0), Some(HOUR_MS), at(HOUR_MS / 2)),
        ] {
            let w = classify(a, e, now);
            if let Some(span) = w.span {
                assert!(span >= Duration::zero());
            }
        }
    }

    #[test]
    fn test_parts_truncate_at_boundaries() {
        // 23h59m59s -> 0 days, 23 hours, 59 minutes; formatted "23时59分".
        let parts = DurationParts::from_duration(Duration::seconds(23 * 3600 + 59 * 60 + 59));
        assert_eq!((parts.days, parts.hours, parts.minutes), (0, 23, 59));
        assert_eq!(parts.fmt_short(), "23时59分");

        let day_plus = DurationParts::from_duration(Duration::seconds(86_400 + 2 * 3600 + 59 * 60));
        assert_eq!(day_plus.fmt_short(), "1天2时");
        assert_eq!(day_plus.fmt_days_hours(), "1天 2小时");
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        let parts = DurationParts::from_duration(Duration::seconds(-5));
        assert_eq!((parts.days, parts.hours, parts.minutes), (0, 0, 0));
    }
}
