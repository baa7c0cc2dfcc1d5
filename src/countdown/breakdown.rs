//! Remaining-time decomposition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Whole days, hours, minutes and seconds left until a target.
///
/// Days are fixed 24h spans; there is no calendar arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeBreakdown {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Floor-decompose a distance in milliseconds; non-positive distances are zero
    pub fn from_millis(distance_ms: i64) -> Self {
        if distance_ms <= 0 {
            return Self::ZERO;
        }

        // Positive from here on, so the casts cannot wrap
        Self {
            days: (distance_ms / MS_PER_DAY) as u64,
            hours: ((distance_ms % MS_PER_DAY) / MS_PER_HOUR) as u64,
            minutes: ((distance_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u64,
            seconds: ((distance_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u64,
        }
    }

    /// Time left from `now` until `target`
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis((target - now).num_milliseconds())
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Total whole seconds represented
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

impl std::fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}d {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_from_millis_decomposition() {
        // 1d 2h 3m 4s 999ms
        let ms = MS_PER_DAY + 2 * MS_PER_HOUR + 3 * MS_PER_MINUTE + 4 * MS_PER_SECOND + 999;
        let b = TimeBreakdown::from_millis(ms);

        assert_eq!(
            b,
            TimeBreakdown {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4
            }
        );
        assert_eq!(b.total_seconds(), (ms / 1000) as u64);
    }

    #[test]
    fn test_non_positive_distance_is_zero() {
        assert!(TimeBreakdown::from_millis(0).is_zero());
        assert!(TimeBreakdown::from_millis(-1).is_zero());
        assert!(TimeBreakdown::from_millis(-MS_PER_DAY * 30).is_zero());
        // Less than one second left floors to zero as well
        assert!(TimeBreakdown::from_millis(999).is_zero());
    }

    #[test]
    fn test_until() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let target = now + Duration::days(15);

        let b = TimeBreakdown::until(target, now);
        assert_eq!(b.days, 15);
        assert_eq!(b.total_seconds(), 15 * 86_400);

        let later = target + Duration::seconds(5);
        assert!(TimeBreakdown::until(target, later).is_zero());
    }

    #[test]
    fn test_decomposition_identity() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        let target = now + Duration::days(1);

        for elapsed_ms in [0_i64, 1, 999, 1_000, 61_500, 3_599_999, 86_399_000] {
            let b = TimeBreakdown::until(target, now + Duration::milliseconds(elapsed_ms));
            let remaining_secs = (86_400_000 - elapsed_ms) / 1000;

            assert_eq!(b.total_seconds(), remaining_secs as u64);
            assert!(b.hours < 24 && b.minutes < 60 && b.seconds < 60);
        }
    }

    #[test]
    fn test_display_is_zero_padded() {
        let b = TimeBreakdown {
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6,
        };
        assert_eq!(b.to_string(), "03d 04:05:06");
        assert_eq!(TimeBreakdown::ZERO.to_string(), "00d 00:00:00");
    }
}
