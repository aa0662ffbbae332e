//! Deal of the Day countdown.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Time from `now` until `target`. A target in the past yields zeros.
    #[must_use]
    pub fn until(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        Self::from_delta(target - now)
    }

    #[must_use]
    pub fn from_delta(delta: TimeDelta) -> Self {
        let total = delta.num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Units as two-digit strings, largest first.
    #[must_use]
    pub fn padded(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(|unit| format!("{unit:02}"))
    }
}

/// A fixed deal deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    ends_at: DateTime<Utc>,
}

impl Deal {
    /// A deal ending `duration_hours` after `start`.
    #[must_use]
    pub fn starting_at(start: DateTime<Utc>, duration_hours: u32) -> Self {
        Self {
            ends_at: start + TimeDelta::hours(i64::from(duration_hours)),
        }
    }

    #[must_use]
    pub const fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    #[must_use]
    pub fn time_left(&self, now: DateTime<Utc>) -> TimeLeft {
        TimeLeft::until(now, self.ends_at)
    }
}
