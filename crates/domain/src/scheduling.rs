//! Event schedule validation
//!
//! All checks here are deliberately timezone-naive: the event date and
//! times are civil wall-clock values, and the product assumes hosts and
//! guests share a time zone. Nothing in this module reads a clock;
//! callers pass `now` in explicitly.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Minimum lead time between "now" and an event's start
pub const MIN_LEAD_TIME_MINUTES: i64 = 30;

/// Check that an optional end time comes strictly after the start time
///
/// An absent end time is always valid (open-ended event). Equal times are
/// rejected, and an end before the start is rejected rather than being
/// read as "ends the next day".
pub fn is_valid_time_range(start: NaiveTime, end: Option<NaiveTime>) -> bool {
    end.is_none_or(|end| end > start)
}

/// Check that a candidate date and time is at least `min_minutes` ahead of `now`
///
/// Missing date or time makes the predicate false, never an error; the
/// consuming form treats it the same as a past date. The boundary is
/// inclusive: exactly `min_minutes` ahead passes. A lead time too large
/// to represent is also false rather than a panic.
pub fn is_at_least_minutes_in_future(
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    min_minutes: i64,
    now: NaiveDateTime,
) -> bool {
    let (Some(date), Some(time)) = (date, time) else {
        return false;
    };
    let Some(threshold) =
        Duration::try_minutes(min_minutes).and_then(|lead| now.checked_add_signed(lead))
    else {
        return false;
    };
    date.and_time(time) >= threshold
}

/// When an event takes place: a date, a start time, and an optional end time
///
/// The end-after-start invariant is established in [`EventSchedule::new`]
/// and holds for every constructed value, including deserialized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventSchedule {
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: Option<NaiveTime>,
}

impl EventSchedule {
    /// Create a schedule, rejecting an end time that is not after the start
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: Option<NaiveTime>,
    ) -> Result<Self, DomainError> {
        if !is_valid_time_range(start_time, end_time) {
            return Err(DomainError::InvalidTimeRange(format!(
                "end time must be after start time ({start_time})"
            )));
        }
        Ok(Self {
            date,
            start_time,
            end_time,
        })
    }

    /// The event's calendar date
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The event's start time
    pub const fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// The event's end time, if the host set one
    pub const fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }

    /// The event's start as a naive local timestamp
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Whether the event can still be scheduled as of `now`
    ///
    /// Applies the standard 30-minute lead time so guests have a chance
    /// to see the invite before the event begins.
    pub fn is_schedulable_at(&self, now: NaiveDateTime) -> bool {
        is_at_least_minutes_in_future(
            Some(self.date),
            Some(self.start_time),
            MIN_LEAD_TIME_MINUTES,
            now,
        )
    }
}

/// Custom deserialization that re-validates the time range
impl<'de> Deserialize<'de> for EventSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            date: NaiveDate,
            start_time: NaiveTime,
            #[serde(default)]
            end_time: Option<NaiveTime>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.date, raw.start_time, raw.end_time).map_err(serde::de::Error::custom)
    }
}
