//! Civil time of day and fixed-width time slots
//!
//! [`TimeOfDay`] is a wall-clock value with no date or timezone component;
//! arithmetic wraps at 24:00. [`TimeSlot`] is one selectable cell of the
//! day partition produced by [`generate_time_slots`]: slots never overlap
//! and exactly tile the 24-hour day. A slot ending exactly at midnight is
//! represented with `end = 00:00`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MINUTES_PER_DAY;
use crate::errors::{MusterError, Result};

/// A civil time (hour, minute). Totally ordered within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// 00:00, the start of the civil day.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a time of day, rejecting out-of-range components.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(MusterError::InvalidInput(format!(
                "invalid time of day {hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u32 {
        self.hour
    }

    pub const fn minute(self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since 00:00.
    pub const fn minutes_from_midnight(self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Shift by a signed number of minutes, wrapping at 24:00.
    ///
    /// Wrapping is a display-arithmetic convenience only; range expansion
    /// over slots never crosses midnight (the last slot of the day has no
    /// successor).
    pub fn add_minutes(self, minutes: i64) -> Self {
        let total = (i64::from(self.minutes_from_midnight()) + minutes)
            .rem_euclid(i64::from(MINUTES_PER_DAY));
        // rem_euclid keeps total in 0..1440
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total = total as u32;
        Self::from_wrapped_minutes(total)
    }

    const fn from_wrapped_minutes(total: u32) -> Self {
        Self { hour: (total / 60) % 24, minute: total % 60 }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One selectable slot of the day partition. Identity and order are keyed
/// by `start`; `end` is always `start + duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeSlot {
    /// Create a slot of the given width starting at `start`.
    pub fn new(start: TimeOfDay, duration_minutes: u32) -> Result<Self> {
        if duration_minutes == 0 || duration_minutes > MINUTES_PER_DAY {
            return Err(MusterError::InvalidInput(format!(
                "invalid slot duration: {duration_minutes} minutes"
            )));
        }
        Ok(Self { start, end: start.add_minutes(i64::from(duration_minutes)) })
    }

    pub const fn start(self) -> TimeOfDay {
        self.start
    }

    pub const fn end(self) -> TimeOfDay {
        self.end
    }

    /// Slot width in minutes, recovered from the wrapped end time.
    pub const fn duration_minutes(self) -> u32 {
        let wrapped = (self.end.minutes_from_midnight() + MINUTES_PER_DAY
            - self.start.minutes_from_midnight())
            % MINUTES_PER_DAY;
        if wrapped == 0 {
            MINUTES_PER_DAY
        } else {
            wrapped
        }
    }

    /// Whether this is the final slot of the day (end = 24:00, shown 00:00).
    pub fn ends_at_midnight(self) -> bool {
        self.end == TimeOfDay::MIDNIGHT
    }

    /// The adjacent slot starting where this one ends, `None` past midnight.
    pub fn next(self) -> Option<Self> {
        if self.ends_at_midnight() {
            return None;
        }
        Self::new(self.end, self.duration_minutes()).ok()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Generate the full ordered partition of a day into fixed-width slots.
///
/// `duration_minutes` must evenly divide 24 hours; the result has exactly
/// `1440 / duration_minutes` contiguous, non-overlapping slots starting at
/// 00:00.
pub fn generate_time_slots(duration_minutes: u32) -> Result<Vec<TimeSlot>> {
    if duration_minutes == 0 || MINUTES_PER_DAY % duration_minutes != 0 {
        return Err(MusterError::InvalidInput(format!(
            "slot duration must evenly divide a day, got {duration_minutes} minutes"
        )));
    }
    let mut slots = Vec::with_capacity((MINUTES_PER_DAY / duration_minutes) as usize);
    let mut minutes = 0;
    while minutes < MINUTES_PER_DAY {
        slots.push(TimeSlot::new(TimeOfDay::from_wrapped_minutes(minutes), duration_minutes)?);
        minutes += duration_minutes;
    }
    Ok(slots)
}
