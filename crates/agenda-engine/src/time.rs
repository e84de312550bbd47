//! Wall-clock time of day as minutes since midnight.
//!
//! Upstream payloads carry times as `"HH:MM"` or `"HH:MM:SS"` strings; only
//! the first five characters are significant. This module confines all string
//! handling to the parse/format boundary so the slot algorithms operate on
//! plain minute integers.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AgendaError, Result};

/// Width of the standard bookable grid, in minutes.
pub const GRID_STEP: u16 = 15;

/// A wall-clock instant within one day, stored as minutes since midnight.
///
/// The generation domain is `[0, 1439]`; an appointment ending at midnight may
/// carry minute 1440, which is treated as an exclusive upper bound everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub const fn from_minutes(minutes: u16) -> Self {
        TimeOfDay(minutes)
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Strict parse of an `"HH:MM"` or `"HH:MM:SS"` string.
    ///
    /// Characters beyond the fifth (the seconds field) are ignored.
    ///
    /// # Errors
    /// Returns [`AgendaError::InvalidTime`] when the input is shorter than
    /// five characters, not colon-separated, or out of the 24-hour range.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || AgendaError::InvalidTime(input.to_string());

        let hhmm = input.get(0..5).ok_or_else(invalid)?;
        let (hours, minutes) = hhmm.split_once(':').ok_or_else(invalid)?;
        let hours: u16 = hours.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        Ok(TimeOfDay(hours * 60 + minutes))
    }

    /// Lenient parse: absent, empty, or malformed input maps to midnight.
    ///
    /// This mirrors the upstream contract where a falsy time string means
    /// minute 0, never an error.
    pub fn parse_lenient(input: Option<&str>) -> Self {
        input
            .and_then(|s| Self::parse(s).ok())
            .unwrap_or(Self::MIDNIGHT)
    }

    /// Round up to the next multiple of [`GRID_STEP`]; already-aligned values
    /// are returned unchanged.
    pub const fn next_grid_boundary(self) -> Self {
        TimeOfDay(self.0 + (GRID_STEP - self.0 % GRID_STEP) % GRID_STEP)
    }

    pub const fn is_grid_aligned(self) -> bool {
        self.0 % GRID_STEP == 0
    }

    /// Convert to a [`chrono::NaiveTime`]; `None` for the 24:00 sentinel.
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.0) / 60, u32::from(self.0) % 60, 0)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TimeOfDay::parse_lenient(Some(&s)))
    }
}
