//! Working-schedule definition for one professional on one calendar date.

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// Opening time used when the schedule carries no `start_time`.
pub const DEFAULT_OPENING: u16 = 8 * 60;
/// Closing time used when the schedule carries no `end_time`.
pub const DEFAULT_CLOSING: u16 = 18 * 60;

/// One professional's availability for a single date, as delivered by the
/// upstream scheduling service. All time fields are nullable `"HH:MM"` /
/// `"HH:MM:SS"` strings using the 24-hour wall clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub lunch_start_time: Option<String>,
    #[serde(default)]
    pub lunch_end_time: Option<String>,
    /// When set, the day offers no slots at all — callers show a day-off
    /// placeholder instead of a slot list.
    #[serde(default)]
    pub is_day_off: bool,
}

impl Schedule {
    /// Resolved opening time; defaults to 08:00 when absent or empty.
    pub fn opening(&self) -> TimeOfDay {
        resolve_time(&self.start_time, DEFAULT_OPENING)
    }

    /// Resolved closing time; defaults to 18:00 when absent or empty.
    pub fn closing(&self) -> TimeOfDay {
        resolve_time(&self.end_time, DEFAULT_CLOSING)
    }

    /// The validated lunch window, half-open `[start, end)`.
    ///
    /// A lunch interval counts only when both bounds are present, neither is
    /// `"00:00"`, and they differ. Anything else means no lunch break is
    /// excluded from the grid (fail open, not closed).
    pub fn lunch_interval(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        let start = self.lunch_start_time.as_deref().filter(|s| !s.is_empty())?;
        let end = self.lunch_end_time.as_deref().filter(|s| !s.is_empty())?;

        let start = TimeOfDay::parse_lenient(Some(start));
        let end = TimeOfDay::parse_lenient(Some(end));
        if start == TimeOfDay::MIDNIGHT || end == TimeOfDay::MIDNIGHT || start == end {
            return None;
        }

        Some((start, end))
    }
}

fn resolve_time(field: &Option<String>, fallback: u16) -> TimeOfDay {
    match field.as_deref() {
        Some(s) if !s.is_empty() => TimeOfDay::parse_lenient(Some(s)),
        _ => TimeOfDay::from_minutes(fallback),
    }
}
