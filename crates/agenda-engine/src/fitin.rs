//! Fit-in (encaixe) slot detection.
//!
//! An appointment ending at a non-grid-aligned time leaves a short gap before
//! the next 15-minute boundary — e.g., a 23-minute service ending at 09:23
//! leaves 09:23–09:30. Those gaps are opportunistic bookable slots, provided
//! nothing else already claims them.

use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::schedule::Schedule;
use crate::time::TimeOfDay;

/// A derived short slot between an appointment's end and the next grid
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitInSlot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub duration_minutes: u16,
}

/// Derive every available fit-in slot from the day's appointments.
///
/// For each non-`free` appointment with both times present, the candidate
/// window is `[end, next_grid_boundary(end))`. A candidate is dropped when:
///
/// - the end is already grid-aligned (no gap exists);
/// - the end or the boundary falls inside a valid lunch window;
/// - another non-`free` appointment starts exactly at this end (exact
///   conflict — zero usable gap remains);
/// - another non-`free` appointment starts or ends strictly inside the
///   candidate window (partial overlap).
///
/// `free` appointments neither create fit-ins nor count as conflicts here;
/// they only matter for occupancy (see [`crate::slots::resolve_occupant`]).
pub fn detect_fit_ins(appointments: &[Appointment], schedule: &Schedule) -> Vec<FitInSlot> {
    let lunch = schedule.lunch_interval();
    let mut slots = Vec::new();

    for appointment in appointments {
        if appointment.is_free() {
            continue;
        }
        let Some((_, end)) = appointment.interval() else {
            continue;
        };

        let boundary = end.next_grid_boundary();
        if boundary == end {
            continue;
        }

        if let Some((lunch_start, lunch_end)) = lunch {
            let in_lunch = |t: TimeOfDay| t >= lunch_start && t < lunch_end;
            if in_lunch(end) || in_lunch(boundary) {
                continue;
            }
        }

        let conflicted = appointments.iter().any(|other| {
            if other.id == appointment.id || other.is_free() {
                return false;
            }
            let Some((other_start, other_end)) = other.interval() else {
                return false;
            };
            // Exact conflict: the next appointment begins precisely here.
            if other_start == end {
                return true;
            }
            (other_start > end && other_start < boundary)
                || (other_end > end && other_end < boundary)
        });
        if conflicted {
            continue;
        }

        slots.push(FitInSlot {
            start: end,
            end: boundary,
            duration_minutes: boundary.minutes() - end.minutes(),
        });
    }

    slots
}
