//! Unified slot list construction and occupant resolution.
//!
//! Merges three slot sources — the standard grid, derived fit-ins, and
//! irregular appointment starts — into one chronologically ordered list that
//! the plan walk consumes.

use crate::appointment::Appointment;
use crate::fitin::detect_fit_ins;
use crate::grid::standard_slots;
use crate::schedule::Schedule;
use crate::time::TimeOfDay;

/// Which source a display slot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// A grid-aligned bookable instant.
    Standard,
    /// A derived fit-in window ending at the next grid boundary.
    FitIn {
        end: TimeOfDay,
        duration_minutes: u16,
    },
    /// An appointment start that matched no other slot; injected so
    /// irregular appointments are never silently dropped from the plan.
    AppointmentStart,
}

/// One entry in the unified slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySlot {
    pub time: TimeOfDay,
    pub kind: SlotKind,
}

/// Merge all slot sources and sort ascending by minute of day.
///
/// The sort is stable, so entries sharing a minute keep their insertion
/// order: standard, then fit-in, then appointment-start. That tie-break is
/// inherited behavior the plan walk depends on — changing it changes which
/// card appears when an appointment's start coincides with a fit-in start.
pub fn build_slot_list(schedule: &Schedule, appointments: &[Appointment]) -> Vec<DisplaySlot> {
    let mut slots: Vec<DisplaySlot> = standard_slots(schedule)
        .into_iter()
        .map(|time| DisplaySlot {
            time,
            kind: SlotKind::Standard,
        })
        .collect();

    for fit_in in detect_fit_ins(appointments, schedule) {
        slots.push(DisplaySlot {
            time: fit_in.start,
            kind: SlotKind::FitIn {
                end: fit_in.end,
                duration_minutes: fit_in.duration_minutes,
            },
        });
    }

    for appointment in appointments {
        if appointment.is_free() {
            continue;
        }
        let Some(start) = appointment.start() else {
            continue;
        };
        if slots.iter().all(|slot| slot.time != start) {
            slots.push(DisplaySlot {
                time: start,
                kind: SlotKind::AppointmentStart,
            });
        }
    }

    slots.sort_by_key(|slot| slot.time);
    slots
}

/// The appointment (if any) whose half-open interval `[start, end)` contains
/// the given instant.
///
/// Scans in the given order and returns the first match, so if two
/// appointments illegally overlap, the earlier one in iteration order wins.
/// Unlike fit-in detection, `free` appointments are matchable here — a free
/// block occupies its interval even though it never creates fit-ins.
pub fn resolve_occupant(time: TimeOfDay, appointments: &[Appointment]) -> Option<&Appointment> {
    appointments.iter().find(|appointment| {
        appointment
            .interval()
            .is_some_and(|(start, end)| time >= start && time < end)
    })
}
