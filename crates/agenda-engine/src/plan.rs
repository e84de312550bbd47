//! Day-plan assembly — one walk over the unified slot list.
//!
//! Produces the ordered render directives a vertical agenda list needs: an
//! available card, a fit-in availability card, a booked card carrying the
//! occupying appointment, or the lunch-break marker. The walk keeps a
//! call-local set of rendered appointment ids so each appointment yields at
//! most one booked card, no matter how many slot entries fall inside it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::schedule::Schedule;
use crate::slots::{build_slot_list, resolve_occupant, SlotKind};
use crate::time::TimeOfDay;

/// One renderable entry in the day plan.
///
/// `Available` and `FitInAvailable` carry the data a booking tap needs
/// (start, and for fit-ins the implicit end); `Booked` carries the occupying
/// appointment for a view/edit tap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    LunchBreak {
        start: TimeOfDay,
        end: TimeOfDay,
    },
    Available {
        time: TimeOfDay,
    },
    FitInAvailable {
        start: TimeOfDay,
        end: TimeOfDay,
        duration_minutes: u16,
    },
    Booked {
        time: TimeOfDay,
        appointment: Appointment,
    },
}

/// The complete plan for one day: either a day-off placeholder or the
/// ordered directive list. Recomputed from scratch on every call — the
/// engine holds no state across invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub day_off: bool,
    pub entries: Vec<Directive>,
}

impl RenderPlan {
    /// The terminal day-off plan: no slots, ever.
    pub fn day_off() -> Self {
        RenderPlan {
            day_off: true,
            entries: Vec::new(),
        }
    }
}

/// Build the ordered day plan for one schedule and its appointments.
///
/// Per-slot precedence:
///
/// 1. An appointment starting exactly at the slot's minute renders
///    immediately, regardless of slot kind. Already-rendered ids drop the
///    entry instead of duplicating the card.
/// 2. Fit-in entries render an unrendered occupant, collapse to nothing for
///    a rendered one, and otherwise offer the fit-in window.
/// 3. Standard and appointment-start entries render an unrendered occupant
///    and otherwise stay offered as available — grid instants inside an
///    already-rendered appointment remain bookable.
///
/// The lunch marker is inserted once, immediately before the first slot past
/// the lunch start, guarded by the previous slot still sitting before it.
pub fn build_day_plan(schedule: &Schedule, appointments: &[Appointment]) -> RenderPlan {
    if schedule.is_day_off {
        return RenderPlan::day_off();
    }

    let slots = build_slot_list(schedule, appointments);
    let lunch = schedule.lunch_interval();

    let mut entries = Vec::with_capacity(slots.len());
    let mut rendered: HashSet<i64> = HashSet::new();
    let mut lunch_marked = false;
    let mut previous: Option<TimeOfDay> = None;

    for slot in &slots {
        if let Some((lunch_start, lunch_end)) = lunch {
            if !lunch_marked && slot.time > lunch_start && previous.is_none_or(|p| p < lunch_start)
            {
                entries.push(Directive::LunchBreak {
                    start: lunch_start,
                    end: lunch_end,
                });
                lunch_marked = true;
            }
        }
        previous = Some(slot.time);

        // Exact start match wins over every slot kind.
        if let Some(appointment) = appointments
            .iter()
            .find(|a| a.start() == Some(slot.time))
        {
            if rendered.insert(appointment.id) {
                entries.push(Directive::Booked {
                    time: slot.time,
                    appointment: appointment.clone(),
                });
            }
            continue;
        }

        match slot.kind {
            SlotKind::FitIn {
                end,
                duration_minutes,
            } => match resolve_occupant(slot.time, appointments) {
                Some(appointment) => {
                    if rendered.insert(appointment.id) {
                        entries.push(Directive::Booked {
                            time: slot.time,
                            appointment: appointment.clone(),
                        });
                    }
                }
                None => entries.push(Directive::FitInAvailable {
                    start: slot.time,
                    end,
                    duration_minutes,
                }),
            },
            SlotKind::Standard | SlotKind::AppointmentStart => {
                match resolve_occupant(slot.time, appointments) {
                    Some(appointment) if !rendered.contains(&appointment.id) => {
                        rendered.insert(appointment.id);
                        entries.push(Directive::Booked {
                            time: slot.time,
                            appointment: appointment.clone(),
                        });
                    }
                    _ => entries.push(Directive::Available { time: slot.time }),
                }
            }
        }
    }

    RenderPlan {
        day_off: false,
        entries,
    }
}
