//! Standard 15-minute grid generation.

use crate::schedule::Schedule;
use crate::time::{TimeOfDay, GRID_STEP};

/// Generate the grid-aligned bookable instants for one schedule.
///
/// Steps from the opening time through *and including* the closing time in
/// 15-minute increments. The closing boundary itself is an emittable (if
/// likely unusable) slot — that inclusivity is deliberate. Boundaries inside
/// a valid lunch window `[lunch_start, lunch_end)` are skipped.
///
/// Day-off handling is a caller precondition: [`crate::plan::build_day_plan`]
/// short-circuits before this runs, and the flag is not re-checked here.
pub fn standard_slots(schedule: &Schedule) -> Vec<TimeOfDay> {
    let opening = schedule.opening().minutes();
    let closing = schedule.closing().minutes();
    let lunch = schedule.lunch_interval();

    let mut slots = Vec::new();
    let mut minute = opening;
    while minute <= closing {
        let in_lunch =
            lunch.is_some_and(|(start, end)| minute >= start.minutes() && minute < end.minutes());
        if !in_lunch {
            slots.push(TimeOfDay::from_minutes(minute));
        }
        minute += GRID_STEP;
    }

    slots
}
