//! WASM bindings for agenda-engine.
//!
//! Exposes slot generation, fit-in detection, and day-plan assembly to
//! JavaScript via `wasm-bindgen`. All complex types cross the boundary as
//! JSON strings in the shapes the upstream scheduling service already emits,
//! so the mobile caller can feed its API payloads straight through.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p agenda-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/agenda-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/agenda_engine_wasm.wasm
//! ```

use agenda_engine::{Appointment, Schedule};
use wasm_bindgen::prelude::*;

fn parse_schedule(json: &str) -> Result<Schedule, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))
}

fn parse_appointments(json: &str) -> Result<Vec<Appointment>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid appointments JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Generate the standard 15-minute grid for a schedule.
///
/// `schedule_json` is a `{start_time, end_time, lunch_start_time,
/// lunch_end_time, is_day_off}` object with nullable `"HH:MM"` strings.
/// Returns a JSON array of `"HH:MM"` strings.
#[wasm_bindgen(js_name = "standardSlots")]
pub fn standard_slots(schedule_json: &str) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    let slots = agenda_engine::standard_slots(&schedule);
    to_json(&slots)
}

/// Detect fit-in (encaixe) slots for the day's appointments.
///
/// `appointments_json` is a JSON array of appointment objects;
/// `schedule_json` as in [`standard_slots`]. Returns a JSON array of
/// `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "detectFitIns")]
pub fn detect_fit_ins(appointments_json: &str, schedule_json: &str) -> Result<String, JsValue> {
    let appointments = parse_appointments(appointments_json)?;
    let schedule = parse_schedule(schedule_json)?;
    let slots = agenda_engine::detect_fit_ins(&appointments, &schedule);
    to_json(&slots)
}

/// Build the full ordered day plan.
///
/// Returns a JSON object `{day_off, entries}` where each entry is a tagged
/// directive (`lunch_break` | `available` | `fit_in_available` | `booked`)
/// carrying the data the corresponding card needs.
#[wasm_bindgen(js_name = "buildDayPlan")]
pub fn build_day_plan(schedule_json: &str, appointments_json: &str) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    let appointments = parse_appointments(appointments_json)?;
    let plan = agenda_engine::build_day_plan(&schedule, &appointments);
    to_json(&plan)
}
