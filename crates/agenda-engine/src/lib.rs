//! # agenda-engine
//!
//! Deterministic slot derivation for one professional's booking agenda.
//!
//! Given a working-schedule definition (start/end time, lunch break, day-off
//! flag) and the day's appointments, the engine derives the complete ordered
//! set of renderable entries: standard 15-minute grid slots, fit-in (encaixe)
//! slots left behind by appointments ending at odd times, and booked cards
//! bound to their occupying appointment. The engine is pure and synchronous —
//! inputs fully determine outputs, nothing is cached, and degraded input is
//! defaulted or skipped rather than surfaced as an error.
//!
//! ## Quick start
//!
//! ```rust
//! use agenda_engine::{build_day_plan, Schedule};
//!
//! let schedule = Schedule {
//!     start_time: Some("08:00".into()),
//!     end_time: Some("09:00".into()),
//!     ..Schedule::default()
//! };
//!
//! // No appointments: every grid instant (closing boundary included) is free.
//! let plan = build_day_plan(&schedule, &[]);
//! assert!(!plan.day_off);
//! assert_eq!(plan.entries.len(), 5); // 08:00, 08:15, 08:30, 08:45, 09:00
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay` minutes-since-midnight value type
//! - [`schedule`] — working-hours and lunch-window resolution
//! - [`appointment`] — appointment records and status handling
//! - [`grid`] — standard 15-minute grid generation
//! - [`fitin`] — fit-in (encaixe) slot detection
//! - [`slots`] — unified slot list and occupant resolution
//! - [`plan`] — day-plan assembly into render directives
//! - [`error`] — error types for the strict parsing boundary

pub mod appointment;
pub mod error;
pub mod fitin;
pub mod grid;
pub mod plan;
pub mod schedule;
pub mod slots;
pub mod time;

pub use appointment::{Appointment, AppointmentStatus, Client, ServiceLine};
pub use error::AgendaError;
pub use fitin::{detect_fit_ins, FitInSlot};
pub use grid::standard_slots;
pub use plan::{build_day_plan, Directive, RenderPlan};
pub use schedule::Schedule;
pub use slots::{build_slot_list, resolve_occupant, DisplaySlot, SlotKind};
pub use time::{TimeOfDay, GRID_STEP};
