//! Appointment records as delivered by the upstream scheduling service.
//!
//! The engine only reads these — it never mutates or persists them. The
//! `start < end` invariant is owned upstream; here we only guard for the
//! *presence* of both times before feeding an appointment to the interval
//! algorithms.

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// Appointment lifecycle status.
///
/// `Free` marks a staff-blocked open interval (e.g., a manually created
/// break): it participates in occupancy lookups but never in fit-in slot
/// detection. Statuses outside the known set deserialize to `Unknown` and
/// behave like any other occupying appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Free,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Optional client reference attached to an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One service line item on an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub service_id: i64,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<f64>,
}

fn default_quantity() -> u32 {
    1
}

/// An occupant of a contiguous time interval on the day.
///
/// `id` is unique within the day's set; time strings arrive as `"HH:MM:SS"`,
/// of which the first five characters are significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub client: Option<Client>,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Appointment {
    pub fn is_free(&self) -> bool {
        self.status == AppointmentStatus::Free
    }

    /// Start instant, when present and parseable.
    pub fn start(&self) -> Option<TimeOfDay> {
        parse_field(&self.start_time)
    }

    /// End instant, when present and parseable.
    pub fn end(&self) -> Option<TimeOfDay> {
        parse_field(&self.end_time)
    }

    /// Both bounds, for the algorithms that need a full interval. An
    /// appointment missing either time is excluded from interval work but
    /// never aborts processing of the rest of the day.
    pub fn interval(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        Some((self.start()?, self.end()?))
    }
}

fn parse_field(field: &Option<String>) -> Option<TimeOfDay> {
    field
        .as_deref()
        .filter(|s| !s.is_empty())
        .and_then(|s| TimeOfDay::parse(s).ok())
}
