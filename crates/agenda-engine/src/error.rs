//! Error types for agenda-engine operations.
//!
//! The slot algorithms themselves never fail — degraded input is defaulted or
//! skipped (see [`crate::time::TimeOfDay::parse_lenient`]). Errors only arise
//! from the strict parsing API used at I/O boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
