//! vocate-core
//!
//! Pure domain types for the Vocate career-readiness assessment.
//! No catalog data, no scoring logic — this is the shared vocabulary of the
//! Vocate system.

pub mod error;
pub mod models;
