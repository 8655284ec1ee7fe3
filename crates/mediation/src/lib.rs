//! Mediation guidance for barangay conciliation.
//!
//! Two generators keyed by `CaseCategory`:
//! - `strategize`: objectives, issues, exclusions and outcomes for the mediator
//! - `generate_questions`: guide questions for complainant and respondent

pub mod questions;
pub mod strategy;

pub use questions::{format_incident_time, generate_party_questions, generate_questions};
pub use strategy::strategize;
