//! Domain layer for Venha
//!
//! Contains the input normalization and validation core of the
//! event-invitation service: WhatsApp numbers, CEPs, invite slugs,
//! attendance counts, schedule validation, and naive calendar-date
//! display. Every function here is pure and synchronous; all state
//! lives behind the API this crate's callers talk to.

pub mod dates;
pub mod errors;
pub mod formatting;
pub mod scheduling;
pub mod value_objects;

pub use errors::DomainError;
pub use scheduling::EventSchedule;
pub use value_objects::*;
