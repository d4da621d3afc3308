//! Domain layer for Plancast
//!
//! Contains the canonical calendar-event model, credential and date-window
//! value objects, and domain errors. This layer knows nothing about HTTP,
//! RSA, or the upstream portal's wire format.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
