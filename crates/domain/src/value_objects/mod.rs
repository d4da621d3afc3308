//! Value Objects - Immutable, identity-less domain primitives

mod civil_timezone;
mod credentials;
mod date_range;

pub use civil_timezone::CivilTimezone;
pub use credentials::PortalCredentials;
pub use date_range::DateRange;
