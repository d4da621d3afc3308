//! Port definitions - Interfaces implemented by the outer layers

mod portal_port;
mod unsealer_port;

pub use portal_port::{
    FavoriteDescriptor, PortalClient, PortalError, RawScheduleEntry, SessionToken,
};
pub use unsealer_port::{CredentialUnsealer, UnsealError};
