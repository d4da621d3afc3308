//! Civil timezone value object
//!
//! The IANA zone in which the portal reports wall-clock times. Validated
//! against the chrono-tz database at construction, so the rest of the
//! pipeline can assume the zone exists.

use std::{fmt, str::FromStr};

use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DomainError;

/// A validated IANA timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilTimezone(Tz);

impl CivilTimezone {
    /// Parse and validate an IANA timezone name
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimezone`] for names unknown to the
    /// IANA database.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        Tz::from_str(name)
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// The underlying chrono-tz zone
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.0
    }

    /// The canonical IANA name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for CivilTimezone {
    /// The upstream institution's civil timezone
    fn default() -> Self {
        Self(Tz::Europe__Paris)
    }
}

impl fmt::Display for CivilTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CivilTimezone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CivilTimezone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for CivilTimezone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::new(&name).map_err(serde::de::Error::custom)
    }
}
