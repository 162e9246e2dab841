//! Event slug - public, unguessable identifier used in invite URLs

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// An invite slug as it appears in `/invite/{slug}` and `/rsvp/{slug}` URLs
///
/// Slugs are lowercase ASCII alphanumerics and hyphens, 8 to 64 characters,
/// with no leading or trailing hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSlug(String);

impl EventSlug {
    /// Validate a slug received from a URL or the API
    pub fn new(slug: impl Into<String>) -> Result<Self, DomainError> {
        let value = slug.into();

        if value.len() < 8 || value.len() > 64 {
            return Err(DomainError::InvalidSlug(format!(
                "{value}: must be 8-64 characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::InvalidSlug(format!(
                "{value}: only lowercase letters, digits and hyphens allowed"
            )));
        }
        if value.starts_with('-') || value.ends_with('-') {
            return Err(DomainError::InvalidSlug(format!(
                "{value}: must not start or end with a hyphen"
            )));
        }

        Ok(Self(value))
    }

    /// Generate a fresh random slug (hyphenless v4 UUID, 32 hex chars)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EventSlug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EventSlug {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
