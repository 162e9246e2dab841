//! WhatsApp number value object for Brazilian mobile numbers
//!
//! Guests RSVP with a WhatsApp number, and the API uses its canonical
//! form as a lookup key, so normalization must be deterministic.
//!
//! # Examples
//!
//! ```
//! use venha_domain::WhatsAppNumber;
//!
//! // Punctuation and a missing country code are both normalized
//! let number = WhatsAppNumber::new("(21) 99999-9999").unwrap();
//! assert_eq!(number.as_str(), "5521999999999");
//!
//! // Already-canonical input passes through unchanged
//! let same = WhatsAppNumber::new("5521999999999").unwrap();
//! assert_eq!(number, same);
//!
//! // Landlines and pre-2012 mobiles (10 digits) are rejected
//! assert!(WhatsAppNumber::new("2199999999").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated Brazilian WhatsApp number in canonical form
///
/// Canonical form is digits only, exactly 13 of them, starting with the
/// country code `55`: `55` + 2-digit area code + 9-digit mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WhatsAppNumber {
    value: String,
}

impl WhatsAppNumber {
    /// Create a new WhatsApp number, normalizing to canonical form
    ///
    /// Accepted inputs after stripping all non-digit characters:
    /// - 13 digits starting with `55` (already has the country code)
    /// - 11 digits (area code + 9-digit mobile; `55` is prepended)
    ///
    /// 10-digit input (landline or pre-2012 mobile without the leading
    /// `9`) is rejected, as is every other length. Validation is purely
    /// syntactic; the number is not checked for reachability.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let input = number.into();
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();

        match digits.len() {
            13 if digits.starts_with("55") => Ok(Self { value: digits }),
            11 => Ok(Self {
                value: format!("55{digits}"),
            }),
            10 => Err(DomainError::InvalidWhatsAppNumber(format!(
                "{input}: 10-digit numbers (landline or legacy mobile) are not accepted"
            ))),
            _ => Err(DomainError::InvalidWhatsAppNumber(format!(
                "{input}: expected 11 digits, or 13 digits starting with 55"
            ))),
        }
    }

    /// Get the canonical 13-digit form as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the country code (always `55`)
    pub fn country_code(&self) -> &str {
        &self.value[..2]
    }

    /// Get the 2-digit area code (DDD)
    pub fn area_code(&self) -> &str {
        &self.value[2..4]
    }

    /// Get the 9-digit mobile number without country or area code
    pub fn local_number(&self) -> &str {
        &self.value[4..]
    }

    /// Render for display: `+55 (21) 99999-9999`
    pub fn formatted(&self) -> String {
        format!(
            "+{} ({}) {}-{}",
            self.country_code(),
            self.area_code(),
            &self.value[4..9],
            &self.value[9..]
        )
    }
}

impl fmt::Display for WhatsAppNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for WhatsAppNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for WhatsAppNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Custom deserialization that re-validates the canonical form
impl<'de> Deserialize<'de> for WhatsAppNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
