//! CEP (Brazilian postal code) value object
//!
//! # Examples
//!
//! ```
//! use venha_domain::Cep;
//!
//! let cep = Cep::new("20040-020").unwrap();
//! assert_eq!(cep.as_str(), "20040020");
//! assert_eq!(cep.formatted(), "20040-020");
//!
//! assert!(Cep::is_valid("20040020"));
//! assert!(!Cep::is_valid("2004002"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated CEP, stored as its 8-digit payload
///
/// Validation is structural only (exactly 8 digits). Whether the code
/// exists in the postal database is the address-lookup service's call,
/// made separately by the consuming form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cep {
    value: String,
}

impl Cep {
    /// Create a new CEP, stripping separators and validating the length
    pub fn new(cep: impl Into<String>) -> Result<Self, DomainError> {
        let input = cep.into();
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();

        if digits.len() != 8 {
            return Err(DomainError::InvalidCep(format!(
                "{input}: expected 8 digits, got {}",
                digits.len()
            )));
        }

        Ok(Self { value: digits })
    }

    /// Check whether the input would be accepted by [`Cep::new`]
    pub fn is_valid(input: &str) -> bool {
        input.chars().filter(char::is_ascii_digit).count() == 8
    }

    /// Get the 8-digit payload as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Render for display: `20040-020`
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.value[..5], &self.value[5..])
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl TryFrom<String> for Cep {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Cep {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Custom deserialization that re-validates the digit payload
impl<'de> Deserialize<'de> for Cep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
