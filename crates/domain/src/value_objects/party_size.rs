//! Party size - attendance counts attached to an RSVP

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// How many people a guest is bringing
///
/// An RSVP always covers at least one adult; children (up to 12 years
/// old on the invite form) are counted separately for catering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartySize {
    adults: u8,
    children: u8,
}

impl PartySize {
    /// Create a new party size
    ///
    /// # Errors
    ///
    /// Returns an error if `adults` is zero.
    pub fn new(adults: u8, children: u8) -> Result<Self, DomainError> {
        if adults == 0 {
            return Err(DomainError::InvalidPartySize(
                "at least one adult is required".to_string(),
            ));
        }
        Ok(Self { adults, children })
    }

    /// A single adult, the invite form's default
    pub const fn single() -> Self {
        Self {
            adults: 1,
            children: 0,
        }
    }

    /// Number of adults (always >= 1)
    pub const fn adults(self) -> u8 {
        self.adults
    }

    /// Number of children
    pub const fn children(self) -> u8 {
        self.children
    }

    /// Total headcount
    pub const fn total(self) -> u16 {
        self.adults as u16 + self.children as u16
    }
}

impl Default for PartySize {
    fn default() -> Self {
        Self::single()
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let adults = if self.adults == 1 {
            "1 adulto".to_string()
        } else {
            format!("{} adultos", self.adults)
        };
        match self.children {
            0 => write!(f, "{adults}"),
            1 => write!(f, "{adults}, 1 criança"),
            n => write!(f, "{adults}, {n} crianças"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_one_adult_required() {
        assert!(PartySize::new(0, 0).is_err());
        assert!(PartySize::new(0, 3).is_err());
        assert!(PartySize::new(1, 0).is_ok());
    }

    #[test]
    fn counts_are_preserved() {
        let party = PartySize::new(2, 3).unwrap();
        assert_eq!(party.adults(), 2);
        assert_eq!(party.children(), 3);
        assert_eq!(party.total(), 5);
    }

    #[test]
    fn total_does_not_overflow_u8() {
        let party = PartySize::new(255, 255).unwrap();
        assert_eq!(party.total(), 510);
    }

    #[test]
    fn default_is_one_adult() {
        let party = PartySize::default();
        assert_eq!(party.adults(), 1);
        assert_eq!(party.children(), 0);
    }

    #[test]
    fn display_pluralization() {
        assert_eq!(PartySize::new(1, 0).unwrap().to_string(), "1 adulto");
        assert_eq!(
            PartySize::new(2, 1).unwrap().to_string(),
            "2 adultos, 1 criança"
        );
        assert_eq!(
            PartySize::new(2, 2).unwrap().to_string(),
            "2 adultos, 2 crianças"
        );
    }

    #[test]
    fn serialization_roundtrip() {
        let party = PartySize::new(2, 1).unwrap();
        let json = serde_json::to_string(&party).unwrap();
        let parsed: PartySize = serde_json::from_str(&json).unwrap();
        assert_eq!(party, parsed);
    }
}
