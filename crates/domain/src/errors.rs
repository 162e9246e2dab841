//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// Every constructor in this crate reports failure through this enum;
/// nothing here panics on malformed input.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input does not match any recognized WhatsApp number pattern
    #[error("Invalid WhatsApp number: {0}")]
    InvalidWhatsAppNumber(String),

    /// Input is not an 8-digit Brazilian postal code
    #[error("Invalid CEP: {0}")]
    InvalidCep(String),

    /// Invite slug is malformed
    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    /// Attendance counts violate party rules
    #[error("Invalid party size: {0}")]
    InvalidPartySize(String),

    /// End time does not come after the start time
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_whatsapp_error_message() {
        let err = DomainError::InvalidWhatsAppNumber("123".to_string());
        assert_eq!(err.to_string(), "Invalid WhatsApp number: 123");
    }

    #[test]
    fn invalid_cep_error_message() {
        let err = DomainError::InvalidCep("1234".to_string());
        assert_eq!(err.to_string(), "Invalid CEP: 1234");
    }

    #[test]
    fn invalid_slug_error_message() {
        let err = DomainError::InvalidSlug("has spaces".to_string());
        assert_eq!(err.to_string(), "Invalid slug: has spaces");
    }

    #[test]
    fn invalid_party_size_error_message() {
        let err = DomainError::InvalidPartySize("no adults".to_string());
        assert_eq!(err.to_string(), "Invalid party size: no adults");
    }

    #[test]
    fn invalid_time_range_error_message() {
        let err = DomainError::InvalidTimeRange("end before start".to_string());
        assert_eq!(err.to_string(), "Invalid time range: end before start");
    }
}
