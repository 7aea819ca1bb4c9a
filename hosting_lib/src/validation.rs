//! Identifier checks run before a request is sent.
//!
//! An empty name or a non-positive numeric ID can never match a resource,
//! so it is rejected without a round trip.

use hosting_api::Error;

/// Rejects an empty or whitespace-only identifier.
pub fn require_name(value: &str, what: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("invalid {}", what)));
    }
    Ok(())
}

/// Rejects a zero or negative numeric identifier.
pub fn require_id(value: i64, what: &str) -> Result<(), Error> {
    if value < 1 {
        return Err(Error::Validation(format!("invalid {}", what)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        assert!(require_name("example.com", "zone name").is_ok());
        let err = require_name("   ", "zone name").unwrap_err();
        assert_eq!(err.to_string(), "Invalid parameter: invalid zone name");
        assert!(require_name("", "solution id").is_err());
    }

    #[test]
    fn rejects_non_positive_ids() {
        assert!(require_id(1, "record id").is_ok());
        assert!(require_id(0, "record id").is_err());
        assert!(require_id(-5, "record id").is_err());
    }
}
