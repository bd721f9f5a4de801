//! Proposal types
//!
//! A proposal is the persisted output of the composer: an event name plus
//! the candidate days and time slots a user selected, keyed by a short
//! URL-safe share id.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SHORT_ID_ALPHABET;
use crate::errors::{MusterError, Result};
use crate::types::{CalendarDate, TimeSlot};

/// Opaque URL-safe share token (nanoid-style alphabet).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(String);

impl ShortId {
    /// Wrap a raw token, rejecting anything outside the share-id alphabet.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !Self::is_valid_format(&raw) {
            return Err(MusterError::InvalidInput(format!("malformed share id: {raw:?}")));
        }
        Ok(Self(raw))
    }

    /// Whether `raw` is a plausible share id (non-empty, alphabet only).
    pub fn is_valid_format(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|c| SHORT_ID_ALPHABET.contains(c))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A proposal as submitted by the composer, before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProposal {
    pub name: String,
    pub days: Vec<CalendarDate>,
    pub slots: Vec<TimeSlot>,
}

/// A persisted proposal as resolved from a share id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub short_id: ShortId,
    pub name: String,
    pub days: Vec<CalendarDate>,
    pub slots: Vec<TimeSlot>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphabet_tokens() {
        let id = ShortId::new("V1StGXR8_Z5jdHi6B-myT").unwrap();
        assert_eq!(id.as_str(), "V1StGXR8_Z5jdHi6B-myT");
        assert_eq!(id.to_string(), "V1StGXR8_Z5jdHi6B-myT");
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(ShortId::new("").is_err());
        assert!(ShortId::new("has space").is_err());
        assert!(ShortId::new("slash/slash").is_err());
        assert!(ShortId::new("émoji").is_err());
    }
}
