//! World zone identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Zone the world map opens on when the host has not chosen one.
pub const DEFAULT_ZONE: &str = "heart";

/// Identifier of a world zone chosen by the host before the game is built.
///
/// Trimmed on construction; an empty identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Zone id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ZoneId {
    fn default() -> Self {
        Self(DEFAULT_ZONE.to_string())
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ZoneId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ZoneId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ZoneId> for String {
    fn from(value: ZoneId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_value() {
        let zone = ZoneId::new("  heart ").expect("valid zone");
        assert_eq!(zone.as_str(), "heart");
        assert_eq!(zone.to_string(), "heart");
    }

    #[test]
    fn rejects_blank_ids() {
        assert!(ZoneId::new("").is_err());
        assert!("   ".parse::<ZoneId>().is_err());
    }

    #[test]
    fn default_is_heart() {
        assert_eq!(ZoneId::default().as_str(), DEFAULT_ZONE);
    }

    #[test]
    fn deserialization_validates() {
        let ok: ZoneId = serde_json::from_str("\"ember\"").expect("valid json zone");
        assert_eq!(ok.as_str(), "ember");
        assert!(serde_json::from_str::<ZoneId>("\"\"").is_err());
    }
}
