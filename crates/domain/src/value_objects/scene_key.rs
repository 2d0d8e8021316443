//! Scene keys used to register and start scenes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Name a scene is registered under in the engine's scene sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SceneKey(String);

impl SceneKey {
    pub const PRELOADER: &'static str = "Preloader";
    pub const WALLET_GATE: &'static str = "WalletGate";
    pub const WORLD_MAP: &'static str = "WorldMap";

    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::validation("Scene key cannot be empty"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(DomainError::validation(format!(
                "Scene key '{raw}' must not contain whitespace"
            )));
        }
        Ok(Self(raw))
    }

    pub fn preloader() -> Self {
        Self(Self::PRELOADER.to_string())
    }

    pub fn wallet_gate() -> Self {
        Self(Self::WALLET_GATE.to_string())
    }

    pub fn world_map() -> Self {
        Self(Self::WORLD_MAP.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SceneKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SceneKey> for String {
    fn from(value: SceneKey) -> Self {
        value.0
    }
}
