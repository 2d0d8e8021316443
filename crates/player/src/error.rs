//! Error types for the player crate.

use gamebridge_domain::{DomainError, SceneKey};
use thiserror::Error;

/// Failure to build a game instance.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    /// The configuration itself was rejected
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(#[from] DomainError),

    /// The config lists a scene the engine has no implementation for
    #[error("Scene '{0}' is listed in the config but not registered with the engine")]
    UnregisteredScene(SceneKey),

    /// Any other construction failure reported by an engine backend
    #[error("Engine construction failed: {0}")]
    Construction(String),
}

/// A hook was used outside of the component that provides its context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("{consumer} must be used within a {provider}")]
    MissingProvider {
        provider: &'static str,
        consumer: &'static str,
    },
}

impl ContextError {
    pub fn missing_provider(provider: &'static str, consumer: &'static str) -> Self {
        Self::MissingProvider { provider, consumer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_provider_names_the_provider() {
        let err = ContextError::missing_provider("UmiProvider", "use_umi");
        assert_eq!(err.to_string(), "use_umi must be used within a UmiProvider");
    }

    #[test]
    fn domain_errors_convert() {
        let err: GameError = DomainError::validation("no scenes").into();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }
}
