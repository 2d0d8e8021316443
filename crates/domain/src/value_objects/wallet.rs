//! Wallet identity as seen by the game.
//!
//! The host owns the connected wallet session. The game only ever receives a
//! [`WalletHandle`], a shared reference it can read but never mutate. A new
//! handle is minted on every (re)connect, so handle identity doubles as
//! session identity.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::DomainError;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Connection status of the host wallet adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
}

impl WalletStatus {
    pub fn is_connected(self) -> bool {
        matches!(self, WalletStatus::Connected)
    }
}

impl fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletStatus::Disconnected => write!(f, "disconnected"),
            WalletStatus::Connecting => write!(f, "connecting"),
            WalletStatus::Connected => write!(f, "connected"),
            WalletStatus::Disconnecting => write!(f, "disconnecting"),
        }
    }
}

/// Public identity of a connected wallet session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletIdentity {
    public_key: String,
    rpc_endpoint: String,
}

impl WalletIdentity {
    /// Build an identity from a base58 public key and the RPC endpoint the
    /// session talks to.
    pub fn new(
        public_key: impl Into<String>,
        rpc_endpoint: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let public_key = public_key.into();
        let rpc_endpoint = rpc_endpoint.into();

        if !(32..=44).contains(&public_key.len()) {
            return Err(DomainError::validation(format!(
                "Public key must be 32-44 base58 characters, got {}",
                public_key.len()
            )));
        }
        if let Some(bad) = public_key.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
            return Err(DomainError::parse(format!(
                "Public key contains non-base58 character '{bad}'"
            )));
        }
        if rpc_endpoint.trim().is_empty() {
            return Err(DomainError::validation("RPC endpoint cannot be empty"));
        }

        Ok(Self {
            public_key,
            rpc_endpoint,
        })
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn rpc_endpoint(&self) -> &str {
        &self.rpc_endpoint
    }

    /// Shortened key for display, e.g. `7xKX…AsU`.
    pub fn short_key(&self) -> String {
        let head: String = self.public_key.chars().take(4).collect();
        let tail: String = self
            .public_key
            .chars()
            .skip(self.public_key.len().saturating_sub(3))
            .collect();
        format!("{head}…{tail}")
    }
}

/// Shared, read-only handle to a wallet session.
///
/// Equality is identity: two handles are equal only when they refer to the
/// same session, even if the identities they wrap compare equal.
#[derive(Clone)]
pub struct WalletHandle(Arc<WalletIdentity>);

impl WalletHandle {
    pub fn new(identity: WalletIdentity) -> Self {
        Self(Arc::new(identity))
    }

    pub fn identity(&self) -> &WalletIdentity {
        &self.0
    }

    pub fn same_session(&self, other: &WalletHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for WalletHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_session(other)
    }
}

impl Eq for WalletHandle {}

impl fmt::Debug for WalletHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WalletHandle")
            .field(&self.0.public_key)
            .finish()
    }
}
