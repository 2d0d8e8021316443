//! Payloads carried by bus emissions.

use gamebridge_domain::{WalletHandle, ZoneId};

/// What an emission carries across the bridge.
///
/// Wallet handles are passed by reference count only; the receiving side can
/// read the identity but has no way to mutate the host's session.
#[derive(Debug, Clone, PartialEq)]
pub enum BusPayload {
    Empty,
    Wallet(WalletHandle),
    Zone(ZoneId),
    /// Free-form data for scene-defined channels
    Json(serde_json::Value),
}

impl BusPayload {
    pub fn is_empty(&self) -> bool {
        matches!(self, BusPayload::Empty)
    }

    pub fn as_wallet(&self) -> Option<&WalletHandle> {
        match self {
            BusPayload::Wallet(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn as_zone(&self) -> Option<&ZoneId> {
        match self {
            BusPayload::Zone(zone) => Some(zone),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            BusPayload::Json(value) => Some(value),
            _ => None,
        }
    }
}

impl From<WalletHandle> for BusPayload {
    fn from(handle: WalletHandle) -> Self {
        BusPayload::Wallet(handle)
    }
}

impl From<ZoneId> for BusPayload {
    fn from(zone: ZoneId) -> Self {
        BusPayload::Zone(zone)
    }
}

impl From<serde_json::Value> for BusPayload {
    fn from(value: serde_json::Value) -> Self {
        BusPayload::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_only_match_their_variant() {
        let zone = BusPayload::from(ZoneId::default());
        assert_eq!(zone.as_zone().map(ZoneId::as_str), Some("heart"));
        assert!(zone.as_wallet().is_none());
        assert!(!zone.is_empty());

        let json = BusPayload::from(serde_json::json!({ "score": 3 }));
        assert_eq!(json.as_json().and_then(|v| v["score"].as_i64()), Some(3));
        assert!(BusPayload::Empty.is_empty());
    }
}
