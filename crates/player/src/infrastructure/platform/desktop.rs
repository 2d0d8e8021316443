//! Desktop platform implementations

use std::time::Duration;

use super::Realm;
use crate::infrastructure::config::BridgeConfig;

/// Desktop builds always have a window unless told to run headless.
pub fn detect_realm(config: &BridgeConfig) -> Realm {
    if config.headless {
        Realm::Headless
    } else {
        Realm::Interactive
    }
}

/// Wait for the next frame slot.
pub async fn frame_delay(interval_ms: u32) {
    tokio::time::sleep(Duration::from_millis(u64::from(interval_ms))).await;
}
