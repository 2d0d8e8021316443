//! WASM platform implementations

use super::Realm;
use crate::infrastructure::config::BridgeConfig;

/// Interactive only when a browser window exists (not in workers or
/// pre-rendering).
pub fn detect_realm(config: &BridgeConfig) -> Realm {
    if config.headless || web_sys::window().is_none() {
        Realm::Headless
    } else {
        Realm::Interactive
    }
}

/// Wait for the next frame slot.
pub async fn frame_delay(interval_ms: u32) {
    gloo_timers::future::TimeoutFuture::new(interval_ms).await;
}
