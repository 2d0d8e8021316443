pub mod config;
pub mod messaging;
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export messaging types
pub use config::BridgeConfig;
pub use messaging::EventBus;
