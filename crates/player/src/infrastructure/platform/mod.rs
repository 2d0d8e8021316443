//! Platform-specific implementations
//!
//! Realm detection and frame pacing differ between the browser and desktop.
//! The correct platform is selected at compile time based on the target
//! architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::{detect_realm, frame_delay};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{detect_realm, frame_delay};

/// Whether the process can run a render loop.
///
/// Decided once at startup; the event bus picks its dispatcher from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Realm {
    /// A render loop is available, bus emissions are delivered
    Interactive,
    /// No render loop (pre-rendering, tooling), bus operations are no-ops
    Headless,
}
