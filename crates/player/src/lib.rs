//! Gamebridge player crate.
//!
//! Host UI shell, the event bus bridging it to the game loop, and the scene
//! runtime the bus feeds. Multi-platform support is provided via compile-time
//! `cfg` selection.

pub mod application;
pub mod error;
pub mod game;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use application::GameHostAdapter;
pub use error::{ContextError, GameError};
pub use infrastructure::{BridgeConfig, EventBus};
pub use ui::{app, ShellKind};
