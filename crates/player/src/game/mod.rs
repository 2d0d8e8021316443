//! Minimal scene runtime behind the game-instance port.
//!
//! The runtime runs an ordered scene sequence with one active scene, advanced
//! one frame at a time by the host. Scene contents are thin; the
//! interesting part is how scenes gate their entry on bus emissions.

pub mod factory;
pub mod gating;
pub mod scene;
pub mod scene_game;
pub mod scenes;

pub use factory::{SceneGameFactory, SceneGameOptions};
pub use gating::{WalletGate, ZoneCapture};
pub use scene::{Scene, SceneContext};
pub use scene_game::SceneGame;
