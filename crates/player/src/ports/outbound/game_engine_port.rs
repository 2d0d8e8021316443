//! Game engine ports
//!
//! The host adapter only sees the engine through these traits: a factory that
//! builds one instance from a fixed configuration, and the instance handle it
//! owns until teardown.

use std::rc::Rc;

use gamebridge_domain::{GameConfig, GameInstanceId, SceneKey};

use crate::error::GameError;

/// Observable state of a game instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub id: GameInstanceId,
    pub frame: u64,
    pub active_scene: Option<SceneKey>,
    pub destroyed: bool,
}

/// A live game instance owned by the host adapter.
pub trait GameInstancePort {
    fn id(&self) -> GameInstanceId;

    /// Advance the game by one frame. No-op once destroyed.
    fn step(&mut self);

    fn status(&self) -> GameStatus;

    /// Tear the instance down, discarding all scene state.
    ///
    /// Idempotent and infallible, including for instances that never finished
    /// booting.
    fn destroy(&mut self);
}

/// Builds game instances.
///
/// Implementations receive the event bus when they are constructed, so any
/// listener they need is in place before the host starts emitting.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait GameFactoryPort {
    fn create(&self, config: GameConfig) -> Result<Box<dyn GameInstancePort>, GameError>;
}

/// Type alias for the factory handle shared through the UI context
pub type GameFactory = Rc<dyn GameFactoryPort>;
