//! Domain vocabulary for the game bridge.
//!
//! Everything here is plain data: zone and scene identifiers, the wallet
//! identity handed from the host into the game, the fixed engine
//! configuration, and the view models behind the HUD overlays.

pub mod error;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;
pub use ids::GameInstanceId;

pub use value_objects::{
    next_volume, volume_level_index, Gravity, GameConfig, RendererMode, ScaleMode, SceneKey,
    ScoreBoard, Viewport, WalletHandle, WalletIdentity, WalletStatus, ZoneId, DEFAULT_ZONE,
    VOLUME_LEVELS, VOLUME_TOLERANCE,
};
