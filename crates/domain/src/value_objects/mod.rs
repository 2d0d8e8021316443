//! Value objects - Immutable objects defined by their attributes

mod game_config;
mod scene_key;
mod score;
mod volume;
mod wallet;
mod zone;

pub use game_config::{GameConfig, Gravity, RendererMode, ScaleMode, Viewport};
pub use scene_key::SceneKey;
pub use score::ScoreBoard;
pub use volume::{next_volume, volume_level_index, VOLUME_LEVELS, VOLUME_TOLERANCE};
pub use wallet::{WalletHandle, WalletIdentity, WalletStatus};
pub use zone::{ZoneId, DEFAULT_ZONE};
