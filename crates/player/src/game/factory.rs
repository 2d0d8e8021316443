//! Factory building [`SceneGame`] instances for the host adapter.

use gamebridge_domain::{GameConfig, SceneKey, ZoneId};

use super::gating::{WalletGate, ZoneCapture};
use super::scene::Scene;
use super::scene_game::SceneGame;
use super::scenes::{Preloader, WalletGateScene, WorldMap};
use crate::error::GameError;
use crate::infrastructure::config::BridgeConfig;
use crate::infrastructure::messaging::EventBus;
use crate::ports::outbound::{GameFactoryPort, GameInstancePort};

/// Assets the preloader walks through before signalling `ready`.
const DEFAULT_ASSETS: &[&str] = &[
    "tiles/world.png",
    "tiles/zones.json",
    "sprites/player.png",
    "sprites/enemies.png",
    "ui/hud.png",
    "audio/theme.ogg",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SceneGameOptions {
    pub assets: Vec<String>,
    pub assets_per_frame: usize,
    /// Zone the world map opens on when the selection was missed
    pub fallback_zone: ZoneId,
}

impl Default for SceneGameOptions {
    fn default() -> Self {
        Self {
            assets: DEFAULT_ASSETS.iter().map(|s| s.to_string()).collect(),
            assets_per_frame: crate::infrastructure::config::DEFAULT_ASSETS_PER_FRAME,
            fallback_zone: ZoneId::default(),
        }
    }
}

impl SceneGameOptions {
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            assets_per_frame: config.assets_per_frame,
            fallback_zone: config.zone.clone(),
            ..Self::default()
        }
    }
}

/// Builds scene games wired to one event bus.
///
/// The zone capture is subscribed when the factory is built, which is before
/// any host emission, so the zone emitted right before a build is always
/// seen by that build.
pub struct SceneGameFactory {
    bus: EventBus,
    zone_capture: ZoneCapture,
    options: SceneGameOptions,
}

impl SceneGameFactory {
    pub fn new(bus: &EventBus, options: SceneGameOptions) -> Self {
        Self {
            bus: bus.clone(),
            zone_capture: ZoneCapture::subscribe(bus),
            options,
        }
    }

    /// Scene order the built-in scenes expect.
    pub fn scene_list() -> Vec<SceneKey> {
        vec![
            SceneKey::preloader(),
            SceneKey::wallet_gate(),
            SceneKey::world_map(),
        ]
    }

    pub fn standard_config() -> Result<GameConfig, GameError> {
        Ok(GameConfig::new(Self::scene_list())?)
    }
}

impl GameFactoryPort for SceneGameFactory {
    fn create(&self, config: GameConfig) -> Result<Box<dyn GameInstancePort>, GameError> {
        let zone = self.zone_capture.take();
        if zone.is_none() {
            tracing::warn!("No selectedZone captured before construction");
        }

        // Subscribed before the preloader can signal ready, so a `umi` sent in
        // response is never missed
        let wallet_gate = WalletGate::subscribe(&self.bus);

        let scenes: Vec<Box<dyn Scene>> = vec![
            Box::new(Preloader::new(
                self.options.assets.clone(),
                self.options.assets_per_frame,
                SceneKey::wallet_gate(),
            )),
            Box::new(WalletGateScene::new(wallet_gate, SceneKey::world_map())),
            Box::new(WorldMap::new(zone, self.options.fallback_zone.clone())),
        ];

        let game = SceneGame::boot(config, self.bus.clone(), scenes)?;
        Ok(Box::new(game))
    }
}
