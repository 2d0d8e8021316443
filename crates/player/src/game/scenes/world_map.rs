//! World map scene: opens on the zone the host selected.

use gamebridge_domain::{SceneKey, ZoneId};
use gamebridge_shared::BusPayload;

use crate::game::scene::{Scene, SceneContext};

/// Scene-defined channel announcing the zone the map opened on.
pub const ZONE_ENTERED: &str = "zoneEntered";

pub struct WorldMap {
    selected: Option<ZoneId>,
    fallback: ZoneId,
    current: Option<ZoneId>,
}

impl WorldMap {
    /// `selected` is whatever the zone capture held when the game was built.
    pub fn new(selected: Option<ZoneId>, fallback: ZoneId) -> Self {
        Self {
            selected,
            fallback,
            current: None,
        }
    }

    pub fn current_zone(&self) -> Option<&ZoneId> {
        self.current.as_ref()
    }
}

impl Scene for WorldMap {
    fn key(&self) -> SceneKey {
        SceneKey::world_map()
    }

    fn create(&mut self, ctx: &mut SceneContext<'_>) {
        let zone = match &self.selected {
            Some(zone) => zone.clone(),
            None => {
                // There is no replay on the bus, the selection is gone for good
                tracing::warn!(fallback = %self.fallback, "Selected zone was missed, opening fallback zone");
                self.fallback.clone()
            }
        };
        tracing::info!(zone = %zone, "Entering zone");
        self.current = Some(zone.clone());
        ctx.bus().emit(ZONE_ENTERED, BusPayload::Zone(zone));
    }

    fn shutdown(&mut self) {
        self.current = None;
    }
}
