//! Asset preload scene.
//!
//! Loads the manifest a few entries per frame and reports progress on the
//! bus. Once everything is loaded it signals `ready` to the host and hands
//! over to the next scene.

use gamebridge_domain::SceneKey;
use gamebridge_shared::{BusChannel, BusPayload};
use serde_json::json;

use crate::game::scene::{Scene, SceneContext};

/// Scene-defined channel carrying `{ "loaded": n, "total": m }`.
pub const LOAD_PROGRESS: &str = "loadProgress";

pub struct Preloader {
    manifest: Vec<String>,
    per_frame: usize,
    loaded: usize,
    next: SceneKey,
    done: bool,
}

impl Preloader {
    pub fn new(manifest: Vec<String>, per_frame: usize, next: SceneKey) -> Self {
        Self {
            manifest,
            per_frame: per_frame.max(1),
            loaded: 0,
            next,
            done: false,
        }
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.loaded, self.manifest.len())
    }
}

impl Scene for Preloader {
    fn key(&self) -> SceneKey {
        SceneKey::preloader()
    }

    fn create(&mut self, _ctx: &mut SceneContext<'_>) {
        self.loaded = 0;
        self.done = false;
        tracing::debug!(assets = self.manifest.len(), "Preloading assets");
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>) {
        if self.done {
            return;
        }

        let total = self.manifest.len();
        let batch_end = (self.loaded + self.per_frame).min(total);
        for asset in &self.manifest[self.loaded..batch_end] {
            tracing::trace!(asset = %asset, "Asset loaded");
        }
        self.loaded = batch_end;
        ctx.bus().emit(
            LOAD_PROGRESS,
            BusPayload::Json(json!({ "loaded": self.loaded, "total": total })),
        );

        if self.loaded == total {
            self.done = true;
            tracing::info!(assets = total, frame = ctx.frame(), "Assets loaded, game ready");
            ctx.bus().emit(BusChannel::Ready, BusPayload::Empty);
            ctx.start(self.next.clone());
        }
    }
}
