//! Scene trait and the per-call context handed to scenes.

use gamebridge_domain::SceneKey;

use crate::infrastructure::messaging::EventBus;

/// One state of the game's scene sequence.
pub trait Scene {
    fn key(&self) -> SceneKey;

    /// Called each time the scene becomes active.
    fn create(&mut self, ctx: &mut SceneContext<'_>);

    /// Called once per frame while the scene is active.
    fn update(&mut self, _ctx: &mut SceneContext<'_>) {}

    /// Called when the scene stops being active, including on game teardown.
    fn shutdown(&mut self) {}
}

/// What a scene may touch during `create`/`update`: the bus, the frame
/// counter, and a transition request.
pub struct SceneContext<'a> {
    bus: &'a EventBus,
    frame: u64,
    next: Option<SceneKey>,
}

impl<'a> SceneContext<'a> {
    pub(crate) fn new(bus: &'a EventBus, frame: u64) -> Self {
        Self {
            bus,
            frame,
            next: None,
        }
    }

    pub fn bus(&self) -> &EventBus {
        self.bus
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Ask the game to switch to `key` once the current call returns.
    /// The last request made during a call wins.
    pub fn start(&mut self, key: SceneKey) {
        self.next = Some(key);
    }

    pub(crate) fn into_transition(self) -> Option<SceneKey> {
        self.next
    }
}
