//! Scene-sequence game instance.

use gamebridge_domain::{GameConfig, GameInstanceId, SceneKey};

use super::scene::{Scene, SceneContext};
use crate::error::GameError;
use crate::infrastructure::messaging::EventBus;
use crate::ports::outbound::{GameInstancePort, GameStatus};

/// A running game: the configured scenes in order, at most one of them active.
pub struct SceneGame {
    id: GameInstanceId,
    config: GameConfig,
    bus: EventBus,
    scenes: Vec<Box<dyn Scene>>,
    active: Option<usize>,
    frame: u64,
    destroyed: bool,
}

impl SceneGame {
    /// Arrange `registered` in config order and start the first scene.
    ///
    /// Every scene the config lists must be registered. Registered scenes the
    /// config does not list are dropped.
    pub fn boot(
        config: GameConfig,
        bus: EventBus,
        mut registered: Vec<Box<dyn Scene>>,
    ) -> Result<Self, GameError> {
        let mut scenes = Vec::with_capacity(config.scenes().len());
        for key in config.scenes() {
            let pos = registered
                .iter()
                .position(|scene| &scene.key() == key)
                .ok_or_else(|| GameError::UnregisteredScene(key.clone()))?;
            scenes.push(registered.swap_remove(pos));
        }
        if !registered.is_empty() {
            tracing::debug!(
                unused = registered.len(),
                "Dropping registered scenes missing from the config"
            );
        }

        let mut game = Self {
            id: GameInstanceId::new(),
            config,
            bus,
            scenes,
            active: None,
            frame: 0,
            destroyed: false,
        };

        let viewport = game.config.viewport();
        tracing::info!(
            game_id = %game.id,
            width = viewport.width,
            height = viewport.height,
            pixel_art = game.config.pixel_art(),
            scenes = game.scenes.len(),
            "Booting game"
        );

        game.activate(0);
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active_scene(&self) -> Option<SceneKey> {
        self.active.map(|idx| self.scenes[idx].key())
    }

    fn resolve(&self, key: &SceneKey) -> Option<usize> {
        let idx = self.scenes.iter().position(|scene| &scene.key() == key);
        if idx.is_none() {
            tracing::warn!(game_id = %self.id, scene = %key, "Transition to unknown scene ignored");
        }
        idx
    }

    fn activate(&mut self, mut idx: usize) {
        // `create` may itself request a transition; follow the chain, but no
        // further than one hop per scene.
        for _ in 0..=self.scenes.len() {
            if let Some(current) = self.active.take() {
                self.scenes[current].shutdown();
            }
            self.active = Some(idx);

            let mut ctx = SceneContext::new(&self.bus, self.frame);
            self.scenes[idx].create(&mut ctx);
            tracing::debug!(game_id = %self.id, scene = %self.scenes[idx].key(), "Scene started");

            match ctx.into_transition().and_then(|key| self.resolve(&key)) {
                Some(next) => idx = next,
                None => return,
            }
        }
        tracing::warn!(game_id = %self.id, "Scene transition loop detected, staying put");
    }
}

impl GameInstancePort for SceneGame {
    fn id(&self) -> GameInstanceId {
        self.id
    }

    fn step(&mut self) {
        if self.destroyed {
            return;
        }
        self.frame += 1;
        let Some(idx) = self.active else {
            return;
        };

        let mut ctx = SceneContext::new(&self.bus, self.frame);
        self.scenes[idx].update(&mut ctx);
        if let Some(next) = ctx.into_transition().and_then(|key| self.resolve(&key)) {
            self.activate(next);
        }
    }

    fn status(&self) -> GameStatus {
        GameStatus {
            id: self.id,
            frame: self.frame,
            active_scene: self.active_scene(),
            destroyed: self.destroyed,
        }
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(idx) = self.active.take() {
            self.scenes[idx].shutdown();
        }
        // Dropping the scenes releases their bus subscriptions
        self.scenes.clear();
        self.destroyed = true;
        tracing::info!(game_id = %self.id, frames = self.frame, "Game destroyed");
    }
}

impl Drop for SceneGame {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    /// Scene that logs its lifecycle and optionally hops on create/update.
    struct Probe {
        key: SceneKey,
        journal: Journal,
        on_create: Option<SceneKey>,
        on_update: Option<SceneKey>,
    }

    impl Probe {
        fn boxed(name: &str, journal: &Journal) -> Box<dyn Scene> {
            Box::new(Self {
                key: SceneKey::new(name).expect("valid key"),
                journal: Rc::clone(journal),
                on_create: None,
                on_update: None,
            })
        }

        fn hopping(
            name: &str,
            journal: &Journal,
            on_create: Option<&str>,
            on_update: Option<&str>,
        ) -> Box<dyn Scene> {
            Box::new(Self {
                key: SceneKey::new(name).expect("valid key"),
                journal: Rc::clone(journal),
                on_create: on_create.map(|k| SceneKey::new(k).expect("valid key")),
                on_update: on_update.map(|k| SceneKey::new(k).expect("valid key")),
            })
        }
    }

    impl Scene for Probe {
        fn key(&self) -> SceneKey {
            self.key.clone()
        }

        fn create(&mut self, ctx: &mut SceneContext<'_>) {
            self.journal.borrow_mut().push(format!("create:{}", self.key));
            if let Some(next) = &self.on_create {
                ctx.start(next.clone());
            }
        }

        fn update(&mut self, ctx: &mut SceneContext<'_>) {
            self.journal.borrow_mut().push(format!("update:{}", self.key));
            if let Some(next) = &self.on_update {
                ctx.start(next.clone());
            }
        }

        fn shutdown(&mut self) {
            self.journal.borrow_mut().push(format!("shutdown:{}", self.key));
        }
    }

    fn config(keys: &[&str]) -> GameConfig {
        GameConfig::new(
            keys.iter()
                .map(|k| SceneKey::new(*k).expect("valid key"))
                .collect(),
        )
        .expect("valid config")
    }

    #[test]
    fn boots_first_scene_in_config_order() {
        let journal = Journal::default();
        // Registered in a different order than configured
        let game = SceneGame::boot(
            config(&["A", "B"]),
            EventBus::new(),
            vec![Probe::boxed("B", &journal), Probe::boxed("A", &journal)],
        )
        .expect("boot");

        assert_eq!(game.active_scene().map(|k| k.to_string()), Some("A".into()));
        assert_eq!(*journal.borrow(), vec!["create:A"]);
    }

    #[test]
    fn unregistered_scene_fails_boot() {
        let journal = Journal::default();
        let result = SceneGame::boot(
            config(&["A", "Missing"]),
            EventBus::new(),
            vec![Probe::boxed("A", &journal)],
        );

        assert!(matches!(result, Err(GameError::UnregisteredScene(k)) if k.as_str() == "Missing"));
        assert!(journal.borrow().is_empty(), "no scene starts on a failed boot");
    }

    #[test]
    fn step_applies_transition_after_update() {
        let journal = Journal::default();
        let mut game = SceneGame::boot(
            config(&["A", "B"]),
            EventBus::new(),
            vec![
                Probe::hopping("A", &journal, None, Some("B")),
                Probe::boxed("B", &journal),
            ],
        )
        .expect("boot");

        game.step();

        assert_eq!(
            *journal.borrow(),
            vec!["create:A", "update:A", "shutdown:A", "create:B"]
        );
        let status = game.status();
        assert_eq!(status.frame, 1);
        assert_eq!(status.active_scene.map(|k| k.to_string()), Some("B".into()));
    }

    #[test]
    fn create_chain_is_followed_and_bounded() {
        let journal = Journal::default();
        let game = SceneGame::boot(
            config(&["A", "B"]),
            EventBus::new(),
            vec![
                Probe::hopping("A", &journal, Some("B"), None),
                Probe::hopping("B", &journal, Some("A"), None),
            ],
        )
        .expect("boot");

        // A -> B -> A bounces until the hop budget runs out instead of spinning forever
        assert_eq!(journal.borrow().iter().filter(|e| e.starts_with("create")).count(), 3);
        assert!(game.active_scene().is_some());
    }

    #[test]
    fn unknown_transition_is_ignored() {
        let journal = Journal::default();
        let mut game = SceneGame::boot(
            config(&["A"]),
            EventBus::new(),
            vec![Probe::hopping("A", &journal, None, Some("Nowhere"))],
        )
        .expect("boot");

        game.step();
        assert_eq!(game.active_scene().map(|k| k.to_string()), Some("A".into()));
    }

    #[test]
    fn destroy_is_idempotent_and_stops_frames() {
        let journal = Journal::default();
        let mut game = SceneGame::boot(
            config(&["A"]),
            EventBus::new(),
            vec![Probe::boxed("A", &journal)],
        )
        .expect("boot");

        game.destroy();
        game.destroy();
        game.step();

        let status = game.status();
        assert!(status.destroyed);
        assert_eq!(status.frame, 0);
        assert_eq!(status.active_scene, None);
        assert_eq!(*journal.borrow(), vec!["create:A", "shutdown:A"]);
    }
}
