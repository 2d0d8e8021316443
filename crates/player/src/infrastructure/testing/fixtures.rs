//! Recording fakes used across unit and integration tests.
//!
//! The ledger counts live instances and keeps an ordered log shared with any
//! bus listener a test installs, so tests can assert on the interleaving of
//! emissions and engine construction.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gamebridge_domain::{GameConfig, GameInstanceId};

use crate::error::GameError;
use crate::ports::outbound::{GameFactoryPort, GameInstancePort, GameStatus};

#[derive(Default)]
pub struct InstanceLedger {
    created: Cell<usize>,
    destroyed: Cell<usize>,
    log: RefCell<Vec<String>>,
}

impl InstanceLedger {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.get()
    }

    pub fn live(&self) -> usize {
        self.created.get() - self.destroyed.get()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.log.borrow_mut().push(entry.into());
    }

    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

pub struct FakeGame {
    id: GameInstanceId,
    ledger: Rc<InstanceLedger>,
    frame: u64,
    destroyed: bool,
}

impl GameInstancePort for FakeGame {
    fn id(&self) -> GameInstanceId {
        self.id
    }

    fn step(&mut self) {
        if !self.destroyed {
            self.frame += 1;
        }
    }

    fn status(&self) -> GameStatus {
        GameStatus {
            id: self.id,
            frame: self.frame,
            active_scene: None,
            destroyed: self.destroyed,
        }
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.ledger.destroyed.set(self.ledger.destroyed.get() + 1);
        self.ledger.record("destroy");
    }
}

impl Drop for FakeGame {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Factory producing [`FakeGame`]s, optionally failing every build.
pub struct FakeGameFactory {
    ledger: Rc<InstanceLedger>,
    fail_with: Option<GameError>,
}

impl FakeGameFactory {
    pub fn new(ledger: Rc<InstanceLedger>) -> Self {
        Self {
            ledger,
            fail_with: None,
        }
    }

    pub fn failing(ledger: Rc<InstanceLedger>, error: GameError) -> Self {
        Self {
            ledger,
            fail_with: Some(error),
        }
    }
}

impl GameFactoryPort for FakeGameFactory {
    fn create(&self, _config: GameConfig) -> Result<Box<dyn GameInstancePort>, GameError> {
        if let Some(err) = &self.fail_with {
            self.ledger.record("create-failed");
            return Err(err.clone());
        }
        self.ledger.created.set(self.ledger.created.get() + 1);
        self.ledger.record("create");
        Ok(Box::new(FakeGame {
            id: GameInstanceId::new(),
            ledger: Rc::clone(&self.ledger),
            frame: 0,
            destroyed: false,
        }))
    }
}
