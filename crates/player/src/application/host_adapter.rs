//! Game host adapter
//!
//! Owns the single game instance of one mount point and keeps it in step with
//! host state. Ordering rules:
//!
//! 1. Every render pass registers a `ready` listener. Duplicates are harmless
//!    (the flag only ever goes to true); a skipped pass could miss the signal.
//!    The listener of the previous pass is released once the new one is in
//!    place, so the bus holds one listener per adapter however often it renders.
//! 2. `umi` is emitted each time "ready and connected" becomes true, and again
//!    whenever the wallet handle changes while it stays true.
//! 3. A (re)build emits `selectedZone` first and constructs the instance
//!    after, so listeners subscribed ahead of time see the zone.
//! 4. The old instance is always destroyed before a new one is built.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gamebridge_domain::{GameConfig, GameInstanceId, WalletHandle, WalletStatus, ZoneId};
use gamebridge_shared::{BusChannel, BusPayload};

use crate::error::GameError;
use crate::infrastructure::messaging::EventBus;
use crate::ports::outbound::{GameFactory, GameInstancePort, GameStatus, Handler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Mounted,
    Unmounted,
}

/// State reachable from bus handlers. Kept apart from the adapter so a
/// handler firing mid-build never needs to borrow the adapter itself.
struct MountState {
    phase: Cell<Phase>,
    ready: Cell<bool>,
    on_readiness: RefCell<Option<Rc<dyn Fn(bool)>>>,
}

impl MountState {
    fn set_ready(&self, ready: bool) {
        if self.ready.replace(ready) == ready {
            return;
        }
        // Clone out so the callback may replace itself
        let callback = self.on_readiness.borrow().clone();
        if let Some(callback) = callback {
            callback(ready);
        }
    }
}

pub struct GameHostAdapter {
    bus: EventBus,
    factory: GameFactory,
    config: GameConfig,
    state: Rc<MountState>,
    /// `ready` listener registered by the latest render pass
    ready_listener: RefCell<Option<Handler>>,
    instance: Option<Box<dyn GameInstancePort>>,
    zone: Option<ZoneId>,
    forwarded_wallet: Option<WalletHandle>,
}

impl GameHostAdapter {
    pub fn new(bus: EventBus, factory: GameFactory, config: GameConfig) -> Self {
        Self {
            bus,
            factory,
            config,
            state: Rc::new(MountState {
                phase: Cell::new(Phase::Fresh),
                ready: Cell::new(false),
                on_readiness: RefCell::new(None),
            }),
            ready_listener: RefCell::new(None),
            instance: None,
            zone: None,
            forwarded_wallet: None,
        }
    }

    /// Observe readiness changes (the UI mirrors them into a signal).
    pub fn on_readiness(&self, callback: impl Fn(bool) + 'static) {
        *self.state.on_readiness.borrow_mut() = Some(Rc::new(callback));
    }

    pub fn is_ready(&self) -> bool {
        self.state.ready.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.state.phase.get() == Phase::Mounted
    }

    pub fn zone(&self) -> Option<&ZoneId> {
        self.zone.as_ref()
    }

    pub fn live_instance(&self) -> Option<GameInstanceId> {
        self.instance.as_ref().map(|game| game.id())
    }

    pub fn status(&self) -> Option<GameStatus> {
        self.instance.as_ref().map(|game| game.status())
    }

    /// Register the `ready` listener for this render pass.
    ///
    /// A fresh listener is registered on every call, then the one from the
    /// previous pass is removed. The last listener stays on the bus after
    /// unmount but no longer has any effect.
    pub fn render_pass(&self) {
        let state: Weak<MountState> = Rc::downgrade(&self.state);
        let handler = EventBus::handler(move |_| {
            let Some(state) = state.upgrade() else {
                return;
            };
            if state.phase.get() == Phase::Unmounted {
                return;
            }
            state.set_ready(true);
        });
        self.bus.on(BusChannel::Ready, Rc::clone(&handler));

        let previous = self.ready_listener.replace(Some(handler));
        if let Some(previous) = previous {
            self.bus.off(BusChannel::Ready, &previous);
        }
    }

    /// Forward the wallet to the game when ready and connected.
    ///
    /// Returns whether `umi` was emitted.
    pub fn sync_wallet(&mut self, status: WalletStatus, wallet: Option<&WalletHandle>) -> bool {
        if self.state.phase.get() == Phase::Unmounted {
            return false;
        }

        let handle = match wallet {
            Some(handle) if self.is_ready() && status.is_connected() => handle,
            _ => {
                // Condition dropped; the next time it holds counts as a new transition
                self.forwarded_wallet = None;
                return false;
            }
        };

        if self
            .forwarded_wallet
            .as_ref()
            .is_some_and(|previous| previous.same_session(handle))
        {
            return false;
        }

        let delivered = self
            .bus
            .emit(BusChannel::Umi, BusPayload::Wallet(handle.clone()));
        tracing::info!(
            wallet = %handle.identity().short_key(),
            delivered,
            "Forwarded wallet to game"
        );
        self.forwarded_wallet = Some(handle.clone());
        true
    }

    /// Mount (or rebuild) the game for `zone`.
    pub fn mount(&mut self, zone: ZoneId) -> Result<GameInstanceId, GameError> {
        self.teardown();
        self.state.phase.set(Phase::Mounted);

        // The new instance has to signal ready on its own before it gets a wallet
        self.state.set_ready(false);
        self.forwarded_wallet = None;

        self.bus
            .emit(BusChannel::SelectedZone, BusPayload::Zone(zone.clone()));
        self.zone = Some(zone.clone());

        let game = self.factory.create(self.config.clone()).map_err(|err| {
            tracing::error!(zone = %zone, error = %err, "Failed to build game");
            err
        })?;
        let id = game.id();
        tracing::info!(game_id = %id, zone = %zone, "Game mounted");
        self.instance = Some(game);
        Ok(id)
    }

    /// Rebuild only when the zone differs from the mounted one.
    ///
    /// Returns the id of a newly built instance, or `None` when nothing changed.
    pub fn set_zone(&mut self, zone: ZoneId) -> Result<Option<GameInstanceId>, GameError> {
        if self.instance.is_some() && self.zone.as_ref() == Some(&zone) {
            return Ok(None);
        }
        self.mount(zone).map(Some)
    }

    /// Advance the live instance by one frame.
    pub fn step(&mut self) {
        if let Some(game) = self.instance.as_mut() {
            game.step();
        }
    }

    /// Destroy the instance and stop emitting for this mount.
    ///
    /// `ready` listeners stay registered on the bus but no longer have any effect.
    pub fn unmount(&mut self) {
        self.teardown();
        self.state.phase.set(Phase::Unmounted);
        self.state.set_ready(false);
        self.forwarded_wallet = None;
        tracing::debug!("Game host unmounted");
    }

    fn teardown(&mut self) {
        if let Some(mut game) = self.instance.take() {
            let id = game.id();
            game.destroy();
            tracing::debug!(game_id = %id, "Game torn down");
        }
    }
}

impl Drop for GameHostAdapter {
    fn drop(&mut self) {
        self.teardown();
    }
}
