//! Scene entry gates.
//!
//! Bus delivery is one-shot and unbuffered, so a scene that depends on a
//! host emission has to be listening before that emission happens. These
//! gates are subscribed ahead of time (by the factory) and hold the value
//! until the scene that needs it becomes active. Both unsubscribe when
//! dropped.

use std::cell::RefCell;
use std::rc::Rc;

use gamebridge_domain::{WalletHandle, ZoneId};
use gamebridge_shared::BusChannel;

use crate::infrastructure::messaging::EventBus;
use crate::ports::outbound::Handler;

/// Holds the zone from the most recent `selectedZone` emission.
pub struct ZoneCapture {
    bus: EventBus,
    slot: Rc<RefCell<Option<ZoneId>>>,
    handler: Handler,
}

impl ZoneCapture {
    pub fn subscribe(bus: &EventBus) -> Self {
        let slot = Rc::new(RefCell::new(None));
        let slot_for_handler = Rc::clone(&slot);
        let handler = EventBus::handler(move |payload| match payload.as_zone() {
            Some(zone) => *slot_for_handler.borrow_mut() = Some(zone.clone()),
            None => tracing::warn!("selectedZone emitted without a zone payload"),
        });
        bus.on(BusChannel::SelectedZone, Rc::clone(&handler));

        Self {
            bus: bus.clone(),
            slot,
            handler,
        }
    }

    pub fn peek(&self) -> Option<ZoneId> {
        self.slot.borrow().clone()
    }

    /// Consume the captured zone; the next build needs a fresh emission.
    pub fn take(&self) -> Option<ZoneId> {
        self.slot.borrow_mut().take()
    }
}

impl Drop for ZoneCapture {
    fn drop(&mut self) {
        self.bus.off(BusChannel::SelectedZone, &self.handler);
    }
}

/// Stays closed until a `umi` emission delivers a wallet handle.
///
/// Later emissions replace the handle, so a reconnect reaches the game too.
pub struct WalletGate {
    bus: EventBus,
    wallet: Rc<RefCell<Option<WalletHandle>>>,
    handler: Handler,
}

impl WalletGate {
    pub fn subscribe(bus: &EventBus) -> Self {
        let wallet = Rc::new(RefCell::new(None));
        let wallet_for_handler = Rc::clone(&wallet);
        let handler = EventBus::handler(move |payload| match payload.as_wallet() {
            Some(handle) => *wallet_for_handler.borrow_mut() = Some(handle.clone()),
            None => tracing::warn!("umi emitted without a wallet payload"),
        });
        bus.on(BusChannel::Umi, Rc::clone(&handler));

        Self {
            bus: bus.clone(),
            wallet,
            handler,
        }
    }

    pub fn is_open(&self) -> bool {
        self.wallet.borrow().is_some()
    }

    pub fn wallet(&self) -> Option<WalletHandle> {
        self.wallet.borrow().clone()
    }
}

impl Drop for WalletGate {
    fn drop(&mut self) {
        self.bus.off(BusChannel::Umi, &self.handler);
    }
}
