//! Event Bus bridging the host shell and the game scenes.
//!
//! Emission is synchronous: `emit` returns after every handler registered for
//! the name has run. Nothing is buffered. A handler registered after an
//! emission never sees it, which is what the scene entry gates rely on.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use gamebridge_shared::{BusPayload, EventName};

use crate::infrastructure::platform::Realm;
use crate::ports::outbound::{EventBusPort, Handler};

struct Registration {
    id: u64,
    handler: Handler,
    once: bool,
}

/// Dispatcher used when a render loop is available.
///
/// Handlers run in registration order. The handler list is snapshotted when an
/// emission starts: handlers added during the pass wait for the next emission,
/// while handlers removed during the pass are skipped.
#[derive(Default)]
pub struct ActiveDispatcher {
    listeners: RefCell<HashMap<EventName, Vec<Registration>>>,
    next_id: Cell<u64>,
}

impl ActiveDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&self, name: EventName, handler: Handler, once: bool) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners
            .borrow_mut()
            .entry(name)
            .or_default()
            .push(Registration { id, handler, once });
    }

    fn is_registered(&self, name: &EventName, id: u64) -> bool {
        self.listeners
            .borrow()
            .get(name)
            .is_some_and(|regs| regs.iter().any(|r| r.id == id))
    }

    /// Remove a registration by id, returning whether it was still present.
    fn unregister(&self, name: &EventName, id: u64) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let Some(regs) = listeners.get_mut(name) else {
            return false;
        };
        let before = regs.len();
        regs.retain(|r| r.id != id);
        let removed = regs.len() != before;
        if regs.is_empty() {
            listeners.remove(name);
        }
        removed
    }
}

impl EventBusPort for ActiveDispatcher {
    fn on(&self, name: EventName, handler: Handler) {
        self.register(name, handler, false);
    }

    fn once(&self, name: EventName, handler: Handler) {
        self.register(name, handler, true);
    }

    fn off(&self, name: &EventName, handler: &Handler) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(regs) = listeners.get_mut(name) {
            regs.retain(|r| !Rc::ptr_eq(&r.handler, handler));
            if regs.is_empty() {
                listeners.remove(name);
            }
        }
    }

    fn emit(&self, name: &EventName, payload: &BusPayload) -> usize {
        // The borrow must end before any handler runs: handlers may call back
        // into the bus.
        let snapshot: Vec<(u64, Handler, bool)> = match self.listeners.borrow().get(name) {
            Some(regs) => regs
                .iter()
                .map(|r| (r.id, Rc::clone(&r.handler), r.once))
                .collect(),
            None => {
                tracing::trace!(event = %name, "emit without listeners");
                return 0;
            }
        };

        let mut delivered = 0;
        for (id, handler, once) in snapshot {
            let live = if once {
                self.unregister(name, id)
            } else {
                self.is_registered(name, id)
            };
            if !live {
                continue;
            }
            handler(payload);
            delivered += 1;
        }

        tracing::trace!(event = %name, delivered, "emit");
        delivered
    }

    fn remove_all_listeners(&self, name: Option<&EventName>) {
        let mut listeners = self.listeners.borrow_mut();
        match name {
            Some(name) => {
                listeners.remove(name);
            }
            None => listeners.clear(),
        }
    }

    fn listener_count(&self, name: &EventName) -> usize {
        self.listeners.borrow().get(name).map_or(0, Vec::len)
    }

    fn is_active(&self) -> bool {
        true
    }
}

/// Dispatcher for realms without a render loop. Every call is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDispatcher;

impl EventBusPort for NoopDispatcher {
    fn on(&self, _name: EventName, _handler: Handler) {}

    fn once(&self, _name: EventName, _handler: Handler) {}

    fn off(&self, _name: &EventName, _handler: &Handler) {}

    fn emit(&self, _name: &EventName, _payload: &BusPayload) -> usize {
        0
    }

    fn remove_all_listeners(&self, _name: Option<&EventName>) {}

    fn listener_count(&self, _name: &EventName) -> usize {
        0
    }

    fn is_active(&self) -> bool {
        false
    }
}

/// Handle to the event bus shared by the host adapter and the engine.
///
/// Cloning is cheap and every clone talks to the same dispatcher. The bus is
/// single-threaded, like both loops it connects.
#[derive(Clone)]
pub struct EventBus {
    dispatcher: Rc<dyn EventBusPort>,
}

impl EventBus {
    /// Create a bus with an active dispatcher.
    pub fn new() -> Self {
        Self::with_dispatcher(Rc::new(ActiveDispatcher::new()))
    }

    /// Create a bus whose operations do nothing.
    pub fn noop() -> Self {
        Self::with_dispatcher(Rc::new(NoopDispatcher))
    }

    /// Pick the dispatcher for the realm the process runs in.
    pub fn for_realm(realm: Realm) -> Self {
        match realm {
            Realm::Interactive => Self::new(),
            Realm::Headless => {
                tracing::info!("No render loop available, event bus degraded to no-op");
                Self::noop()
            }
        }
    }

    pub fn with_dispatcher(dispatcher: Rc<dyn EventBusPort>) -> Self {
        Self { dispatcher }
    }

    /// Wrap a closure as a handler that can later be passed to `off`.
    pub fn handler(f: impl Fn(&BusPayload) + 'static) -> Handler {
        Rc::new(f)
    }

    pub fn on(&self, name: impl Into<EventName>, handler: Handler) {
        self.dispatcher.on(name.into(), handler);
    }

    pub fn once(&self, name: impl Into<EventName>, handler: Handler) {
        self.dispatcher.once(name.into(), handler);
    }

    pub fn off(&self, name: impl Into<EventName>, handler: &Handler) {
        self.dispatcher.off(&name.into(), handler);
    }

    pub fn emit(&self, name: impl Into<EventName>, payload: BusPayload) -> usize {
        self.dispatcher.emit(&name.into(), &payload)
    }

    pub fn remove_all_listeners(&self, name: Option<EventName>) {
        self.dispatcher.remove_all_listeners(name.as_ref());
    }

    pub fn listener_count(&self, name: impl Into<EventName>) -> usize {
        self.dispatcher.listener_count(&name.into())
    }

    pub fn is_active(&self) -> bool {
        self.dispatcher.is_active()
    }

    /// Whether both handles talk to the same dispatcher.
    pub fn same_bus(&self, other: &EventBus) -> bool {
        Rc::ptr_eq(&self.dispatcher, &other.dispatcher)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamebridge_shared::BusChannel;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Handler) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_for_factory = Rc::clone(&log);
        let make = move |tag: &'static str| {
            let log = Rc::clone(&log_for_factory);
            EventBus::handler(move |_| log.borrow_mut().push(tag))
        };
        (log, make)
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let bus = EventBus::new();
        let (log, make) = recorder();

        bus.on("tick", make("a"));
        bus.on("tick", make("b"));
        bus.on("tick", make("c"));

        assert_eq!(bus.emit("tick", BusPayload::Empty), 3);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn handler_runs_once_per_emit_until_off() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let handler = make("h");

        bus.emit("tick", BusPayload::Empty);
        bus.on("tick", Rc::clone(&handler));
        bus.emit("tick", BusPayload::Empty);
        bus.emit("tick", BusPayload::Empty);
        bus.off("tick", &handler);
        bus.emit("tick", BusPayload::Empty);

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn duplicate_registration_runs_twice() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let handler = make("dup");

        bus.on("tick", Rc::clone(&handler));
        bus.on("tick", Rc::clone(&handler));
        bus.emit("tick", BusPayload::Empty);
        assert_eq!(log.borrow().len(), 2);

        // off drops every registration of the handler
        bus.off("tick", &handler);
        assert_eq!(bus.listener_count("tick"), 0);
    }

    #[test]
    fn once_deregisters_after_first_call() {
        let bus = EventBus::new();
        let (log, make) = recorder();

        bus.once(BusChannel::Ready, make("ready"));
        assert_eq!(bus.listener_count(BusChannel::Ready), 1);

        bus.emit(BusChannel::Ready, BusPayload::Empty);
        bus.emit(BusChannel::Ready, BusPayload::Empty);

        assert_eq!(*log.borrow(), vec!["ready"]);
        assert_eq!(bus.listener_count(BusChannel::Ready), 0);
    }

    #[test]
    fn off_unknown_handler_is_noop() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        bus.on("tick", make("kept"));

        bus.off("tick", &make("stranger"));
        bus.off("never-registered", &make("stranger"));
        bus.emit("tick", BusPayload::Empty);

        assert_eq!(*log.borrow(), vec!["kept"]);
    }

    #[test]
    fn emit_without_listeners_has_no_effect() {
        let bus = EventBus::new();
        assert_eq!(bus.emit("nobody", BusPayload::Empty), 0);
        assert_eq!(bus.listener_count("nobody"), 0);
    }

    #[test]
    fn late_subscriber_misses_earlier_emission() {
        let bus = EventBus::new();
        let (log, make) = recorder();

        bus.emit(BusChannel::SelectedZone, BusPayload::Empty);
        bus.on(BusChannel::SelectedZone, make("late"));

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn handler_added_during_emit_waits_for_next_pass() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let inner = make("inner");

        let bus_for_handler = bus.clone();
        bus.on(
            "tick",
            EventBus::handler(move |_| bus_for_handler.on("tick", Rc::clone(&inner))),
        );

        bus.emit("tick", BusPayload::Empty);
        assert!(log.borrow().is_empty());

        bus.emit("tick", BusPayload::Empty);
        assert_eq!(*log.borrow(), vec!["inner"]);
    }

    #[test]
    fn handler_removed_during_emit_is_skipped() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let victim = make("victim");

        let bus_for_handler = bus.clone();
        let victim_for_handler = Rc::clone(&victim);
        bus.on(
            "tick",
            EventBus::handler(move |_| bus_for_handler.off("tick", &victim_for_handler)),
        );
        bus.on("tick", victim);

        assert_eq!(bus.emit("tick", BusPayload::Empty), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn reentrant_once_fires_a_single_time() {
        let bus = EventBus::new();
        let count = Rc::new(Cell::new(0));

        let bus_for_handler = bus.clone();
        let count_for_handler = Rc::clone(&count);
        bus.once(
            "tick",
            EventBus::handler(move |_| {
                count_for_handler.set(count_for_handler.get() + 1);
                bus_for_handler.emit("tick", BusPayload::Empty);
            }),
        );

        bus.emit("tick", BusPayload::Empty);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn payload_reaches_handlers() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(None));
        let seen_for_handler = Rc::clone(&seen);
        bus.on(
            "score",
            EventBus::handler(move |payload| {
                *seen_for_handler.borrow_mut() = payload.as_json().cloned();
            }),
        );

        bus.emit("score", serde_json::json!({ "score": 7 }).into());
        assert_eq!(*seen.borrow(), Some(serde_json::json!({ "score": 7 })));
    }

    #[test]
    fn remove_all_listeners_by_name_and_globally() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        bus.on("a", make("a"));
        bus.on("b", make("b"));

        bus.remove_all_listeners(Some("a".into()));
        bus.emit("a", BusPayload::Empty);
        bus.emit("b", BusPayload::Empty);
        assert_eq!(*log.borrow(), vec!["b"]);

        bus.remove_all_listeners(None);
        bus.emit("b", BusPayload::Empty);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn noop_bus_accepts_everything_and_does_nothing() {
        let bus = EventBus::noop();
        let (log, make) = recorder();
        let handler = make("h");

        bus.on("tick", Rc::clone(&handler));
        bus.once("tick", Rc::clone(&handler));
        assert_eq!(bus.emit("tick", BusPayload::Empty), 0);
        bus.off("tick", &handler);
        bus.off("tick", &handler);
        bus.remove_all_listeners(Some("tick".into()));
        bus.remove_all_listeners(None);

        assert!(log.borrow().is_empty());
        assert_eq!(bus.listener_count("tick"), 0);
        assert!(!bus.is_active());
    }

    #[test]
    fn realm_selects_dispatcher() {
        assert!(EventBus::for_realm(Realm::Interactive).is_active());
        assert!(!EventBus::for_realm(Realm::Headless).is_active());
    }

    #[test]
    fn clones_share_dispatcher() {
        let bus = EventBus::new();
        let clone = bus.clone();
        let (log, make) = recorder();

        clone.on("tick", make("via-clone"));
        bus.emit("tick", BusPayload::Empty);

        assert!(bus.same_bus(&clone));
        assert!(!bus.same_bus(&EventBus::new()));
        assert_eq!(log.borrow().len(), 1);
    }
}
