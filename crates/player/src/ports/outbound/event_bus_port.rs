//! EventBusPort - dispatcher behind the event bus handle
//!
//! Two implementations exist: an active dispatcher for realms with a render
//! loop and a no-op dispatcher for realms without one. The choice is made once
//! when the bus is built, so callers never branch on the realm.
//!
//! Use through `crate::infrastructure::messaging::EventBus`.

use std::rc::Rc;

use gamebridge_shared::{BusPayload, EventName};

/// A bus subscriber.
///
/// Handlers are compared by pointer: keep a clone of the `Rc` to `off` it later.
pub type Handler = Rc<dyn Fn(&BusPayload)>;

/// Named-channel publish/subscribe dispatcher.
///
/// No operation fails. Unknown names are always safe.
pub trait EventBusPort {
    /// Register `handler` for `name`. Registering the same handler twice
    /// means it runs twice per emission.
    fn on(&self, name: EventName, handler: Handler);

    /// Like `on`, but the registration is dropped after its first invocation.
    fn once(&self, name: EventName, handler: Handler);

    /// Remove every registration of `handler` under `name`.
    fn off(&self, name: &EventName, handler: &Handler);

    /// Synchronously invoke the handlers registered for `name`, in
    /// registration order. Returns how many handlers ran.
    fn emit(&self, name: &EventName, payload: &BusPayload) -> usize;

    /// Clear handlers for `name`, or for every name when `None`.
    fn remove_all_listeners(&self, name: Option<&EventName>);

    fn listener_count(&self, name: &EventName) -> usize;

    /// Whether emissions are actually delivered.
    fn is_active(&self) -> bool;
}
