//! Event bus messaging infrastructure.
//!
//! The bus is the only path between the host shell and the running game:
//! - `EventBus`: clone-cheap handle passed to the host adapter and the engine
//! - `ActiveDispatcher`: synchronous dispatch for realms with a render loop
//! - `NoopDispatcher`: same surface, no effect, for realms without one

pub mod event_bus;

pub use event_bus::{ActiveDispatcher, EventBus, NoopDispatcher};
