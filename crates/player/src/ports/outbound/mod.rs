//! Outbound ports: what the host needs from the bus and from the engine.

pub mod event_bus_port;
pub mod game_engine_port;

pub use event_bus_port::{EventBusPort, Handler};
#[cfg(any(test, feature = "testing"))]
pub use game_engine_port::MockGameFactoryPort;
pub use game_engine_port::{GameFactory, GameFactoryPort, GameInstancePort, GameStatus};
