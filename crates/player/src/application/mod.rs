//! Application layer: host-side coordination of the game lifecycle.

pub mod host_adapter;

pub use host_adapter::GameHostAdapter;
