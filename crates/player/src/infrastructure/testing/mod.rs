//! Test doubles for the engine ports.

mod fixtures;

pub use fixtures::{FakeGame, FakeGameFactory, InstanceLedger};
