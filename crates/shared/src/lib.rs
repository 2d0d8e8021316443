//! Gamebridge Shared - the contract between the host shell and the scenes
//!
//! The host and the game never share mutable objects. Everything that crosses
//! the boundary is an emission on a named bus channel carrying a
//! [`BusPayload`]. This crate is that vocabulary:
//! - [`BusChannel`]: the catalogue of well-known channels and their direction
//! - [`EventName`]: the key the bus registers handlers under
//! - [`BusPayload`]: what an emission carries
//!
//! # Design Principles
//!
//! 1. **No behaviour** - dispatch lives in the player crate
//! 2. **WASM compatible** - must compile for both native and wasm32 targets

pub mod channels;
pub mod payload;

pub use channels::{BusChannel, Direction, EventName, PayloadKind};
pub use payload::BusPayload;
