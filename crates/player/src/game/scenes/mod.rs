//! Built-in scenes: preload, wallet gate, world map.

mod preloader;
mod wallet_gate;
mod world_map;

pub use preloader::{Preloader, LOAD_PROGRESS};
pub use wallet_gate::WalletGateScene;
pub use world_map::{WorldMap, ZONE_ENTERED};
