//! Ports (trait seams) of the player crate.

pub mod outbound;
