//! Host-side reactive state

pub mod wallet_state;

pub use wallet_state::{try_use_umi, UmiContext};
