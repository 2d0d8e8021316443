//! Runtime configuration read from the environment.
//!
//! Every key is optional. Unparseable values are logged and replaced by the
//! default instead of aborting startup.

use gamebridge_domain::{WalletIdentity, ZoneId};

pub const ENV_ZONE: &str = "GAMEBRIDGE_ZONE";
pub const ENV_HEADLESS: &str = "GAMEBRIDGE_HEADLESS";
pub const ENV_RPC_ENDPOINT: &str = "GAMEBRIDGE_RPC_ENDPOINT";
pub const ENV_WALLET: &str = "GAMEBRIDGE_WALLET";
pub const ENV_FRAME_MS: &str = "GAMEBRIDGE_FRAME_MS";
pub const ENV_ASSETS_PER_FRAME: &str = "GAMEBRIDGE_ASSETS_PER_FRAME";
pub const ENV_SHELL: &str = "GAMEBRIDGE_SHELL";

pub const DEFAULT_RPC_ENDPOINT: &str = "https://api.devnet.solana.com";
pub const DEFAULT_FRAME_MS: u32 = 16;
pub const DEFAULT_ASSETS_PER_FRAME: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Zone selected when the game is first mounted
    pub zone: ZoneId,
    /// Force the no-op event bus
    pub headless: bool,
    pub rpc_endpoint: String,
    /// Wallet to connect at startup, if any
    pub wallet: Option<WalletIdentity>,
    pub frame_interval_ms: u32,
    pub assets_per_frame: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            zone: ZoneId::default(),
            headless: false,
            rpc_endpoint: DEFAULT_RPC_ENDPOINT.to_string(),
            wallet: None,
            frame_interval_ms: DEFAULT_FRAME_MS,
            assets_per_frame: DEFAULT_ASSETS_PER_FRAME,
        }
    }
}

impl BridgeConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let zone = match lookup(ENV_ZONE) {
            Some(raw) => ZoneId::new(raw).unwrap_or_else(|e| {
                tracing::warn!(key = ENV_ZONE, error = %e, "Invalid zone, using default");
                defaults.zone.clone()
            }),
            None => defaults.zone.clone(),
        };

        let headless = lookup(ENV_HEADLESS)
            .map(|raw| parse_flag(&raw))
            .unwrap_or(defaults.headless);

        let rpc_endpoint = lookup(ENV_RPC_ENDPOINT)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| defaults.rpc_endpoint.clone());

        let wallet = lookup(ENV_WALLET).and_then(|key| {
            WalletIdentity::new(key.trim(), rpc_endpoint.clone())
                .map_err(|e| {
                    tracing::warn!(key = ENV_WALLET, error = %e, "Ignoring invalid wallet key");
                })
                .ok()
        });

        let frame_interval_ms = parse_number(&lookup, ENV_FRAME_MS, defaults.frame_interval_ms);
        let assets_per_frame =
            parse_number(&lookup, ENV_ASSETS_PER_FRAME, defaults.assets_per_frame);

        Self {
            zone,
            headless,
            rpc_endpoint,
            wallet,
            frame_interval_ms,
            assets_per_frame,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_number<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + From<u8> + Copy,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) if value > T::from(0) => value,
            _ => {
                tracing::warn!(key, value = %raw, "Expected a positive number, using default");
                default
            }
        },
        None => default,
    }
}
