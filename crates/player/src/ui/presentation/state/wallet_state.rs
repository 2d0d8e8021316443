//! Wallet connection state using Dioxus signals
//!
//! The host owns the wallet; the game only ever sees the handle the adapter
//! forwards on the `"umi"` channel.

use dioxus::prelude::*;
use gamebridge_domain::{WalletHandle, WalletIdentity, WalletStatus};

use crate::error::ContextError;

/// Wallet context shared by every component under an `UmiProvider`.
#[derive(Clone, Copy, PartialEq)]
pub struct UmiContext {
    status: Signal<WalletStatus>,
    wallet: Signal<Option<WalletHandle>>,
}

impl UmiContext {
    /// Must be called inside an active Dioxus runtime.
    pub fn new(initial: Option<WalletIdentity>) -> Self {
        let (status, wallet) = match initial {
            Some(identity) => (WalletStatus::Connected, Some(WalletHandle::new(identity))),
            None => (WalletStatus::Disconnected, None),
        };
        Self {
            status: Signal::new(status),
            wallet: Signal::new(wallet),
        }
    }

    /// Reading subscribes the calling scope.
    pub fn status(&self) -> WalletStatus {
        *self.status.read()
    }

    /// Reading subscribes the calling scope.
    pub fn wallet(&self) -> Option<WalletHandle> {
        self.wallet.read().clone()
    }

    /// Start a new wallet session. Each call produces a fresh handle, so the
    /// game is sent the new identity even when the key is unchanged.
    pub fn connect(&mut self, identity: WalletIdentity) -> WalletHandle {
        let handle = WalletHandle::new(identity);
        tracing::info!(wallet = %handle.identity().short_key(), "Wallet connected");
        self.wallet.set(Some(handle.clone()));
        self.status.set(WalletStatus::Connected);
        handle
    }

    pub fn disconnect(&mut self) {
        if !self.status.peek().is_connected() {
            return;
        }
        tracing::info!("Wallet disconnected");
        self.status.set(WalletStatus::Disconnected);
        self.wallet.set(None);
    }
}

/// Fetch the wallet context, failing when no `UmiProvider` is above the caller.
pub fn try_use_umi() -> Result<UmiContext, ContextError> {
    try_use_context::<UmiContext>().ok_or_else(|| {
        let err = ContextError::missing_provider("UmiProvider", "use_umi");
        tracing::error!(error = %err, "Wallet context unavailable");
        err
    })
}
