//! Wallet-dependent scene: holds the game until the host delivers a wallet.

use gamebridge_domain::SceneKey;

use crate::game::gating::WalletGate;
use crate::game::scene::{Scene, SceneContext};

pub struct WalletGateScene {
    gate: WalletGate,
    next: SceneKey,
    passed: bool,
}

impl WalletGateScene {
    /// `gate` must already be subscribed: `umi` may arrive while the
    /// previous scene is still active.
    pub fn new(gate: WalletGate, next: SceneKey) -> Self {
        Self {
            gate,
            next,
            passed: false,
        }
    }

    fn try_pass(&mut self, ctx: &mut SceneContext<'_>) {
        if self.passed {
            return;
        }
        if let Some(wallet) = self.gate.wallet() {
            self.passed = true;
            tracing::info!(wallet = %wallet.identity().short_key(), "Wallet received, leaving gate");
            ctx.start(self.next.clone());
        }
    }
}

impl Scene for WalletGateScene {
    fn key(&self) -> SceneKey {
        SceneKey::wallet_gate()
    }

    fn create(&mut self, ctx: &mut SceneContext<'_>) {
        self.passed = false;
        tracing::debug!(open = self.gate.is_open(), "Waiting for wallet");
        self.try_pass(ctx);
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>) {
        self.try_pass(ctx);
    }
}
