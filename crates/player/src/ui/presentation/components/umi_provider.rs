use dioxus::prelude::*;
use gamebridge_domain::WalletIdentity;

use crate::presentation::state::{try_use_umi, UmiContext};

/// Provides the wallet context to its subtree.
#[component]
pub fn UmiProvider(
    #[props(!optional)] initial: Option<WalletIdentity>,
    children: Element,
) -> Element {
    use_context_provider(move || UmiContext::new(initial));

    rsx! {
        {children}
    }
}

/// Connection status plus a connect/disconnect toggle.
///
/// `connect_identity` is the wallet offered when disconnected; without one
/// the button only disconnects.
#[component]
pub fn WalletBadge(#[props(!optional)] connect_identity: Option<WalletIdentity>) -> Element {
    let mut umi = try_use_umi()?;

    let status = umi.status();
    let label = match umi.wallet() {
        Some(handle) if status.is_connected() => handle.identity().short_key(),
        _ => status.to_string(),
    };
    let can_connect = connect_identity.is_some();

    rsx! {
        div {
            class: "flex items-center gap-2 px-3 py-2 rounded-lg bg-black/60 text-white text-sm",
            span { class: "wallet-status font-mono", "{label}" }
            if status.is_connected() {
                button {
                    class: "wallet-disconnect text-red-300 hover:text-red-200",
                    onclick: move |_| umi.disconnect(),
                    "Disconnect"
                }
            } else if can_connect {
                button {
                    class: "wallet-connect text-green-300 hover:text-green-200",
                    onclick: move |_| {
                        if let Some(identity) = connect_identity.clone() {
                            umi.connect(identity);
                        }
                    },
                    "Connect"
                }
            }
        }
    }
}
