//! Gamebridge Player - composition root binary.

use anyhow::Context;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(target_arch = "wasm32"))]
use gamebridge_player::infrastructure::config::ENV_SHELL;

use gamebridge_player::game::SceneGameFactory;
use gamebridge_player::{BridgeConfig, ShellKind};

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "gamebridge_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Gamebridge Player");

    let config = BridgeConfig::from_env();
    tracing::info!(
        zone = %config.zone,
        headless = config.headless,
        wallet = config.wallet.is_some(),
        "Loaded configuration"
    );

    // Scene list and engine settings are fixed; reject a broken build early.
    let game_config =
        SceneGameFactory::standard_config().context("invalid built-in game configuration")?;

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);
            ShellKind::for_width(width)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var(ENV_SHELL)
                .ok()
                .and_then(|s| ShellKind::parse(&s))
                .unwrap_or_default()
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .with_context(game_config)
        .with_context(shell)
        .launch(gamebridge_player::app);

    Ok(())
}
