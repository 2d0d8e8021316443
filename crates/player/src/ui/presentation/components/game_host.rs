//! Game container component
//!
//! Binds a `GameHostAdapter` to the component lifecycle: the adapter is
//! created on first render, torn down on drop, rebuilt when the zone prop
//! changes and fed the wallet state whenever readiness or the wallet moves.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use gamebridge_domain::{GameConfig, ZoneId};

use crate::application::GameHostAdapter;
use crate::infrastructure::{platform, BridgeConfig, EventBus};
use crate::ports::outbound::GameFactory;
use crate::presentation::state::try_use_umi;

#[component]
pub fn GameHost(zone: ZoneId, paused: bool) -> Element {
    let umi = try_use_umi()?;
    let bus = use_context::<EventBus>();
    let factory = use_context::<GameFactory>();
    let game_config = use_context::<GameConfig>();
    let config = use_context::<BridgeConfig>();

    let ready = use_signal(|| false);
    let mut build_error = use_signal(|| None::<String>);

    let adapter = use_hook(|| {
        let adapter = GameHostAdapter::new(bus.clone(), factory.clone(), game_config.clone());
        adapter.on_readiness(move |is_ready| {
            let mut ready = ready;
            ready.set(is_ready);
        });
        Rc::new(RefCell::new(adapter))
    });

    // Read by the frame loop, written on every render
    let pause_flag = use_hook(|| Rc::new(Cell::new(false)));
    pause_flag.set(paused);

    adapter.borrow().render_pass();

    {
        let adapter = adapter.clone();
        use_effect(move || {
            // Subscribes to readiness and both wallet signals
            let _ = ready();
            let status = umi.status();
            let wallet = umi.wallet();
            adapter.borrow_mut().sync_wallet(status, wallet.as_ref());
        });
    }

    {
        let adapter = adapter.clone();
        use_effect(use_reactive((&zone,), move |(zone,)| {
            match adapter.borrow_mut().set_zone(zone) {
                Ok(_) => {
                    if build_error.peek().is_some() {
                        build_error.set(None);
                    }
                }
                Err(e) => build_error.set(Some(e.to_string())),
            }
        }));
    }

    {
        let adapter = adapter.clone();
        let pause_flag = pause_flag.clone();
        let interval_ms = config.frame_interval_ms;
        use_future(move || {
            let adapter = adapter.clone();
            let pause_flag = pause_flag.clone();
            async move {
                loop {
                    platform::frame_delay(interval_ms).await;
                    if !pause_flag.get() {
                        adapter.borrow_mut().step();
                    }
                }
            }
        });
    }

    {
        let adapter = adapter.clone();
        use_drop(move || adapter.borrow_mut().unmount());
    }

    let is_ready = ready();

    rsx! {
        div {
            id: "game-container",
            class: "relative w-full h-full bg-black",
            "data-ready": "{is_ready}",
            "data-zone": "{zone}",
            if !is_ready {
                div {
                    class: "absolute inset-0 flex items-center justify-center text-white/60",
                    "Loading…"
                }
            }
            if let Some(err) = build_error() {
                div {
                    class: "absolute inset-x-0 bottom-0 p-3 bg-red-900/80 text-white text-sm",
                    "Could not start the game: {err}"
                }
            }
        }
    }
}
