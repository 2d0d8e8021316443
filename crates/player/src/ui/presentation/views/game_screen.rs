//! Main play screen: game container with the HUD overlays on top.

use dioxus::prelude::*;
use gamebridge_domain::{ScoreBoard, ZoneId};

use crate::infrastructure::{BridgeConfig, EventBus};
use crate::presentation::components::{
    GameHost, MusicControl, PauseButton, ScoreDisplay, WalletBadge,
};

/// Channel scenes use to report the running score, payload `{"score": n}`.
pub const SCORE_CHANGED: &str = "scoreChanged";

/// Background music rotation.
pub const PLAYLIST: &[&str] = &["Overworld", "Ember Caves", "Night Market"];

#[component]
pub fn GameScreen(zone: ZoneId) -> Element {
    let bus = use_context::<EventBus>();
    let config = use_context::<BridgeConfig>();

    let mut paused = use_signal(|| false);
    let mut playing = use_signal(|| false);
    let mut track = use_signal(|| 0_usize);
    let mut volume = use_signal(|| 0.6_f64);
    let score = use_signal(ScoreBoard::default);

    let score_handler = use_hook(|| {
        let handler = EventBus::handler(move |payload| {
            let Some(current) = payload
                .as_json()
                .and_then(|value| value.get("score"))
                .and_then(|score| score.as_i64())
            else {
                tracing::warn!("Ignoring malformed score update");
                return;
            };
            let mut score = score;
            let best = score.peek().displayed_best();
            score.set(ScoreBoard::new(current, best));
        });
        bus.on(SCORE_CHANGED, handler.clone());
        handler
    });

    {
        let bus = bus.clone();
        use_drop(move || bus.off(SCORE_CHANGED, &score_handler));
    }

    let board = score();
    let track_name = PLAYLIST[track() % PLAYLIST.len()];

    rsx! {
        div {
            class: "relative w-full h-full",
            GameHost { zone: zone.clone(), paused: paused() }

            div {
                class: "absolute top-0 inset-x-0 flex items-start justify-between p-3 pointer-events-none",
                div {
                    class: "flex gap-2 pointer-events-auto",
                    PauseButton {
                        is_paused: paused(),
                        on_toggle: move |_| paused.toggle(),
                    }
                    MusicControl {
                        is_playing: playing(),
                        is_loading: false,
                        volume: volume(),
                        on_toggle_play: move |_| playing.toggle(),
                        on_next_track: move |_| {
                            let next = (track() + 1) % PLAYLIST.len();
                            track.set(next);
                        },
                        on_volume_change: move |level: f64| volume.set(level),
                    }
                    if playing() {
                        span { class: "self-center text-xs text-white/70", "♪ {track_name}" }
                    }
                }
                div {
                    class: "flex gap-2 pointer-events-auto",
                    WalletBadge { connect_identity: config.wallet.clone() }
                    ScoreDisplay { current_score: board.current, high_score: board.best }
                }
            }

            if paused() {
                div {
                    class: "absolute inset-0 flex items-center justify-center bg-black/40 text-white text-2xl",
                    "Paused"
                }
            }
        }
    }
}
