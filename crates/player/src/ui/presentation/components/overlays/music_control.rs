//! Music control overlay
//!
//! Controlled component: playback state and volume come in as props, every
//! interaction goes back out through a callback. Volume steps through the
//! fixed levels in `gamebridge_domain::VOLUME_LEVELS`.

use dioxus::prelude::*;
use gamebridge_domain::{next_volume, volume_level_index};

/// Icon for the level nearest to `volume`.
pub fn volume_icon(volume: f64) -> &'static str {
    match volume_level_index(volume) {
        0 => "🔇",
        1 => "🔈",
        2 => "🔉",
        _ => "🔊",
    }
}

#[component]
pub fn MusicControl(
    is_playing: bool,
    is_loading: bool,
    volume: f64,
    on_toggle_play: EventHandler<()>,
    on_next_track: EventHandler<()>,
    on_volume_change: EventHandler<f64>,
) -> Element {
    let play_icon = if is_loading {
        "…"
    } else if is_playing {
        "⏸"
    } else {
        "▶"
    };
    let icon = volume_icon(volume);
    let percent = (volume * 100.0).round();

    rsx! {
        div {
            class: "flex items-center gap-2 px-3 py-2 rounded-lg bg-black/60 text-white",
            button {
                class: "music-toggle hover:text-yellow-300 disabled:opacity-50",
                disabled: is_loading,
                title: if is_playing { "Pause music" } else { "Play music" },
                onclick: move |_| on_toggle_play.call(()),
                "{play_icon}"
            }
            button {
                class: "music-next hover:text-yellow-300 disabled:opacity-50",
                disabled: is_loading,
                title: "Next track",
                onclick: move |_| on_next_track.call(()),
                "⏭"
            }
            button {
                class: "music-volume hover:text-yellow-300",
                title: "Volume {percent}%",
                onclick: move |_| on_volume_change.call(next_volume(volume)),
                "{icon}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_follows_nearest_level() {
        assert_eq!(volume_icon(0.0), "🔇");
        assert_eq!(volume_icon(0.3), "🔈");
        assert_eq!(volume_icon(0.62), "🔉");
        assert_eq!(volume_icon(1.0), "🔊");
    }

    #[test]
    fn icon_tolerates_unvalidated_input() {
        assert_eq!(volume_icon(f64::NAN), "🔇");
        assert_eq!(volume_icon(3.0), "🔊");
    }
}
