use dioxus::prelude::*;

#[component]
pub fn PauseButton(is_paused: bool, on_toggle: EventHandler<()>) -> Element {
    let (icon, label) = if is_paused {
        ("▶", "Resume")
    } else {
        ("⏸", "Pause")
    };

    rsx! {
        button {
            class: "px-3 py-2 rounded-lg bg-black/60 text-white hover:bg-black/80 transition-colors",
            title: "{label}",
            "aria-pressed": "{is_paused}",
            onclick: move |_| on_toggle.call(()),
            "{icon}"
        }
    }
}
