use std::rc::Rc;

use dioxus::prelude::*;

use crate::game::{SceneGameFactory, SceneGameOptions};
use crate::infrastructure::{platform, BridgeConfig, EventBus};
use crate::ports::outbound::GameFactory;

pub mod presentation;

use presentation::components::UmiProvider;
use presentation::views::GameScreen;

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the composition root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }

    /// Layout for a viewport of the given width in CSS pixels.
    pub fn for_width(width: f64) -> Self {
        if width < 768.0 {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let config = use_context::<BridgeConfig>();

    // These must be created inside an active Dioxus runtime.
    let bus = use_context_provider(|| EventBus::for_realm(platform::detect_realm(&config)));
    use_context_provider(|| -> GameFactory {
        Rc::new(SceneGameFactory::new(
            &bus,
            SceneGameOptions::from_config(&config),
        ))
    });

    let screen = rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                div {
                    class: "flex flex-col items-center justify-center w-full h-full bg-gray-900 text-red-300 p-6",
                    h2 { class: "text-xl mb-2", "Something went wrong" }
                    pre { class: "text-sm whitespace-pre-wrap", "{errors:?}" }
                }
            },
            UmiProvider {
                initial: config.wallet.clone(),
                GameScreen { zone: config.zone.clone() }
            }
        }
    };

    rsx! {
        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell { {screen} }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell { {screen} }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            style: "width: 100vw; height: 100vh; overflow: hidden;",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        // Portrait devices get the HUD scaled down; the game fits the container.
        div {
            class: "text-xs",
            style: "width: 100vw; height: 100vh; overflow: hidden;",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_kind_parses_known_names() {
        assert_eq!(ShellKind::parse(" Mobile "), Some(ShellKind::Mobile));
        assert_eq!(ShellKind::parse("desktop"), Some(ShellKind::Desktop));
        assert_eq!(ShellKind::parse("tablet"), None);
    }

    #[test]
    fn narrow_viewports_use_mobile_shell() {
        assert_eq!(ShellKind::for_width(375.0), ShellKind::Mobile);
        assert_eq!(ShellKind::for_width(1024.0), ShellKind::Desktop);
    }
}
