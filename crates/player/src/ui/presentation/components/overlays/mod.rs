//! HUD overlays drawn on top of the game container.
//!
//! Purely presentational: no bus access, data in via props, intent out via
//! callbacks.

mod music_control;
mod pause_button;
mod score_display;

pub use music_control::{volume_icon, MusicControl};
pub use pause_button::PauseButton;
pub use score_display::ScoreDisplay;
