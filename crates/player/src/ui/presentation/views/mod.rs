pub mod game_screen;

pub use game_screen::{GameScreen, PLAYLIST, SCORE_CHANGED};
