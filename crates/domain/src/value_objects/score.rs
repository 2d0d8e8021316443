//! Score overlay view model.

use serde::{Deserialize, Serialize};

/// Current and best score as shown by the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub current: i64,
    pub best: i64,
}

impl ScoreBoard {
    pub fn new(current: i64, best: i64) -> Self {
        Self { current, best }
    }

    /// A record is only set by a positive score beating the stored best.
    pub fn is_new_record(&self) -> bool {
        self.current > self.best && self.current > 0
    }

    /// Best score to display; follows the current score while it is a record.
    pub fn displayed_best(&self) -> i64 {
        if self.is_new_record() {
            self.current
        } else {
            self.best
        }
    }

    pub fn current_label(&self) -> String {
        format!("Current: {}", self.current)
    }

    pub fn best_label(&self) -> String {
        format!("Best: {}", self.displayed_best())
    }
}
