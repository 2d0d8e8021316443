use dioxus::prelude::*;
use gamebridge_domain::ScoreBoard;

/// Current and best score readout.
///
/// While a record is being set the best line tracks the current score.
#[component]
pub fn ScoreDisplay(current_score: i64, high_score: i64) -> Element {
    let board = ScoreBoard::new(current_score, high_score);
    let record = board.is_new_record();

    rsx! {
        div {
            class: "flex flex-col items-end gap-1 px-3 py-2 rounded-lg bg-black/60 text-white font-mono text-sm",
            span { class: "score-current", "{board.current_label()}" }
            span {
                class: if record { "score-best text-yellow-300 font-bold" } else { "score-best text-white/70" },
                "{board.best_label()}"
            }
            if record {
                span { class: "score-record text-xs uppercase tracking-wide text-yellow-300", "New record!" }
            }
        }
    }
}
