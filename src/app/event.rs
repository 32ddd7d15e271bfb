use crate::search::SearchOutcome;
use crossterm::event::Event as CrosstermEvent;

/// Monotonically increasing id for submitted searches. Completions carry it
/// back so anything but the latest search can be discarded.
pub type SearchSeq = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A dispatched lookup finished with an outcome
    SearchCompleted {
        seq: SearchSeq,
        outcome: SearchOutcome,
    },

    /// Tick for UI refresh
    Tick,
}
