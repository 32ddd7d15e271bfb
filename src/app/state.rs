use crate::app::event::SearchSeq;
use crate::app::input::InputState;
use crate::config::AppConfig;
use crate::search::record::CustomerRecord;
use crate::search::{SearchOutcome, NOT_FOUND_MESSAGE, NO_RESPONSE_MESSAGE};
use throbber_widgets_tui::ThrobberState;

/// Where the interface is in the search loop. Each transition replaces the
/// phase wholesale; a new result is never merged into an old one.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Searching { seq: SearchSeq },
    Found(CustomerRecord),
    Failed(String),
}

impl SearchPhase {
    /// Reduce a completed outcome to its display phase. Outcomes that carry
    /// no message of their own get their fixed one here.
    pub fn from_outcome(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(record) => SearchPhase::Found(record),
            SearchOutcome::NotFound => SearchPhase::Failed(NOT_FOUND_MESSAGE.to_string()),
            SearchOutcome::Invalid(reason) => SearchPhase::Failed(reason),
            SearchOutcome::NetworkError => SearchPhase::Failed(NO_RESPONSE_MESSAGE.to_string()),
            SearchOutcome::ServerError(message) => SearchPhase::Failed(message),
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, SearchPhase::Searching { .. })
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            SearchPhase::Idle => "Ready",
            SearchPhase::Searching { .. } => "Searching",
            SearchPhase::Found(_) => "Result",
            SearchPhase::Failed(_) => "Error",
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub input: InputState,
    pub phase: SearchPhase,
    pub scroll_offset: usize,
    pub throbber: ThrobberState,
    next_seq: SearchSeq,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            input: InputState::new(),
            phase: SearchPhase::Idle,
            scroll_offset: 0,
            throbber: ThrobberState::default(),
            next_seq: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Enter the searching phase for a freshly allocated sequence number.
    /// Any search still in flight is superseded from this point on.
    pub fn begin_search(&mut self) -> SearchSeq {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.show_phase(SearchPhase::Searching { seq });
        seq
    }

    /// Apply a completed outcome, unless it belongs to a search that is no
    /// longer the one in flight.
    pub fn apply_outcome(&mut self, seq: SearchSeq, outcome: SearchOutcome) {
        match self.phase {
            SearchPhase::Searching { seq: current } if current == seq => {
                self.show_phase(SearchPhase::from_outcome(outcome));
            }
            _ => {
                tracing::debug!(seq, outcome = outcome.kind(), "discarding stale completion");
            }
        }
    }

    /// Show an outcome that never went through dispatch (local rejections).
    pub fn show_outcome(&mut self, outcome: SearchOutcome) {
        self.show_phase(SearchPhase::from_outcome(outcome));
    }

    pub fn clear_result(&mut self) {
        self.show_phase(SearchPhase::Idle);
    }

    fn show_phase(&mut self, phase: SearchPhase) {
        self.phase = phase;
        self.scroll_offset = 0;
        self.dirty = true;
    }
}
