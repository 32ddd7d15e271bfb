use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, SearchPhase};
use crate::search::{classify, SearchOutcome};
use crate::ui::result_card;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};

const SCROLL_STEP: usize = 5;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::SearchCompleted { seq, outcome } => {
            state.apply_outcome(seq, outcome);
            vec![]
        }
        AppEvent::Tick => {
            // The spinner only moves while a lookup is in flight; an idle
            // app does not redraw on ticks.
            if state.phase.is_searching() {
                state.throbber.calc_next();
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::ScrollUp => scroll_up(state),
                MouseEventKind::ScrollDown => scroll_down(state),
                _ => {}
            }
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Enter => submit(state),
        KeyCode::Esc => {
            state.input.clear();
            state.clear_result();
            vec![]
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.input.delete_word_back();
            } else {
                state.input.delete_back();
            }
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Up => {
            state.input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.input.history_down();
            vec![]
        }
        KeyCode::PageUp => {
            scroll_up(state);
            vec![]
        }
        KeyCode::PageDown => {
            scroll_down(state);
            vec![]
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.input.move_home(),
                    'e' => state.input.move_end(),
                    'w' => state.input.delete_word_back(),
                    'u' => state.input.clear(),
                    _ => {}
                }
            } else {
                state.input.insert_char(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Classify the query and either dispatch a search or show the rejection.
/// Submitting while a lookup is in flight supersedes it.
fn submit(state: &mut AppState) -> Vec<Action> {
    let query = state.input.submit();
    match classify::classify(&query) {
        Ok(param) => {
            let seq = state.begin_search();
            tracing::info!(seq, kind = param.key(), query = %param.masked(), "search submitted");
            vec![Action::Search { seq, param }]
        }
        Err(reason) => {
            tracing::debug!(reason = %reason, "query rejected before dispatch");
            state.show_outcome(SearchOutcome::Invalid(reason.to_string()));
            vec![]
        }
    }
}

fn scroll_up(state: &mut AppState) {
    if state.scroll_offset > 0 {
        state.scroll_offset = state.scroll_offset.saturating_sub(SCROLL_STEP);
        state.dirty = true;
    }
}

fn scroll_down(state: &mut AppState) {
    if let SearchPhase::Found(ref record) = state.phase {
        let max_scroll = result_card::scroll_limit(record, &state.config.ui.timestamp_format);
        state.scroll_offset = (state.scroll_offset + SCROLL_STEP).min(max_scroll);
        state.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::search::classify::SearchParam;

    fn new_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_query(state: &mut AppState, query: &str) {
        for c in query.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_dispatches_phone_search() {
        let mut state = new_state();
        type_query(&mut state, "08012345678");
        let actions = press(&mut state, KeyCode::Enter);
        match actions.as_slice() {
            [Action::Search { seq, param }] => {
                assert_eq!(*seq, 0);
                assert_eq!(*param, SearchParam::Phone("08012345678".to_string()));
            }
            other => panic!("expected one search action, got {:?}", other),
        }
        assert_eq!(state.phase, SearchPhase::Searching { seq: 0 });
        // The query stays in the box for editing.
        assert_eq!(state.input.text, "08012345678");
    }

    #[test]
    fn enter_dispatches_bvn_search() {
        let mut state = new_state();
        type_query(&mut state, "12345678901");
        let actions = press(&mut state, KeyCode::Enter);
        match actions.as_slice() {
            [Action::Search { param, .. }] => {
                assert_eq!(*param, SearchParam::Bvn("12345678901".to_string()));
            }
            other => panic!("expected one search action, got {:?}", other),
        }
    }

    #[test]
    fn invalid_query_is_rejected_without_dispatch() {
        let mut state = new_state();
        type_query(&mut state, "abc");
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert_eq!(
            state.phase,
            SearchPhase::Failed("Please enter a valid BVN (11 digits) or Phone Number".to_string())
        );
    }

    #[test]
    fn empty_submit_asks_for_a_query() {
        let mut state = new_state();
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert_eq!(
            state.phase,
            SearchPhase::Failed("Please enter a BVN or Phone Number".to_string())
        );
    }

    #[test]
    fn resubmit_supersedes_previous_search() {
        let mut state = new_state();
        type_query(&mut state, "08012345678");
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.phase, SearchPhase::Searching { seq: 1 });

        handle_event(
            &mut state,
            AppEvent::SearchCompleted {
                seq: 0,
                outcome: SearchOutcome::NotFound,
            },
        );
        assert_eq!(state.phase, SearchPhase::Searching { seq: 1 });

        handle_event(
            &mut state,
            AppEvent::SearchCompleted {
                seq: 1,
                outcome: SearchOutcome::NotFound,
            },
        );
        assert_eq!(
            state.phase,
            SearchPhase::Failed("Customer not found".to_string())
        );
    }

    #[test]
    fn esc_clears_input_and_result() {
        let mut state = new_state();
        type_query(&mut state, "oops");
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.input.text.is_empty());
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let mut state = new_state();
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }

    #[test]
    fn ticks_redraw_only_while_searching() {
        let mut state = new_state();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);

        type_query(&mut state, "08012345678");
        press(&mut state, KeyCode::Enter);
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
    }

    #[test]
    fn ctrl_u_clears_the_line() {
        let mut state = new_state();
        type_query(&mut state, "0801");
        handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('u'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(state.input.text.is_empty());
    }
}
