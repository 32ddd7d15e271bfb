use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use throbber_widgets_tui::Throbber;

const PLACEHOLDER: &str = "Enter BVN (11 digits) or Phone Number";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let searching = state.phase.is_searching();

    let block = Block::default()
        .title(" Customer Search ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if searching {
            Theme::border_active()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (input_area, spinner_area) = if searching {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(15)])
            .split(inner);
        (chunks[0], Some(chunks[1]))
    } else {
        (inner, None)
    };

    let line = if state.input.text.is_empty() {
        Line::from(vec![
            Span::styled("❯ ", Theme::prompt()),
            Span::styled(PLACEHOLDER, Theme::placeholder()),
        ])
    } else {
        Line::from(vec![
            Span::styled("❯ ", Theme::prompt()),
            Span::styled(state.input.text.as_str(), Theme::input_text()),
        ])
    };
    frame.render_widget(Paragraph::new(line), input_area);

    if let Some(spinner_area) = spinner_area {
        let spinner = Throbber::default().throbber_style(Theme::spinner());
        let line = Line::from(vec![
            spinner.to_symbol_span(&state.throbber),
            Span::styled("Searching...", Theme::searching_text()),
        ]);
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Right),
            spinner_area,
        );
    }

    // Cursor offset: padding(1) + chevron "❯ " (2 cells)
    let prompt_offset = 2u16;
    let cursor_x = inner.x + prompt_offset + state.input.cursor_col();
    let cursor_y = inner.y;
    frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
}
