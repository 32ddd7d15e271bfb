use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(" bank-insight ", Theme::status_bar_accent()));

    // Lookup service endpoint
    parts.push(Span::styled(
        format!(" {} ", state.config.service.base_url),
        Theme::status_bar(),
    ));

    // Key hints
    parts.push(Span::styled(
        " Enter search | Esc clear | PgUp/PgDn scroll | Ctrl+C quit ",
        Theme::status_bar(),
    ));

    // Phase indicator
    let phase_label = format!(" [{}] ", state.phase.label());

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + phase_label.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(phase_label, Theme::status_bar_accent()));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
