use crate::app::state::*;
use crate::search::record::{CustomerRecord, CustomerStatus};
use crate::ui::theme::Theme;
use chrono::{DateTime, NaiveDateTime};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.phase {
        SearchPhase::Idle => render_idle(frame, area),
        SearchPhase::Searching { .. } => render_searching(frame, area),
        SearchPhase::Found(ref record) => render_record(frame, area, state, record),
        SearchPhase::Failed(ref message) => render_failed(frame, area, message),
    }
}

/// Number of lines the card can be scrolled down before only the last
/// line remains visible.
pub fn scroll_limit(record: &CustomerRecord, timestamp_format: &str) -> usize {
    card_lines(record, timestamp_format).len().saturating_sub(1)
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Search for a customer to see their profile here.",
            Theme::hint(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter runs the search, Esc clears, Ctrl+C quits.",
            Theme::hint(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn render_searching(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Looking up customer records...",
            Theme::hint(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn render_failed(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_error())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("✘ ", Theme::error_message()),
            Span::styled(message.to_string(), Theme::error_message()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_record(frame: &mut Frame, area: Rect, state: &AppState, record: &CustomerRecord) {
    let block = Block::default()
        .title(" Customer Profile ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = card_lines(record, &state.config.ui.timestamp_format);
    let total = lines.len();
    let available_height = inner.height as usize;

    // Compute visible range with scroll offset
    let offset = state
        .scroll_offset
        .min(total.saturating_sub(available_height));
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(available_height).collect();

    let paragraph = Paragraph::new(visible).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);

    // Scrollbar
    if total > available_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(available_height)).position(offset);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn card_lines(record: &CustomerRecord, timestamp_format: &str) -> Vec<Line<'static>> {
    let status_style = match record.status {
        CustomerStatus::Active => Theme::status_active(),
        CustomerStatus::Other(_) => Theme::status_other(),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(record.full_name(), Theme::customer_name()),
            Span::raw("  "),
            Span::styled(format!("[{}]", record.status), status_style),
        ]),
        Line::from(""),
    ];

    let fields = [
        ("BVN", record.bvn.clone()),
        ("Phone", record.phone_number.clone()),
        ("Email", record.email.clone()),
        ("Gender", record.gender.clone()),
        ("Date of Birth", record.date_of_birth.clone()),
        ("Account Type", record.account_type.clone()),
        ("Address", record.address.clone()),
        (
            "Account Opened",
            format_timestamp(&record.account_opened_at, timestamp_format),
        ),
    ];
    for (label, value) in fields {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), Theme::label()),
            Span::styled(value, Theme::value()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<width$}", "Balance", width = LABEL_WIDTH),
            Theme::label(),
        ),
        Span::styled(format_balance(&record.balance), Theme::balance()),
    ]));

    lines
}

/// "₦" plus the amount with thousands separators, e.g. ₦2,500,000.75.
fn format_balance(balance: &Decimal) -> String {
    let raw = balance.to_string();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}₦{}.{}", sign, grouped, frac),
        None => format!("{}₦{}", sign, grouped),
    }
}

/// Render a service timestamp with the configured format. Falls back to the
/// raw string when the timestamp does not parse or the format string is
/// invalid (chrono only reports a bad format while rendering).
fn format_timestamp(raw: &str, format: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let ok = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        write!(out, "{}", dt.format(format)).is_ok()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        write!(out, "{}", dt.format(format)).is_ok()
    } else {
        false
    };

    if ok {
        out
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_record() -> CustomerRecord {
        CustomerRecord {
            first_name: "Chinedu".to_string(),
            last_name: "Eze".to_string(),
            status: CustomerStatus::Active,
            bvn: "22345678901".to_string(),
            phone_number: "08012345678".to_string(),
            email: "chinedu.eze@example.com".to_string(),
            gender: "Male".to_string(),
            date_of_birth: "1988-11-02".to_string(),
            account_type: "Savings".to_string(),
            address: "14 Adeola Odeku Street, Victoria Island, Lagos".to_string(),
            account_opened_at: "2019-06-21T10:15:00Z".to_string(),
            balance: Decimal::from_str("84210.5").unwrap(),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn balance_groups_thousands() {
        let balance = Decimal::from_str("2500000.75").unwrap();
        assert_eq!(format_balance(&balance), "₦2,500,000.75");
    }

    #[test]
    fn balance_without_fraction() {
        let balance = Decimal::from_str("150000").unwrap();
        assert_eq!(format_balance(&balance), "₦150,000");
    }

    #[test]
    fn balance_below_one_thousand() {
        let balance = Decimal::from_str("999.5").unwrap();
        assert_eq!(format_balance(&balance), "₦999.5");
    }

    #[test]
    fn balance_negative() {
        let balance = Decimal::from_str("-1200.5").unwrap();
        assert_eq!(format_balance(&balance), "-₦1,200.5");
    }

    #[test]
    fn timestamp_rfc3339() {
        assert_eq!(
            format_timestamp("2021-03-15T09:30:00Z", "%-d %b %Y, %H:%M"),
            "15 Mar 2021, 09:30"
        );
    }

    #[test]
    fn timestamp_without_offset() {
        assert_eq!(
            format_timestamp("2021-03-15T09:30:00", "%-d %b %Y, %H:%M"),
            "15 Mar 2021, 09:30"
        );
    }

    #[test]
    fn timestamp_unparseable_is_left_alone() {
        assert_eq!(format_timestamp("pending", "%-d %b %Y, %H:%M"), "pending");
    }

    #[test]
    fn invalid_format_string_falls_back_to_raw() {
        assert_eq!(
            format_timestamp("2021-03-15T09:30:00Z", "%"),
            "2021-03-15T09:30:00Z"
        );
    }

    #[test]
    fn card_shows_name_status_and_balance() {
        let record = sample_record();
        let lines = card_lines(&record, "%-d %b %Y, %H:%M");

        assert!(line_text(&lines[0]).contains("Chinedu Eze"));
        assert!(line_text(&lines[0]).contains("[Active]"));

        let all: Vec<String> = lines.iter().map(line_text).collect();
        assert!(all.iter().any(|l| l.contains("22345678901")));
        assert!(all
            .iter()
            .any(|l| l.contains("Account Type") && l.contains("Savings")));
        assert!(all.iter().any(|l| l.contains("21 Jun 2019, 10:15")));
        assert!(all.iter().any(|l| l.contains("₦84,210.5")));
    }

    #[test]
    fn scroll_limit_is_one_less_than_line_count() {
        let record = sample_record();
        let lines = card_lines(&record, "%-d %b %Y, %H:%M");
        assert_eq!(scroll_limit(&record, "%-d %b %Y, %H:%M"), lines.len() - 1);
    }
}
