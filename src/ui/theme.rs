use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn banner() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn prompt() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn spinner() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn searching_text() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn value() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn customer_name() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn status_active() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn status_other() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn balance() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_bar_accent() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
