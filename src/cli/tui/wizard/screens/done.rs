//! Completion summary

use std::path::Path;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::confirm::summary_line;
use super::render_help;
use crate::cli::tui::wizard::theme::Theme;
use crate::wizard::DoneState;

pub fn render(frame: &mut Frame, state: &DoneState, destination: Option<&Path>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Result box
            Constraint::Min(0),
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    let mut text = vec![
        Line::from(Span::styled("✓ Configuration Complete!", theme.success)),
        Line::from(""),
        summary_line("Language", &state.language.value, theme),
        summary_line("App Type", &state.app_type.value, theme),
        summary_line("Stack", &state.stack.name, theme),
    ];
    if let Some(destination) = destination {
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::raw("Press Enter to create "),
            Span::styled(destination.display().to_string(), theme.highlight),
        ]));
    }

    let result = Paragraph::new(text).block(
        Block::default()
            .title(" Done ")
            .borders(Borders::ALL)
            .border_style(theme.success),
    );
    frame.render_widget(result, chunks[0]);

    render_help(
        frame,
        chunks[2],
        &[("Enter", "create project"), ("Esc/q", "exit")],
        theme,
    );
}
