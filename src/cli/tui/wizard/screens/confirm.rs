//! Final confirmation box

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::{render_help, render_title};
use crate::cli::tui::wizard::theme::Theme;
use crate::wizard::ConfirmState;

pub fn render(frame: &mut Frame, state: &ConfirmState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(9), // Confirmation box
            Constraint::Min(0),
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_title(frame, chunks[0], "✓ Confirm Your Selections", theme);

    let text = vec![
        summary_line("Language", &state.language.value, theme),
        summary_line("App Type", &state.app_type.value, theme),
        summary_line("Stack", &state.stack().name, theme),
        Line::from(""),
        Line::from("Do you want to proceed with these selections?"),
    ];

    let area = Rect {
        width: chunks[1].width.min(60),
        ..chunks[1]
    };
    let confirm_box = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .padding(Padding::new(2, 2, 1, 1)),
    );
    frame.render_widget(confirm_box, area);

    render_help(
        frame,
        chunks[3],
        &[("y", "yes"), ("n", "restart"), ("Esc", "back"), ("q", "quit")],
        theme,
    );
}

pub(super) fn summary_line<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::raw(format!("{:<10}", format!("{}:", label))),
        Span::styled(value, theme.success),
    ])
}
