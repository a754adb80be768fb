//! Project name prompt

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_help, render_title};
use crate::cli::tui::wizard::theme::Theme;
use crate::wizard::NameState;

const PLACEHOLDER: &str = "my-awesome-project";

pub fn render(frame: &mut Frame, state: &NameState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Input box
            Constraint::Min(0),
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_title(frame, chunks[0], "📝 Enter Project Name", theme);

    let width = chunks[1].width.saturating_sub(2) as usize;
    let scroll = state.input.visual_scroll(width);
    let line = if state.input.value().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, theme.muted))
    } else {
        Line::from(state.input.value())
    };

    let input = Paragraph::new(line)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).border_style(theme.border));
    frame.render_widget(input, chunks[1]);

    let cursor_x = state.input.visual_cursor().max(scroll) - scroll;
    frame.set_cursor_position((chunks[1].x + 1 + cursor_x as u16, chunks[1].y + 1));

    render_help(frame, chunks[3], &[("Enter", "continue"), ("Esc", "quit")], theme);
}
