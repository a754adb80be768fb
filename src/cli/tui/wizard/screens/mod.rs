/// Screen modules for the wizard
pub mod confirm;
pub mod done;
pub mod name;
pub mod selection;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;

/// Title line shared by every screen
pub fn render_title(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let line = Line::from(Span::styled(format!(" {} ", title), theme.title));
    frame.render_widget(Paragraph::new(line), area);
}

/// Help bar listing key bindings as (key, action) pairs
pub fn render_help(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  •  ", theme.muted));
        }
        spans.push(Span::styled(*key, theme.key));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// One line per option, the highlighted one marked and styled
pub fn option_lines(options: &[String], cursor: usize, theme: &Theme) -> Vec<Line<'static>> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let highlighted = i == cursor;
            Line::from(vec![
                Span::raw(format!("{} ", Theme::cursor_marker(highlighted))),
                Span::styled(format!(" {} ", option), theme.row_style(highlighted)),
            ])
        })
        .collect()
}
