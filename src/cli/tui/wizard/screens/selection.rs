//! Language, app type and stack lists

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{option_lines, render_help, render_title};
use crate::cli::tui::wizard::theme::Theme;
use crate::wizard::{Wizard, WizardState};

const LIST_KEYS: [(&str, &str); 4] = [
    ("↑/↓", "navigate"),
    ("Enter", "select"),
    ("Esc", "back"),
    ("q", "quit"),
];

pub fn render<C>(frame: &mut Frame, wizard: &Wizard<C>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(2), // Summary of earlier choices
            Constraint::Min(3),    // Options
            Constraint::Length(3), // Description / notice
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    match wizard.state() {
        WizardState::SelectingLanguage(state) => {
            render_title(frame, chunks[0], "🚀 Select a Programming Language", theme);
            let lines = option_lines(wizard.languages(), state.cursor.index(), theme);
            frame.render_widget(Paragraph::new(lines), chunks[2]);
            // Nothing to go back to from the first list
            render_help(
                frame,
                chunks[4],
                &[LIST_KEYS[0], LIST_KEYS[1], ("Esc", "quit"), LIST_KEYS[3]],
                theme,
            );
        }
        WizardState::SelectingAppType(state) => {
            render_title(frame, chunks[0], "📱 Select Application Type", theme);
            render_summary(frame, chunks[1], &[("Language", state.language.value.as_str())], theme);
            let lines = option_lines(wizard.app_types(), state.cursor.index(), theme);
            frame.render_widget(Paragraph::new(lines), chunks[2]);
            render_help(frame, chunks[4], &LIST_KEYS, theme);
        }
        WizardState::SelectingStack(state) => {
            render_title(frame, chunks[0], "🎨 Select Stack Type", theme);
            render_summary(
                frame,
                chunks[1],
                &[
                    ("Language", state.language.value.as_str()),
                    ("App Type", state.app_type.value.as_str()),
                ],
                theme,
            );
            let names: Vec<String> = state.stacks.iter().map(|s| s.name.clone()).collect();
            let lines = option_lines(&names, state.cursor.index(), theme);
            frame.render_widget(Paragraph::new(lines), chunks[2]);

            if let Some(description) = state
                .stacks
                .get(state.cursor.index())
                .and_then(|stack| stack.description.as_deref())
            {
                let paragraph = Paragraph::new(Line::from(Span::styled(
                    format!("   {}", description),
                    theme.description,
                )))
                .wrap(Wrap { trim: false });
                frame.render_widget(paragraph, chunks[3]);
            }
            render_help(frame, chunks[4], &LIST_KEYS, theme);
        }
        _ => {}
    }

    if let Some(notice) = wizard.notice() {
        let paragraph =
            Paragraph::new(Line::from(Span::styled(format!(" ✗ {}", notice), theme.error)))
                .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, chunks[3]);
    }
}

fn render_summary(frame: &mut Frame, area: Rect, choices: &[(&str, &str)], theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (label, value)) in choices.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.muted));
        }
        spans.push(Span::styled(format!("{}: ", label), theme.normal));
        spans.push(Span::styled(format!(" {} ", value), theme.chosen));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
