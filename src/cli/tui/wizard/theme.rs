use ratatui::style::{Color, Modifier, Style};

/// Consistent theme for the TUI
pub struct Theme {
    pub title: Style,
    pub highlight: Style,
    pub normal: Style,
    pub chosen: Style,
    pub description: Style,
    pub success: Style,
    pub error: Style,
    pub muted: Style,
    pub key: Style,
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Rgb(0xFF, 0x06, 0xB7))
                .add_modifier(Modifier::BOLD),
            highlight: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x3C, 0x3C, 0x3C))
                .add_modifier(Modifier::BOLD),
            normal: Style::default().fg(Color::Gray),
            chosen: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x7D, 0x56, 0xF4))
                .add_modifier(Modifier::BOLD),
            description: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            key: Style::default().fg(Color::Cyan),
            border: Style::default().fg(Color::Rgb(0x7D, 0x56, 0xF4)),
        }
    }
}

impl Theme {
    /// Marker drawn in front of a list row
    pub fn cursor_marker(highlighted: bool) -> &'static str {
        if highlighted {
            "▸"
        } else {
            " "
        }
    }

    /// Style for a list row
    pub fn row_style(&self, highlighted: bool) -> Style {
        if highlighted {
            self.highlight
        } else {
            self.normal
        }
    }
}
