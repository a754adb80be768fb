use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::to_input_request;

use crate::wizard::{Phase, WizardEvent};

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // UI events
    Tick,
}

/// Translate a key press into a wizard event for the active phase.
///
/// While the name prompt is active, letters go to the text input, so `q`,
/// `j`, `k`, `y` and `n` only act as shortcuts on the list screens.
pub fn map_key(phase: Phase, key: KeyEvent) -> Option<WizardEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(WizardEvent::Quit);
    }

    if phase == Phase::EnteringName {
        return match key.code {
            KeyCode::Enter => Some(WizardEvent::Confirm),
            KeyCode::Esc => Some(WizardEvent::Cancel),
            _ => to_input_request(&Event::Key(key)).map(WizardEvent::Edit),
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(WizardEvent::Quit),
        KeyCode::Esc => Some(WizardEvent::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(WizardEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(WizardEvent::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(WizardEvent::Confirm),
        KeyCode::Char('y') => Some(WizardEvent::Yes),
        KeyCode::Char('n') => Some(WizardEvent::No),
        _ => None,
    }
}
