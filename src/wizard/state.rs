use tui_input::Input;

use crate::catalog::StarterTemplate;

/// Main state machine for the wizard.
///
/// Each variant carries only what is meaningful in that phase plus the
/// choices already made, so a cursor or a selection can never be read
/// outside the phase it belongs to.
#[derive(Debug, Clone)]
pub enum WizardState {
    EnteringName(NameState),
    SelectingLanguage(LanguageState),
    SelectingAppType(AppTypeState),
    SelectingStack(StackState),
    Confirming(ConfirmState),
    Done(DoneState),
}

/// Fieldless tag for the active phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    EnteringName,
    SelectingLanguage,
    SelectingAppType,
    SelectingStack,
    Confirming,
    Done,
}

/// Longest project name the prompt accepts, in characters
pub const NAME_CHAR_LIMIT: usize = 156;

/// State for the project name prompt
#[derive(Debug, Clone, Default)]
pub struct NameState {
    pub input: Input,
}

/// State for language selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageState {
    pub cursor: Cursor,
}

/// State for app type selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTypeState {
    pub language: Choice,
    pub cursor: Cursor,
}

/// State for starter stack selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackState {
    pub language: Choice,
    pub app_type: Choice,
    pub stacks: Vec<StarterTemplate>,
    pub cursor: Cursor,
}

/// State for the final yes/no confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub language: Choice,
    pub app_type: Choice,
    /// Kept so that backing out returns to the same list
    pub stacks: Vec<StarterTemplate>,
    pub stack: usize,
}

impl ConfirmState {
    pub fn stack(&self) -> &StarterTemplate {
        &self.stacks[self.stack]
    }
}

/// State once everything is confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoneState {
    pub language: Choice,
    pub app_type: Choice,
    pub stack: StarterTemplate,
}

/// A confirmed selection and the row it was picked from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub index: usize,
    pub value: String,
}

impl Choice {
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

/// Highlighted row in a list.
///
/// Moves one step at a time and stops at either end; there is no
/// wraparound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor(usize);

impl Cursor {
    pub fn at(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn up(&mut self) {
        if self.0 > 0 {
            self.0 -= 1;
        }
    }

    pub fn down(&mut self, len: usize) {
        if self.0 + 1 < len {
            self.0 += 1;
        }
    }
}

impl WizardState {
    /// Get the phase tag of the current state
    pub fn phase(&self) -> Phase {
        match self {
            WizardState::EnteringName(_) => Phase::EnteringName,
            WizardState::SelectingLanguage(_) => Phase::SelectingLanguage,
            WizardState::SelectingAppType(_) => Phase::SelectingAppType,
            WizardState::SelectingStack(_) => Phase::SelectingStack,
            WizardState::Confirming(_) => Phase::Confirming,
            WizardState::Done(_) => Phase::Done,
        }
    }

    /// Get the name of the current state
    pub fn name(&self) -> &'static str {
        self.phase().name()
    }

    /// Cursor of the active list, if the phase has one
    pub fn cursor(&self) -> Option<usize> {
        match self {
            WizardState::SelectingLanguage(s) => Some(s.cursor.index()),
            WizardState::SelectingAppType(s) => Some(s.cursor.index()),
            WizardState::SelectingStack(s) => Some(s.cursor.index()),
            _ => None,
        }
    }
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::EnteringName => "Project Name",
            Phase::SelectingLanguage => "Language",
            Phase::SelectingAppType => "App Type",
            Phase::SelectingStack => "Stack",
            Phase::Confirming => "Confirm",
            Phase::Done => "Done",
        }
    }
}
