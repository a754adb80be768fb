use tui_input::InputRequest;

/// Input understood by the wizard, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// Edit the project name buffer
    Edit(InputRequest),
    Up,
    Down,
    /// Accept the highlighted option (or the typed name)
    Confirm,
    /// Step back one phase, or leave from the first steps
    Cancel,
    /// Answer "yes" at the confirmation step
    Yes,
    /// Answer "no" at the confirmation step and start selection over
    No,
    /// Leave immediately from any phase
    Quit,
}

/// What the caller should do after an event has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Terminate,
    TerminateAndMaterialize(crate::materialize::MaterializeRequest),
}
