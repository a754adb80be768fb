//! Selection state machine for the project wizard
//!
//! The wizard walks the user through
//! name → language → app type → stack → confirm → done.
//! All session state lives in [`Wizard`] and changes only through
//! [`Wizard::handle`], which consumes one [`WizardEvent`] at a time and
//! returns an [`Effect`] for the caller to act on.

pub mod events;
pub mod state;

pub use events::{Effect, WizardEvent};
pub use state::{
    AppTypeState, Choice, ConfirmState, Cursor, DoneState, LanguageState, NameState, Phase,
    StackState, WizardState, NAME_CHAR_LIMIT,
};

use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tui_input::InputRequest;

use crate::catalog::{CatalogProvider, StarterTemplate};
use crate::materialize::{project_dir_name, MaterializeRequest};
use crate::{PrmeError, Result};

/// Outcome of handling one event within the current phase
enum Step {
    Stay,
    Goto(WizardState),
    Exit(Effect),
}

/// One wizard session
pub struct Wizard<C> {
    catalog: C,
    languages: Vec<String>,
    app_types: Vec<String>,
    working_dir: PathBuf,
    project_name: String,
    state: WizardState,
    quitting: bool,
    /// Why the last confirm was refused, cleared by the next event
    notice: Option<String>,
}

impl<C: CatalogProvider> Wizard<C> {
    /// Start a session.
    ///
    /// Languages are loaded up front and the first (language, app type) pair
    /// is looked up once, so a broken catalog fails here instead of halfway
    /// through the wizard.
    pub fn new<P: Into<PathBuf>>(catalog: C, working_dir: P) -> Result<Self> {
        let languages = catalog.list_languages()?;
        if languages.is_empty() {
            return Err(PrmeError::CatalogUnavailable(
                "catalog does not define any languages".to_string(),
            ));
        }

        let app_types = catalog.list_app_types();
        if let Some(first_app_type) = app_types.first() {
            let probe = catalog.list_templates(&languages[0], first_app_type)?;
            debug!(
                language = %languages[0],
                app_type = %first_app_type,
                templates = probe.len(),
                "Catalog probe succeeded"
            );
        }

        Ok(Self {
            catalog,
            languages,
            app_types,
            working_dir: working_dir.into(),
            project_name: String::new(),
            state: WizardState::EnteringName(NameState::default()),
            quitting: false,
            notice: None,
        })
    }

    /// Handle a single input event
    pub fn handle(&mut self, event: WizardEvent) -> Effect {
        if self.quitting {
            return Effect::None;
        }
        self.notice = None;

        let step = match event {
            WizardEvent::Quit => Step::Exit(Effect::Terminate),
            event => self.step(event),
        };

        match step {
            Step::Stay => Effect::None,
            Step::Goto(next) => {
                debug!(from = self.state.name(), to = next.name(), "Wizard transition");
                self.state = next;
                Effect::None
            }
            Step::Exit(effect) => {
                debug!(phase = self.state.name(), ?effect, "Wizard finished");
                self.quitting = true;
                effect
            }
        }
    }

    fn step(&mut self, event: WizardEvent) -> Step {
        use WizardEvent::*;

        match &mut self.state {
            WizardState::EnteringName(state) => match event {
                Edit(InputRequest::InsertChar(_))
                    if state.input.value().chars().count() >= NAME_CHAR_LIMIT =>
                {
                    Step::Stay
                }
                Edit(request) => {
                    state.input.handle(request);
                    Step::Stay
                }
                Confirm => {
                    if project_dir_name(state.input.value()).is_none() {
                        return Step::Stay;
                    }
                    self.project_name = state.input.value().trim().to_string();
                    Step::Goto(WizardState::SelectingLanguage(LanguageState::default()))
                }
                Cancel => Step::Exit(Effect::Terminate),
                _ => Step::Stay,
            },

            WizardState::SelectingLanguage(state) => match event {
                Up => {
                    state.cursor.up();
                    Step::Stay
                }
                Down => {
                    state.cursor.down(self.languages.len());
                    Step::Stay
                }
                Confirm => {
                    let index = state.cursor.index();
                    match self.languages.get(index) {
                        Some(language) => Step::Goto(WizardState::SelectingAppType(AppTypeState {
                            language: Choice::new(index, language.clone()),
                            cursor: Cursor::default(),
                        })),
                        None => Step::Stay,
                    }
                }
                Cancel => Step::Exit(Effect::Terminate),
                _ => Step::Stay,
            },

            WizardState::SelectingAppType(state) => match event {
                Up => {
                    state.cursor.up();
                    Step::Stay
                }
                Down => {
                    state.cursor.down(self.app_types.len());
                    Step::Stay
                }
                Confirm => {
                    let index = state.cursor.index();
                    let Some(app_type) = self.app_types.get(index) else {
                        return Step::Stay;
                    };
                    match resolve_stacks(&self.catalog, &state.language.value, app_type) {
                        Ok(stacks) => Step::Goto(WizardState::SelectingStack(StackState {
                            language: state.language.clone(),
                            app_type: Choice::new(index, app_type.clone()),
                            stacks,
                            cursor: Cursor::default(),
                        })),
                        Err(e) => {
                            debug!(
                                language = %state.language.value,
                                app_type = %app_type,
                                "Refusing app type selection: {}",
                                e
                            );
                            self.notice = Some(e.to_string());
                            Step::Stay
                        }
                    }
                }
                Cancel => Step::Goto(WizardState::SelectingLanguage(LanguageState {
                    cursor: Cursor::at(state.language.index),
                })),
                _ => Step::Stay,
            },

            WizardState::SelectingStack(state) => match event {
                Up => {
                    state.cursor.up();
                    Step::Stay
                }
                Down => {
                    state.cursor.down(state.stacks.len());
                    Step::Stay
                }
                Confirm => {
                    let index = state.cursor.index();
                    if index >= state.stacks.len() {
                        return Step::Stay;
                    }
                    Step::Goto(WizardState::Confirming(ConfirmState {
                        language: state.language.clone(),
                        app_type: state.app_type.clone(),
                        stacks: std::mem::take(&mut state.stacks),
                        stack: index,
                    }))
                }
                Cancel => Step::Goto(WizardState::SelectingAppType(AppTypeState {
                    language: state.language.clone(),
                    cursor: Cursor::at(state.app_type.index),
                })),
                _ => Step::Stay,
            },

            WizardState::Confirming(state) => match event {
                Yes => Step::Goto(WizardState::Done(DoneState {
                    language: state.language.clone(),
                    app_type: state.app_type.clone(),
                    stack: state.stack().clone(),
                })),
                No => Step::Goto(WizardState::SelectingLanguage(LanguageState::default())),
                Cancel => Step::Goto(WizardState::SelectingStack(StackState {
                    language: state.language.clone(),
                    app_type: state.app_type.clone(),
                    stacks: std::mem::take(&mut state.stacks),
                    cursor: Cursor::at(state.stack),
                })),
                _ => Step::Stay,
            },

            WizardState::Done(state) => match event {
                Confirm => {
                    let destination = project_destination(&self.working_dir, &self.project_name);
                    info!(
                        language = %state.language.value,
                        app_type = %state.app_type.value,
                        stack = %state.stack.name,
                        "Creating project at {}",
                        destination.display()
                    );
                    Step::Exit(Effect::TerminateAndMaterialize(MaterializeRequest {
                        source_location: state.stack.source_location.clone(),
                        destination,
                    }))
                }
                Cancel => Step::Exit(Effect::Terminate),
                _ => Step::Stay,
            },
        }
    }
}

impl<C> Wizard<C> {
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Name typed at the first step; empty until it has been confirmed
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn app_types(&self) -> &[String] {
        &self.app_types
    }

    /// Cursor of the list shown in the active phase
    pub fn cursor(&self) -> Option<usize> {
        self.state.cursor()
    }

    pub fn selected_language(&self) -> Option<&str> {
        match &self.state {
            WizardState::SelectingAppType(s) => Some(&s.language.value),
            WizardState::SelectingStack(s) => Some(&s.language.value),
            WizardState::Confirming(s) => Some(&s.language.value),
            WizardState::Done(s) => Some(&s.language.value),
            _ => None,
        }
    }

    pub fn selected_app_type(&self) -> Option<&str> {
        match &self.state {
            WizardState::SelectingStack(s) => Some(&s.app_type.value),
            WizardState::Confirming(s) => Some(&s.app_type.value),
            WizardState::Done(s) => Some(&s.app_type.value),
            _ => None,
        }
    }

    pub fn selected_stack(&self) -> Option<&StarterTemplate> {
        match &self.state {
            WizardState::Confirming(s) => Some(s.stack()),
            WizardState::Done(s) => Some(&s.stack),
            _ => None,
        }
    }

    /// Stack list fetched on the last app type confirm, while it is in use
    pub fn stack_options(&self) -> &[StarterTemplate] {
        match &self.state {
            WizardState::SelectingStack(s) => &s.stacks,
            WizardState::Confirming(s) => &s.stacks,
            _ => &[],
        }
    }

    /// Where the project will be created, once a name is set
    pub fn destination(&self) -> Option<PathBuf> {
        if self.project_name.is_empty() {
            return None;
        }
        Some(project_destination(&self.working_dir, &self.project_name))
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }
}

/// Look up stacks for a pair; an empty result counts as a failure
fn resolve_stacks<C: CatalogProvider>(
    catalog: &C,
    language: &str,
    app_type: &str,
) -> Result<Vec<StarterTemplate>> {
    let stacks = catalog.list_templates(language, app_type)?;
    if stacks.is_empty() {
        return Err(PrmeError::EmptyTemplateSet {
            language: language.to_string(),
            app_type: app_type.to_string(),
        });
    }
    Ok(stacks)
}

fn project_destination(working_dir: &Path, project_name: &str) -> PathBuf {
    match project_dir_name(project_name) {
        Some(dir_name) => working_dir.join(dir_name),
        None => working_dir.join(project_name.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AppType, CatalogDocument};
    use pretty_assertions::assert_eq;
    use tui_input::InputRequest;

    fn catalog() -> CatalogDocument {
        let mut doc = CatalogDocument::new();
        doc.add_template(
            "Go",
            AppType::Cli,
            StarterTemplate::new("basic-cli", "https://example.com/go-basic-cli"),
        );
        doc.add_template(
            "Rust",
            AppType::WebApp,
            StarterTemplate::new("axum", "https://example.com/rust-axum"),
        );
        doc
    }

    fn type_name(wizard: &mut Wizard<CatalogDocument>, name: &str) {
        for c in name.chars() {
            wizard.handle(WizardEvent::Edit(InputRequest::InsertChar(c)));
        }
    }

    #[test]
    fn test_empty_catalog_fails_to_start() {
        let err = Wizard::new(CatalogDocument::new(), "/tmp").err().unwrap();
        assert!(matches!(err, PrmeError::CatalogUnavailable(_)));
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let mut wizard = Wizard::new(catalog(), "/tmp").unwrap();
        assert_eq!(wizard.handle(WizardEvent::Confirm), Effect::None);
        type_name(&mut wizard, "   ");
        wizard.handle(WizardEvent::Confirm);
        assert_eq!(wizard.phase(), Phase::EnteringName);
        assert_eq!(wizard.project_name(), "");
    }

    #[test]
    fn test_name_editing_uses_input_requests() {
        let mut wizard = Wizard::new(catalog(), "/tmp").unwrap();
        type_name(&mut wizard, "myapx");
        wizard.handle(WizardEvent::Edit(InputRequest::DeletePrevChar));
        type_name(&mut wizard, "p");
        wizard.handle(WizardEvent::Confirm);
        assert_eq!(wizard.project_name(), "myapp");
    }

    #[test]
    fn test_name_stops_growing_at_char_limit() {
        let mut wizard = Wizard::new(catalog(), "/tmp").unwrap();
        type_name(&mut wizard, &"a".repeat(NAME_CHAR_LIMIT + 10));
        let WizardState::EnteringName(state) = wizard.state() else {
            panic!("expected name prompt");
        };
        assert_eq!(state.input.value().chars().count(), NAME_CHAR_LIMIT);

        // Deleting still works at the limit
        wizard.handle(WizardEvent::Edit(InputRequest::DeletePrevChar));
        type_name(&mut wizard, "bc");
        wizard.handle(WizardEvent::Confirm);
        assert_eq!(wizard.project_name().chars().count(), NAME_CHAR_LIMIT);
        assert!(wizard.project_name().ends_with('b'));
    }

    #[test]
    fn test_nothing_is_processed_after_quit() {
        let mut wizard = Wizard::new(catalog(), "/tmp").unwrap();
        assert_eq!(wizard.handle(WizardEvent::Quit), Effect::Terminate);
        assert!(wizard.is_quitting());

        type_name(&mut wizard, "late");
        assert_eq!(wizard.handle(WizardEvent::Confirm), Effect::None);
        assert_eq!(wizard.phase(), Phase::EnteringName);
    }

    #[test]
    fn test_notice_is_cleared_by_next_event() {
        let mut wizard = Wizard::new(catalog(), "/tmp").unwrap();
        type_name(&mut wizard, "myapp");
        wizard.handle(WizardEvent::Confirm);
        wizard.handle(WizardEvent::Confirm); // Go
        wizard.handle(WizardEvent::Confirm); // web_app has nothing for Go
        assert_eq!(wizard.phase(), Phase::SelectingAppType);
        assert!(wizard.notice().unwrap().contains("web_app"));

        wizard.handle(WizardEvent::Down);
        assert_eq!(wizard.notice(), None);
    }

    #[test]
    fn test_destination_uses_base_of_trimmed_name() {
        let mut wizard = Wizard::new(catalog(), "/work").unwrap();
        assert_eq!(wizard.destination(), None);
        type_name(&mut wizard, "  nested/myapp ");
        wizard.handle(WizardEvent::Confirm);
        assert_eq!(wizard.destination(), Some(PathBuf::from("/work/myapp")));
    }
}
