use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time;
use tracing::debug;

use super::events::{map_key, AppEvent};
use super::screens;
use super::theme::Theme;
use crate::catalog::CatalogProvider;
use crate::materialize::MaterializeRequest;
use crate::wizard::{Effect, Wizard, WizardState};
use crate::{PrmeError, Result};

/// How long the input reader waits before checking whether it should stop
const INPUT_POLL: Duration = Duration::from_millis(50);

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user left without creating anything
    Cancelled,
    /// The user confirmed; the project should be created
    Materialize(MaterializeRequest),
}

/// Main application struct
pub struct App<C> {
    /// The selection state machine
    wizard: Wizard<C>,
    /// Set once the wizard reports a terminal effect
    outcome: Option<Outcome>,
    /// Theme for styling
    theme: Theme,
}

impl<C: CatalogProvider> App<C> {
    /// Create a new app instance
    pub fn new(wizard: Wizard<C>) -> Self {
        Self {
            wizard,
            outcome: None,
            theme: Theme::default(),
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<Outcome> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        if let Err(e) = terminal.clear() {
            ratatui::restore();
            return Err(e.into());
        }

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        // Blocking reader; stops once the receiving side has gone away so it
        // does not swallow keystrokes meant for whatever runs afterwards.
        let reader = tokio::task::spawn_blocking(move || loop {
            if event_tx.is_closed() {
                break;
            }
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(_) => break,
            }
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    event_tx.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(width, height)) => event_tx.send(AppEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(_) => break,
            };
            if forwarded.is_err() {
                break;
            }
        });

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        drop(event_rx);
        let _ = reader.await;
        ratatui::restore();

        result?;
        Ok(self.outcome.unwrap_or(Outcome::Cancelled))
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout for redraws
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => {
                    return Err(PrmeError::Io(std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "terminal input closed unexpectedly",
                    )))
                }
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.outcome.is_some() {
                break;
            }
        }

        Ok(())
    }

    /// Render the current state
    fn render(&self, frame: &mut Frame) {
        match self.wizard.state() {
            WizardState::EnteringName(state) => {
                screens::name::render(frame, state, &self.theme);
            }
            WizardState::SelectingLanguage(_)
            | WizardState::SelectingAppType(_)
            | WizardState::SelectingStack(_) => {
                screens::selection::render(frame, &self.wizard, &self.theme);
            }
            WizardState::Confirming(state) => {
                screens::confirm::render(frame, state, &self.theme);
            }
            WizardState::Done(state) => {
                let destination = self.wizard.destination();
                screens::done::render(frame, state, destination.as_deref(), &self.theme);
            }
        }
    }

    /// Handle an event
    fn handle_event(&mut self, event: AppEvent) {
        let AppEvent::Key(key) = event else {
            return;
        };
        let Some(wizard_event) = map_key(self.wizard.phase(), key) else {
            return;
        };

        debug!(?wizard_event, phase = self.wizard.state().name(), "Key mapped");
        match self.wizard.handle(wizard_event) {
            Effect::None => {}
            Effect::Terminate => self.outcome = Some(Outcome::Cancelled),
            Effect::TerminateAndMaterialize(request) => {
                self.outcome = Some(Outcome::Materialize(request))
            }
        }
    }
}
