/// Interactive project wizard implementation
pub mod app;
pub mod events;
pub mod screens;
pub mod theme;

pub use app::{App, Outcome};

use crate::catalog::CatalogProvider;
use crate::wizard::Wizard;
use crate::Result;

/// Entry point for the wizard
pub async fn run<C: CatalogProvider>(wizard: Wizard<C>) -> Result<Outcome> {
    let app = App::new(wizard);
    app.run().await
}
