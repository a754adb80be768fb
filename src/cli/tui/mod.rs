/// Terminal User Interface module for interactive commands
pub mod wizard;

use crate::catalog::CatalogProvider;
use crate::Result;

pub use wizard::Outcome;

/// Run the interactive project wizard
pub async fn run_wizard<C: CatalogProvider>(wizard: crate::wizard::Wizard<C>) -> Result<Outcome> {
    wizard::run(wizard).await
}
