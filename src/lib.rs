pub mod catalog;
pub mod cli;
pub mod error;
pub mod io;
pub mod materialize;
pub mod wizard;

pub use error::{PrmeError, Result};
