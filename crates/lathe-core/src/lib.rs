pub mod error;

pub use error::{LatheError, Result};
