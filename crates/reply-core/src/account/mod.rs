//! Account management module.
//!
//! Provides the participant model and the directory of known accounts.

mod directory;
mod model;

pub use directory::AccountDirectory;
pub use model::{Account, AccountId};
