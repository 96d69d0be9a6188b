//! In-memory transaction storage with observable mailbox views.

pub mod diff;
mod repository;
mod seed;
mod view;

pub use repository::{TransactionStore, matches_view};
pub use seed::FOLDERS;
pub use view::{MailboxView, Snapshot, ViewKey};
