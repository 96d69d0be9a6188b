//! Transaction (email) domain types.

mod mailbox;
mod model;

pub use mailbox::Mailbox;
pub use model::{Transaction, TransactionAttachment, TransactionId};
