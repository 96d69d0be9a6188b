//! # reply-core
//!
//! Core logic for the `Reply` demo mail client.
//!
//! This crate provides:
//! - Domain models for accounts and transactions (email messages)
//! - **Transaction Store** - in-memory master list with observable mailbox views
//! - List diffing for incremental rendering
//! - Navigation menu model
//! - Persisted application settings (theme)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
mod error;
pub mod navigation;
pub mod settings;
pub mod store;
pub mod transaction;

pub use account::{Account, AccountDirectory, AccountId};
pub use error::{Error, Result};
pub use navigation::{NavigationItem, NavigationModel};
pub use settings::{AppSettings, ThemeMode};
pub use store::{MailboxView, Snapshot, TransactionStore, ViewKey};
pub use transaction::{Mailbox, Transaction, TransactionAttachment, TransactionId};
