//! Directory of the accounts known to the client.

use super::model::{Account, AccountId};
use crate::{Error, Result};

/// Immutable lookup table of the user's own accounts and their contacts.
///
/// The first user account is the default user account: the sender of new
/// drafts and the fallback for lookups that miss.
#[derive(Debug, Clone)]
pub struct AccountDirectory {
    user_accounts: Vec<Account>,
    contacts: Vec<Account>,
}

impl AccountDirectory {
    /// Build a directory from the user's accounts and their contacts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDirectory`] if `user_accounts` is empty.
    pub fn new(user_accounts: Vec<Account>, contacts: Vec<Account>) -> Result<Self> {
        if user_accounts.is_empty() {
            return Err(Error::EmptyDirectory);
        }
        Ok(Self {
            user_accounts,
            contacts,
        })
    }

    /// The fixed demo directory.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            user_accounts: vec![
                Account::new(1, "Jeff Hansen", "hikingfan@gmail.com", "avatar_10"),
                Account::new(2, "Jeff H", "jeffersonloveshiking@gmail.com", "avatar_2"),
                Account::new(3, "Jeff Hansen", "jeffersonc@google.com", "avatar_9"),
            ],
            contacts: vec![
                Account::new(4, "Tracy Alvarez", "tracealvie@gmail.com", "avatar_1"),
                Account::new(5, "Allison Trabucco", "atrabucco222@gmail.com", "avatar_3"),
                Account::new(6, "Ali Connors", "aliconnors@gmail.com", "avatar_5"),
                Account::new(7, "Alberto Williams", "albertowilliams124@gmail.com", "avatar_0"),
                Account::new(8, "Kim Alen", "alen13@gmail.com", "avatar_7"),
                Account::new(9, "Google Express", "express@google.com", "express"),
                Account::new(10, "Sandra Adams", "sandraadams@gmail.com", "avatar_6"),
                Account::new(11, "Trevor Hansen", "trevorhansen@gmail.com", "avatar_8"),
                Account::new(12, "Sean Holt", "sholt@gmail.com", "avatar_4"),
                Account::new(13, "Frank Hawkins", "fhawkank@gmail.com", "avatar_2"),
            ],
        }
    }

    /// The account representing the device user.
    #[must_use]
    pub fn default_user(&self) -> &Account {
        // Non-empty by construction.
        &self.user_accounts[0]
    }

    /// The user's own accounts, default first.
    #[must_use]
    pub fn user_accounts(&self) -> &[Account] {
        &self.user_accounts
    }

    /// All contact accounts in directory order.
    #[must_use]
    pub fn contacts(&self) -> &[Account] {
        &self.contacts
    }

    /// First contact with the given id.
    #[must_use]
    pub fn contact(&self, id: AccountId) -> Option<&Account> {
        self.contacts.iter().find(|account| account.id == id)
    }

    /// Contact lookup that falls back to the default user account.
    #[must_use]
    pub fn contact_or_default(&self, id: AccountId) -> &Account {
        self.contact(id).unwrap_or_else(|| self.default_user())
    }

    /// Returns true if `id` belongs to one of the user's own accounts.
    #[must_use]
    pub fn is_user_account(&self, id: AccountId) -> bool {
        self.user_accounts.iter().any(|account| account.id == id)
    }
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
