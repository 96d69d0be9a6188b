//! Transaction (email message) data model.

use serde::{Deserialize, Serialize};

use super::mailbox::Mailbox;
use crate::account::{Account, AccountDirectory};

/// Unique identifier for a transaction.
///
/// Seed data uses small sequential values; records created at runtime use a
/// nanosecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionId(pub u64);

impl TransactionId {
    /// Create a new transaction ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An image attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAttachment {
    /// Image resource reference.
    pub image: String,
    /// Accessible description of the image.
    pub content_description: String,
}

impl TransactionAttachment {
    /// Creates a new attachment.
    #[must_use]
    pub fn new(image: impl Into<String>, content_description: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            content_description: content_description.into(),
        }
    }
}

/// A single email message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier, expected but not guaranteed to be unique.
    pub id: TransactionId,
    /// Who sent it.
    pub sender: Account,
    /// Who it was sent to, in order.
    pub recipients: Vec<Account>,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Attached images, in order.
    pub attachments: Vec<TransactionAttachment>,
    /// Flagged with a star.
    pub is_starred: bool,
    /// Marked as important.
    pub is_important: bool,
    /// Where the transaction is filed.
    pub mailbox: Mailbox,
}

impl Transaction {
    /// Creates a transaction with default values for everything but id and sender.
    #[must_use]
    pub const fn new(id: TransactionId, sender: Account) -> Self {
        Self {
            id,
            sender,
            recipients: Vec::new(),
            subject: String::new(),
            body: String::new(),
            attachments: Vec::new(),
            is_starred: false,
            is_important: false,
            mailbox: Mailbox::Inbox,
        }
    }

    /// Sets the recipients.
    #[must_use]
    pub fn with_recipients(mut self, recipients: Vec<Account>) -> Self {
        self.recipients = recipients;
        self
    }

    /// Sets the subject and body.
    #[must_use]
    pub fn with_content(mut self, subject: impl Into<String>, body: impl Into<String>) -> Self {
        self.subject = subject.into();
        self.body = body.into();
        self
    }

    /// Sets the attachments.
    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<TransactionAttachment>) -> Self {
        self.attachments = attachments;
        self
    }

    /// Sets the starred flag.
    #[must_use]
    pub fn starred(mut self, is_starred: bool) -> Self {
        self.is_starred = is_starred;
        self
    }

    /// Files the transaction under `mailbox`.
    ///
    /// Non-storable mailboxes are ignored, leaving the current one in place.
    #[must_use]
    pub fn in_mailbox(mut self, mailbox: Mailbox) -> Self {
        self.move_to(mailbox);
        self
    }

    /// Moves the transaction to `mailbox`.
    ///
    /// Returns false, changing nothing, if `mailbox` is not storable.
    pub fn move_to(&mut self, mailbox: Mailbox) -> bool {
        if !mailbox.is_storable() {
            tracing::warn!(id = %self.id, %mailbox, "Refusing to file transaction under view-only mailbox");
            return false;
        }
        self.mailbox = mailbox;
        true
    }

    /// Returns true if the body has any text.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// Returns true if there is at least one attachment.
    #[must_use]
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Comma-separated names of the recipients other than the user's own accounts.
    ///
    /// Returns "me" when the user is the only recipient.
    #[must_use]
    pub fn recipients_preview(&self, directory: &AccountDirectory) -> String {
        let names: Vec<&str> = self
            .recipients
            .iter()
            .filter(|account| !directory.is_user_account(account.id))
            .map(Account::short_name)
            .collect();

        if names.is_empty() {
            "me".to_string()
        } else {
            names.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountId;

    fn sample(directory: &AccountDirectory) -> Transaction {
        Transaction::new(
            TransactionId(1),
            directory.contact_or_default(AccountId(6)).clone(),
        )
    }

    #[test]
    fn test_new_uses_defaults() {
        let directory = AccountDirectory::seeded();
        let transaction = sample(&directory);
        assert!(transaction.recipients.is_empty());
        assert!(transaction.subject.is_empty());
        assert!(!transaction.has_body());
        assert!(!transaction.has_attachments());
        assert!(!transaction.is_starred);
        assert!(!transaction.is_important);
        assert_eq!(transaction.mailbox, Mailbox::Inbox);
    }

    #[test]
    fn test_move_to_rejects_starred() {
        let directory = AccountDirectory::seeded();
        let mut transaction = sample(&directory).in_mailbox(Mailbox::Sent);
        assert!(!transaction.move_to(Mailbox::Starred));
        assert_eq!(transaction.mailbox, Mailbox::Sent);
        assert!(transaction.move_to(Mailbox::Trash));
        assert_eq!(transaction.mailbox, Mailbox::Trash);
    }

    #[test]
    fn test_recipients_preview_skips_user_accounts() {
        let directory = AccountDirectory::seeded();
        let transaction = sample(&directory).with_recipients(vec![
            directory.default_user().clone(),
            directory.contact_or_default(AccountId(8)).clone(),
            directory.contact_or_default(AccountId(5)).clone(),
        ]);
        assert_eq!(
            transaction.recipients_preview(&directory),
            "Kim Alen, Allison Trabucco"
        );
    }

    #[test]
    fn test_recipients_preview_only_me() {
        let directory = AccountDirectory::seeded();
        let transaction =
            sample(&directory).with_recipients(vec![directory.default_user().clone()]);
        assert_eq!(transaction.recipients_preview(&directory), "me");
    }

    #[test]
    fn test_whitespace_body_is_empty() {
        let directory = AccountDirectory::seeded();
        let transaction = sample(&directory).with_content("Hi", "  \n ");
        assert!(!transaction.has_body());
    }
}
