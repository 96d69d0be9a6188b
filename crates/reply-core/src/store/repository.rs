//! The in-memory transaction store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, trace, warn};

use super::seed;
use super::view::{MailboxView, Snapshot, ViewKey};
use crate::account::AccountDirectory;
use crate::transaction::{Mailbox, Transaction, TransactionId};
use crate::{Error, Result};

/// Single source of truth for all transactions.
///
/// Owns one ordered master list and publishes it, together with one filtered
/// list per [`Mailbox`] key, to any number of [`MailboxView`] subscribers.
/// Every mutation applies once and then publishes once, synchronously, so
/// subscribers see the new state before the mutating call returns.
#[derive(Debug)]
pub struct TransactionStore {
    directory: AccountDirectory,
    transactions: Vec<Transaction>,
    all: watch::Sender<Snapshot>,
    views: [watch::Sender<Snapshot>; Mailbox::ALL.len()],
    revision: u64,
    last_id: AtomicU64,
}

impl TransactionStore {
    /// Create a store holding `transactions` in the given order.
    ///
    /// Transactions filed under a non-storable mailbox are refiled to the inbox.
    #[must_use]
    pub fn new(directory: AccountDirectory, mut transactions: Vec<Transaction>) -> Self {
        transactions.iter_mut().for_each(refile_unstorable);
        let empty: Snapshot = Arc::from(Vec::new());
        let store = Self {
            directory,
            transactions,
            all: watch::Sender::new(Arc::clone(&empty)),
            views: std::array::from_fn(|_| watch::Sender::new(Arc::clone(&empty))),
            revision: 0,
            last_id: AtomicU64::new(0),
        };
        store.fill_views();
        store
    }

    /// Create a store over the demo directory and seed transactions.
    #[must_use]
    pub fn seeded() -> Self {
        let directory = AccountDirectory::seeded();
        let transactions = seed::transactions(&directory);
        Self::new(directory, transactions)
    }

    /// The accounts this store resolves senders against.
    #[must_use]
    pub const fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// Number of publishes since construction.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of records in the master list, whatever their mailbox.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if the master list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Subscribe to the view selected by `mailbox`.
    ///
    /// `Mailbox::Starred` selects every starred transaction regardless of the
    /// mailbox it is filed under; every other key selects its own mailbox.
    #[must_use]
    pub fn view(&self, mailbox: Mailbox) -> MailboxView {
        MailboxView::new(
            ViewKey::Mailbox(mailbox),
            self.views[mailbox.index()].subscribe(),
        )
    }

    /// Subscribe to the unfiltered master list.
    #[must_use]
    pub fn subscribe_all(&self) -> MailboxView {
        MailboxView::new(ViewKey::All, self.all.subscribe())
    }

    /// Current contents of the view selected by `mailbox`, without subscribing.
    #[must_use]
    pub fn snapshot(&self, mailbox: Mailbox) -> Snapshot {
        Arc::clone(&*self.views[mailbox.index()].borrow())
    }

    /// Get the first transaction with the given id, in master-list order.
    #[must_use]
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Get the transaction with the given id, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransactionNotFound`] if no transaction has this id.
    pub fn require(&self, id: TransactionId) -> Result<&Transaction> {
        self.get(id).ok_or(Error::TransactionNotFound(id))
    }

    /// Create a blank transaction sent by the default user account.
    ///
    /// The transaction is not added to the store; see [`insert`](Self::insert).
    #[must_use]
    pub fn create(&self) -> Transaction {
        Transaction::new(self.next_id(), self.directory.default_user().clone())
    }

    /// Create a reply to the transaction with the given id.
    ///
    /// The reply is sent by the original's first recipient (or the default
    /// user account) to the original sender followed by all original
    /// recipients. Subject and flags are copied unchanged. Falls back to
    /// [`create`](Self::create) if `reply_to` does not exist. The reply is not
    /// added to the store.
    #[must_use]
    pub fn create_reply_to(&self, reply_to: TransactionId) -> Transaction {
        let Some(original) = self.get(reply_to) else {
            debug!(id = %reply_to, "Reply target not found, creating blank transaction");
            return self.create();
        };

        let sender = original
            .recipients
            .first()
            .unwrap_or_else(|| self.directory.default_user())
            .clone();
        let mut recipients = Vec::with_capacity(original.recipients.len() + 1);
        recipients.push(original.sender.clone());
        recipients.extend(original.recipients.iter().cloned());

        let mut reply = Transaction::new(self.next_id(), sender).with_recipients(recipients);
        reply.subject.clone_from(&original.subject);
        reply.is_starred = original.is_starred;
        reply.is_important = original.is_important;
        reply
    }

    /// Append a transaction to the master list and publish.
    ///
    /// A transaction filed under a non-storable mailbox is refiled to the inbox.
    pub fn insert(&mut self, mut transaction: Transaction) {
        refile_unstorable(&mut transaction);
        debug!(id = %transaction.id, mailbox = %transaction.mailbox, "Inserting transaction");
        self.transactions.push(transaction);
        self.publish();
    }

    /// Apply `mutate` to the first transaction with the given id, then publish.
    ///
    /// Does nothing, and publishes nothing, if no transaction has this id.
    /// If `mutate` files the transaction under a non-storable mailbox, the
    /// previous mailbox is restored. Returns whether a transaction was updated.
    pub fn update<F>(&mut self, id: TransactionId, mutate: F) -> bool
    where
        F: FnOnce(&mut Transaction),
    {
        let Some(transaction) = self.transactions.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "Update target not found, ignoring");
            return false;
        };
        let previous = transaction.mailbox;
        mutate(transaction);
        if !transaction.mailbox.is_storable() {
            warn!(
                %id,
                mailbox = %transaction.mailbox,
                restored = %previous,
                "Update filed transaction under view-only mailbox, restoring"
            );
            transaction.mailbox = previous;
        }
        self.publish();
        true
    }

    /// Move the transaction with the given id to the trash.
    ///
    /// The record is kept; it only changes mailbox.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        self.update(id, |t| {
            t.move_to(Mailbox::Trash);
        })
    }

    /// Star or unstar the transaction with the given id.
    pub fn set_starred(&mut self, id: TransactionId, is_starred: bool) -> bool {
        self.update(id, |t| t.is_starred = is_starred)
    }

    /// Folder labels for the navigation menu.
    ///
    /// Purely decorative: transactions carry no folder assignment.
    #[must_use]
    #[allow(clippy::unused_self)] // Kept on the store alongside the other queries
    pub const fn all_folders(&self) -> &'static [&'static str] {
        &seed::FOLDERS
    }

    /// Republish the master list and recompute every filtered view.
    fn publish(&mut self) {
        self.revision += 1;
        self.fill_views();
        debug!(
            revision = self.revision,
            transactions = self.transactions.len(),
            "Published transactions"
        );
    }

    fn fill_views(&self) {
        self.all.send_replace(Arc::from(self.transactions.as_slice()));
        for mailbox in Mailbox::ALL {
            let filtered: Vec<Transaction> = self
                .transactions
                .iter()
                .filter(|t| matches_view(t, mailbox))
                .cloned()
                .collect();
            trace!(%mailbox, count = filtered.len(), "Recomputed view");
            self.views[mailbox.index()].send_replace(Arc::from(filtered));
        }
    }

    /// A high-resolution timestamp, bumped to stay ahead of the last id issued.
    fn next_id(&self) -> TransactionId {
        let now = Utc::now();
        #[allow(clippy::cast_sign_loss)]
        let stamp = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros())
            .max(0) as u64;
        let previous = self.last_id.fetch_max(stamp, Ordering::Relaxed);
        let id = if stamp > previous {
            stamp
        } else {
            // Same or earlier tick: take the next free value.
            self.last_id.fetch_add(1, Ordering::Relaxed) + 1
        };
        TransactionId(id)
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn refile_unstorable(transaction: &mut Transaction) {
    if !transaction.mailbox.is_storable() {
        warn!(
            id = %transaction.id,
            mailbox = %transaction.mailbox,
            "Transaction filed under view-only mailbox, moving to inbox"
        );
        transaction.mailbox = Mailbox::Inbox;
    }
}

/// Whether `transaction` belongs in the view selected by `mailbox`.
#[must_use]
pub fn matches_view(transaction: &Transaction, mailbox: Mailbox) -> bool {
    match mailbox {
        Mailbox::Starred => transaction.is_starred,
        other => transaction.mailbox == other,
    }
}
