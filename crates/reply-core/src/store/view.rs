//! Observable, read-only projections of the store.

use std::sync::Arc;

use tokio::sync::watch;

use crate::transaction::{Mailbox, Transaction};
use crate::{Error, Result};

/// Immutable list of transactions as published by the store.
pub type Snapshot = Arc<[Transaction]>;

/// What a [`MailboxView`] is subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKey {
    /// Every transaction in master-list order.
    All,
    /// The filtered view for one mailbox key.
    Mailbox(Mailbox),
}

/// A subscription to one of the store's published lists.
///
/// Holds the latest snapshot published by the store. Dropping the view
/// unsubscribes it.
#[derive(Debug, Clone)]
pub struct MailboxView {
    key: ViewKey,
    rx: watch::Receiver<Snapshot>,
}

impl MailboxView {
    pub(crate) const fn new(key: ViewKey, rx: watch::Receiver<Snapshot>) -> Self {
        Self { key, rx }
    }

    /// What this view is subscribed to.
    #[must_use]
    pub const fn key(&self) -> ViewKey {
        self.key
    }

    /// Mailbox key of this view, `None` for the unfiltered view.
    #[must_use]
    pub const fn mailbox(&self) -> Option<Mailbox> {
        match self.key {
            ViewKey::All => None,
            ViewKey::Mailbox(mailbox) => Some(mailbox),
        }
    }

    /// The latest published contents, without marking them as seen.
    #[must_use]
    pub fn current(&self) -> Snapshot {
        Arc::clone(&*self.rx.borrow())
    }

    /// Returns true if the store published since the view last read with
    /// [`take`](Self::take) or [`changed`](Self::changed).
    ///
    /// A view whose store has been dropped reports no change.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// The latest published contents, marking them as seen.
    pub fn take(&mut self) -> Snapshot {
        Arc::clone(&*self.rx.borrow_and_update())
    }

    /// Waits for the next publish and returns its contents.
    ///
    /// Returns immediately if a publish has not been seen yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreClosed`] once the store has been dropped.
    pub async fn changed(&mut self) -> Result<Snapshot> {
        self.rx.changed().await.map_err(|_| Error::StoreClosed)?;
        Ok(self.take())
    }

    /// Ends the subscription.
    pub fn unsubscribe(self) {
        tracing::trace!(key = ?self.key, "View unsubscribed");
    }
}
