//! Mailbox classification.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Where a transaction is filed, and the key used to select a view.
///
/// `Starred` only selects the view of starred transactions; it is never a
/// storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mailbox {
    /// Incoming mail.
    #[default]
    Inbox,
    /// Transactions flagged with a star, whatever their mailbox.
    Starred,
    /// Sent mail.
    Sent,
    /// Deleted mail.
    Trash,
    /// Junk mail.
    Spam,
    /// Unsent drafts.
    Drafts,
}

impl Mailbox {
    /// Every mailbox key, in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Inbox,
        Self::Starred,
        Self::Sent,
        Self::Trash,
        Self::Spam,
        Self::Drafts,
    ];

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Starred => "starred",
            Self::Sent => "sent",
            Self::Trash => "trash",
            Self::Spam => "spam",
            Self::Drafts => "drafts",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Starred => "Starred",
            Self::Sent => "Sent",
            Self::Trash => "Trash",
            Self::Spam => "Spam",
            Self::Drafts => "Drafts",
        }
    }

    /// Whether a transaction may be filed under this mailbox.
    #[must_use]
    pub const fn is_storable(&self) -> bool {
        !matches!(self, Self::Starred)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Mailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Mailbox {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mailbox| mailbox.as_str() == lower)
            .ok_or_else(|| Error::UnknownMailbox(s.to_string()))
    }
}
