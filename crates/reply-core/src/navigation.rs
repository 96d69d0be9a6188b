//! Navigation menu model: mailbox destinations followed by folder labels.

use crate::transaction::Mailbox;

/// Title of the divider between mailboxes and folders.
pub const FOLDERS_TITLE: &str = "Folders";

/// One row of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationItem {
    /// A checkable mailbox destination.
    MenuItem {
        /// Mailbox key selected by this item.
        mailbox: Mailbox,
        /// Label shown for the item.
        title: &'static str,
        /// Whether this is the current destination.
        checked: bool,
    },
    /// A section header.
    Divider {
        /// Section title.
        title: String,
    },
    /// A folder label.
    Folder {
        /// Folder name.
        name: String,
    },
}

/// The ordered navigation menu with a single checked mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationModel {
    items: Vec<NavigationItem>,
}

impl NavigationModel {
    /// Builds the menu with the inbox checked.
    #[must_use]
    pub fn new<I, S>(folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<NavigationItem> = Mailbox::ALL
            .into_iter()
            .map(|mailbox| NavigationItem::MenuItem {
                mailbox,
                title: mailbox.display_name(),
                checked: mailbox == Mailbox::Inbox,
            })
            .collect();

        items.push(NavigationItem::Divider {
            title: FOLDERS_TITLE.to_string(),
        });
        items.extend(
            folders
                .into_iter()
                .map(|name| NavigationItem::Folder { name: name.into() }),
        );

        Self { items }
    }

    /// All rows in display order.
    #[must_use]
    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    /// The checked mailbox.
    #[must_use]
    pub fn selected(&self) -> Option<Mailbox> {
        self.items.iter().find_map(|item| match item {
            NavigationItem::MenuItem {
                mailbox,
                checked: true,
                ..
            } => Some(*mailbox),
            _ => None,
        })
    }

    /// Checks `mailbox` and unchecks every other menu item.
    ///
    /// Returns false if `mailbox` was already the checked item.
    pub fn select(&mut self, mailbox: Mailbox) -> bool {
        if self.selected() == Some(mailbox) {
            return false;
        }
        for item in &mut self.items {
            if let NavigationItem::MenuItem {
                mailbox: item_mailbox,
                checked,
                ..
            } = item
            {
                *checked = *item_mailbox == mailbox;
            }
        }
        true
    }
}
