//! Shell state and command execution.

use std::fmt::Write as _;
use std::path::PathBuf;

use reply_core::{
    AppSettings, Mailbox, NavigationItem, NavigationModel, Transaction, TransactionStore,
};
use tracing::info;

use crate::command::{Command, HELP};

/// Result of executing one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print before reading the next command.
    Output(String),
    /// Leave the shell.
    Quit,
}

/// Shell state: the store plus the presentation state around it.
pub struct Shell {
    store: TransactionStore,
    navigation: NavigationModel,
    settings: AppSettings,
    settings_path: PathBuf,
}

impl Shell {
    /// Create a shell over `store`.
    pub fn new(store: TransactionStore, settings: AppSettings, settings_path: PathBuf) -> Self {
        let navigation = NavigationModel::new(store.all_folders().iter().copied());
        Self {
            store,
            navigation,
            settings,
            settings_path,
        }
    }

    /// The store driven by this shell.
    #[cfg(test)]
    pub const fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Execute one command.
    pub async fn execute(&mut self, command: Command) -> anyhow::Result<Outcome> {
        let output = match command {
            Command::List(mailbox) => {
                self.navigation.select(mailbox);
                self.list(mailbox)
            }
            Command::Show(id) => show(self.store.require(id)?, &self.store),
            Command::Star(id, starred) => {
                self.store.require(id)?;
                self.store.set_starred(id, starred);
                format!("{} {id}", if starred { "Starred" } else { "Unstarred" })
            }
            Command::Delete(id) => {
                self.store.require(id)?;
                self.store.delete(id);
                format!("Moved {id} to Trash")
            }
            Command::Reply(id) => {
                let reply = self.store.create_reply_to(id).in_mailbox(Mailbox::Drafts);
                let text = show(&reply, &self.store);
                self.store.insert(reply);
                text
            }
            Command::Compose => {
                let draft = self.store.create().in_mailbox(Mailbox::Drafts);
                let id = draft.id;
                self.store.insert(draft);
                format!("Saved blank draft {id}")
            }
            Command::Folders => self.store.all_folders().join("\n"),
            Command::Nav(mailbox) => {
                if let Some(mailbox) = mailbox {
                    self.navigation.select(mailbox);
                }
                self.nav()
            }
            Command::Theme(theme) => {
                let theme = theme.unwrap_or_else(|| self.settings.theme_mode.toggle());
                let mut updated = self.settings;
                updated.theme_mode = theme;
                updated.save_to(&self.settings_path).await?;
                self.settings = updated;
                info!(theme = theme.as_str(), "Theme switched");
                format!("Theme: {}", theme.as_str())
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }

    fn list(&self, mailbox: Mailbox) -> String {
        let transactions = self.store.snapshot(mailbox);
        if transactions.is_empty() {
            return format!("{mailbox} is empty");
        }

        let mut out = String::new();
        for transaction in transactions.iter() {
            let _ = writeln!(
                out,
                "{star} {id:>20}  {sender:<18} {subject}{clip}",
                star = if transaction.is_starred { '*' } else { ' ' },
                id = transaction.id,
                sender = transaction.sender.short_name(),
                subject = transaction.subject,
                clip = if transaction.has_attachments() { " [+]" } else { "" },
            );
        }
        out.trim_end().to_string()
    }

    fn nav(&self) -> String {
        let mut out = String::new();
        for item in self.navigation.items() {
            let _ = match item {
                NavigationItem::MenuItem { title, checked, .. } => {
                    writeln!(out, "{} {title}", if *checked { '>' } else { ' ' })
                }
                NavigationItem::Divider { title } => writeln!(out, "-- {title} --"),
                NavigationItem::Folder { name } => writeln!(out, "  {name}"),
            };
        }
        out.trim_end().to_string()
    }
}

fn show(transaction: &Transaction, store: &TransactionStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Id:      {}", transaction.id);
    let _ = writeln!(out, "Mailbox: {}", transaction.mailbox);
    let _ = writeln!(out, "From:    {}", transaction.sender.display());
    let _ = writeln!(
        out,
        "To:      {}",
        transaction.recipients_preview(store.directory())
    );
    let _ = writeln!(out, "Subject: {}", transaction.subject);
    if transaction.is_starred {
        let _ = writeln!(out, "Starred");
    }
    if transaction.has_body() {
        let _ = writeln!(out, "\n{}", transaction.body);
    }
    for attachment in &transaction.attachments {
        let _ = writeln!(
            out,
            "[image {}: {}]",
            attachment.image, attachment.content_description
        );
    }
    out.trim_end().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use reply_core::{ThemeMode, TransactionId};

    fn shell(dir: &tempfile::TempDir) -> Shell {
        Shell::new(
            TransactionStore::seeded(),
            AppSettings::default(),
            dir.path().join("settings.json"),
        )
    }

    async fn output(shell: &mut Shell, line: &str) -> String {
        let command = Command::parse(line).unwrap().unwrap();
        match shell.execute(command).await.unwrap() {
            Outcome::Output(text) => text,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test]
    async fn test_list_inbox() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);
        let text = output(&mut shell, "list").await;
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("Bonjour from Paris [+]"));
    }

    #[tokio::test]
    async fn test_delete_then_list_trash() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);
        output(&mut shell, "delete 1").await;
        let text = output(&mut shell, "list trash").await;
        assert!(text.contains("Brunch this weekend?"));
        assert_eq!(shell.store().snapshot(Mailbox::Inbox).len(), 5);
    }

    #[tokio::test]
    async fn test_missing_id_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);
        let command = Command::parse("star 404").unwrap().unwrap();
        assert!(shell.execute(command).await.is_err());
        assert_eq!(shell.store().revision(), 0);
    }

    #[tokio::test]
    async fn test_reply_saves_draft() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);
        let text = output(&mut shell, "reply 1").await;
        assert!(text.contains("Subject: Brunch this weekend?"));
        assert!(text.contains("To:      Ali Connors"));
        let drafts = shell.store().snapshot(Mailbox::Drafts);
        assert_eq!(drafts.len(), 2);
        assert_ne!(drafts[1].id, TransactionId(1));
    }

    #[tokio::test]
    async fn test_theme_toggle_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);
        assert_eq!(output(&mut shell, "theme").await, "Theme: dark");
        let saved = AppSettings::load_from(&dir.path().join("settings.json"))
            .await
            .unwrap();
        assert_eq!(saved.theme_mode, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_failed_theme_save_keeps_theme() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file as parent directory makes the save fail.
        let blocker = dir.path().join("blocker");
        tokio::fs::write(&blocker, "").await.unwrap();
        let mut shell = Shell::new(
            TransactionStore::seeded(),
            AppSettings::default(),
            blocker.join("settings.json"),
        );

        let command = Command::parse("theme dark").unwrap().unwrap();
        assert!(shell.execute(command).await.is_err());
        assert_eq!(shell.settings.theme_mode, ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_nav_marks_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);
        let text = output(&mut shell, "nav sent").await;
        assert!(text.contains("> Sent"));
        assert!(text.contains("  Inbox"));
        assert!(text.contains("-- Folders --"));
    }

    #[tokio::test]
    async fn test_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);
        assert_eq!(shell.execute(Command::Quit).await.unwrap(), Outcome::Quit);
    }
}
