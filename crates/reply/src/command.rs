//! Shell command parsing.

use anyhow::{Context, anyhow, bail};
use reply_core::{Mailbox, ThemeMode, TransactionId};

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the transactions in a mailbox view.
    List(Mailbox),
    /// Print one transaction in full.
    Show(TransactionId),
    /// Star or unstar a transaction.
    Star(TransactionId, bool),
    /// Move a transaction to the trash.
    Delete(TransactionId),
    /// Draft a reply and save it to drafts.
    Reply(TransactionId),
    /// Save a blank draft.
    Compose,
    /// Print the folder labels.
    Folders,
    /// Print the navigation menu, optionally selecting a mailbox first.
    Nav(Option<Mailbox>),
    /// Switch to the given theme, or toggle it when `None`.
    Theme(Option<ThemeMode>),
    /// Print usage.
    Help,
    /// Leave the shell.
    Quit,
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for blank lines.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or malformed arguments.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();
        if let Some(extra) = words.next() {
            bail!("Unexpected argument '{extra}' to '{name}'");
        }

        let command = match name.to_lowercase().as_str() {
            "list" | "ls" => {
                Self::List(argument.map_or(Ok(Mailbox::Inbox), str::parse::<Mailbox>)?)
            }
            "show" => Self::Show(id(argument)?),
            "star" => Self::Star(id(argument)?, true),
            "unstar" => Self::Star(id(argument)?, false),
            "delete" | "rm" => Self::Delete(id(argument)?),
            "reply" => Self::Reply(id(argument)?),
            "compose" => Self::Compose,
            "folders" => Self::Folders,
            "nav" => Self::Nav(argument.map(str::parse::<Mailbox>).transpose()?),
            "theme" => Self::Theme(match argument {
                None | Some("toggle") => None,
                Some(theme) => Some(theme.parse::<ThemeMode>()?),
            }),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("Unknown command '{other}', type 'help' for a list"),
        };
        Ok(Some(command))
    }
}

fn id(argument: Option<&str>) -> anyhow::Result<TransactionId> {
    let raw = argument.ok_or_else(|| anyhow!("Missing transaction id"))?;
    let id = raw
        .parse::<u64>()
        .with_context(|| format!("Invalid transaction id '{raw}'"))?;
    Ok(TransactionId(id))
}

/// Usage text for the `help` command.
pub const HELP: &str = "\
Commands:
  list [mailbox]        list inbox, starred, sent, trash, spam or drafts
  show <id>             print a transaction
  star <id>             star a transaction
  unstar <id>           remove the star
  delete <id>           move a transaction to the trash
  reply <id>            draft a reply and save it to drafts
  compose               save a blank draft
  folders               print folder labels
  nav [mailbox]         print the navigation menu
  theme [light|dark]    set the theme, or toggle it
  help                  print this text
  quit                  leave";
