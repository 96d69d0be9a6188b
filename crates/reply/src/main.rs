//! `Reply` - interactive shell over the demo mail store.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod command;
mod shell;

use anyhow::Context;
use reply_core::{AppSettings, Mailbox, TransactionStore};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command::Command;
use shell::{Outcome, Shell};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reply=info,reply_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Reply");

    let settings_path = AppSettings::default_path();
    let settings = match AppSettings::load_from(&settings_path).await {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    };

    let store = TransactionStore::seeded();

    // Report inbox changes as they are published.
    let mut inbox = store.view(Mailbox::Inbox);
    let watcher = tokio::spawn(async move {
        while let Ok(snapshot) = inbox.changed().await {
            info!(count = snapshot.len(), "Inbox updated");
        }
    });

    let mut shell = Shell::new(store, settings, settings_path);
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(b"Reply demo mail client. Type 'help' for commands.\n")
        .await?;

    loop {
        stdout.write_all(b"reply> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let result = match Command::parse(&line) {
            Ok(Some(command)) => shell.execute(command).await,
            Ok(None) => continue,
            Err(e) => Err(e),
        };

        match result {
            Ok(Outcome::Output(text)) => {
                stdout.write_all(text.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            Ok(Outcome::Quit) => break,
            Err(e) => {
                stdout.write_all(format!("Error: {e:#}\n").as_bytes()).await?;
            }
        }
    }

    // Dropping the store closes the inbox view and ends the watcher.
    drop(shell);
    watcher.await?;
    info!("Goodbye");
    Ok(())
}
