//! Command implementations for the td CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod lists;
pub mod move_item;

use std::io::IsTerminal;
use std::path::PathBuf;

use dialoguer::Confirm;
use todo_core::{ReorderConfig, INBOX_LIST_ID};
use todo_store::{Store, StoreError, StoreFile, StoreFileError};
use tracing::debug;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A list or item could not be resolved or changed.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The store file could not be read or written.
    #[error("store file error: {0}")]
    StoreFile(#[from] StoreFileError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// Colors are on unless `--no-color` is passed or `output.color = false`.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// The open store plus the list the invocation works on.
pub struct Session {
    file: StoreFile,
    /// The loaded store.
    pub store: Store,
    /// ID of the list selected with `--list` or `default_list`.
    pub list_id: String,
}

impl Session {
    /// Loads the store and resolves the working list.
    ///
    /// The store path comes from `--store` (or `TD_STORE`), then the config's
    /// `store.path`, then the XDG data directory.
    pub async fn open(cli: &Cli, config: &Config) -> Result<Self> {
        let file = match store_path(cli, config) {
            Some(path) => StoreFile::with_path(path),
            None => StoreFile::new()?,
        };
        debug!(path = %file.path().display(), "opening store");

        let store = file
            .load_or_default_async()
            .await?
            .with_ordering(ordering(config));

        let list_name = cli
            .list
            .as_deref()
            .or(config.default_list.as_deref())
            .unwrap_or(INBOX_LIST_ID);
        let list_id = store.resolve_list(list_name)?.id.clone();

        Ok(Self {
            file,
            store,
            list_id,
        })
    }

    /// Builds a session around an already loaded store.
    #[cfg(test)]
    pub fn with_store(file: StoreFile, store: Store) -> Self {
        Self {
            file,
            store,
            list_id: INBOX_LIST_ID.to_string(),
        }
    }

    /// Name of the working list, for display.
    pub fn list_name(&self) -> &str {
        self.store
            .lists
            .iter()
            .find(|l| l.id == self.list_id)
            .map_or(self.list_id.as_str(), |l| l.name.as_str())
    }

    /// Writes the store back to disk.
    pub async fn save(&mut self) -> Result<()> {
        self.file.save_async(&mut self.store).await?;
        Ok(())
    }
}

fn store_path(cli: &Cli, config: &Config) -> Option<PathBuf> {
    cli.store
        .clone()
        .or_else(|| config.store.path.as_ref().map(PathBuf::from))
}

fn ordering(config: &Config) -> ReorderConfig {
    let defaults = ReorderConfig::default();
    ReorderConfig::new(
        config.ordering.step.unwrap_or(defaults.step()),
        config.ordering.min_gap.unwrap_or(defaults.min_gap()),
    )
}

/// Outcome of a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Aborted,
}

/// Asks before a destructive operation touching `items` (`(id, summary)` pairs).
///
/// Skipped when `force` or `quiet` is set, or when stdin is not a terminal.
pub fn confirm_bulk_operation(
    action: &str,
    items: &[(&str, &str)],
    force: bool,
    quiet: bool,
) -> Result<ConfirmResult> {
    if force || quiet || items.is_empty() || !std::io::stdin().is_terminal() {
        return Ok(ConfirmResult::Confirmed);
    }

    eprintln!("About to {} {} item(s):", action, items.len());
    for (id, summary) in items {
        eprintln!("  {id}  {summary}");
    }

    let confirmed = Confirm::new()
        .with_prompt("Continue?")
        .default(false)
        .interact()
        .map_err(|e| CommandError::Io(std::io::Error::other(e)))?;

    Ok(if confirmed {
        ConfirmResult::Confirmed
    } else {
        ConfirmResult::Aborted
    })
}
