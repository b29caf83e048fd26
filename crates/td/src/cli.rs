//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the td CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// td - Todo lists with live search and drag-style reordering
#[derive(Parser, Debug)]
#[command(name = "td")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the store file (default: from config, then the XDG data dir)
    #[arg(long, global = true, env = "TD_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// List to work on, by name or ID (default: from config, then Inbox)
    #[arg(short, long, global = true, value_name = "LIST")]
    pub list: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the items of a list, optionally filtered by a search
    #[command(alias = "ls")]
    List {
        /// Search expression (e.g. "milk OR bread is:notdone")
        search: Option<String>,
    },

    /// Add a new item
    #[command(alias = "a")]
    Add {
        /// Item summary
        summary: String,

        /// Place the item after this position of the list (0-based)
        #[arg(long, value_name = "INDEX")]
        after: Option<usize>,
    },

    /// Move an item to a new position
    #[command(alias = "mv")]
    Move {
        /// Item ID (or unique prefix)
        item_id: String,

        /// Destination position (0-based) within the shown view
        index: usize,

        /// Positions refer to the view filtered by this search
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Mark item(s) as done
    #[command(alias = "d")]
    Done {
        /// Item ID(s)
        #[arg(required = true)]
        item_ids: Vec<String>,
    },

    /// Mark done item(s) as not done
    Reopen {
        /// Item ID(s)
        #[arg(required = true)]
        item_ids: Vec<String>,
    },

    /// Change an item's summary
    #[command(alias = "e")]
    Edit {
        /// Item ID (or unique prefix)
        item_id: String,

        /// New summary
        summary: String,
    },

    /// Delete item(s)
    #[command(alias = "rm")]
    Delete {
        /// Item ID(s)
        #[arg(required = true)]
        item_ids: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List and manage lists
    Lists {
        #[command(subcommand)]
        command: Option<ListsCommands>,
    },

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// List subcommands
#[derive(Subcommand, Debug)]
pub enum ListsCommands {
    /// Show all lists (default)
    List,

    /// Create a new list
    Add {
        /// List name (at most 25 characters)
        name: String,
    },

    /// Rename a list
    Rename {
        /// List name or ID
        list: String,

        /// New name
        name: String,
    },

    /// Delete a list and all of its items
    #[command(alias = "rm")]
    Delete {
        /// List name or ID
        list: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
