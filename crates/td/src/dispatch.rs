//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split into those that never touch the store (config,
//! completions, help) and those that run against an open [`Session`].

use crate::cli::{Cli, Commands, ConfigCommands, ListsCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result, Session};

/// Trait for commands that run without opening the store.
pub trait NoStoreCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that read or change the store.
#[allow(async_fn_in_trait)]
pub trait StoreCommand {
    /// Execute the command against the open session.
    async fn execute(&self, ctx: &CommandContext, session: &mut Session) -> Result<()>;
}

/// Commands that don't need the store.
pub enum NoStoreDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> NoStoreDispatch<'a> {
    /// Try to create a no-store dispatch from the CLI command.
    /// Returns None if the command needs the store.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl NoStoreCommand for NoStoreDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("td - ordered todo lists");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that run against the store.
pub enum StoreDispatch<'a> {
    List {
        search: &'a Option<String>,
    },
    Add {
        summary: &'a str,
        after: Option<usize>,
    },
    Move {
        item_id: &'a str,
        index: usize,
        search: &'a Option<String>,
    },
    Done {
        item_ids: &'a [String],
    },
    Reopen {
        item_ids: &'a [String],
    },
    Edit {
        item_id: &'a str,
        summary: &'a str,
    },
    Delete {
        item_ids: &'a [String],
        force: bool,
    },
    Lists(&'a Option<ListsCommands>),
}

impl<'a> StoreDispatch<'a> {
    /// Create a store dispatch from the CLI command.
    /// Returns None for commands handled by [`NoStoreDispatch`].
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::List { search }) => Some(Self::List { search }),
            Some(Commands::Add { summary, after }) => Some(Self::Add {
                summary,
                after: *after,
            }),
            Some(Commands::Move {
                item_id,
                index,
                search,
            }) => Some(Self::Move {
                item_id,
                index: *index,
                search,
            }),
            Some(Commands::Done { item_ids }) => Some(Self::Done { item_ids }),
            Some(Commands::Reopen { item_ids }) => Some(Self::Reopen { item_ids }),
            Some(Commands::Edit { item_id, summary }) => Some(Self::Edit { item_id, summary }),
            Some(Commands::Delete { item_ids, force }) => Some(Self::Delete {
                item_ids,
                force: *force,
            }),
            Some(Commands::Lists { command }) => Some(Self::Lists(command)),
            // Already handled by NoStoreDispatch
            Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) | None => None,
        }
    }
}

impl StoreCommand for StoreDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, session: &mut Session) -> Result<()> {
        match self {
            Self::List { search } => {
                let opts = commands::list::ListOptions {
                    search: (*search).clone(),
                };
                commands::list::execute(ctx, session, &opts)
            }

            Self::Add { summary, after } => {
                let opts = commands::add::AddOptions {
                    summary: (*summary).to_string(),
                    after: *after,
                };
                commands::add::execute(ctx, session, &opts).await
            }

            Self::Move {
                item_id,
                index,
                search,
            } => {
                let opts = commands::move_item::MoveOptions {
                    item_id: (*item_id).to_string(),
                    index: *index,
                    search: (*search).clone(),
                };
                commands::move_item::execute(ctx, session, &opts).await
            }

            Self::Done { item_ids } => {
                let opts = commands::done::CompletionOptions {
                    item_ids: (*item_ids).to_vec(),
                    complete: true,
                };
                commands::done::execute(ctx, session, &opts).await
            }

            Self::Reopen { item_ids } => {
                let opts = commands::done::CompletionOptions {
                    item_ids: (*item_ids).to_vec(),
                    complete: false,
                };
                commands::done::execute(ctx, session, &opts).await
            }

            Self::Edit { item_id, summary } => {
                let opts = commands::edit::EditOptions {
                    item_id: (*item_id).to_string(),
                    summary: (*summary).to_string(),
                };
                commands::edit::execute(ctx, session, &opts).await
            }

            Self::Delete { item_ids, force } => {
                let opts = commands::delete::DeleteOptions {
                    item_ids: (*item_ids).to_vec(),
                    force: *force,
                };
                commands::delete::execute(ctx, session, &opts).await
            }

            Self::Lists(command) => dispatch_lists(ctx, session, command).await,
        }
    }
}

async fn dispatch_lists(
    ctx: &CommandContext,
    session: &mut Session,
    command: &Option<ListsCommands>,
) -> Result<()> {
    match command {
        Some(ListsCommands::List) | None => commands::lists::execute_list(ctx, session),
        Some(ListsCommands::Add { name }) => commands::lists::execute_add(ctx, session, name).await,
        Some(ListsCommands::Rename { list, name }) => {
            commands::lists::execute_rename(ctx, session, list, name).await
        }
        Some(ListsCommands::Delete { list, force }) => {
            commands::lists::execute_delete(ctx, session, list, *force).await
        }
    }
}
