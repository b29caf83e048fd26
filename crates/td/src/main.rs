use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError, Session};
use dispatch::{NoStoreCommand, NoStoreDispatch, StoreCommand, StoreDispatch};
use todo_store::StoreError;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "TD_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                eprintln!("{}", format_error_json(&e));
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(error_exit_code(&e))
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    // Config, completions and help never open the store, and still work
    // with a broken config file
    if let Some(dispatch) = NoStoreDispatch::try_from_cli(cli) {
        let config = load_config().unwrap_or_default();
        return dispatch.execute(&CommandContext::from_cli(cli, &config));
    }

    let Some(dispatch) = StoreDispatch::from_cli(cli) else {
        return Ok(());
    };
    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, &config);
    let mut session = Session::open(cli, &config).await?;
    dispatch.execute(&ctx, &mut session).await
}

/// Installs the stderr log subscriber.
///
/// `TD_LOG` wins when set; otherwise `--verbose` means `debug`, `--quiet`
/// means `error` and the default is `warn`.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose, quiet)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn default_log_level(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Renders the `{error: {code, message}}` envelope used in JSON mode.
fn format_error_json(e: &CommandError) -> String {
    let error_json = serde_json::json!({
        "error": {
            "code": error_code(e),
            "message": e.to_string(),
        }
    });
    serde_json::to_string_pretty(&error_json).unwrap_or_else(|_| error_json.to_string())
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Store(StoreError::ListNotFound { .. }) => "LIST_NOT_FOUND",
        CommandError::Store(StoreError::ItemNotFound { .. }) => "ITEM_NOT_FOUND",
        CommandError::Store(StoreError::NotInView { .. }) => "NOT_IN_VIEW",
        CommandError::Store(StoreError::AmbiguousItem { .. }) => "AMBIGUOUS_ITEM",
        CommandError::Store(StoreError::InvalidListName { .. }) => "INVALID_LIST_NAME",
        CommandError::Store(StoreError::ProtectedList { .. }) => "PROTECTED_LIST",
        CommandError::StoreFile(_) => "STORE_FILE_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the process exit code for an error.
fn error_exit_code(e: &CommandError) -> u8 {
    match e {
        CommandError::Store(StoreError::InvalidListName { .. })
        | CommandError::Store(StoreError::ProtectedList { .. }) => 2,
        CommandError::Store(_) => 4,
        CommandError::StoreFile(_) => 5,
        CommandError::Config(_) => 5,
        CommandError::Io(_) => 3,
        CommandError::Json(_) => 1,
    }
}
