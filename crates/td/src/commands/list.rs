//! List command implementation.
//!
//! Shows the live view of the working list: its items filtered by an
//! optional search expression, in precedence order.

use todo_core::SearchQuery;
use tracing::debug;

use super::{CommandContext, Result, Session};
use crate::output::{format_view_json, format_view_table};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Search expression.
    pub search: Option<String>,
}

/// Executes the list command.
pub fn execute(ctx: &CommandContext, session: &Session, opts: &ListOptions) -> Result<()> {
    let search = opts.search.as_deref().unwrap_or("");
    if ctx.verbose && !search.is_empty() {
        debug!(query = %SearchQuery::parse(search), "parsed search");
    }

    let view = session.store.view(&session.list_id, search);

    if ctx.json_output {
        let output = format_view_json(&session.list_id, session.list_name(), search, &view)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_view_table(&view, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
