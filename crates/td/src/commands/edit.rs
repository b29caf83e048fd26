//! Edit command implementation.

use super::{CommandContext, Result, Session};
use crate::output::format_item_json;
use crate::output::helpers::truncate_id;

/// Options for the edit command.
#[derive(Debug)]
pub struct EditOptions {
    /// Item ID or unique prefix.
    pub item_id: String,
    /// New summary.
    pub summary: String,
}

/// Executes the edit command.
pub async fn execute(
    ctx: &CommandContext,
    session: &mut Session,
    opts: &EditOptions,
) -> Result<()> {
    let id = session.store.resolve_item(&opts.item_id)?.id.clone();
    session.store.set_summary(&id, &opts.summary)?;
    session.save().await?;

    let Some(item) = session.store.items.iter().find(|i| i.id == id) else {
        return Ok(());
    };

    if ctx.json_output {
        println!("{}", format_item_json(None, item)?);
    } else if !ctx.quiet {
        println!("Updated: {} ({})", item.summary, truncate_id(&item.id));
    }

    Ok(())
}
