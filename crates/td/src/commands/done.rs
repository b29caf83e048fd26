//! Done and reopen command implementations.
//!
//! Sets the completion flag of one or more items. Every ID is resolved
//! before anything changes, so a bad ID leaves the store untouched.

use super::{CommandContext, Result, Session};
use crate::output::format_batch_json;
use crate::output::helpers::truncate_id;

/// Options for the done and reopen commands.
#[derive(Debug)]
pub struct CompletionOptions {
    /// Item IDs (full IDs or prefixes).
    pub item_ids: Vec<String>,
    /// `true` for done, `false` for reopen.
    pub complete: bool,
}

/// Resolves every ID, then sets the flag. Returns `(id, summary)` pairs.
pub fn set_completion(
    session: &mut Session,
    opts: &CompletionOptions,
) -> Result<Vec<(String, String)>> {
    let ids = opts
        .item_ids
        .iter()
        .map(|prefix| -> Result<String> { Ok(session.store.resolve_item(prefix)?.id.clone()) })
        .collect::<Result<Vec<String>>>()?;

    let mut changed = Vec::with_capacity(ids.len());
    for id in ids {
        let item = session.store.set_complete(&id, opts.complete)?;
        changed.push((item.id.clone(), item.summary.clone()));
    }
    Ok(changed)
}

/// Executes `td done` (`complete = true`) or `td reopen` (`complete = false`).
pub async fn execute(
    ctx: &CommandContext,
    session: &mut Session,
    opts: &CompletionOptions,
) -> Result<()> {
    let changed = set_completion(session, opts)?;
    session.save().await?;

    let (key, verb) = if opts.complete {
        ("completed", "Completed")
    } else {
        ("reopened", "Reopened")
    };

    if ctx.json_output {
        println!("{}", format_batch_json(key, &changed)?);
    } else if !ctx.quiet {
        for (id, summary) in &changed {
            println!("{}: {} ({})", verb, summary, truncate_id(id));
        }
    }

    Ok(())
}
