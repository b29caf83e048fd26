//! Move command implementation.
//!
//! Drops an item at a new position of the working list's view. When a
//! search is given, positions count within the filtered view only and
//! hidden items keep their place.

use todo_core::Placement;

use super::{CommandContext, Result, Session};
use crate::output::format_moved_item_json;
use crate::output::helpers::truncate_id;

/// Options for the move command.
#[derive(Debug)]
pub struct MoveOptions {
    /// Item ID or unique prefix.
    pub item_id: String,
    /// Destination position.
    pub index: usize,
    /// Search the positions refer to.
    pub search: Option<String>,
}

/// Result of a move.
#[derive(Debug)]
pub struct MoveResult {
    pub id: String,
    /// Where the item ended up in the view.
    pub index: usize,
    pub placement: Placement,
}

/// Moves the item in the session's store without saving.
pub fn move_item(session: &mut Session, opts: &MoveOptions) -> Result<MoveResult> {
    let id = session.store.resolve_item(&opts.item_id)?.id.clone();
    let search = opts.search.as_deref().unwrap_or("");
    let list_id = session.list_id.clone();

    let placement = session.store.move_item(&list_id, search, &id, opts.index)?;

    let index = session
        .store
        .view(&list_id, search)
        .iter()
        .position(|i| i.id == id)
        .unwrap_or_default();

    Ok(MoveResult {
        id,
        index,
        placement,
    })
}

/// Executes the move command.
pub async fn execute(
    ctx: &CommandContext,
    session: &mut Session,
    opts: &MoveOptions,
) -> Result<()> {
    let result = move_item(session, opts)?;
    if result.placement != Placement::Unchanged {
        session.save().await?;
    }

    let Some(item) = session.store.items.iter().find(|i| i.id == result.id) else {
        return Ok(());
    };

    if ctx.json_output {
        println!(
            "{}",
            format_moved_item_json(item, result.index, result.placement)?
        );
    } else if !ctx.quiet {
        match result.placement {
            Placement::Unchanged => {
                println!(
                    "{} ({}) is already at #{}",
                    item.summary,
                    truncate_id(&item.id),
                    result.index
                );
            }
            Placement::Placed { renumbered, .. } => {
                println!(
                    "Moved: {} ({}) to #{}",
                    item.summary,
                    truncate_id(&item.id),
                    result.index
                );
                if renumbered && ctx.verbose {
                    println!("(renumbered the view to make room)");
                }
            }
        }
    }

    Ok(())
}
