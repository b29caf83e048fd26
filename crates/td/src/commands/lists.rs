//! Lists command implementation.
//!
//! Show, create, rename and delete todo lists.

use super::{confirm_bulk_operation, CommandContext, ConfirmResult, Result, Session};
use crate::output::{format_list_json, format_lists_json, format_lists_table};

/// Executes `td lists` / `td lists list`.
pub fn execute_list(ctx: &CommandContext, session: &Session) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_lists_json(&session.store, &session.list_id)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_lists_table(&session.store, &session.list_id, ctx.use_colors)
        );
    }
    Ok(())
}

/// Executes `td lists add`.
pub async fn execute_add(ctx: &CommandContext, session: &mut Session, name: &str) -> Result<()> {
    let list = session.store.add_list(name)?.clone();
    session.save().await?;

    if ctx.json_output {
        println!("{}", format_list_json(&list, None)?);
    } else if !ctx.quiet {
        println!("Created list: {}", list.name);
    }
    Ok(())
}

/// Executes `td lists rename`.
pub async fn execute_rename(
    ctx: &CommandContext,
    session: &mut Session,
    list: &str,
    name: &str,
) -> Result<()> {
    let id = session.store.resolve_list(list)?.id.clone();
    let renamed = session.store.rename_list(&id, name)?.clone();
    session.save().await?;

    if ctx.json_output {
        println!("{}", format_list_json(&renamed, None)?);
    } else if !ctx.quiet {
        println!("Renamed list: {} -> {}", list, renamed.name);
    }
    Ok(())
}

/// Executes `td lists delete`.
pub async fn execute_delete(
    ctx: &CommandContext,
    session: &mut Session,
    list: &str,
    force: bool,
) -> Result<()> {
    let target = session.store.resolve_list(list)?.clone();
    let (count, _) = session.store.counts(&target.id);

    // Prompt only when items would go with the list.
    let items_for_confirm = if count > 0 {
        vec![(target.name.as_str(), "the list and all of its items")]
    } else {
        Vec::new()
    };
    if confirm_bulk_operation("delete", &items_for_confirm, force, ctx.quiet)?
        == ConfirmResult::Aborted
    {
        if !ctx.quiet {
            eprintln!("Aborted.");
        }
        return Ok(());
    }

    let (removed, removed_items) = session.store.remove_list(&target.id)?;
    session.save().await?;

    if ctx.json_output {
        println!("{}", format_list_json(&removed, Some(removed_items))?);
    } else if !ctx.quiet {
        println!(
            "Deleted list: {} ({} item(s) removed)",
            removed.name, removed_items
        );
    }
    Ok(())
}
