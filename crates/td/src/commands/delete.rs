//! Delete command implementation.
//!
//! Removes item(s) from the store after an optional confirmation.

use super::{confirm_bulk_operation, CommandContext, ConfirmResult, Result, Session};
use crate::output::format_batch_json;
use crate::output::helpers::truncate_id;

/// Options for the delete command.
#[derive(Debug)]
pub struct DeleteOptions {
    /// Item IDs (full IDs or prefixes).
    pub item_ids: Vec<String>,
    /// Skip confirmation prompt.
    pub force: bool,
}

/// Resolves every ID to `(id, summary)`, dropping duplicates.
fn resolve_all(session: &Session, ids: &[String]) -> Result<Vec<(String, String)>> {
    let mut resolved: Vec<(String, String)> = Vec::with_capacity(ids.len());
    for prefix in ids {
        let item = session.store.resolve_item(prefix)?;
        if !resolved.iter().any(|(id, _)| *id == item.id) {
            resolved.push((item.id.clone(), item.summary.clone()));
        }
    }
    Ok(resolved)
}

/// Executes the delete command.
pub async fn execute(
    ctx: &CommandContext,
    session: &mut Session,
    opts: &DeleteOptions,
) -> Result<()> {
    let resolved = resolve_all(session, &opts.item_ids)?;

    let short_ids: Vec<String> = resolved.iter().map(|(id, _)| truncate_id(id)).collect();
    let items_for_confirm: Vec<(&str, &str)> = short_ids
        .iter()
        .zip(&resolved)
        .map(|(short, (_, summary))| (short.as_str(), summary.as_str()))
        .collect();

    match confirm_bulk_operation("delete", &items_for_confirm, opts.force, ctx.quiet)? {
        ConfirmResult::Confirmed => {}
        ConfirmResult::Aborted => {
            if !ctx.quiet {
                eprintln!("Aborted.");
            }
            return Ok(());
        }
    }

    for (id, _) in &resolved {
        session.store.remove_item(id)?;
    }
    session.save().await?;

    if ctx.json_output {
        println!("{}", format_batch_json("deleted", &resolved)?);
    } else if !ctx.quiet {
        for (id, summary) in &resolved {
            println!("Deleted: {} ({})", summary, truncate_id(id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{Item, INBOX_LIST_ID};
    use todo_store::{Store, StoreFile};

    fn session() -> Session {
        let mut store = Store::new();
        store.items = vec![
            Item::new("aaa111", INBOX_LIST_ID, "Buy milk"),
            Item::new("bbb222", INBOX_LIST_ID, "Clean house"),
        ];
        Session::with_store(StoreFile::with_path("unused.json"), store)
    }

    #[test]
    fn test_resolve_all_dedupes() {
        let session = session();
        let ids = vec!["aaa".to_string(), "aaa111".to_string(), "bbb".to_string()];

        let resolved = resolve_all(&session, &ids).unwrap();

        assert_eq!(
            resolved,
            vec![
                ("aaa111".to_string(), "Buy milk".to_string()),
                ("bbb222".to_string(), "Clean house".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolve_all_fails_on_unknown() {
        let session = session();
        let ids = vec!["aaa".to_string(), "nope".to_string()];
        assert!(resolve_all(&session, &ids).is_err());
    }

    #[tokio::test]
    async fn test_delete_forced_saves_store() {
        let dir = tempfile::tempdir().unwrap();
        let file = StoreFile::with_path(dir.path().join("todos.json"));
        let mut session = Session::with_store(file.clone(), session().store);
        let ctx = CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            verbose: false,
        };
        let opts = DeleteOptions {
            item_ids: vec!["aaa".to_string()],
            force: true,
        };

        execute(&ctx, &mut session, &opts).await.unwrap();

        let reloaded = file.load().unwrap();
        assert_eq!(reloaded.items.len(), 1);
        assert_eq!(reloaded.items[0].id, "bbb222");
    }
}
