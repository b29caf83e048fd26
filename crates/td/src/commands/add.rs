//! Add command implementation.
//!
//! Creates an item in the working list, after a given position or at the end.

use todo_core::Selection;

use super::{CommandContext, Result, Session};
use crate::output::format_item_json;
use crate::output::helpers::truncate_id;

/// Options for the add command.
#[derive(Debug)]
pub struct AddOptions {
    /// Item summary.
    pub summary: String,
    /// Position of the list the new item goes after.
    pub after: Option<usize>,
}

/// Result of adding an item.
#[derive(Debug)]
pub struct AddResult {
    pub id: String,
    pub summary: String,
    /// Position of the new item in the unfiltered view.
    pub index: usize,
}

/// Adds the item to the session's store without saving.
pub fn add_item(session: &mut Session, opts: &AddOptions) -> Result<AddResult> {
    let selection = opts.after.map_or_else(Selection::new, Selection::at);
    let list_id = session.list_id.clone();
    let item = session.store.add_item(&list_id, &opts.summary, selection)?;
    let (id, summary) = (item.id.clone(), item.summary.clone());

    let index = session
        .store
        .view(&list_id, "")
        .iter()
        .position(|i| i.id == id)
        .unwrap_or_default();

    Ok(AddResult { id, summary, index })
}

/// Executes the add command.
pub async fn execute(
    ctx: &CommandContext,
    session: &mut Session,
    opts: &AddOptions,
) -> Result<()> {
    let result = add_item(session, opts)?;
    session.save().await?;

    if ctx.json_output {
        if let Some(item) = session.store.items.iter().find(|i| i.id == result.id) {
            println!("{}", format_item_json(Some(result.index), item)?);
        }
    } else if !ctx.quiet {
        println!(
            "Added: {} ({}) at #{} in {}",
            result.summary,
            truncate_id(&result.id),
            result.index,
            session.list_name()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_store::{Store, StoreFile};

    fn session() -> Session {
        Session::with_store(StoreFile::with_path("unused.json"), Store::new())
    }

    #[test]
    fn test_add_to_end() {
        let mut session = session();
        for summary in ["one", "two"] {
            add_item(
                &mut session,
                &AddOptions {
                    summary: summary.to_string(),
                    after: None,
                },
            )
            .unwrap();
        }

        let result = add_item(
            &mut session,
            &AddOptions {
                summary: "three".to_string(),
                after: None,
            },
        )
        .unwrap();

        assert_eq!(result.index, 2);
        assert_eq!(result.summary, "three");
    }

    #[test]
    fn test_add_after_position() {
        let mut session = session();
        for summary in ["one", "two", "three"] {
            add_item(
                &mut session,
                &AddOptions {
                    summary: summary.to_string(),
                    after: None,
                },
            )
            .unwrap();
        }

        let result = add_item(
            &mut session,
            &AddOptions {
                summary: "one and a half".to_string(),
                after: Some(0),
            },
        )
        .unwrap();

        assert_eq!(result.index, 1);
        let summaries: Vec<&str> = session
            .store
            .view(&session.list_id, "")
            .iter()
            .map(|i| i.summary.as_str())
            .collect();
        assert_eq!(summaries, ["one", "one and a half", "two", "three"]);
    }
}
