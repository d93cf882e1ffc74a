//! `tm done` command implementation

use anyhow::Result;
use clap::Args;

use crate::store::FileStore;
use crate::task::TaskBook;

#[derive(Args)]
pub struct DoneArgs {
    /// Task id (or unique prefix), or exact title
    id: String,
}

pub async fn run(args: DoneArgs) -> Result<()> {
    let store = FileStore::open_default()?;
    let user = super::require_login(&store)?;
    let book = TaskBook::open(&store, &user.id);

    let tasks = book.load()?;
    let id = super::resolve_task(&args.id, &tasks)?.id.clone();

    if let Some(task) = book.toggle(&id)? {
        if task.completed {
            println!("\u{2713} Completed: {}", task.title);
        } else {
            println!("\u{21A9} Reopened: {}", task.title);
        }
    }

    Ok(())
}
