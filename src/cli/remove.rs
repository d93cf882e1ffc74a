//! `tm remove` command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use crate::store::FileStore;
use crate::task::TaskBook;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task id (or unique prefix), or exact title
    id: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub async fn run(args: RemoveArgs) -> Result<()> {
    let store = FileStore::open_default()?;
    let user = super::require_login(&store)?;
    let book = TaskBook::open(&store, &user.id);

    let tasks = book.load()?;
    let task = super::resolve_task(&args.id, &tasks)?;
    let (id, title) = (task.id.clone(), task.title.clone());

    if !args.yes {
        print!("Delete task '{}'? [y/N] ", title);
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        let response = response.trim().to_lowercase();

        if response != "y" && response != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    if book.remove(&id)? {
        println!("\u{2713} Deleted: {}", title);
    }

    Ok(())
}
