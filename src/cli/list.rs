//! `tm list` command implementation

use anyhow::Result;
use clap::Args;

use crate::store::FileStore;
use crate::task::{Task, TaskBook};

const TABLE_COL_TITLE: usize = 30;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_CATEGORY: usize = 12;
const TABLE_COL_DUE: usize = 10;
const TABLE_COL_ID_DISPLAY: usize = 8;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let store = FileStore::open_default()?;
    let user = super::require_login(&store)?;
    let tasks = TaskBook::open(&store, &user.id).load()?;

    if tasks.is_empty() {
        println!("No tasks yet. Add one with 'tm add <title>'.");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let active: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
    let completed: Vec<&Task> = tasks.iter().filter(|t| t.completed).collect();

    println!("Active ({})", active.len());
    print_table(&active);

    if !completed.is_empty() {
        println!();
        println!("Completed ({})", completed.len());
        print_table(&completed);
    }

    Ok(())
}

fn print_table(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("  (none)");
        return;
    }

    println!(
        "{:<width_title$} {:<width_pri$} {:<width_cat$} {:<width_due$} ID",
        "TITLE",
        "PRIORITY",
        "CATEGORY",
        "DUE",
        width_title = TABLE_COL_TITLE,
        width_pri = TABLE_COL_PRIORITY,
        width_cat = TABLE_COL_CATEGORY,
        width_due = TABLE_COL_DUE
    );
    println!(
        "{}",
        "-".repeat(
            TABLE_COL_TITLE + TABLE_COL_PRIORITY + TABLE_COL_CATEGORY + TABLE_COL_DUE
                + TABLE_COL_ID_DISPLAY
                + 4
        )
    );

    for task in tasks {
        let due = task.due.map(|d| d.to_string()).unwrap_or_default();
        println!(
            "{:<width_title$} {:<width_pri$} {:<width_cat$} {:<width_due$} {}",
            super::truncate(&task.title, TABLE_COL_TITLE),
            task.priority.label(),
            super::truncate(&task.category, TABLE_COL_CATEGORY),
            due,
            super::truncate_id(&task.id, TABLE_COL_ID_DISPLAY),
            width_title = TABLE_COL_TITLE,
            width_pri = TABLE_COL_PRIORITY,
            width_cat = TABLE_COL_CATEGORY,
            width_due = TABLE_COL_DUE
        );
    }
}
