//! `tm add` command implementation

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use clap::Args;
use std::io::{self, Write};
use std::time::Duration;

use crate::advisor::{self, Suggestion};
use crate::config::Config;
use crate::notify::{self, TerminalNotifier};
use crate::store::FileStore;
use crate::task::{Priority, Task, TaskBook};

/// Fixed think-time before the suggestion is surfaced. Once started it
/// always completes; there is no abort path.
const ANALYSIS_DELAY: Duration = Duration::from_millis(1200);

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Longer description
    #[arg(short = 'd', long)]
    description: Option<String>,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<NaiveDate>,

    /// Accept the suggestion without prompting
    #[arg(short = 'y', long)]
    yes: bool,

    /// Skip analysis and set priority/category yourself
    #[arg(long)]
    no_analyze: bool,

    /// Priority (low, medium, high; only with --no-analyze)
    #[arg(short, long)]
    priority: Option<String>,

    /// Category label (only with --no-analyze)
    #[arg(short, long)]
    category: Option<String>,
}

pub async fn run(args: AddArgs) -> Result<()> {
    let title = args.title.trim().to_string();
    if title.is_empty() {
        bail!("Task title cannot be empty");
    }

    let store = FileStore::open_default()?;
    let user = super::require_login(&store)?;

    let (priority, category) = if args.no_analyze {
        let priority = match &args.priority {
            Some(p) => Priority::parse(p).ok_or_else(|| anyhow!("Unknown priority: {}", p))?,
            None => Priority::Low,
        };
        let category = args.category.clone().unwrap_or_else(|| "General".to_string());
        (priority, category)
    } else {
        let suggestion = analyze_with_delay(&title, args.description.as_deref()).await;
        print_suggestion(&suggestion);

        if !args.yes && !confirm("Accept this suggestion?")? {
            println!("Suggestion rejected. Re-run with --no-analyze to set priority and category yourself.");
            return Ok(());
        }

        (suggestion.priority, suggestion.category.label().to_string())
    };

    let mut task = Task::new(&title, args.description.clone(), priority, &category);
    task.due = args.due;

    let book = TaskBook::open(&store, &user.id);
    let task = book.add(task)?;

    let config = Config::load()?;
    notify::send_task_alert(&TerminalNotifier, config.alerts.permission, &task);

    println!(
        "\u{2713} Added task: {} [{} | {}]",
        task.title, task.priority, task.category
    );
    println!("  ID: {}", super::truncate_id(&task.id, 8));

    Ok(())
}

/// Run the advisor behind the fixed artificial delay, with progress dots.
/// The analysis itself is synchronous; only the reveal waits.
async fn analyze_with_delay(title: &str, description: Option<&str>) -> Suggestion {
    let suggestion = advisor::analyze(title, description);

    print!("Analyzing task");
    io::stdout().flush().ok();
    for _ in 0..3 {
        tokio::time::sleep(ANALYSIS_DELAY / 3).await;
        print!(".");
        io::stdout().flush().ok();
    }
    println!();

    suggestion
}

fn print_suggestion(suggestion: &Suggestion) {
    println!(
        "\u{1F4A1} Suggested priority: {} | category: {}",
        suggestion.priority, suggestion.category
    );
    println!("   {}", suggestion.reasoning);
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [Y/n] ", prompt);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    let response = response.trim().to_lowercase();

    Ok(response.is_empty() || response == "y" || response == "yes")
}
