//! Taskmind - personal task manager with rule-based priority suggestions

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskmind::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKMIND_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskmind=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "tm", &mut std::io::stdout());
            Ok(())
        }
        Commands::Signup(args) => cli::auth::signup(args).await,
        Commands::Login(args) => cli::auth::login(args).await,
        Commands::Logout => cli::auth::logout().await,
        Commands::Whoami => cli::auth::whoami().await,
        Commands::Add(args) => cli::add::run(args).await,
        Commands::List(args) => cli::list::run(args).await,
        Commands::Done(args) => cli::done::run(args).await,
        Commands::Remove(args) => cli::remove::run(args).await,
        Commands::Alerts { command } => cli::alerts::run(command).await,
    }
}
