//! Top-level clap definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::add::AddArgs;
use super::alerts::AlertsCommands;
use super::auth::{LoginArgs, SignupArgs};
use super::done::DoneArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;

#[derive(Parser)]
#[command(
    name = "tm",
    about = "Personal task manager with rule-based priority suggestions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new account
    Signup(SignupArgs),

    /// Log in and start a session
    Login(LoginArgs),

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Add a task (the advisor suggests priority and category)
    Add(AddArgs),

    /// List tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Toggle a task's completed flag
    Done(DoneArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// High-priority alert settings
    Alerts {
        #[command(subcommand)]
        command: AlertsCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
