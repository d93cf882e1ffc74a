//! `tm alerts` subcommands implementation

use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};

use crate::config::{save_config, Config};
use crate::notify::{self, Permission};

#[derive(Subcommand)]
pub enum AlertsCommands {
    /// Request permission for high-priority alerts
    Enable,

    /// Show the current permission state
    Status,
}

pub async fn run(command: AlertsCommands) -> Result<()> {
    match command {
        AlertsCommands::Enable => enable(),
        AlertsCommands::Status => status(),
    }
}

fn enable() -> Result<()> {
    let mut config = Config::load()?;

    match config.alerts.permission {
        Permission::Granted => {
            println!("Alerts are already enabled.");
            return Ok(());
        }
        Permission::Denied => {
            println!("Alerts are blocked. Reset the decision by removing the [alerts] section from config.toml.");
            return Ok(());
        }
        Permission::Unset => {}
    }

    print!("Allow alerts for high priority tasks? [Y/n] ");
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    let response = response.trim().to_lowercase();
    let grants = response.is_empty() || response == "y" || response == "yes";

    config.alerts.permission = notify::request_permission(config.alerts.permission, grants);
    save_config(&config)?;

    match config.alerts.permission {
        Permission::Granted => {
            println!("\u{2713} Alerts enabled. You'll be alerted whenever a high priority task is added.")
        }
        _ => println!("Alerts stay off."),
    }

    Ok(())
}

fn status() -> Result<()> {
    let config = Config::load()?;

    let label = match config.alerts.permission {
        Permission::Unset => "not requested",
        Permission::Granted => "granted",
        Permission::Denied => "denied",
    };
    println!("Alert permission: {}", label);

    Ok(())
}
