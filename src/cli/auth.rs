//! Account and session commands

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use crate::auth::Registry;
use crate::store::FileStore;

#[derive(Args)]
pub struct SignupArgs {
    /// Email address (unique)
    #[arg(short, long)]
    email: String,

    /// Display name
    #[arg(short, long)]
    name: String,

    /// Password (prompted if omitted; stored in plain text)
    #[arg(short, long)]
    password: Option<String>,
}

#[derive(Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(short, long)]
    email: String,

    /// Password (prompted if omitted)
    #[arg(short, long)]
    password: Option<String>,
}

pub async fn signup(args: SignupArgs) -> Result<()> {
    let store = FileStore::open_default()?;
    let password = read_password(args.password)?;

    let user = Registry::new(&store).signup(&args.email, &password, &args.name)?;

    println!("\u{2713} Created account for {} <{}>", user.name, user.email);
    println!("  Log in with: tm login -e {}", user.email);
    Ok(())
}

pub async fn login(args: LoginArgs) -> Result<()> {
    let store = FileStore::open_default()?;
    let password = read_password(args.password)?;

    let user = Registry::new(&store).login(&args.email, &password)?;

    println!("\u{2713} Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

pub async fn logout() -> Result<()> {
    let store = FileStore::open_default()?;
    Registry::new(&store).logout()?;

    println!("\u{2713} Logged out");
    Ok(())
}

pub async fn whoami() -> Result<()> {
    let store = FileStore::open_default()?;

    match Registry::new(&store).current_user()? {
        Some(user) => {
            println!("{} <{}>", user.name, user.email);
            println!("ID: {}", user.id);
        }
        None => println!("Not logged in."),
    }

    Ok(())
}

fn read_password(flag: Option<String>) -> Result<String> {
    if let Some(password) = flag {
        return Ok(password);
    }

    print!("Password: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
