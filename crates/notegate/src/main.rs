//! notegate - Operator CLI
//!
//! Exercises the authentication core from the command line. Secrets
//! (passwords) are read from stdin, never taken as arguments.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `check-password` | Run the password policy, including the breach lookup |
//! | `hash-password` | Print the Argon2id digest of a password |
//! | `issue-token --email <email>` | Issue a bearer token for a subject |
//! | `verify-token <token>` | Verify a token and print its claims |
//! | `renew-token <token>` | Re-issue a valid token with a fresh expiration |
//!
//! The administrator in `auth.admin`, when configured, is seeded at startup.

use anyhow::Context;
use clap::{Parser, Subcommand};
use notegate::AuthRuntime;
use notegate::infrastructure::config::ConfigLoader;
use notegate::infrastructure::logging::{init_logging, log_config_loaded};
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Command line interface for notegate
#[derive(Parser, Debug)]
#[command(name = "notegate")]
#[command(about = "notegate - Authentication core operator tool")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Operator commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a password (read from stdin) against the password policy
    CheckPassword,
    /// Hash a password (read from stdin)
    HashPassword,
    /// Issue a bearer token
    IssueToken {
        /// Token subject
        #[arg(long)]
        email: String,
    },
    /// Verify a bearer token and print its claims
    VerifyToken {
        /// The token to verify
        token: String,
    },
    /// Renew a currently valid bearer token
    RenewToken {
        /// The token to renew
        token: String,
    },
}

fn read_secret() -> anyhow::Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;
    log_config_loaded(loader.source_path().as_deref());

    let runtime = AuthRuntime::from_config(config)?;
    runtime
        .seed_admin()
        .await
        .context("Failed to seed administrator")?;

    match cli.command {
        Command::CheckPassword => {
            let password = read_secret()?;
            match runtime.password_policy().ensure_safe(&password).await {
                Ok(()) => println!("ok"),
                Err(e) if e.is_client_error() => {
                    println!("rejected: {e}");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::HashPassword => {
            let password = read_secret()?;
            println!("{}", runtime.hasher().hash(&password)?);
        }
        Command::IssueToken { email } => {
            println!("{}", runtime.tokens().issue(&email)?);
        }
        Command::VerifyToken { token } => {
            let claims = runtime.tokens().verify(&token)?;
            println!("{}", serde_json::to_string_pretty(&claims)?);
        }
        Command::RenewToken { token } => {
            println!("{}", runtime.tokens().renew(&token)?);
        }
    }

    Ok(())
}
