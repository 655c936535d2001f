//! Realty CLI - command-line client for the real-estate management API.
//!
//! # Usage
//!
//! ```bash
//! # Check that the server is reachable
//! realty status
//!
//! # List, inspect and edit records
//! realty agencies list
//! realty agencies create --name "Acme Realty" --address "1 Main St"
//! realty properties update 42 --price 350000
//! realty realtors delete 3 --yes
//!
//! # Machine-readable output
//! realty properties list --json
//! ```

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use realty_core::resource::{Agency, Property, Realtor};
use tracing_subscriber::EnvFilter;

/// Manage agencies, realtors and properties from the terminal.
#[derive(Parser)]
#[command(name = "realty", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base URL (default: $REALTY_API_URL, then http://localhost:7070/api)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check connectivity to the API server
    Status,
    /// Manage agencies
    #[command(visible_alias = "agency")]
    Agencies {
        #[command(subcommand)]
        action: Action,
    },
    /// Manage realtors
    #[command(visible_alias = "realtor")]
    Realtors {
        #[command(subcommand)]
        action: Action,
    },
    /// Manage properties
    #[command(visible_alias = "property")]
    Properties {
        #[command(subcommand)]
        action: Action,
    },
}

#[derive(Subcommand)]
pub enum Action {
    /// List all records
    List,
    /// Show one record
    Get { id: i64 },
    /// Create a record from the given fields
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change fields of an existing record (unspecified fields keep their value)
    Update {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a record
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Record fields. Which ones apply depends on the resource.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Agency or realtor name
    #[arg(long)]
    pub name: Option<String>,
    /// Agency address
    #[arg(long)]
    pub address: Option<String>,
    /// Property city
    #[arg(long)]
    pub city: Option<String>,
    /// Property price
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = config::client(cli.api_url.as_deref());
    let format = if cli.json {
        output::Format::Json
    } else {
        output::Format::Human
    };

    let text = match cli.command {
        Command::Status => commands::status(&client, format).await?,
        Command::Agencies { action } => commands::run::<Agency, _>(&client, action, format).await?,
        Command::Realtors { action } => commands::run::<Realtor, _>(&client, action, format).await?,
        Command::Properties { action } => {
            commands::run::<Property, _>(&client, action, format).await?
        }
    };

    if !text.is_empty() {
        println!("{}", text);
    }

    Ok(())
}
