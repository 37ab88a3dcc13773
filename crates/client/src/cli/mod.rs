use std::io;

use clap::{Parser, Subcommand};
use sealife_client::{ClientConfig, RecordsClient};

mod add;
mod delete;
mod health;
mod list;
mod show;
mod stats;

#[derive(Debug, Parser)]
#[command(name = "sealife", about = "Browse and record marine life sightings", long_about = None)]
pub(crate) struct Cli {
    /// Records API root, including any base path
    #[arg(long, env = "SEALIFE_API_URL", default_value = "http://127.0.0.1:8698")]
    api_url: String,

    /// Bearer token sent with record requests
    #[arg(long, env = "SEALIFE_API_TOKEN", hide_env_values = true, default_value = "")]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List records, newest sighting first
    List(list::ListArgs),

    /// Show a single record
    Show(show::ShowArgs),

    /// Summarise the whole collection
    Stats,

    /// Record a new sighting
    Add(add::AddArgs),

    /// Delete a record
    Delete(delete::DeleteArgs),

    /// Check that the server is up
    Health,
}

impl Cli {
    pub(crate) async fn run(self, out: impl io::Write) -> Result<(), String> {
        let client = RecordsClient::new(ClientConfig {
            base_url: self.api_url,
            token: self.token,
        });

        match self.command {
            Commands::List(args) => list::run(&client, args, out).await,
            Commands::Show(args) => show::run(&client, args, out).await,
            Commands::Stats => stats::run(&client, out).await,
            Commands::Add(args) => add::run(&client, args, out).await,
            Commands::Delete(args) => delete::run(&client, args, out).await,
            Commands::Health => health::run(&client, out).await,
        }
    }
}
