//! Coder Fest organizer CLI — command-line client for the registration API.
//!
//! Set CODERFEST_API_KEY and CODERFEST_API_URL (or API_URL). Uses Bearer
//! auth with the shared API key.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use coderfest_api_client::ApiClient;
use coderfest_cli::{
    compute_stats, filter_registrations, format_registered_at, init_tracing, to_csv,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "coderfest", about = "Coder Fest registration organizer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List registrations, optionally filtered
    List {
        /// Case-insensitive search over leader name, contact, and team name
        #[arg(long)]
        search: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Export registrations as CSV
    Export {
        /// Case-insensitive search over leader name, contact, and team name
        #[arg(long)]
        search: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
    /// Show registration totals
    Stats,
    /// Check API health
    Health,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client = ApiClient::from_env().context(
        "Failed to create API client. Set CODERFEST_API_KEY and CODERFEST_API_URL (or API_URL)",
    )?;

    let cli = Cli::parse();

    match cli.command {
        Commands::List { search, format } => {
            let registrations = client.list_registrations().await?;
            let filtered = filter_registrations(&registrations, search.as_deref());
            match format {
                OutputFormat::Json => print_json(&filtered)?,
                OutputFormat::Table => {
                    println!(
                        "{:<26} {:<20} {:<20} {:<12} {:<6} {}",
                        "Registration ID", "Team", "Leader", "Contact", "Size", "Registered"
                    );
                    for registration in &filtered {
                        println!(
                            "{:<26} {:<20} {:<20} {:<12} {:<6} {}",
                            registration.registration_id,
                            registration.team_name,
                            registration.leader_name,
                            registration.leader_contact,
                            registration.students.len(),
                            format_registered_at(&registration.registered_at),
                        );
                    }
                    println!(
                        "\nShowing {} of {} registrations",
                        filtered.len(),
                        registrations.len()
                    );
                }
            }
        }
        Commands::Export { search, output } => {
            let registrations = client.list_registrations().await?;
            let filtered = filter_registrations(&registrations, search.as_deref());
            let csv = to_csv(&filtered);
            match output {
                Some(path) => {
                    std::fs::write(&path, csv)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("Exported {} registrations to {}", filtered.len(), path.display());
                }
                None => println!("{}", csv),
            }
        }
        Commands::Stats => {
            let registrations = client.list_registrations().await?;
            print_json(&compute_stats(&registrations))?;
        }
        Commands::Health => {
            let response = client.health().await?;
            print_json(&response)?;
        }
    }

    Ok(())
}
