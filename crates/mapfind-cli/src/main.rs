mod clipboard;
mod lookup;
mod prompt;
mod render;
mod results;
mod search;
mod shell;

use clap::{Parser, Subcommand};
use mapfind_core::{AppConfig, GeoCoordinate};
use mapfind_gemini::GeminiClient;
use mapfind_locate::LocationProvider;
use mapfind_store::JsonFileStore;
use tracing_subscriber::EnvFilter;

use crate::lookup::Lookup;

#[derive(Debug, Parser)]
#[command(name = "mapfind")]
#[command(about = "Look up phone numbers, addresses, and Japan Mapcodes for places near you")]
struct Cli {
    /// Latitude to search around; overrides MAPFIND_LATITUDE
    #[arg(long, global = true, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude to search around; overrides MAPFIND_LONGITUDE
    #[arg(long, global = true, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up a place and add it to the results
    Search {
        /// Place name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Print candidate places instead of asking which one was meant
        #[arg(long)]
        no_prompt: bool,
    },
    /// Show saved results
    List,
    /// Copy results as tab-separated rows for pasting into a spreadsheet
    Copy {
        /// Copy only this row (1-based, as numbered by `list`)
        #[arg(long)]
        row: Option<usize>,
        /// Print the rows instead of using the clipboard
        #[arg(long)]
        stdout: bool,
    },
    /// Remove all saved results
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Interactive search shell (the default)
    Shell,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let location_override = match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => Some(GeoCoordinate::new(lat, lon).ok_or_else(|| {
            anyhow::anyhow!("--lat {lat} --lon {lon} is not a valid coordinate")
        })?),
        _ => None,
    };
    let config = mapfind_core::load_app_config(location_override)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let store = JsonFileStore::new(config.results_path.clone());

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Search { name, no_prompt } => {
            let place_name = name.join(" ");
            let place_name = place_name.trim();
            if place_name.is_empty() {
                anyhow::bail!("place name must not be empty");
            }
            let lookup = build_lookup(&config, store)?;
            search::run_search(&lookup, place_name, !no_prompt).await
        }
        Commands::List => {
            results::run_list(&store);
            Ok(())
        }
        Commands::Copy { row, stdout } => results::run_copy(&store, row, stdout).await,
        Commands::Clear { yes } => results::run_clear(&store, yes).await,
        Commands::Shell => {
            let lookup = build_lookup(&config, store)?;
            shell::run_shell(&lookup).await
        }
    }
}

fn build_lookup(config: &AppConfig, store: JsonFileStore) -> anyhow::Result<Lookup<GeminiClient>> {
    let client = GeminiClient::from_config(config)?;
    let location = LocationProvider::from_config(config)?;
    tracing::debug!(
        model = client.model(),
        results_path = %store.path().display(),
        "lookup ready"
    );
    Ok(Lookup::new(client, location, store))
}

#[cfg(test)]
mod tests;
