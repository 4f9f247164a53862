mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fetch::{FetchConfig, WikidataClient};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wikidata-fetch")]
#[command(about = "Fetch Wikidata entities and save them as JSON files")]
struct Cli {
    /// Directory that output files are written to
    #[arg(long, global = true, default_value = store::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// wbgetentities endpoint
    #[arg(long, global = true, env = "WIKIDATA_ENDPOINT")]
    endpoint: Option<String>,

    /// User-Agent sent with every request
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Maximum identifiers per request
    #[arg(
        long,
        global = true,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    chunk_size: Option<usize>,

    /// Pause between requests, in milliseconds
    #[arg(long, global = true)]
    pause_ms: Option<u64>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Without a subcommand the built-in examples are fetched
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Fetch one entity
    Entity {
        id: String,
        /// Output filename (defaults to <ID>.json)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Fetch several entities in chunked requests
    Entities {
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(short, long, default_value = "entities.json")]
        output: String,
    },
    /// Print the labels stored in a saved file
    Show { path: PathBuf },
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::default();
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(pause_ms) = self.pause_ms {
            config.pause_ms = pause_ms;
        }
        config
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.fetch_config();
    info!(endpoint = %config.endpoint, chunk_size = config.chunk_size, "Starting");
    let client = WikidataClient::new(config);

    match cli.command {
        None => commands::run_examples(&client, &cli.data_dir).await?,
        Some(Command::Entity { id, output }) => {
            let filename = output.unwrap_or_else(|| format!("{}.json", id));
            commands::fetch_one(&client, &id, &cli.data_dir, &filename).await?;
        }
        Some(Command::Entities { ids, output }) => {
            commands::fetch_many(&client, ids.as_slice(), &cli.data_dir, &output).await?;
        }
        Some(Command::Show { path }) => {
            commands::show(&path).await?;
        }
    }

    Ok(())
}
