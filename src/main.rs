//! better-tx command line.
//!
//! Operational companion to the library: validates configuration, shows the
//! resolved network table, and drives the fullnode / sponsor endpoints the
//! transaction chains use.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use better_tx::config::{load_config, AppConfig};
use better_tx::fullnode::FullnodeClient;
use better_tx::network::{Network, NetworkRegistry};
use better_tx::observability::{logging, metrics};
use better_tx::sponsor::{HttpSponsorClient, SponsorRequest, SponsorService};

#[derive(Parser)]
#[command(name = "better-tx")]
#[command(about = "Transaction lifecycle tooling", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured network.
    #[arg(short, long)]
    network: Option<Network>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and exit
    CheckConfig,
    /// Print the resolved per-network address table
    Networks,
    /// Wait until a transaction digest is final
    Wait { digest: String },
    /// Submit already-signed transaction bytes
    ExecuteSigned {
        #[arg(long)]
        tx_bytes: String,
        #[arg(long)]
        signature: String,
        /// Return right after submission
        #[arg(long)]
        no_wait: bool,
    },
    /// Ask the sponsor service to cosign transaction-kind bytes
    Sponsor {
        #[arg(long)]
        tx_bytes: String,
        #[arg(long)]
        sender: String,
        /// Allowed address (repeatable)
        #[arg(long = "allow")]
        allowed: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(network) = cli.network {
        config.network = network;
    }

    logging::init_logging(&config.observability);
    tracing::info!(network = %config.network, "better-tx v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    match cli.command {
        Commands::CheckConfig => {
            NetworkRegistry::from_config(&config.networks)?;
            println!("configuration OK (network: {})", config.network);
        }
        Commands::Networks => {
            let registry = NetworkRegistry::from_config(&config.networks)?;
            for (network, vars) in registry.networks() {
                println!("{} ({})", network, network.fullnode_url());
                print_json(vars)?;
            }
        }
        Commands::Wait { digest } => {
            let client = FullnodeClient::new(&config.fullnode, config.network)?;
            let result = client.wait_for_transaction(&digest).await?;
            print_json(&result)?;
        }
        Commands::ExecuteSigned {
            tx_bytes,
            signature,
            no_wait,
        } => {
            let client = FullnodeClient::new(&config.fullnode, config.network)?;
            let mut result = client
                .execute_transaction_block(&tx_bytes, &[signature])
                .await?;
            if config.execution.wait_for_finality && !no_wait {
                result = client.wait_for_transaction(&result.digest).await?;
            }
            print_json(&result)?;
        }
        Commands::Sponsor {
            tx_bytes,
            sender,
            allowed,
        } => {
            let client = HttpSponsorClient::new(&config.sponsor)?;
            let allowed = if allowed.is_empty() {
                Some(config.sponsor.allowed_addresses.clone()).filter(|a| !a.is_empty())
            } else {
                Some(allowed)
            };
            let response = client
                .sponsor(&SponsorRequest {
                    network: config.network,
                    tx_bytes,
                    sender,
                    allowed_addresses: allowed,
                })
                .await?;
            print_json(&response)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
