use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sei_proto::config::Config;
use sei_proto::proto::json::decode_base64;
use sei_proto::{codec, QueryClient, RestClient};

#[derive(Parser)]
#[command(name = "sei-proto")]
#[command(about = "Query and decode Sei oracle, upgrade and authz data", version)]
struct Cli {
    /// Configuration file path (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "config.toml", env = "SEI_PROTO_CONFIG")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a default configuration file
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "config.toml")]
        output: String,
    },

    /// Query the oracle module
    Oracle {
        /// Use gRPC instead of REST
        #[arg(long)]
        grpc: bool,

        #[command(subcommand)]
        query: OracleQuery,
    },

    /// Query the upgrade module
    Upgrade {
        /// Use gRPC instead of REST
        #[arg(long)]
        grpc: bool,

        #[command(subcommand)]
        query: UpgradeQuery,
    },

    /// Query the authz module
    Authz {
        /// Use gRPC instead of REST
        #[arg(long)]
        grpc: bool,

        #[command(subcommand)]
        query: AuthzQuery,
    },

    /// Decode a protobuf payload (hex or base64) and print it as JSON
    Decode {
        /// Fully-qualified message name or type URL, e.g. cosmos.upgrade.v1beta1.Plan
        type_name: String,
        /// Hex or base64 encoded bytes
        payload: String,
    },

    /// Print the Tendermint hash of a base64 encoded transaction
    TxHash {
        /// Base64 encoded transaction bytes
        tx: String,
    },
}

#[derive(Subcommand)]
enum OracleQuery {
    /// Denoms with an agreed price
    Actives,
    /// Exchange rates of all whitelisted denoms
    ExchangeRates,
    /// Exchange rate of a single denom
    ExchangeRate { denom: String },
    /// Time-weighted average prices over the lookback window; the node
    /// rejects windows longer than the `lookback_duration` parameter
    Twaps { lookback_seconds: u64 },
    /// Denoms validators must vote on this period
    VoteTargets,
    /// Recent price snapshots
    PriceSnapshots,
    /// Progress through the current slash window
    SlashWindow,
    /// Module parameters
    Params,
    /// Feeder address a validator delegated voting to
    Feeder { validator_addr: String },
    /// Miss/abstain/success counters of a validator
    Penalty { validator_addr: String },
    /// Pending prevote hash of a validator (pre-v1 chains)
    Prevote { validator_addr: String },
    /// Pending prevotes of all validators (pre-v1 chains)
    Prevotes,
    /// Revealed aggregate vote of a validator (pre-v1 chains)
    Vote { validator_addr: String },
    /// Revealed aggregate votes of all validators (pre-v1 chains)
    Votes,
}

#[derive(Subcommand)]
enum UpgradeQuery {
    /// The scheduled upgrade plan, if any
    CurrentPlan,
    /// Height at which a named plan was applied
    AppliedPlan { name: String },
    /// Consensus versions of all modules, or of one module
    ModuleVersions { module_name: Option<String> },
}

#[derive(Subcommand)]
enum AuthzQuery {
    /// Grants from a granter to a grantee
    Grants {
        #[arg(long)]
        granter: String,
        #[arg(long)]
        grantee: String,
        /// Only grants for this message type URL
        #[arg(long)]
        msg_type_url: Option<String>,
    },
}

// QueryClient and RestClient expose the same query methods
macro_rules! oracle_query {
    ($client:expr, $query:expr) => {
        match $query {
            OracleQuery::Actives => to_json(&$client.actives().await?),
            OracleQuery::ExchangeRates => to_json(&$client.exchange_rates().await?),
            OracleQuery::ExchangeRate { denom } => to_json(&$client.exchange_rate(&denom).await?),
            OracleQuery::Twaps { lookback_seconds } => to_json(&$client.twaps(lookback_seconds).await?),
            OracleQuery::VoteTargets => to_json(&$client.vote_targets().await?),
            OracleQuery::PriceSnapshots => to_json(&$client.price_snapshot_history().await?),
            OracleQuery::SlashWindow => to_json(&$client.slash_window().await?),
            OracleQuery::Params => to_json(&$client.oracle_params().await?),
            OracleQuery::Feeder { validator_addr } => {
                to_json(&$client.feeder_delegation(&validator_addr).await?)
            }
            OracleQuery::Penalty { validator_addr } => {
                to_json(&$client.vote_penalty_counter(&validator_addr).await?)
            }
            OracleQuery::Prevote { validator_addr } => {
                to_json(&$client.aggregate_prevote(&validator_addr).await?)
            }
            OracleQuery::Prevotes => to_json(&$client.aggregate_prevotes().await?),
            OracleQuery::Vote { validator_addr } => {
                to_json(&$client.aggregate_vote(&validator_addr).await?)
            }
            OracleQuery::Votes => to_json(&$client.aggregate_votes().await?),
        }
    };
}

macro_rules! upgrade_query {
    ($client:expr, $query:expr) => {
        match $query {
            UpgradeQuery::CurrentPlan => to_json(&$client.current_plan().await?),
            UpgradeQuery::AppliedPlan { name } => to_json(&$client.applied_plan(&name).await?),
            UpgradeQuery::ModuleVersions { module_name } => {
                to_json(&$client.module_versions(module_name.as_deref()).await?)
            }
        }
    };
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sei_proto=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output } => {
            let config = Config::default();
            config.save(&output)?;
            info!("Configuration file created at: {}", output);
        }
        Commands::Oracle { grpc, query } => {
            let config = load_config(&cli.config)?;
            let json = if grpc {
                let client = connect(&config).await?;
                oracle_query!(client, query)?
            } else {
                let client = RestClient::new(&config.client)?;
                oracle_query!(client, query)?
            };
            println!("{}", json);
        }
        Commands::Upgrade { grpc, query } => {
            let config = load_config(&cli.config)?;
            let json = if grpc {
                let client = connect(&config).await?;
                upgrade_query!(client, query)?
            } else {
                let client = RestClient::new(&config.client)?;
                upgrade_query!(client, query)?
            };
            println!("{}", json);
        }
        Commands::Authz { grpc, query } => {
            let config = load_config(&cli.config)?;
            let AuthzQuery::Grants {
                granter,
                grantee,
                msg_type_url,
            } = query;
            let json = if grpc {
                let client = connect(&config).await?;
                to_json(
                    &client
                        .grants(&granter, &grantee, msg_type_url.as_deref(), None)
                        .await?,
                )?
            } else {
                let client = RestClient::new(&config.client)?;
                to_json(&client.grants(&granter, &grantee, msg_type_url.as_deref()).await?)?
            };
            println!("{}", json);
        }
        Commands::Decode { type_name, payload } => {
            let bytes = decode_payload(&payload)?;
            let value = codec::decode_json(&type_name, &bytes).with_context(|| {
                format!(
                    "failed to decode {} (known types: {})",
                    type_name,
                    codec::KNOWN_TYPES.join(", ")
                )
            })?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::TxHash { tx } => {
            let bytes = decode_base64(tx.trim()).context("transaction is not valid base64")?;
            println!("{}", codec::tx_hash(&bytes));
        }
    }

    Ok(())
}

fn load_config(path: &str) -> Result<Config> {
    if Path::new(path).exists() {
        info!("Loading configuration from {}", path);
        Ok(Config::load(path)?)
    } else {
        info!("No configuration at {}, using defaults", path);
        Ok(Config::default())
    }
}

async fn connect(config: &Config) -> Result<QueryClient> {
    let mut client = QueryClient::new(config.client.clone());
    client
        .connect()
        .await
        .with_context(|| format!("failed to connect to {}", config.client.grpc_endpoint))?;
    Ok(client)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Hex when the input is only hex digits, base64 otherwise
fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    let payload = payload.trim();
    let payload = payload.strip_prefix("0x").unwrap_or(payload);
    if payload.is_empty() {
        return Ok(Vec::new());
    }
    if payload.len() % 2 == 0 && payload.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Ok(hex::decode(payload)?);
    }
    match decode_base64(payload) {
        Ok(bytes) => Ok(bytes),
        Err(e) => bail!("payload is neither hex nor base64: {}", e),
    }
}
