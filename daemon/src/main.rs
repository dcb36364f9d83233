//! ADAC governance daemon — runs the engine behind the RPC server.

mod config;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use adac_governance::{GovernanceEngine, SystemClock};
use adac_ledger::InMemoryLedger;
use adac_rpc::RpcServer;
use adac_types::{Address, TokenAmount};

use config::DaemonConfig;
use logging::{init_logging, LogFormat};

#[derive(Parser)]
#[command(name = "adac-daemon", about = "ADAC governance engine daemon")]
struct Cli {
    /// RPC server port.
    #[arg(long, env = "ADAC_RPC_PORT")]
    rpc_port: Option<u16>,

    /// Log format: "human" or "json".
    #[arg(long, env = "ADAC_LOG_FORMAT")]
    log_format: Option<String>,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "ADAC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<DaemonConfig>(&contents)?
        }
        None => DaemonConfig::default(),
    };

    if let Some(port) = cli.rpc_port {
        config.rpc_port = port;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_logging(LogFormat::from_config(&config.log_format), &config.log_level);

    if let Some(ref path) = cli.config {
        tracing::info!("loaded config from {}", path.display());
    }
    tracing::info!(
        threshold = %config.governance.proposal_threshold,
        voting_period_secs = config.governance.voting_period_secs,
        "starting governance engine"
    );

    let ledger = Arc::new(InMemoryLedger::with_balances(
        config
            .balances
            .iter()
            .map(|(addr, raw)| (Address::new(addr.clone()), TokenAmount::new(*raw))),
    ));
    if !config.balances.is_empty() {
        tracing::info!(accounts = config.balances.len(), "seeded dev ledger");
    }

    let engine = Arc::new(GovernanceEngine::new(
        ledger,
        Arc::new(SystemClock),
        config.governance.clone(),
    ));

    let server = RpcServer::new(config.rpc_port, engine);
    server.start().await?;
    Ok(())
}
