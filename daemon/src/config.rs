//! Daemon configuration with TOML file support.

use std::collections::BTreeMap;

use adac_governance::GovernanceParams;
use serde::{Deserialize, Serialize};

/// Configuration for the governance daemon.
///
/// Can be loaded from a TOML file or built programmatically (e.g. for
/// tests). File settings are the base; CLI flags and env vars override them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Port for the RPC server.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Governance parameters (threshold, voting period).
    #[serde(default)]
    pub governance: GovernanceParams,

    /// Seed balances for the in-memory dev ledger: address → raw units.
    /// A production deployment reads balances from the token contract
    /// instead; this daemon only ships the dev ledger.
    #[serde(default)]
    pub balances: BTreeMap<String, u128>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            rpc_port: default_rpc_port(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            governance: GovernanceParams::default(),
            balances: BTreeMap::new(),
        }
    }
}

fn default_rpc_port() -> u16 {
    7077
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
