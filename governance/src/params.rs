//! Governance parameters.

use adac_types::TokenAmount;
use serde::{Deserialize, Serialize};

/// Minimum token balance required to create a proposal (raw units).
pub const DEFAULT_PROPOSAL_THRESHOLD: u128 = 100_000;

/// Length of the voting window in seconds (3 days).
pub const DEFAULT_VOTING_PERIOD_SECS: u64 = 3 * 24 * 60 * 60;

/// Tunable parameters of the governance engine.
///
/// Fixed for the lifetime of an engine instance; the voting deadline of a
/// proposal is stamped from `voting_period_secs` at creation and is immutable
/// afterwards, so changing parameters never moves existing deadlines.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernanceParams {
    /// Minimum proposer balance, in raw token units.
    #[serde(default = "default_threshold")]
    pub proposal_threshold: TokenAmount,

    /// Voting window length in seconds, counted from proposal creation.
    #[serde(default = "default_voting_period")]
    pub voting_period_secs: u64,
}

impl Default for GovernanceParams {
    fn default() -> Self {
        Self {
            proposal_threshold: default_threshold(),
            voting_period_secs: default_voting_period(),
        }
    }
}

fn default_threshold() -> TokenAmount {
    TokenAmount::new(DEFAULT_PROPOSAL_THRESHOLD)
}

fn default_voting_period() -> u64 {
    DEFAULT_VOTING_PERIOD_SECS
}
