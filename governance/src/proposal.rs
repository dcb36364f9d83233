//! Governance proposals and their lifecycle.

use adac_types::{Address, ProposalId, Timestamp, TokenAmount};
use serde::{Deserialize, Serialize};

/// Derived lifecycle state of a proposal.
///
/// Never stored — always computed from the record and the current time via
/// [`Proposal::state`], so a stale "status" field cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalState {
    /// The voting window is open (`now < voting_deadline`).
    Active,
    /// The window closed with more for-votes than against-votes.
    Succeeded,
    /// The window closed without a majority of for-votes.
    Defeated,
    /// Executed. Terminal; only reachable from `Succeeded`.
    Executed,
}

/// What an executed proposal does.
///
/// The engine treats this as an opaque payload — applying it is the job of
/// an external collaborator behind the [`EffectHandler`] seam.
///
/// [`EffectHandler`]: crate::engine::EffectHandler
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProposalAction {
    /// Change a named protocol parameter.
    ParameterChange { key: String, value: u128 },
    /// Pay out from the treasury.
    TreasurySpend {
        recipient: Address,
        amount: TokenAmount,
    },
    /// Pure signalling — no on-execution effect.
    Signal,
}

impl Default for ProposalAction {
    fn default() -> Self {
        Self::Signal
    }
}

/// A governance proposal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    /// Sequential identifier, assigned at creation.
    pub id: ProposalId,
    /// Who proposed it. Held balance ≥ the proposal threshold at creation.
    pub proposer: Address,
    pub title: String,
    pub description: String,
    /// Effect payload applied on execution.
    pub action: ProposalAction,
    /// Stamped at creation; immutable.
    pub created_at: Timestamp,
    /// `created_at + voting_period`; immutable.
    pub voting_deadline: Timestamp,
    /// Accumulated for-voting-power. Only ever increases.
    pub for_votes: TokenAmount,
    /// Accumulated against-voting-power. Only ever increases.
    pub against_votes: TokenAmount,
    /// Set exactly once, irreversibly, after the deadline.
    pub executed: bool,
}

impl Proposal {
    /// Whether votes may still be cast at `now`.
    pub fn voting_open(&self, now: Timestamp) -> bool {
        now < self.voting_deadline
    }

    /// Whether the tally favours the proposal (strict majority of power).
    pub fn passed(&self) -> bool {
        self.for_votes > self.against_votes
    }

    /// Compute the lifecycle state at `now`.
    pub fn state(&self, now: Timestamp) -> ProposalState {
        if self.executed {
            ProposalState::Executed
        } else if self.voting_open(now) {
            ProposalState::Active
        } else if self.passed() {
            ProposalState::Succeeded
        } else {
            ProposalState::Defeated
        }
    }
}

/// A recorded vote. At most one exists per `(proposal, voter)` pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vote {
    pub voter: Address,
    /// `true` = for, `false` = against.
    pub support: bool,
    /// Voter's token balance snapshotted at cast time.
    pub power: TokenAmount,
    pub cast_at: Timestamp,
}
