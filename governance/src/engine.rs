//! Core governance engine — orchestrates the proposal lifecycle.

use std::sync::Arc;

use adac_ledger::TokenLedger;
use adac_types::{Address, ProposalId, Timestamp};

use crate::clock::Clock;
use crate::error::GovernanceError;
use crate::params::GovernanceParams;
use crate::proposal::{Proposal, ProposalAction};
use crate::stats::{self, GovernanceStats, VoterInfo};
use crate::store::ProposalStore;
use crate::tally::VoteTally;

/// Applies the effect payload of an executed proposal.
///
/// Parameter changes and treasury payouts live outside this engine; the
/// default handler does nothing.
pub trait EffectHandler: Send + Sync {
    fn apply(&self, proposal: &Proposal);
}

/// The default effect handler: log and ignore.
pub struct NoopEffects;

impl EffectHandler for NoopEffects {
    fn apply(&self, proposal: &Proposal) {
        tracing::debug!(id = proposal.id.value(), "no effect handler configured, payload ignored");
    }
}

/// Top-level orchestration of proposal creation, voting, and execution.
///
/// All lifecycle state is derived on read from the injected clock; the
/// engine keeps no timers and runs no background work.
pub struct GovernanceEngine {
    store: Arc<ProposalStore>,
    tally: VoteTally,
    effects: Arc<dyn EffectHandler>,
}

impl GovernanceEngine {
    pub fn new(
        ledger: Arc<dyn TokenLedger>,
        clock: Arc<dyn Clock>,
        params: GovernanceParams,
    ) -> Self {
        Self::with_effects(ledger, clock, params, Arc::new(NoopEffects))
    }

    pub fn with_effects(
        ledger: Arc<dyn TokenLedger>,
        clock: Arc<dyn Clock>,
        params: GovernanceParams,
        effects: Arc<dyn EffectHandler>,
    ) -> Self {
        let store = Arc::new(ProposalStore::new(ledger, clock, params));
        Self {
            tally: VoteTally::new(store.clone()),
            store,
            effects,
        }
    }

    /// Create a proposal. The proposer must hold at least the proposal
    /// threshold at this moment.
    pub fn propose(
        &self,
        proposer: Address,
        title: String,
        description: String,
        action: ProposalAction,
    ) -> Result<Proposal, GovernanceError> {
        self.store.create(proposer, title, description, action)
    }

    /// Cast a vote. See [`VoteTally::cast_vote`] for the failure kinds.
    pub fn vote(
        &self,
        proposal_id: ProposalId,
        voter: Address,
        support: bool,
    ) -> Result<(), GovernanceError> {
        self.tally.cast_vote(proposal_id, voter, support)
    }

    /// Execute a succeeded proposal.
    ///
    /// Fails with [`GovernanceError::VotingStillOpen`] before the deadline,
    /// [`GovernanceError::AlreadyExecuted`] on a repeat call, and
    /// [`GovernanceError::ProposalDefeated`] unless `for_votes >
    /// against_votes`. The store evaluates all three against one clock read
    /// under the proposal's mutex. On success the effect payload is handed
    /// to the configured [`EffectHandler`].
    pub fn execute(&self, proposal_id: ProposalId) -> Result<(), GovernanceError> {
        let executed = self.store.mark_executed(proposal_id)?;
        tracing::info!(
            id = executed.id.value(),
            for_votes = %executed.for_votes,
            against_votes = %executed.against_votes,
            "proposal executed"
        );
        self.effects.apply(&executed);
        Ok(())
    }

    /// Read a single proposal.
    pub fn get_proposal(&self, id: ProposalId) -> Result<Proposal, GovernanceError> {
        self.store.get(id)
    }

    /// Snapshot of all proposals in creation order.
    pub fn proposals(&self) -> Vec<Proposal> {
        self.store.all()
    }

    /// Number of proposals ever created.
    pub fn proposal_count(&self) -> u64 {
        self.store.count()
    }

    /// A voter's participation history.
    pub fn voter_info(&self, address: Address) -> VoterInfo {
        stats::voter_info(&self.store, address)
    }

    /// Aggregate statistics across all proposals.
    pub fn stats(&self) -> GovernanceStats {
        stats::stats(&self.store)
    }

    /// The current time according to the engine's clock.
    pub fn now(&self) -> Timestamp {
        self.store.clock().now()
    }
}
