//! Vote tallying — one vote per voter per proposal, power accumulation.

use std::sync::Arc;

use adac_types::{Address, ProposalId};

use crate::error::GovernanceError;
use crate::proposal::Vote;
use crate::store::ProposalStore;

/// Accumulates voting power onto proposals and enforces the
/// one-vote-per-voter invariant.
pub struct VoteTally {
    store: Arc<ProposalStore>,
}

impl VoteTally {
    pub fn new(store: Arc<ProposalStore>) -> Self {
        Self { store }
    }

    /// Cast a vote on `proposal_id`.
    ///
    /// The voter's power is their ledger balance read at cast time. The
    /// duplicate check and the tally increment run under the proposal's
    /// mutex, so concurrent votes on the same proposal cannot lose updates.
    ///
    /// Failure kinds, in check order: [`GovernanceError::NotFound`],
    /// [`GovernanceError::VotingClosed`], [`GovernanceError::AlreadyVoted`],
    /// [`GovernanceError::ZeroVotingPower`].
    pub fn cast_vote(
        &self,
        proposal_id: ProposalId,
        voter: Address,
        support: bool,
    ) -> Result<(), GovernanceError> {
        let record = self.store.record(proposal_id)?;
        let mut guard = record.lock().expect("proposal lock poisoned");

        let now = self.store.clock().now();
        if !guard.proposal.voting_open(now) {
            return Err(GovernanceError::VotingClosed(proposal_id));
        }
        if guard.votes.contains_key(&voter) {
            return Err(GovernanceError::AlreadyVoted(voter));
        }

        let power = self.store.ledger().balance_of(&voter);
        if power.is_zero() {
            return Err(GovernanceError::ZeroVotingPower(voter));
        }

        if support {
            guard.proposal.for_votes = guard.proposal.for_votes.saturating_add(power);
        } else {
            guard.proposal.against_votes = guard.proposal.against_votes.saturating_add(power);
        }
        tracing::debug!(
            proposal = proposal_id.value(),
            %voter,
            support,
            %power,
            "vote recorded"
        );
        guard.votes.insert(
            voter.clone(),
            Vote {
                voter,
                support,
                power,
                cast_at: now,
            },
        );
        Ok(())
    }
}
