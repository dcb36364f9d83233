//! Participation reporting — per-voter history and engine-wide statistics.

use std::collections::HashSet;

use adac_types::{Address, ProposalId, TokenAmount};
use serde::Serialize;

use crate::store::ProposalStore;

/// One entry in a voter's participation history.
#[derive(Clone, Debug, Serialize)]
pub struct VoterVote {
    pub proposal_id: ProposalId,
    pub support: bool,
    pub power: TokenAmount,
}

/// A voter's participation across all proposals.
#[derive(Clone, Debug, Serialize)]
pub struct VoterInfo {
    pub address: Address,
    pub votes: Vec<VoterVote>,
    /// Sum of the power behind every vote this voter has cast.
    pub total_power_used: TokenAmount,
    /// Fraction of all proposals this voter has voted on (0 when there are
    /// no proposals).
    pub participation_rate: f64,
}

/// Aggregate statistics over the whole engine.
#[derive(Clone, Debug, Serialize)]
pub struct GovernanceStats {
    pub total_proposals: u64,
    pub executed_proposals: u64,
    pub unique_voters: u64,
    pub total_votes: u64,
    pub average_votes_per_proposal: f64,
}

pub(crate) fn voter_info(store: &ProposalStore, address: Address) -> VoterInfo {
    let mut votes = Vec::new();
    let mut total_power_used = TokenAmount::ZERO;
    let handles = store.handles();
    let total_proposals = handles.len();

    for record in &handles {
        let guard = record.lock().expect("proposal lock poisoned");
        if let Some(vote) = guard.votes.get(&address) {
            votes.push(VoterVote {
                proposal_id: guard.proposal.id,
                support: vote.support,
                power: vote.power,
            });
            total_power_used = total_power_used.saturating_add(vote.power);
        }
    }

    let participation_rate = if total_proposals == 0 {
        0.0
    } else {
        votes.len() as f64 / total_proposals as f64
    };

    VoterInfo {
        address,
        votes,
        total_power_used,
        participation_rate,
    }
}

pub(crate) fn stats(store: &ProposalStore) -> GovernanceStats {
    let handles = store.handles();
    let total_proposals = handles.len() as u64;
    let mut executed_proposals = 0u64;
    let mut total_votes = 0u64;
    let mut voters: HashSet<Address> = HashSet::new();

    for record in &handles {
        let guard = record.lock().expect("proposal lock poisoned");
        if guard.proposal.executed {
            executed_proposals += 1;
        }
        total_votes += guard.votes.len() as u64;
        voters.extend(guard.votes.keys().cloned());
    }

    let average_votes_per_proposal = if total_proposals == 0 {
        0.0
    } else {
        total_votes as f64 / total_proposals as f64
    };

    GovernanceStats {
        total_proposals,
        executed_proposals,
        unique_voters: voters.len() as u64,
        total_votes,
        average_votes_per_proposal,
    }
}
