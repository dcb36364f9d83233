use adac_types::{Address, ProposalId, TokenAmount};
use thiserror::Error;

/// Every fallible engine operation surfaces one of these kinds directly.
///
/// All variants are expected, recoverable-by-caller conditions — none
/// represent internal faults.
#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("proposal {0} not found")]
    NotFound(ProposalId),

    #[error("insufficient balance to propose: have {have}, need {need}")]
    InsufficientBalance {
        have: TokenAmount,
        need: TokenAmount,
    },

    #[error("account {0} has already voted on this proposal")]
    AlreadyVoted(Address),

    #[error("account {0} has no voting power")]
    ZeroVotingPower(Address),

    #[error("voting window has closed for proposal {0}")]
    VotingClosed(ProposalId),

    #[error("voting is still open for proposal {0}")]
    VotingStillOpen(ProposalId),

    #[error("proposal {0} has already been executed")]
    AlreadyExecuted(ProposalId),

    #[error("proposal {0} was defeated and cannot be executed")]
    ProposalDefeated(ProposalId),
}

impl GovernanceError {
    /// Stable machine-readable name of this error kind, used by the RPC
    /// layer as the payload for 4xx responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::AlreadyVoted(_) => "already_voted",
            Self::ZeroVotingPower(_) => "zero_voting_power",
            Self::VotingClosed(_) => "voting_closed",
            Self::VotingStillOpen(_) => "voting_still_open",
            Self::AlreadyExecuted(_) => "already_executed",
            Self::ProposalDefeated(_) => "proposal_defeated",
        }
    }
}
