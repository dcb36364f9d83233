//! Proposal governance engine for the ADAC protocol.
//!
//! A self-contained state machine over governance proposals: creation is
//! gated on the proposer's token balance, votes are weighted by the voter's
//! balance at cast time, and execution is gated on the voting deadline and a
//! strict for-majority. Lifecycle state is derived on read from an injected
//! clock — nothing is scheduled, and proposal records are append-only.
//!
//! Token balances come from an external ledger behind the
//! [`adac_ledger::TokenLedger`] read interface; effect payloads of executed
//! proposals are handed to an [`EffectHandler`] collaborator.

pub mod clock;
pub mod engine;
pub mod error;
pub mod params;
pub mod proposal;
pub mod stats;
pub mod store;
pub mod tally;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{EffectHandler, GovernanceEngine, NoopEffects};
pub use error::GovernanceError;
pub use params::GovernanceParams;
pub use proposal::{Proposal, ProposalAction, ProposalState, Vote};
pub use stats::{GovernanceStats, VoterInfo, VoterVote};
pub use store::ProposalStore;
pub use tally::VoteTally;
