//! Proposal store — append-only registry of proposals.
//!
//! Records are kept in creation order and never deleted; once a proposal is
//! executed its record is immutable. Each record sits behind its own mutex
//! so that votes on unrelated proposals never contend, while the registry
//! map itself is only write-locked during creation.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use adac_ledger::TokenLedger;
use adac_types::{Address, ProposalId, TokenAmount};

use crate::clock::Clock;
use crate::error::GovernanceError;
use crate::params::GovernanceParams;
use crate::proposal::{Proposal, ProposalAction, Vote};

/// A proposal plus its votes, guarded by a single per-proposal mutex.
///
/// Keeping the votes inside the record makes "check not-yet-voted, then
/// accumulate power" a single critical section.
pub(crate) struct ProposalRecord {
    pub proposal: Proposal,
    pub votes: HashMap<Address, Vote>,
}

/// Append-only registry of proposals, keyed by sequential id.
pub struct ProposalStore {
    records: RwLock<BTreeMap<u64, Arc<Mutex<ProposalRecord>>>>,
    next_id: AtomicU64,
    ledger: Arc<dyn TokenLedger>,
    clock: Arc<dyn Clock>,
    params: GovernanceParams,
}

impl ProposalStore {
    pub fn new(
        ledger: Arc<dyn TokenLedger>,
        clock: Arc<dyn Clock>,
        params: GovernanceParams,
    ) -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            ledger,
            clock,
            params,
        }
    }

    /// Create a proposal, allocating the next sequential id.
    ///
    /// Fails with [`GovernanceError::InsufficientBalance`] if the proposer's
    /// current ledger balance is below the proposal threshold.
    pub fn create(
        &self,
        proposer: Address,
        title: String,
        description: String,
        action: ProposalAction,
    ) -> Result<Proposal, GovernanceError> {
        let balance = self.ledger.balance_of(&proposer);
        if balance < self.params.proposal_threshold {
            return Err(GovernanceError::InsufficientBalance {
                have: balance,
                need: self.params.proposal_threshold,
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created_at = self.clock.now();
        let proposal = Proposal {
            id: ProposalId::new(id),
            proposer,
            title,
            description,
            action,
            created_at,
            voting_deadline: created_at.plus_secs(self.params.voting_period_secs),
            for_votes: TokenAmount::ZERO,
            against_votes: TokenAmount::ZERO,
            executed: false,
        };

        tracing::info!(
            id,
            proposer = %proposal.proposer,
            deadline = %proposal.voting_deadline,
            "proposal created"
        );

        let record = Arc::new(Mutex::new(ProposalRecord {
            proposal: proposal.clone(),
            votes: HashMap::new(),
        }));
        self.records
            .write()
            .expect("proposal registry lock poisoned")
            .insert(id, record);

        Ok(proposal)
    }

    /// Look up a proposal by id.
    pub fn get(&self, id: ProposalId) -> Result<Proposal, GovernanceError> {
        let record = self.record(id)?;
        let guard = record.lock().expect("proposal lock poisoned");
        Ok(guard.proposal.clone())
    }

    /// Snapshot of all proposals in creation order.
    ///
    /// The returned vector is a point-in-time copy: iterating it is
    /// restartable and never observes mutations made after the call.
    pub fn all(&self) -> Vec<Proposal> {
        self.handles()
            .into_iter()
            .map(|record| {
                record
                    .lock()
                    .expect("proposal lock poisoned")
                    .proposal
                    .clone()
            })
            .collect()
    }

    /// Number of proposals ever created.
    pub fn count(&self) -> u64 {
        self.records
            .read()
            .expect("proposal registry lock poisoned")
            .len() as u64
    }

    /// Irreversibly mark a succeeded proposal as executed.
    ///
    /// Fails with [`GovernanceError::VotingStillOpen`] before the deadline,
    /// [`GovernanceError::AlreadyExecuted`] on a repeat call, and
    /// [`GovernanceError::ProposalDefeated`] unless the tally favours the
    /// proposal. Deadline, flag, and outcome are all evaluated against a
    /// single clock read under the record's mutex, so the false→true
    /// transition occurs exactly once and only from a succeeded tally —
    /// even when the deadline passes between two calls.
    pub fn mark_executed(&self, id: ProposalId) -> Result<Proposal, GovernanceError> {
        let record = self.record(id)?;
        let mut guard = record.lock().expect("proposal lock poisoned");
        let now = self.clock.now();
        if guard.proposal.voting_open(now) {
            return Err(GovernanceError::VotingStillOpen(id));
        }
        if guard.proposal.executed {
            return Err(GovernanceError::AlreadyExecuted(id));
        }
        if !guard.proposal.passed() {
            return Err(GovernanceError::ProposalDefeated(id));
        }
        guard.proposal.executed = true;
        tracing::info!(id = id.value(), "proposal marked executed");
        Ok(guard.proposal.clone())
    }

    /// Handle to a proposal's record, for callers that need the vote map.
    pub(crate) fn record(
        &self,
        id: ProposalId,
    ) -> Result<Arc<Mutex<ProposalRecord>>, GovernanceError> {
        self.records
            .read()
            .expect("proposal registry lock poisoned")
            .get(&id.value())
            .cloned()
            .ok_or(GovernanceError::NotFound(id))
    }

    /// Handles to every record, in creation order.
    pub(crate) fn handles(&self) -> Vec<Arc<Mutex<ProposalRecord>>> {
        self.records
            .read()
            .expect("proposal registry lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(crate) fn ledger(&self) -> &dyn TokenLedger {
        self.ledger.as_ref()
    }
}
