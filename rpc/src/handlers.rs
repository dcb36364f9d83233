//! RPC request handlers and their wire DTOs.
//!
//! Token amounts are serialized as decimal strings: they are u128 internally
//! and not every JSON client can parse integers that wide.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use adac_governance::{
    GovernanceEngine, GovernanceStats, Proposal, ProposalAction, ProposalState, VoterInfo,
};
use adac_types::{Address, ProposalId, Timestamp};

use crate::error::RpcError;
use crate::pagination::{next_offset, PaginationMeta, PaginationParams};

// ── Proposal ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ProposeRequest {
    pub proposer: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub action: ProposalAction,
}

#[derive(Serialize)]
pub struct ProposeResponse {
    pub id: u64,
}

#[derive(Serialize)]
pub struct ProposalView {
    pub id: u64,
    pub proposer: String,
    pub title: String,
    pub description: String,
    pub action: ProposalAction,
    pub created_at: u64,
    pub voting_deadline: u64,
    pub for_votes: String,
    pub against_votes: String,
    pub executed: bool,
    pub state: ProposalState,
}

impl ProposalView {
    fn new(p: Proposal, now: Timestamp) -> Self {
        Self {
            id: p.id.value(),
            proposer: p.proposer.to_string(),
            title: p.title.clone(),
            description: p.description.clone(),
            created_at: p.created_at.as_secs(),
            voting_deadline: p.voting_deadline.as_secs(),
            for_votes: p.for_votes.raw().to_string(),
            against_votes: p.against_votes.raw().to_string(),
            executed: p.executed,
            state: p.state(now),
            action: p.action,
        }
    }
}

#[derive(Serialize)]
pub struct ProposalListResponse {
    pub proposals: Vec<ProposalView>,
    #[serde(flatten)]
    pub meta: PaginationMeta,
}

// ── Vote ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VoteRequest {
    pub proposal_id: u64,
    pub voter: String,
    pub support: bool,
}

// ── Execute ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ExecuteRequest {
    pub proposal_id: u64,
}

// ── Voter info ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct VoterVoteView {
    pub proposal_id: u64,
    pub support: bool,
    pub power: String,
}

#[derive(Serialize)]
pub struct VoterInfoResponse {
    pub address: String,
    pub votes: Vec<VoterVoteView>,
    pub total_power_used: String,
    pub participation_rate: f64,
}

impl From<VoterInfo> for VoterInfoResponse {
    fn from(info: VoterInfo) -> Self {
        Self {
            address: info.address.to_string(),
            votes: info
                .votes
                .into_iter()
                .map(|v| VoterVoteView {
                    proposal_id: v.proposal_id.value(),
                    support: v.support,
                    power: v.power.raw().to_string(),
                })
                .collect(),
            total_power_used: info.total_power_used.raw().to_string(),
            participation_rate: info.participation_rate,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────

fn parse_address(raw: &str, field: &str) -> Result<Address, RpcError> {
    let addr = Address::new(raw);
    if !addr.is_valid() {
        return Err(RpcError::InvalidRequest(format!(
            "{field} must not be empty"
        )));
    }
    Ok(addr)
}

fn non_empty(value: &str, field: &str) -> Result<(), RpcError> {
    if value.is_empty() {
        return Err(RpcError::InvalidRequest(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

pub async fn propose(
    State(engine): State<Arc<GovernanceEngine>>,
    Json(req): Json<ProposeRequest>,
) -> Result<Json<ProposeResponse>, RpcError> {
    let proposer = parse_address(&req.proposer, "proposer")?;
    non_empty(&req.title, "title")?;
    non_empty(&req.description, "description")?;
    let proposal = engine.propose(proposer, req.title, req.description, req.action)?;
    Ok(Json(ProposeResponse {
        id: proposal.id.value(),
    }))
}

pub async fn vote(
    State(engine): State<Arc<GovernanceEngine>>,
    Json(req): Json<VoteRequest>,
) -> Result<StatusCode, RpcError> {
    let voter = parse_address(&req.voter, "voter")?;
    engine.vote(ProposalId::new(req.proposal_id), voter, req.support)?;
    Ok(StatusCode::OK)
}

pub async fn execute(
    State(engine): State<Arc<GovernanceEngine>>,
    Json(req): Json<ExecuteRequest>,
) -> Result<StatusCode, RpcError> {
    engine.execute(ProposalId::new(req.proposal_id))?;
    Ok(StatusCode::OK)
}

pub async fn get_proposal(
    State(engine): State<Arc<GovernanceEngine>>,
    Path(id): Path<u64>,
) -> Result<Json<ProposalView>, RpcError> {
    let proposal = engine.get_proposal(ProposalId::new(id))?;
    Ok(Json(ProposalView::new(proposal, engine.now())))
}

pub async fn list_proposals(
    State(engine): State<Arc<GovernanceEngine>>,
    Query(params): Query<PaginationParams>,
) -> Json<ProposalListResponse> {
    let offset = params.effective_offset();
    let count = params.effective_count();
    let now = engine.now();
    let proposals: Vec<ProposalView> = engine
        .proposals()
        .into_iter()
        .skip(offset as usize)
        .take(count as usize)
        .map(|p| ProposalView::new(p, now))
        .collect();
    let meta = PaginationMeta {
        next_offset: next_offset(offset, proposals.len(), count),
    };
    Json(ProposalListResponse { proposals, meta })
}

pub async fn voter_info(
    State(engine): State<Arc<GovernanceEngine>>,
    Path(address): Path<String>,
) -> Result<Json<VoterInfoResponse>, RpcError> {
    let address = parse_address(&address, "address")?;
    Ok(Json(engine.voter_info(address).into()))
}

pub async fn stats(State(engine): State<Arc<GovernanceEngine>>) -> Json<GovernanceStats> {
    Json(engine.stats())
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
