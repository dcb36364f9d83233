//! RPC error types and their HTTP mapping.

use adac_governance::GovernanceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Governance(#[from] GovernanceError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("server error: {0}")]
    Server(String),
}

impl RpcError {
    /// Machine-readable error kind included in the response payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Governance(e) => e.kind(),
            Self::InvalidRequest(_) => "invalid_request",
            Self::Server(_) => "server_error",
        }
    }

    /// HTTP status for this error.
    ///
    /// Every engine error is an expected caller-recoverable condition and
    /// maps to a 4xx; only transport-level failures map to 5xx.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Governance(e) => match e {
                GovernanceError::NotFound(_) => StatusCode::NOT_FOUND,
                GovernanceError::InsufficientBalance { .. }
                | GovernanceError::ZeroVotingPower(_) => StatusCode::FORBIDDEN,
                GovernanceError::AlreadyVoted(_)
                | GovernanceError::VotingClosed(_)
                | GovernanceError::VotingStillOpen(_)
                | GovernanceError::AlreadyExecuted(_)
                | GovernanceError::ProposalDefeated(_) => StatusCode::CONFLICT,
            },
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

impl From<std::io::Error> for RpcError {
    fn from(e: std::io::Error) -> Self {
        Self::Server(e.to_string())
    }
}
