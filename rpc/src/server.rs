//! Axum-based RPC server.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use adac_governance::GovernanceEngine;

use crate::error::RpcError;
use crate::handlers;

/// The RPC server, configured with a port and a shared engine.
pub struct RpcServer {
    pub port: u16,
    engine: Arc<GovernanceEngine>,
}

impl RpcServer {
    pub fn new(port: u16, engine: Arc<GovernanceEngine>) -> Self {
        Self { port, engine }
    }

    /// Build the router. Exposed separately so tests can drive it without
    /// binding a socket.
    pub fn router(engine: Arc<GovernanceEngine>) -> Router {
        Router::new()
            .route("/proposal", post(handlers::propose))
            .route("/proposal/:id", get(handlers::get_proposal))
            .route("/proposals", get(handlers::list_proposals))
            .route("/vote", post(handlers::vote))
            .route("/execute", post(handlers::execute))
            .route("/voter/:address", get(handlers::voter_info))
            .route("/stats", get(handlers::stats))
            .route("/health", get(handlers::health))
            .layer(CorsLayer::permissive())
            .with_state(engine)
    }

    /// Start serving. Runs until the server is shut down.
    pub async fn start(&self) -> Result<(), RpcError> {
        let app = Self::router(self.engine.clone());
        let addr = format!("0.0.0.0:{}", self.port);
        info!("RPC server listening on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;
        Ok(())
    }
}
