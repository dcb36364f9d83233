//! HTTP RPC server for the ADAC governance engine.
//!
//! Provides endpoints for:
//! - Proposal creation, voting, and execution
//! - Proposal queries (single and paginated listing)
//! - Voter participation history
//! - Engine-wide statistics
//!
//! Every engine failure maps to a 4xx status with a machine-readable
//! `error` kind in the JSON body.

pub mod error;
pub mod handlers;
pub mod pagination;
pub mod server;

pub use error::RpcError;
pub use server::RpcServer;
