//! Fundamental types for the ADAC governance engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: addresses, token amounts, timestamps, and proposal identifiers.

pub mod address;
pub mod amount;
pub mod id;
pub mod time;

pub use address::Address;
pub use amount::TokenAmount;
pub use id::ProposalId;
pub use time::Timestamp;
