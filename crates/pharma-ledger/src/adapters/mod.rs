//! # Adapters Module
//!
//! Implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `world_state`: in-memory ledger world state
//! - `infra`: system clock and random nonce source

mod infra;
mod world_state;

pub use infra::{RandomNonceSource, SystemTimeSource};
pub use world_state::InMemoryWorldState;
