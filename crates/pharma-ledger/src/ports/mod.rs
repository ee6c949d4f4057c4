//! Ports (hexagonal architecture)

pub mod inbound;
pub mod outbound;

pub use inbound::SupplyChainApi;
pub use outbound::{NonceSource, TimeSource, WorldState};
