//! # Supply-Chain Service
//!
//! The service implementing the supply-chain operation catalog.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `SupplyChainApi` for every contract operation
//! 2. Owns one `EntityStore` per entity kind, all over the same world state
//! 3. Takes entity locks in `EntityKind` order when an operation needs two
//! 4. Uses dependency injection for the ledger, the clock and nonce generation
//!
//! The service is `Send + Sync`; share it through an `Arc` and call any
//! operation from any thread.

mod api;
mod clinical;
mod observe;
mod registry;
mod transfer;

use crate::adapters::{InMemoryWorldState, RandomNonceSource, SystemTimeSource};
use crate::domain::{Hospital, Manufacturer, Patient, SupplyChainConfig};
use crate::ports::outbound::{NonceSource, TimeSource, WorldState};
use crate::store::EntityStore;
use std::sync::Arc;

/// The Supply-Chain Service.
pub struct SupplyChainService<W, T, N>
where
    W: WorldState,
    T: TimeSource,
    N: NonceSource,
{
    /// Manufacturer documents.
    pub(crate) manufacturers: EntityStore<Manufacturer, W>,
    /// Hospital documents (inventory, roster and reports).
    pub(crate) hospitals: EntityStore<Hospital, W>,
    /// Global patient registry.
    pub(crate) patients: EntityStore<Patient, W>,
    /// Clock for production timestamps.
    pub(crate) time_source: T,
    /// Trace code nonces.
    pub(crate) nonce_source: N,
    /// Service configuration.
    pub(crate) config: SupplyChainConfig,
}

/// Dependencies for SupplyChainService
pub struct SupplyChainDependencies<W, T, N> {
    pub world_state: Arc<W>,
    pub time_source: T,
    pub nonce_source: N,
}

impl<W, T, N> SupplyChainService<W, T, N>
where
    W: WorldState,
    T: TimeSource,
    N: NonceSource,
{
    /// Create a service over the given dependencies.
    ///
    /// Nothing is read eagerly; documents already on the ledger are hydrated
    /// the first time an operation names them.
    pub fn new(deps: SupplyChainDependencies<W, T, N>, config: SupplyChainConfig) -> Self {
        Self {
            manufacturers: EntityStore::new(Arc::clone(&deps.world_state)),
            hospitals: EntityStore::new(Arc::clone(&deps.world_state)),
            patients: EntityStore::new(deps.world_state),
            time_source: deps.time_source,
            nonce_source: deps.nonce_source,
            config,
        }
    }

    pub fn config(&self) -> &SupplyChainConfig {
        &self.config
    }
}

impl SupplyChainService<InMemoryWorldState, SystemTimeSource, RandomNonceSource> {
    /// Service over a fresh in-memory world state, wall clock and random
    /// nonces.
    pub fn new_in_memory(config: SupplyChainConfig) -> Self {
        Self::over(Arc::new(InMemoryWorldState::new()), config)
    }

    /// Service over an existing in-memory world state.
    pub fn over(world_state: Arc<InMemoryWorldState>, config: SupplyChainConfig) -> Self {
        let deps = SupplyChainDependencies {
            world_state,
            time_source: SystemTimeSource,
            nonce_source: RandomNonceSource,
        };
        Self::new(deps, config)
    }
}
