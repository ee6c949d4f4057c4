//! # Pharma Ledger
//!
//! Drug provenance over a key-value ledger: manufacturers produce drug units,
//! hospitals buy them, patients are sold them, and any unit can be traced back
//! to its origin from its trace code alone.
//!
//! ## Architecture
//!
//! ```text
//! invoke(op, args) ──→ ContractRouter ──→ SupplyChainApi
//!                                              │
//!                                   SupplyChainService
//!                       ┌──────────────────┼──────────────────┐
//!           EntityStore<Manufacturer> EntityStore<Hospital> EntityStore<Patient>
//!                       └──────────────────┼──────────────────┘
//!                                    WorldState (get / put)
//! ```
//!
//! ## Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Unique names | At most one entity per kind and name |
//! | Single holder | A drug unit is in exactly one inventory |
//! | Stable codes | A trace code never changes once generated |
//! | Lock order | Manufacturer before Hospital before Patient |
//! | Cache mirrors ledger | The cache is updated only after an acknowledged put |
//! | Report numbering | Report IDs are `count + 1`, assigned under the hospital lock |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Entities, inventories, trace code codec, errors, config
//! - `ports/` - Inbound API and outbound ledger/clock/nonce traits
//! - `adapters/` - In-memory world state, system clock, random nonces
//! - `store/` - Entity store with per-entity locks
//! - `service/` - Registry, transfer engine, patients and reports
//! - `contract/` - Operation router for string-argument invocations
//!
//! ## Usage
//!
//! ```ignore
//! use pharma_ledger::{SupplyChainApi, SupplyChainConfig, SupplyChainService};
//!
//! let service = SupplyChainService::new_in_memory(SupplyChainConfig::default());
//! service.create_manufacturer("AcmeCo", "ops@acme.test")?;
//! service.create_hospital("GenHosp", "555-0100")?;
//!
//! let code = service.produce_drug("AcmeCo", "Aspirin", 9.99)?;
//! service.hospital_buys_drug("GenHosp", "AcmeCo", "Aspirin")?;
//! let info = service.trace_drug(&code)?;
//! ```

pub mod adapters;
pub mod contract;
pub mod domain;
pub mod ports;
pub mod service;
pub mod store;

/// Test utilities
///
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export key types for convenience
pub use adapters::{InMemoryWorldState, RandomNonceSource, SystemTimeSource};
pub use contract::{ContractError, ContractRouter, OPERATIONS};
pub use domain::trace_code::{self, Provenance};
pub use domain::{
    DrugHolder, DrugInfo, EntityKind, Hospital, HospitalDrug, LedgerError, Manufacturer,
    ManufacturerDrug, MedicalReport, Missing, Patient, ReportId, StockItem, SupplyChainConfig,
    SupplyChainError, TraceCode,
};
pub use ports::inbound::SupplyChainApi;
pub use ports::outbound::{NonceSource, TimeSource, WorldState};
pub use service::{SupplyChainDependencies, SupplyChainService};
pub use store::{EntityGuard, EntityHandle, EntityStore};
