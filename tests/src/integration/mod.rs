//! # Integration Tests
//!
//! Cross-module flows over the in-memory world state.

pub mod concurrency;
pub mod contract;
pub mod flows;
pub mod recovery;
pub mod telemetry;

use pharma_ledger::test_utils::{make_patient, make_service, TestService};
use pharma_ledger::{InMemoryWorldState, SupplyChainApi};
use std::sync::Arc;

/// Fresh service with a fixed clock and sequential nonces.
pub fn fresh_service() -> TestService<InMemoryWorldState> {
    make_service(Arc::new(InMemoryWorldState::new()))
}

/// One manufacturer, two hospitals and two patients.
pub fn seed_network(api: &impl SupplyChainApi) -> anyhow::Result<()> {
    api.create_manufacturer("AcmeCo", "ops@acme.test")?;
    api.create_hospital("GenHosp", "555-0100")?;
    api.create_hospital("Mercy", "555-0199")?;
    api.create_patient(make_patient("alice"))?;
    api.create_patient(make_patient("bob"))?;
    Ok(())
}
