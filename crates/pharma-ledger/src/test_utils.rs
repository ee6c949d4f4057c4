//! Shared test fixtures: deterministic clock and nonces, and a world state
//! that can be told to reject writes.

use crate::adapters::InMemoryWorldState;
use crate::domain::{LedgerError, Patient, SupplyChainConfig};
use crate::ports::{NonceSource, TimeSource, WorldState};
use crate::service::{SupplyChainDependencies, SupplyChainService};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

pub const TEST_TIME: &str = "2024-03-01T08:30:00Z";

/// Clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedTimeSource(pub String);

impl Default for FixedTimeSource {
    fn default() -> Self {
        Self(TEST_TIME.to_string())
    }
}

impl TimeSource for FixedTimeSource {
    fn now_rfc3339(&self) -> String {
        self.0.clone()
    }
}

/// Nonces 1, 2, 3, ...
#[derive(Debug, Default)]
pub struct SequentialNonceSource {
    next: AtomicU64,
}

impl NonceSource for SequentialNonceSource {
    fn next_nonce(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Nonce source that replays a fixed script, then counts up from 1000.
#[derive(Debug, Default)]
pub struct ScriptedNonceSource {
    script: Mutex<Vec<u64>>,
    fallback: AtomicU64,
}

impl ScriptedNonceSource {
    pub fn new(mut script: Vec<u64>) -> Self {
        script.reverse();
        Self {
            script: Mutex::new(script),
            fallback: AtomicU64::new(1000),
        }
    }
}

impl NonceSource for ScriptedNonceSource {
    fn next_nonce(&self) -> u64 {
        self.script
            .lock()
            .pop()
            .unwrap_or_else(|| self.fallback.fetch_add(1, Ordering::SeqCst))
    }
}

/// In-memory world state whose puts can be made to fail for keys with a
/// given prefix.
#[derive(Debug, Default)]
pub struct FailingWorldState {
    inner: InMemoryWorldState,
    fail_prefix: Mutex<Option<String>>,
    armed: AtomicBool,
}

impl FailingWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every put whose key starts with `prefix` from now on.
    pub fn fail_puts_with_prefix(&self, prefix: &str) {
        *self.fail_prefix.lock() = Some(prefix.to_string());
        self.armed.store(true, Ordering::SeqCst);
    }

    pub fn heal(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &InMemoryWorldState {
        &self.inner
    }
}

impl WorldState for FailingWorldState {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        if self.armed.load(Ordering::SeqCst) {
            if let Some(prefix) = self.fail_prefix.lock().as_deref() {
                if key.starts_with(prefix) {
                    return Err(LedgerError::WriteRejected {
                        key: key.to_string(),
                        reason: "injected failure".to_string(),
                    });
                }
            }
        }
        self.inner.put(key, value)
    }
}

pub type TestService<W> = SupplyChainService<W, FixedTimeSource, SequentialNonceSource>;

/// Service with a fixed clock and sequential nonces over `world_state`.
pub fn make_service<W: WorldState>(world_state: Arc<W>) -> TestService<W> {
    make_service_with_config(world_state, SupplyChainConfig::default())
}

pub fn make_service_with_config<W: WorldState>(
    world_state: Arc<W>,
    config: SupplyChainConfig,
) -> TestService<W> {
    let deps = SupplyChainDependencies {
        world_state,
        time_source: FixedTimeSource::default(),
        nonce_source: SequentialNonceSource::default(),
    };
    SupplyChainService::new(deps, config)
}

pub fn make_patient(name: &str) -> Patient {
    Patient {
        name: name.to_string(),
        birth_date: "1990-05-17".to_string(),
        height: 172.0,
        weight: 68.5,
        gender: "F".to_string(),
        contact: format!("{}@mail.test", name),
    }
}
