//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the supply-chain service requires from its host.
//!
//! The ledger is consumed through exactly two primitives, `get` and `put`,
//! each assumed atomic and durable once acknowledged. Ordering, commit and
//! consensus belong to the ledger, not to this crate.

use crate::domain::errors::LedgerError;
use std::sync::Arc;

/// Key-value world state of the ledger.
///
/// Production: the chaincode stub's `GetState`/`PutState`.
/// Testing: `InMemoryWorldState`.
pub trait WorldState: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;
}

impl<W: WorldState + ?Sized> WorldState for Arc<W> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        (**self).put(key, value)
    }
}

/// Clock used to stamp drug production.
pub trait TimeSource: Send + Sync {
    /// Current time as an RFC 3339 UTC timestamp.
    fn now_rfc3339(&self) -> String;
}

/// Source of trace code nonces.
pub trait NonceSource: Send + Sync {
    fn next_nonce(&self) -> u64;
}
