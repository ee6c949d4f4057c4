//! JSON document encoding at the persistence boundary.

use crate::domain::{Document, EntityKind, SupplyChainError};
use std::collections::BTreeSet;

const INDEX: &str = "index";

/// Serialize a whole document.
pub fn encode<D: Document>(doc: &D) -> Result<Vec<u8>, SupplyChainError> {
    serde_json::to_vec(doc).map_err(|e| SupplyChainError::Serialization {
        kind: D::KIND,
        name: doc.name().to_string(),
        message: e.to_string(),
    })
}

/// Deserialize a document read back from the ledger.
pub fn decode<D: Document>(name: &str, bytes: &[u8]) -> Result<D, SupplyChainError> {
    serde_json::from_slice(bytes).map_err(|e| SupplyChainError::Serialization {
        kind: D::KIND,
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Serialize the name index of one kind as a sorted JSON array.
pub fn encode_index(
    kind: EntityKind,
    names: &BTreeSet<String>,
) -> Result<Vec<u8>, SupplyChainError> {
    serde_json::to_vec(names).map_err(|e| SupplyChainError::Serialization {
        kind,
        name: INDEX.to_string(),
        message: e.to_string(),
    })
}

pub fn decode_index(kind: EntityKind, bytes: &[u8]) -> Result<BTreeSet<String>, SupplyChainError> {
    serde_json::from_slice(bytes).map_err(|e| SupplyChainError::Serialization {
        kind,
        name: INDEX.to_string(),
        message: e.to_string(),
    })
}
