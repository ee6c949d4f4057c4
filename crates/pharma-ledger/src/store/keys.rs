//! Ledger key layout.
//!
//! Every document key is `{kind}:{name}`, so a hospital and a manufacturer
//! with the same name never overwrite each other. The names registered for
//! a kind are kept in one index document under `index:{kind}`.

use crate::domain::EntityKind;

impl EntityKind {
    /// Key prefix for documents of this kind.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            EntityKind::Manufacturer => "manufacturer:",
            EntityKind::Hospital => "hospital:",
            EntityKind::Patient => "patient:",
        }
    }
}

/// Build the ledger key of a named document.
pub fn document_key(kind: EntityKind, name: &str) -> String {
    let prefix = kind.key_prefix();
    let mut key = String::with_capacity(prefix.len() + name.len());
    key.push_str(prefix);
    key.push_str(name);
    key
}

/// Ledger key of the name index for one kind.
pub fn index_key(kind: EntityKind) -> String {
    format!("index:{}", kind.key_prefix().trim_end_matches(':'))
}
