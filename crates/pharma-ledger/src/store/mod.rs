//! # Entity Store
//!
//! Create, load and save named aggregate documents against the ledger world
//! state, with an in-process cache mirroring what the ledger holds.
//!
//! ## Locking
//!
//! Every cached document sits behind its own `Mutex`. The mutex is owned by
//! the store, not by the document, and is never serialized. `EntityGuard` is
//! an owned guard on that mutex and is the only way to save a document, so a
//! save always happens while the entity's lock is held:
//!
//! ```text
//! handle.lock() ──→ EntityGuard ──→ clone, mutate copy ──→ store.save(&mut guard, copy)
//!                                                              │
//!                                          put(key, json) ─────┤ ledger acknowledged
//!                                          *guard = copy  ─────┘ cache updated
//! ```
//!
//! The cache is only updated after the ledger acknowledged the write, so a
//! failed put leaves both the ledger and the cache on the previous version.
//!
//! ## Listing
//!
//! Each kind keeps a sorted name index in the ledger (`index:{kind}`). It is
//! extended before the document is written, so every stored document is
//! indexed. Names whose document write failed stay in the index and are
//! skipped when listing.

mod codec;
mod keys;

pub use keys::{document_key, index_key};

use crate::domain::{Document, SupplyChainError};
use crate::ports::WorldState;
use parking_lot::{ArcMutexGuard, Mutex, RawMutex, RwLock};
use std::collections::{BTreeSet, HashMap};
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

/// Shared handle to one cached document.
pub struct EntityHandle<D: Document> {
    name: String,
    cell: Arc<Mutex<D>>,
}

impl<D: Document> Clone for EntityHandle<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<D: Document> EntityHandle<D> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Take the entity's exclusive lock. Blocks while another operation holds it.
    pub fn lock(&self) -> EntityGuard<D> {
        EntityGuard {
            name: self.name.clone(),
            guard: self.cell.lock_arc(),
        }
    }

    /// Copy of the current document, taken under the lock.
    pub fn snapshot(&self) -> D {
        self.cell.lock().clone()
    }
}

/// Exclusive access to one entity.
///
/// Reading goes through `Deref`. Writing goes through `EntityStore::save`.
pub struct EntityGuard<D: Document> {
    name: String,
    guard: ArcMutexGuard<RawMutex, D>,
}

impl<D: Document> EntityGuard<D> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<D: Document> Deref for EntityGuard<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.guard
    }
}

/// A document already encoded for the ledger, waiting to be committed.
///
/// Staging both halves of a transfer before writing either one moves every
/// encoding failure ahead of the first ledger write.
pub struct Staged<D: Document> {
    doc: D,
    bytes: Vec<u8>,
}

/// Store of one document kind.
pub struct EntityStore<D: Document, W: WorldState> {
    ledger: Arc<W>,
    cache: RwLock<HashMap<String, Arc<Mutex<D>>>>,
}

impl<D: Document, W: WorldState> EntityStore<D, W> {
    pub fn new(ledger: Arc<W>) -> Self {
        Self {
            ledger,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new document.
    ///
    /// Fails with `AlreadyExists` if the name is cached or already present in
    /// the ledger. The cache write lock is held across the check, the index
    /// update and the put, so two concurrent creations of one name cannot
    /// both succeed and index updates never interleave.
    pub fn create(&self, doc: D) -> Result<(), SupplyChainError> {
        let name = doc.name().to_string();
        let key = document_key(D::KIND, &name);

        let mut cache = self.cache.write();
        if cache.contains_key(&name) || self.ledger.get(&key)?.is_some() {
            return Err(SupplyChainError::AlreadyExists { kind: D::KIND, name });
        }

        let bytes = codec::encode(&doc)?;
        let mut names = self.indexed_names()?;
        if names.insert(name.clone()) {
            let index = codec::encode_index(D::KIND, &names)?;
            self.ledger.put(&index_key(D::KIND), &index)?;
        }
        self.ledger.put(&key, &bytes)?;
        cache.insert(name.clone(), Arc::new(Mutex::new(doc)));

        debug!(kind = %D::KIND, name = %name, bytes = bytes.len(), "document created");
        Ok(())
    }

    /// Handle to a document, hydrating it from the ledger on a cache miss.
    pub fn find(&self, name: &str) -> Result<Option<EntityHandle<D>>, SupplyChainError> {
        if let Some(cell) = self.cache.read().get(name) {
            return Ok(Some(EntityHandle {
                name: name.to_string(),
                cell: Arc::clone(cell),
            }));
        }

        let key = document_key(D::KIND, name);
        let Some(bytes) = self.ledger.get(&key)? else {
            return Ok(None);
        };
        let doc: D = codec::decode(name, &bytes)?;

        // Another thread may have hydrated or created it meanwhile; keep theirs.
        let mut cache = self.cache.write();
        let cell = cache
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(doc)));

        debug!(kind = %D::KIND, name = %name, "document hydrated from ledger");
        Ok(Some(EntityHandle {
            name: name.to_string(),
            cell: Arc::clone(cell),
        }))
    }

    /// Handle to a document that must exist.
    pub fn handle(&self, name: &str) -> Result<EntityHandle<D>, SupplyChainError> {
        self.find(name)?
            .ok_or_else(|| SupplyChainError::not_found(D::KIND, name))
    }

    /// Lock a document that must exist.
    pub fn lock(&self, name: &str) -> Result<EntityGuard<D>, SupplyChainError> {
        Ok(self.handle(name)?.lock())
    }

    /// Current copy of a document, `None` if it is not registered.
    pub fn load(&self, name: &str) -> Result<Option<D>, SupplyChainError> {
        Ok(self.find(name)?.map(|handle| handle.snapshot()))
    }

    pub fn exists(&self, name: &str) -> Result<bool, SupplyChainError> {
        Ok(self.find(name)?.is_some())
    }

    /// Encode the next version of a locked document.
    pub fn stage(&self, guard: &EntityGuard<D>, next: D) -> Result<Staged<D>, SupplyChainError> {
        debug_assert_eq!(guard.name(), next.name());
        let bytes = codec::encode(&next)?;
        Ok(Staged { doc: next, bytes })
    }

    /// Write a staged document to the ledger, then to the cache.
    pub fn commit(
        &self,
        guard: &mut EntityGuard<D>,
        staged: Staged<D>,
    ) -> Result<(), crate::domain::LedgerError> {
        let key = document_key(D::KIND, &guard.name);
        self.ledger.put(&key, &staged.bytes)?;
        *guard.guard = staged.doc;
        debug!(kind = %D::KIND, name = %guard.name, bytes = staged.bytes.len(), "document saved");
        Ok(())
    }

    /// Persist the full next version of a locked document.
    pub fn save(&self, guard: &mut EntityGuard<D>, next: D) -> Result<(), SupplyChainError> {
        let staged = self.stage(guard, next)?;
        self.commit(guard, staged)?;
        Ok(())
    }

    /// Copies of every registered document, sorted by name.
    ///
    /// Walks the ledger index and hydrates documents this process has not
    /// seen yet.
    pub fn list(&self) -> Result<Vec<D>, SupplyChainError> {
        let mut docs = Vec::new();
        for name in self.indexed_names()? {
            if let Some(handle) = self.find(&name)? {
                docs.push(handle.snapshot());
            }
        }
        Ok(docs)
    }

    fn indexed_names(&self) -> Result<BTreeSet<String>, SupplyChainError> {
        match self.ledger.get(&index_key(D::KIND))? {
            Some(bytes) => codec::decode_index(D::KIND, &bytes),
            None => Ok(BTreeSet::new()),
        }
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}
