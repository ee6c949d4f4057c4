//! # Inventory
//!
//! Per-holder collection of drug units keyed by trace code.
//!
//! The trace code is the only identifier that is unique per physical unit, so
//! it is the map key. Several units with the same drug name may coexist under
//! one holder; lookups by name are a secondary scan.

use super::errors::SupplyChainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A drug record that can sit in an inventory.
pub trait StockItem {
    fn name(&self) -> &str;
    fn trace_code(&self) -> &str;
    fn in_stock(&self) -> bool;
    fn set_in_stock(&mut self, in_stock: bool);
}

/// Drug units keyed by trace code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory<D> {
    units: BTreeMap<String, D>,
}

impl<D> Default for Inventory<D> {
    fn default() -> Self {
        Self {
            units: BTreeMap::new(),
        }
    }
}

impl<D: StockItem> Inventory<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a unit under its trace code, returning any unit it replaced.
    pub fn insert(&mut self, unit: D) -> Option<D> {
        self.units.insert(unit.trace_code().to_string(), unit)
    }

    pub fn get(&self, trace_code: &str) -> Option<&D> {
        self.units.get(trace_code)
    }

    pub fn get_mut(&mut self, trace_code: &str) -> Option<&mut D> {
        self.units.get_mut(trace_code)
    }

    pub fn contains(&self, trace_code: &str) -> bool {
        self.units.contains_key(trace_code)
    }

    /// First in-stock unit with this drug name, in trace-code order.
    pub fn find_in_stock(&self, drug_name: &str) -> Option<&D> {
        self.units
            .values()
            .find(|unit| unit.in_stock() && unit.name() == drug_name)
    }

    pub fn in_stock_count(&self, drug_name: &str) -> usize {
        self.units
            .values()
            .filter(|unit| unit.in_stock() && unit.name() == drug_name)
            .count()
    }

    /// Remove and return the first in-stock unit with this drug name.
    pub fn take_in_stock(&mut self, drug_name: &str) -> Option<D> {
        let key = self.find_in_stock(drug_name)?.trace_code().to_string();
        self.units.remove(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// An aggregate that owns an inventory.
pub trait DrugHolder {
    type Drug: StockItem;

    fn holder_name(&self) -> &str;
    fn inventory(&self) -> &Inventory<Self::Drug>;
    fn inventory_mut(&mut self) -> &mut Inventory<Self::Drug>;

    /// Insert a unit keyed by its trace code.
    fn add_drug(&mut self, unit: Self::Drug) -> Option<Self::Drug> {
        self.inventory_mut().insert(unit)
    }

    /// Remove an in-stock unit by drug name.
    fn remove_drug(&mut self, drug_name: &str) -> Result<Self::Drug, SupplyChainError> {
        match self.inventory_mut().take_in_stock(drug_name) {
            Some(unit) => Ok(unit),
            None => Err(SupplyChainError::DrugNotAvailable {
                holder: self.holder_name().to_string(),
                drug: drug_name.to_string(),
            }),
        }
    }

    /// Flip a unit to sold without removing the record.
    fn mark_sold(&mut self, trace_code: &str) -> Result<&mut Self::Drug, SupplyChainError> {
        let holder = self.holder_name().to_string();
        match self.inventory_mut().get_mut(trace_code) {
            Some(unit) if unit.in_stock() => {
                unit.set_in_stock(false);
                Ok(unit)
            }
            Some(unit) => Err(SupplyChainError::DrugNotAvailable {
                holder,
                drug: unit.name().to_string(),
            }),
            None => Err(SupplyChainError::DrugNotAvailable {
                holder,
                drug: trace_code.to_string(),
            }),
        }
    }
}
