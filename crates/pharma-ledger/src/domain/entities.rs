//! # Domain Entities
//!
//! Aggregate documents persisted to the ledger, and the drug records they own.
//!
//! Documents serialize with PascalCase field names. The per-entity lock lives
//! in the entity store, never inside a document.

use super::inventory::{DrugHolder, Inventory, StockItem};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Trace code string, the canonical key of a physical drug unit.
pub type TraceCode = String;

/// Report number, unique within one hospital.
pub type ReportId = u32;

/// Kinds of named aggregates.
///
/// The derived order is the global lock order for operations that lock more
/// than one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Manufacturer,
    Hospital,
    Patient,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Manufacturer => "manufacturer",
            EntityKind::Hospital => "hospital",
            EntityKind::Patient => "patient",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named aggregate stored as one ledger document.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + 'static {
    const KIND: EntityKind;

    fn name(&self) -> &str;
}

// =============================================================================
// DRUG RECORDS
// =============================================================================

/// A drug unit held by its manufacturer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManufacturerDrug {
    pub name: String,
    pub trace_code: TraceCode,
    pub manufacturer: String,
    pub price: f64,
    pub production_time: String,
    pub in_stock: bool,
}

impl StockItem for ManufacturerDrug {
    fn name(&self) -> &str {
        &self.name
    }

    fn trace_code(&self) -> &str {
        &self.trace_code
    }

    fn in_stock(&self) -> bool {
        self.in_stock
    }

    fn set_in_stock(&mut self, in_stock: bool) {
        self.in_stock = in_stock;
    }
}

/// A drug unit held by a hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HospitalDrug {
    pub name: String,
    pub trace_code: TraceCode,
    pub in_stock: bool,
    pub hospital_name: String,
    /// Patient the unit was dispensed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_to: Option<String>,
}

impl HospitalDrug {
    /// Re-type a unit bought from a manufacturer. The trace code is carried
    /// over unchanged.
    pub fn received(unit: ManufacturerDrug, hospital: &str) -> Self {
        Self {
            name: unit.name,
            trace_code: unit.trace_code,
            in_stock: true,
            hospital_name: hospital.to_string(),
            sold_to: None,
        }
    }
}

impl StockItem for HospitalDrug {
    fn name(&self) -> &str {
        &self.name
    }

    fn trace_code(&self) -> &str {
        &self.trace_code
    }

    fn in_stock(&self) -> bool {
        self.in_stock
    }

    fn set_in_stock(&mut self, in_stock: bool) {
        self.in_stock = in_stock;
    }
}

// =============================================================================
// AGGREGATES
// =============================================================================

/// Manufacturer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manufacturer {
    pub name: String,
    pub contact: String,
    pub inventory: Inventory<ManufacturerDrug>,
    pub channels: BTreeSet<String>,
}

impl Manufacturer {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            inventory: Inventory::new(),
            channels: BTreeSet::new(),
        }
    }
}

impl Document for Manufacturer {
    const KIND: EntityKind = EntityKind::Manufacturer;

    fn name(&self) -> &str {
        &self.name
    }
}

impl DrugHolder for Manufacturer {
    type Drug = ManufacturerDrug;

    fn holder_name(&self) -> &str {
        &self.name
    }

    fn inventory(&self) -> &Inventory<ManufacturerDrug> {
        &self.inventory
    }

    fn inventory_mut(&mut self) -> &mut Inventory<ManufacturerDrug> {
        &mut self.inventory
    }
}

/// A medical report filed by a hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalReport {
    #[serde(rename = "ID")]
    pub id: ReportId,
    pub patient_name: String,
    pub symptoms: String,
    pub needed_drugs: Vec<String>,
}

/// Hospital document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Hospital {
    pub name: String,
    pub contact: String,
    pub reports: BTreeMap<ReportId, MedicalReport>,
    pub inventory: Inventory<HospitalDrug>,
    /// Roster: patient name -> enrollment marker.
    pub patients: BTreeMap<String, bool>,
    pub channels: BTreeSet<String>,
}

impl Hospital {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            reports: BTreeMap::new(),
            inventory: Inventory::new(),
            patients: BTreeMap::new(),
            channels: BTreeSet::new(),
        }
    }

    /// Add a patient to the roster. Re-enrolling overwrites the marker.
    pub fn enroll(&mut self, patient: &str) {
        self.patients.insert(patient.to_string(), true);
    }

    pub fn is_enrolled(&self, patient: &str) -> bool {
        self.patients.contains_key(patient)
    }

    /// ID the next report will receive: report count + 1.
    pub fn next_report_id(&self) -> ReportId {
        ReportId::try_from(self.reports.len())
            .unwrap_or(ReportId::MAX - 1)
            .saturating_add(1)
    }

    /// Append a report for an enrolled patient and return its ID.
    ///
    /// The roster check is the caller's job; this only numbers and stores.
    pub fn file_report(
        &mut self,
        patient: &str,
        symptoms: impl Into<String>,
        needed_drugs: Vec<String>,
    ) -> ReportId {
        let id = self.next_report_id();
        self.reports.insert(
            id,
            MedicalReport {
                id,
                patient_name: patient.to_string(),
                symptoms: symptoms.into(),
                needed_drugs,
            },
        );
        id
    }

    /// Report with this ID if it belongs to `patient`.
    pub fn report_for(&self, patient: &str, id: ReportId) -> Option<&MedicalReport> {
        self.reports
            .get(&id)
            .filter(|report| report.patient_name == patient)
    }
}

impl Document for Hospital {
    const KIND: EntityKind = EntityKind::Hospital;

    fn name(&self) -> &str {
        &self.name
    }
}

impl DrugHolder for Hospital {
    type Drug = HospitalDrug;

    fn holder_name(&self) -> &str {
        &self.name
    }

    fn inventory(&self) -> &Inventory<HospitalDrug> {
        &self.inventory
    }

    fn inventory_mut(&mut self) -> &mut Inventory<HospitalDrug> {
        &mut self.inventory
    }
}

/// Patient document. Global, not owned by any hospital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Patient {
    pub name: String,
    pub birth_date: String,
    pub height: f64,
    pub weight: f64,
    pub gender: String,
    pub contact: String,
}

impl Document for Patient {
    const KIND: EntityKind = EntityKind::Patient;

    fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// TRACE RESULT
// =============================================================================

/// Provenance returned by a trace lookup.
///
/// The first five fields come from the trace code alone. The holder fields are
/// filled in only when a live inventory scan finds the unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DrugInfo {
    pub name: String,
    pub trace_code: TraceCode,
    pub manufacturer: String,
    pub price: f64,
    pub production_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_kind: Option<EntityKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}
