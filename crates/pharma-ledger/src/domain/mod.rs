//! # Domain Layer
//!
//! Pure domain logic for drug provenance: aggregates, inventories, the trace
//! code codec and the error taxonomy.
//!
//! ## Modules
//!
//! - `entities` - Manufacturer, Hospital, Patient documents and drug records
//! - `inventory` - Trace-code keyed inventories and the `DrugHolder` trait
//! - `trace_code` - Trace code encode/decode
//! - `errors` - Error types
//! - `config` - Service configuration
//! - `validation` - Input checks

pub mod config;
pub mod entities;
pub mod errors;
pub mod inventory;
pub mod trace_code;
pub mod validation;

pub use config::SupplyChainConfig;
pub use entities::{
    Document, DrugInfo, EntityKind, Hospital, HospitalDrug, Manufacturer, ManufacturerDrug,
    MedicalReport, Patient, ReportId, TraceCode,
};
pub use errors::{LedgerError, Missing, SupplyChainError};
pub use inventory::{DrugHolder, Inventory, StockItem};
pub use trace_code::Provenance;
