//! # Domain Errors
//!
//! Error types for the supply-chain contract.
//!
//! Every failure is reported synchronously to the caller of the failing
//! operation. Nothing is retried inside the core.

use super::entities::{EntityKind, ReportId};
use std::fmt;
use thiserror::Error;

/// Failures of the ledger `Get`/`Put` primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger could not be reached at all.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    /// A `Put` was not acknowledged.
    #[error("write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// A `Get` failed (not the same as an absent key).
    #[error("read failed for key {key}: {reason}")]
    ReadFailed { key: String, reason: String },
}

/// What a `NotFound` error refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    /// No registered entity of this kind and name.
    Entity { kind: EntityKind, name: String },
    /// The patient is not on the hospital's roster.
    RosterEntry { hospital: String, patient: String },
    /// No report with this ID for this patient at the hospital.
    Report {
        hospital: String,
        patient: String,
        report_id: ReportId,
    },
}

impl Missing {
    pub fn entity(kind: EntityKind, name: impl Into<String>) -> Self {
        Missing::Entity {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Entity { kind, name } => write!(f, "{} '{}'", kind, name),
            Missing::RosterEntry { hospital, patient } => {
                write!(f, "patient '{}' in roster of hospital '{}'", patient, hospital)
            }
            Missing::Report {
                hospital,
                patient,
                report_id,
            } => write!(
                f,
                "report {} for patient '{}' at hospital '{}'",
                report_id, patient, hospital
            ),
        }
    }
}

/// Errors returned by every supply-chain operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SupplyChainError {
    /// Duplicate creation of a named entity.
    #[error("{kind} already exists: '{name}'")]
    AlreadyExists { kind: EntityKind, name: String },

    /// Missing entity, roster entry or report.
    #[error("not found: {0}")]
    NotFound(Missing),

    /// No in-stock unit with this name at the holder.
    #[error("drug '{drug}' not available at '{holder}'")]
    DrugNotAvailable { holder: String, drug: String },

    /// The manufacturer already has an in-stock unit with this name.
    #[error("manufacturer '{manufacturer}' already has '{drug}' in stock")]
    DuplicateDrug { manufacturer: String, drug: String },

    /// Trace code could not be decoded.
    #[error("malformed trace code '{code}': {reason}")]
    MalformedCode { code: String, reason: &'static str },

    /// The source document was committed but the destination write failed.
    ///
    /// The ledger may now hold a debit with no matching credit; the caller
    /// must abort the surrounding ledger transaction.
    #[error(
        "partial transfer of {trace_code}: '{committed}' was written but '{failed}' was not"
    )]
    PartialTransfer {
        trace_code: String,
        committed: String,
        failed: String,
        #[source]
        cause: LedgerError,
    },

    /// Document encode/decode failure at the persistence boundary.
    #[error("serialization error for {kind} '{name}': {message}")]
    Serialization {
        kind: EntityKind,
        name: String,
        message: String,
    },

    /// A single-document ledger operation failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Caller-supplied value rejected before touching any state.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl SupplyChainError {
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        SupplyChainError::NotFound(Missing::entity(kind, name))
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SupplyChainError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True when the ledger may reflect half of a two-document transfer.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        matches!(self, SupplyChainError::PartialTransfer { .. })
    }

    /// Stable label for logs and metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            SupplyChainError::AlreadyExists { .. } => "already_exists",
            SupplyChainError::NotFound(_) => "not_found",
            SupplyChainError::DrugNotAvailable { .. } => "drug_not_available",
            SupplyChainError::DuplicateDrug { .. } => "duplicate_drug",
            SupplyChainError::MalformedCode { .. } => "malformed_code",
            SupplyChainError::PartialTransfer { .. } => "partial_transfer",
            SupplyChainError::Serialization { .. } => "serialization",
            SupplyChainError::Ledger(_) => "ledger",
            SupplyChainError::InvalidInput { .. } => "invalid_input",
        }
    }
}
