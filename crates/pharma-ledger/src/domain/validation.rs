//! # Input Validation
//!
//! Checks applied before any entity is locked or any document is written.

use super::config::SupplyChainConfig;
use super::errors::SupplyChainError;
use super::trace_code::SEPARATOR;

/// Validate an entity or drug name.
///
/// Names end up inside trace codes and ledger keys: they must be non-empty,
/// free of the trace separator and control characters, and within the length
/// limit.
pub fn validate_name(
    config: &SupplyChainConfig,
    field: &'static str,
    value: &str,
) -> Result<(), SupplyChainError> {
    if value.trim().is_empty() {
        return Err(SupplyChainError::invalid(field, "must not be empty"));
    }
    if value.len() > config.max_name_len {
        return Err(SupplyChainError::invalid(
            field,
            format!("longer than {} bytes", config.max_name_len),
        ));
    }
    if value.contains(SEPARATOR) {
        return Err(SupplyChainError::invalid(
            field,
            format!("must not contain '{}'", SEPARATOR),
        ));
    }
    if value.chars().any(char::is_control) {
        return Err(SupplyChainError::invalid(
            field,
            "must not contain control characters",
        ));
    }
    Ok(())
}

/// Validate a free-text field (contact, symptoms, birth date, ...).
pub fn validate_text(
    config: &SupplyChainConfig,
    field: &'static str,
    value: &str,
) -> Result<(), SupplyChainError> {
    if value.len() > config.max_text_len {
        return Err(SupplyChainError::invalid(
            field,
            format!("longer than {} bytes", config.max_text_len),
        ));
    }
    Ok(())
}

/// Validate a body measurement (height, weight).
pub fn validate_measure(field: &'static str, value: f64) -> Result<(), SupplyChainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SupplyChainError::invalid(
            field,
            format!("{} is not a finite non-negative number", value),
        ));
    }
    Ok(())
}

/// Validate the drug list of a medical report.
pub fn validate_needed_drugs(
    config: &SupplyChainConfig,
    drugs: &[String],
) -> Result<(), SupplyChainError> {
    if drugs.len() > config.max_needed_drugs {
        return Err(SupplyChainError::invalid(
            "needed drugs",
            format!("more than {} entries", config.max_needed_drugs),
        ));
    }
    for drug in drugs {
        validate_name(config, "needed drug", drug)?;
    }
    Ok(())
}
