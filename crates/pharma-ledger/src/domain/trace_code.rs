//! # Trace Code Codec
//!
//! A trace code is `name|manufacturer|price|production_time|nonce`.
//!
//! Decoding needs nothing but the code itself, so none of the encoded text
//! fields may contain the separator. Names are checked when entities are
//! created and drugs are produced; `Provenance::validate` repeats the check
//! before encoding.
//!
//! The price uses Rust's shortest round-trip float formatting, so decoding
//! returns exactly the price that was encoded.

use super::errors::SupplyChainError;
use serde::{Deserialize, Serialize};

/// Field separator.
pub const SEPARATOR: char = '|';

/// name, manufacturer, price, production time, nonce
const FIELD_COUNT: usize = 5;

/// The four semantic fields carried by a trace code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub drug_name: String,
    pub manufacturer: String,
    pub price: f64,
    pub production_time: String,
}

impl Provenance {
    pub fn new(
        drug_name: impl Into<String>,
        manufacturer: impl Into<String>,
        price: f64,
        production_time: impl Into<String>,
    ) -> Self {
        Self {
            drug_name: drug_name.into(),
            manufacturer: manufacturer.into(),
            price,
            production_time: production_time.into(),
        }
    }

    /// Check that every field survives an encode/decode cycle.
    pub fn validate(&self) -> Result<(), SupplyChainError> {
        check_text("drug name", &self.drug_name)?;
        check_text("manufacturer", &self.manufacturer)?;
        check_text("production time", &self.production_time)?;
        check_price(self.price)
    }
}

fn check_text(field: &'static str, value: &str) -> Result<(), SupplyChainError> {
    if value.is_empty() {
        return Err(SupplyChainError::invalid(field, "must not be empty"));
    }
    if value.contains(SEPARATOR) {
        return Err(SupplyChainError::invalid(
            field,
            format!("must not contain '{}'", SEPARATOR),
        ));
    }
    Ok(())
}

/// Prices must be finite and non-negative.
pub fn check_price(price: f64) -> Result<(), SupplyChainError> {
    if !price.is_finite() || price < 0.0 {
        return Err(SupplyChainError::invalid(
            "price",
            format!("{} is not a finite non-negative amount", price),
        ));
    }
    Ok(())
}

/// Build a trace code from validated provenance and a nonce.
///
/// Callers draw the nonce from a random source so that identical provenance
/// produced twice still yields distinct codes.
pub fn encode(provenance: &Provenance, nonce: u64) -> Result<String, SupplyChainError> {
    provenance.validate()?;
    Ok(format!(
        "{name}{sep}{manufacturer}{sep}{price}{sep}{time}{sep}{nonce}",
        name = provenance.drug_name,
        manufacturer = provenance.manufacturer,
        price = provenance.price,
        time = provenance.production_time,
        nonce = nonce,
        sep = SEPARATOR,
    ))
}

/// Recover the provenance fields from a trace code.
pub fn decode(code: &str) -> Result<Provenance, SupplyChainError> {
    let malformed = |reason: &'static str| SupplyChainError::MalformedCode {
        code: code.to_string(),
        reason,
    };

    let parts: Vec<&str> = code.split(SEPARATOR).collect();
    if parts.len() < FIELD_COUNT {
        return Err(malformed("too few fields"));
    }
    if parts.len() > FIELD_COUNT {
        return Err(malformed("too many fields"));
    }
    if parts[..4].iter().any(|part| part.is_empty()) {
        return Err(malformed("empty field"));
    }

    let price: f64 = parts[2].parse().map_err(|_| malformed("price is not numeric"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(malformed("price out of range"));
    }
    parts[4]
        .parse::<u64>()
        .map_err(|_| malformed("nonce is not an integer"))?;

    Ok(Provenance {
        drug_name: parts[0].to_string(),
        manufacturer: parts[1].to_string(),
        price,
        production_time: parts[3].to_string(),
    })
}
