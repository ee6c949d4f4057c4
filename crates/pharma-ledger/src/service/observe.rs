//! Metric hooks. Compiled to no-ops without the `metrics` feature.

#[cfg(feature = "metrics")]
mod imp {
    use crate::domain::{EntityKind, SupplyChainError};
    use pharma_telemetry::metrics;

    pub fn entity_registered(kind: EntityKind) {
        metrics::ENTITIES_REGISTERED
            .with_label_values(&[kind.as_str()])
            .inc();
    }

    pub fn drug_produced() {
        metrics::DRUGS_PRODUCED.inc();
    }

    pub fn report_created() {
        metrics::REPORTS_CREATED.inc();
    }

    pub fn trace_lookup() {
        metrics::TRACE_LOOKUPS.inc();
    }

    pub fn transfer<T>(kind: &str, result: &Result<T, SupplyChainError>) {
        let outcome = match result {
            Ok(_) => "success",
            Err(e) if e.is_partial() => "partial",
            Err(_) => "failure",
        };
        metrics::record_transfer(kind, outcome);
    }

    pub fn failure(operation: &str, err: &SupplyChainError) {
        metrics::record_error(operation, err.error_type());
    }
}

#[cfg(not(feature = "metrics"))]
mod imp {
    use crate::domain::{EntityKind, SupplyChainError};

    pub fn entity_registered(_kind: EntityKind) {}

    pub fn drug_produced() {}

    pub fn report_created() {}

    pub fn trace_lookup() {}

    pub fn transfer<T>(_kind: &str, _result: &Result<T, SupplyChainError>) {}

    pub fn failure(_operation: &str, _err: &SupplyChainError) {}
}

pub(crate) use imp::*;
