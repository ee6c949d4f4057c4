//! Prometheus metrics for the supply-chain contract.
//!
//! All metrics follow the naming convention: `pharma_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // PRODUCTION
    // =========================================================================

    /// Total drug units produced by manufacturers
    pub static ref DRUGS_PRODUCED: Counter = Counter::new(
        "pharma_drugs_produced_total",
        "Total number of drug units produced"
    ).expect("metric creation failed");

    // =========================================================================
    // OWNERSHIP TRANSFER
    // =========================================================================

    /// Transfers by kind and outcome
    pub static ref TRANSFERS: CounterVec = CounterVec::new(
        Opts::new("pharma_transfers_total", "Drug ownership transfers"),
        &["kind", "outcome"]  // kind: hospital/patient, outcome: success/failure/partial
    ).expect("metric creation failed");

    // =========================================================================
    // CLINICAL
    // =========================================================================

    /// Total medical reports created
    pub static ref REPORTS_CREATED: Counter = Counter::new(
        "pharma_reports_created_total",
        "Total number of medical reports created"
    ).expect("metric creation failed");

    /// Registered entities in this process
    pub static ref ENTITIES_REGISTERED: CounterVec = CounterVec::new(
        Opts::new("pharma_entities_registered_total", "Entities created by kind"),
        &["kind"]
    ).expect("metric creation failed");

    /// Trace lookups served
    pub static ref TRACE_LOOKUPS: Counter = Counter::new(
        "pharma_trace_lookups_total",
        "Number of trace code lookups served"
    ).expect("metric creation failed");

    // =========================================================================
    // ERROR METRICS
    // =========================================================================

    /// Operation errors by type
    pub static ref OPERATION_ERRORS: CounterVec = CounterVec::new(
        Opts::new("pharma_errors_total", "Errors by operation and type"),
        &["operation", "error_type"]
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(DRUGS_PRODUCED.clone()),
        Box::new(TRANSFERS.clone()),
        Box::new(REPORTS_CREATED.clone()),
        Box::new(ENTITIES_REGISTERED.clone()),
        Box::new(TRACE_LOOKUPS.clone()),
        Box::new(OPERATION_ERRORS.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record a transfer outcome.
pub fn record_transfer(kind: &str, outcome: &str) {
    TRANSFERS.with_label_values(&[kind, outcome]).inc();
}

/// Record a failed operation.
pub fn record_error(operation: &str, error_type: &str) {
    OPERATION_ERRORS
        .with_label_values(&[operation, error_type])
        .inc();
}
