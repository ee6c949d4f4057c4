//! # Telemetry
//!
//! Ledger operations recorded through `pharma-telemetry`.

#[cfg(test)]
mod tests {
    use super::super::{fresh_service, seed_network};
    use pharma_ledger::SupplyChainApi;
    use pharma_telemetry::{
        encode_metrics, init_telemetry, register_metrics, TelemetryConfig, TRANSFERS,
    };

    #[test]
    fn test_operations_show_up_in_metrics() -> anyhow::Result<()> {
        // Registration is process-wide; a second call only reports duplicates
        let _ = register_metrics();

        let service = fresh_service();
        seed_network(&service)?;
        service.produce_drug("AcmeCo", "Aspirin", 9.99)?;
        service.hospital_buys_drug("GenHosp", "AcmeCo", "Aspirin")?;
        let _ = service.hospital_buys_drug("Mercy", "AcmeCo", "Aspirin");

        assert!(TRANSFERS.with_label_values(&["hospital", "success"]).get() >= 1.0);
        assert!(TRANSFERS.with_label_values(&["hospital", "failure"]).get() >= 1.0);

        let text = encode_metrics()?;
        assert!(text.contains("pharma_transfers_total"));
        assert!(text.contains("pharma_errors_total"));
        assert!(text.contains("pharma_drugs_produced_total"));
        Ok(())
    }

    #[test]
    fn test_telemetry_bootstrap_without_console() {
        let config = TelemetryConfig {
            console_output: false,
            ..TelemetryConfig::default()
        };
        // Either this test owns the global subscriber, or metrics were already
        // registered by another test and init reports it.
        match init_telemetry(config) {
            Ok(guard) => drop(guard),
            Err(err) => assert!(!err.to_string().is_empty()),
        }
    }
}
