//! # Ledger Faults and Restarts
//!
//! Behaviour when ledger writes are rejected, and when a new process starts
//! over a world state written by an earlier one.

#[cfg(test)]
mod tests {
    use super::super::seed_network;
    use pharma_ledger::test_utils::{make_service, FailingWorldState};
    use pharma_ledger::{
        InMemoryWorldState, LedgerError, SupplyChainApi, SupplyChainError, WorldState,
    };
    use std::sync::Arc;

    #[test]
    fn test_partial_transfer_matches_ledger() -> anyhow::Result<()> {
        let ledger = Arc::new(FailingWorldState::new());
        let service = make_service(ledger.clone());
        seed_network(&service)?;
        let code = service.produce_drug("AcmeCo", "Aspirin", 9.99)?;

        ledger.fail_puts_with_prefix("hospital:");
        let err = service
            .hospital_buys_drug("GenHosp", "AcmeCo", "Aspirin")
            .unwrap_err();
        ledger.heal();

        assert!(err.is_partial());
        match err {
            SupplyChainError::PartialTransfer { trace_code, cause, .. } => {
                assert_eq!(trace_code, code);
                assert!(matches!(cause, LedgerError::WriteRejected { .. }));
            }
            other => panic!("Expected PartialTransfer, got {:?}", other),
        }

        // A fresh process over the same ledger sees exactly what the caches saw
        let restarted = make_service(ledger.clone());
        let info = restarted.trace_drug(&code)?;
        assert!(info.holder.is_none());
        assert!(matches!(
            restarted.hospital_buys_drug("GenHosp", "AcmeCo", "Aspirin"),
            Err(SupplyChainError::DrugNotAvailable { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_rejected_write_leaves_no_trace() -> anyhow::Result<()> {
        let ledger = Arc::new(FailingWorldState::new());
        let service = make_service(ledger.clone());
        seed_network(&service)?;

        ledger.fail_puts_with_prefix("manufacturer:");
        assert!(matches!(
            service.produce_drug("AcmeCo", "Aspirin", 9.99),
            Err(SupplyChainError::Ledger(_))
        ));
        assert!(matches!(
            service.create_manufacturer("Zenith", ""),
            Err(SupplyChainError::Ledger(_))
        ));
        ledger.heal();

        assert!(service.get_manufacturers()?[0].inventory.is_empty());
        // The failed registration did not reserve the name
        service.create_manufacturer("Zenith", "")?;
        Ok(())
    }

    #[test]
    fn test_restart_hydrates_every_kind() -> anyhow::Result<()> {
        let ledger = Arc::new(InMemoryWorldState::new());
        let code = {
            let service = make_service(ledger.clone());
            seed_network(&service)?;
            service.enroll_patient("GenHosp", "alice")?;
            service.create_report("GenHosp", "alice", "cough", vec!["Aspirin".into()])?;
            let code = service.produce_drug("AcmeCo", "Aspirin", 9.99)?;
            service.hospital_buys_drug("GenHosp", "AcmeCo", "Aspirin")?;
            code
        };
        assert!(ledger.get("hospital:GenHosp")?.is_some());
        assert!(ledger.get("patient:alice")?.is_some());

        let restarted = make_service(ledger);
        let hospitals: Vec<String> =
            restarted.get_hospitals()?.into_iter().map(|h| h.name).collect();
        assert_eq!(hospitals, vec!["GenHosp", "Mercy"]);
        assert_eq!(restarted.get_patients()?.len(), 2);
        assert_eq!(restarted.trace_drug(&code)?.holder.as_deref(), Some("GenHosp"));
        assert_eq!(restarted.view_report("GenHosp", "alice", 1)?.symptoms, "cough");
        assert_eq!(restarted.create_report("GenHosp", "alice", "fever", vec![])?, 2);
        assert_eq!(restarted.patient_buys_drug("bob", "GenHosp", "Aspirin")?, code);
        assert!(matches!(
            restarted.create_patient(pharma_ledger::test_utils::make_patient("alice")),
            Err(SupplyChainError::AlreadyExists { .. })
        ));
        Ok(())
    }
}
