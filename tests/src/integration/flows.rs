//! # Supply-Chain Lifecycle Flows
//!
//! A drug unit from production to the patient, with the trace code checked
//! at every hop.

#[cfg(test)]
mod tests {
    use super::super::{fresh_service, seed_network};
    use pharma_ledger::test_utils::TEST_TIME;
    use pharma_ledger::{trace_code, EntityKind, Missing, SupplyChainApi, SupplyChainError};

    #[test]
    fn test_drug_lifecycle_end_to_end() -> anyhow::Result<()> {
        let service = fresh_service();
        seed_network(&service)?;

        let code = service.produce_drug("AcmeCo", "Aspirin", 9.99)?;
        let origin = trace_code::decode(&code)?;
        assert_eq!(origin.production_time, TEST_TIME);

        // Manufacturer → hospital
        assert_eq!(service.hospital_buys_drug("GenHosp", "AcmeCo", "Aspirin")?, code);
        let manufacturers = service.get_manufacturers()?;
        assert_eq!(manufacturers[0].inventory.in_stock_count("Aspirin"), 0);
        let info = service.trace_drug(&code)?;
        assert_eq!(info.holder.as_deref(), Some("GenHosp"));
        assert_eq!(info.in_stock, Some(true));

        // Hospital → patient
        assert_eq!(service.patient_buys_drug("alice", "GenHosp", "Aspirin")?, code);
        let info = service.trace_drug(&code)?;
        assert_eq!(info.name, "Aspirin");
        assert_eq!(info.manufacturer, "AcmeCo");
        assert_eq!(info.price, 9.99);
        assert_eq!(info.holder_kind, Some(EntityKind::Hospital));
        assert_eq!(info.in_stock, Some(false));

        let hospitals = service.get_hospitals()?;
        let gen = hospitals.iter().find(|h| h.name == "GenHosp").unwrap();
        assert_eq!(
            gen.inventory.get(&code).unwrap().sold_to.as_deref(),
            Some("alice")
        );
        Ok(())
    }

    #[test]
    fn test_unit_has_single_holder() -> anyhow::Result<()> {
        let service = fresh_service();
        seed_network(&service)?;
        let code = service.produce_drug("AcmeCo", "Aspirin", 9.99)?;
        service.hospital_buys_drug("GenHosp", "AcmeCo", "Aspirin")?;

        let holders = service
            .get_hospitals()?
            .iter()
            .filter(|h| h.inventory.contains(&code))
            .count()
            + service
                .get_manufacturers()?
                .iter()
                .filter(|m| m.inventory.contains(&code))
                .count();
        assert_eq!(holders, 1);

        let err = service
            .hospital_buys_drug("Mercy", "AcmeCo", "Aspirin")
            .unwrap_err();
        assert!(matches!(err, SupplyChainError::DrugNotAvailable { .. }));
        Ok(())
    }

    #[test]
    fn test_several_units_of_one_drug() -> anyhow::Result<()> {
        let service = fresh_service();
        seed_network(&service)?;

        // One in stock at a time per manufacturer; sell through to restock
        let mut codes = Vec::new();
        for hospital in ["GenHosp", "GenHosp", "Mercy"] {
            codes.push(service.produce_drug("AcmeCo", "Ibuprofen", 4.5)?);
            service.hospital_buys_drug(hospital, "AcmeCo", "Ibuprofen")?;
        }
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 3);

        let gen = service
            .get_hospitals()?
            .into_iter()
            .find(|h| h.name == "GenHosp")
            .unwrap();
        assert_eq!(gen.inventory.in_stock_count("Ibuprofen"), 2);

        service.patient_buys_drug("alice", "GenHosp", "Ibuprofen")?;
        service.patient_buys_drug("bob", "GenHosp", "Ibuprofen")?;
        assert!(service
            .patient_buys_drug("alice", "GenHosp", "Ibuprofen")
            .is_err());
        Ok(())
    }

    #[test]
    fn test_patient_records_flow() -> anyhow::Result<()> {
        let service = fresh_service();
        seed_network(&service)?;

        let err = service
            .create_report("GenHosp", "alice", "cough", vec![])
            .unwrap_err();
        assert!(matches!(err, SupplyChainError::NotFound(Missing::RosterEntry { .. })));

        service.enroll_patient("GenHosp", "alice")?;
        assert_eq!(service.create_report("GenHosp", "alice", "cough", vec![])?, 1);
        assert_eq!(
            service.create_report("GenHosp", "alice", "fever", vec!["Aspirin".into()])?,
            2
        );

        // Roster and reports are per hospital
        assert!(service
            .create_report("Mercy", "alice", "cough", vec![])
            .is_err());
        assert_eq!(service.conduct_examination("alice", "Mercy")?, 1);

        let report = service.view_report("GenHosp", "alice", 2)?;
        assert_eq!(report.needed_drugs, vec!["Aspirin".to_string()]);
        assert!(service.view_report("GenHosp", "bob", 2).is_err());
        Ok(())
    }
}
