//! # Contract Invocation Flows
//!
//! The full catalog driven through `ContractRouter` with string arguments,
//! as a chaincode host would deliver them.

#[cfg(test)]
mod tests {
    use super::super::fresh_service;
    use pharma_ledger::{
        ContractError, ContractRouter, SupplyChainApi, SupplyChainError, OPERATIONS,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn invoke<A: SupplyChainApi>(
        router: &ContractRouter<A>,
        op: &str,
        args: &[&str],
    ) -> Result<Value, ContractError> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        router.invoke(op, &args)
    }

    #[test]
    fn test_catalog_session() -> anyhow::Result<()> {
        let router = ContractRouter::new(fresh_service());

        assert_eq!(
            invoke(&router, "CreateManufacturer", &["AcmeCo", "ops@acme.test"])?,
            Value::Null
        );
        invoke(&router, "CreateHospital", &["GenHosp", "555-0100"])?;
        invoke(
            &router,
            "CreatePatient",
            &["alice", "1990-05-17", "165.5", "58", "F", "alice@mail.test"],
        )?;

        let code = invoke(&router, "ProduceDrug", &["AcmeCo", "Aspirin", "12.5"])?;
        let code = code.as_str().unwrap().to_string();
        invoke(&router, "HospitalBuyDrug", &["GenHosp", "AcmeCo", "Aspirin"])?;
        invoke(&router, "BuyDrug", &["patient", "alice", "GenHosp", "Aspirin"])?;

        let info = invoke(&router, "TraceDrug", &[code.as_str()])?;
        assert_eq!(info["Name"], "Aspirin");
        assert_eq!(info["Price"], 12.5);
        assert_eq!(info["HolderKind"], "Hospital");

        invoke(&router, "EnrollPatient", &["GenHosp", "alice"])?;
        let id = invoke(
            &router,
            "CreateReport",
            &["GenHosp", "alice", "headache", "Aspirin,Water"],
        )?;
        let id = id.to_string();
        let report = invoke(&router, "ViewReport", &["alice", "GenHosp", id.as_str()])?;
        assert_eq!(
            report,
            json!({
                "ID": 1,
                "PatientName": "alice",
                "Symptoms": "headache",
                "NeededDrugs": ["Aspirin", "Water"],
            })
        );

        let patients = invoke(&router, "GetPatients", &[])?;
        assert_eq!(patients[0]["BirthDate"], "1990-05-17");
        Ok(())
    }

    #[test]
    fn test_boundary_errors() {
        let router = ContractRouter::new(fresh_service());

        assert!(matches!(
            invoke(&router, "Mint", &[]),
            Err(ContractError::UnknownOperation(op)) if op == "Mint"
        ));
        assert!(matches!(
            invoke(&router, "CreatePatient", &["bob", "2000-01-01", "tall", "70", "M", ""]),
            Err(ContractError::InvalidArguments { .. })
        ));
        assert!(matches!(
            invoke(&router, "ViewReport", &["bob", "GenHosp", "-1"]),
            Err(ContractError::InvalidArguments { .. })
        ));
        assert!(matches!(
            invoke(&router, "HospitalBuyDrug", &["GenHosp", "AcmeCo", "Aspirin"]),
            Err(ContractError::SupplyChain(SupplyChainError::NotFound(_)))
        ));
    }

    #[test]
    fn test_router_over_shared_service() -> anyhow::Result<()> {
        let service = Arc::new(fresh_service());
        let router = ContractRouter::new(Arc::clone(&service));

        invoke(&router, "CreateHospital", &["GenHosp", ""])?;
        let listed = invoke(&router, "GetHospitals", &[])?;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
        assert_eq!(router.api().get_hospitals()?.len(), 1);

        // Every catalog name is known to the router
        for op in OPERATIONS {
            assert!(!matches!(
                invoke(&router, op, &["x"; 7]),
                Err(ContractError::UnknownOperation(_))
            ));
        }
        Ok(())
    }
}
