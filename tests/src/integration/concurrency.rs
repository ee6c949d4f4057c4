//! # Concurrent Invocations
//!
//! The service shared through an `Arc` and driven from blocking tasks on a
//! multi-thread tokio runtime, the way a contract host fans out requests.

#[cfg(test)]
mod tests {
    use super::super::{fresh_service, seed_network};
    use pharma_ledger::{SupplyChainApi, SupplyChainError};
    use std::sync::Arc;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_hospitals_single_unit() -> anyhow::Result<()> {
        for _round in 0..20 {
            let service = Arc::new(fresh_service());
            seed_network(service.as_ref())?;
            service.produce_drug("AcmeCo", "Aspirin", 9.99)?;

            let tasks: Vec<_> = ["GenHosp", "Mercy"]
                .into_iter()
                .map(|hospital| {
                    let service = Arc::clone(&service);
                    tokio::task::spawn_blocking(move || {
                        service.hospital_buys_drug(hospital, "AcmeCo", "Aspirin")
                    })
                })
                .collect();

            let mut results = Vec::new();
            for task in tasks {
                results.push(task.await?);
            }

            assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
            assert!(results
                .iter()
                .any(|r| matches!(r, Err(SupplyChainError::DrugNotAvailable { .. }))));
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_reports_unique_ids() -> anyhow::Result<()> {
        let service = Arc::new(fresh_service());
        seed_network(service.as_ref())?;
        service.enroll_patient("GenHosp", "alice")?;
        service.enroll_patient("GenHosp", "bob")?;

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let service = Arc::clone(&service);
                let patient = if i % 2 == 0 { "alice" } else { "bob" };
                tokio::task::spawn_blocking(move || {
                    service.create_report("GenHosp", patient, "checkup", vec![])
                })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await??);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<u32>>());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_mixed_workload_conserves_units() -> anyhow::Result<()> {
        let service = Arc::new(fresh_service());
        seed_network(service.as_ref())?;
        let drugs: Vec<String> = (0..16).map(|i| format!("Drug{:02}", i)).collect();
        for drug in &drugs {
            service.produce_drug("AcmeCo", drug, 2.0)?;
        }

        // Every hospital tries to buy every drug, every patient tries to buy
        // every drug from every hospital, all at once.
        let mut tasks = Vec::new();
        for hospital in ["GenHosp", "Mercy"] {
            for drug in drugs.clone() {
                let service = Arc::clone(&service);
                tasks.push(tokio::task::spawn_blocking(move || {
                    service.hospital_buys_drug(hospital, "AcmeCo", &drug).is_ok()
                }));
            }
        }
        let mut bought = 0;
        for task in tasks {
            if task.await? {
                bought += 1;
            }
        }
        assert_eq!(bought, drugs.len());

        let mut tasks = Vec::new();
        let pairs = [
            ("alice", "GenHosp"),
            ("bob", "GenHosp"),
            ("alice", "Mercy"),
            ("bob", "Mercy"),
        ];
        for (patient, hospital) in pairs {
            for drug in drugs.clone() {
                let service = Arc::clone(&service);
                tasks.push(tokio::task::spawn_blocking(move || {
                    service.patient_buys_drug(patient, hospital, &drug).is_ok()
                }));
            }
        }
        let mut sold = 0;
        for task in tasks {
            if task.await? {
                sold += 1;
            }
        }
        assert_eq!(sold, drugs.len());

        let units: usize = service
            .get_hospitals()?
            .iter()
            .map(|h| h.inventory.len())
            .sum();
        assert_eq!(units, drugs.len());
        assert!(service.get_manufacturers()?[0].inventory.is_empty());
        Ok(())
    }
}
