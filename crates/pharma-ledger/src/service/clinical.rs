//! # Patients & Reports
//!
//! Hospital rosters and medical reports. All of it lives in the hospital
//! document and is changed under the hospital lock only.

use super::*;
use crate::domain::validation::{validate_needed_drugs, validate_text};
use crate::domain::{EntityKind, MedicalReport, Missing, ReportId, SupplyChainError};
use tracing::info;

impl<W, T, N> SupplyChainService<W, T, N>
where
    W: WorldState,
    T: TimeSource,
    N: NonceSource,
{
    fn require_patient(&self, patient: &str) -> Result<(), SupplyChainError> {
        if self.patients.exists(patient)? {
            Ok(())
        } else {
            Err(SupplyChainError::not_found(EntityKind::Patient, patient))
        }
    }

    /// Put a registered patient on the hospital roster. Idempotent: an already
    /// enrolled patient causes no ledger write.
    pub(crate) fn enroll(&self, hospital: &str, patient: &str) -> Result<(), SupplyChainError> {
        self.require_patient(patient)?;

        let mut guard = self.hospitals.lock(hospital)?;
        if guard.is_enrolled(patient) {
            return Ok(());
        }

        let mut next = (*guard).clone();
        next.enroll(patient);
        self.hospitals.save(&mut guard, next)?;

        info!(hospital = %hospital, patient = %patient, "Patient enrolled");
        Ok(())
    }

    /// Enroll and open a blank report in one write.
    pub(crate) fn examine(
        &self,
        patient: &str,
        hospital: &str,
    ) -> Result<ReportId, SupplyChainError> {
        self.require_patient(patient)?;

        let mut guard = self.hospitals.lock(hospital)?;
        let mut next = (*guard).clone();
        next.enroll(patient);
        let id = next.file_report(patient, "", Vec::new());
        self.hospitals.save(&mut guard, next)?;

        info!(hospital = %hospital, patient = %patient, report_id = id, "Examination recorded");
        observe::report_created();
        Ok(id)
    }

    pub(crate) fn file_report(
        &self,
        hospital: &str,
        patient: &str,
        symptoms: &str,
        needed_drugs: Vec<String>,
    ) -> Result<ReportId, SupplyChainError> {
        validate_text(&self.config, "symptoms", symptoms)?;
        validate_needed_drugs(&self.config, &needed_drugs)?;

        let mut guard = self.hospitals.lock(hospital)?;
        if !guard.is_enrolled(patient) {
            return Err(SupplyChainError::NotFound(Missing::RosterEntry {
                hospital: hospital.to_string(),
                patient: patient.to_string(),
            }));
        }

        // The ID is derived from the locked document, so it cannot collide
        let mut next = (*guard).clone();
        let id = next.file_report(patient, symptoms, needed_drugs);
        self.hospitals.save(&mut guard, next)?;

        info!(hospital = %hospital, patient = %patient, report_id = id, "Report created");
        observe::report_created();
        Ok(id)
    }

    pub(crate) fn read_report(
        &self,
        hospital: &str,
        patient: &str,
        report_id: ReportId,
    ) -> Result<MedicalReport, SupplyChainError> {
        let guard = self.hospitals.lock(hospital)?;
        guard
            .report_for(patient, report_id)
            .cloned()
            .ok_or_else(|| {
                SupplyChainError::NotFound(Missing::Report {
                    hospital: hospital.to_string(),
                    patient: patient.to_string(),
                    report_id,
                })
            })
    }
}
