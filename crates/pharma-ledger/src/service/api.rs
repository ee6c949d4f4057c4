//! # Supply-Chain API Implementation
//!
//! Implements the `SupplyChainApi` trait. Every failure is logged and counted
//! here, once, under the operation's catalog name.

use super::*;
use crate::domain::{DrugInfo, MedicalReport, ReportId, SupplyChainError, TraceCode};
use crate::ports::inbound::SupplyChainApi;
use tracing::{instrument, warn};

fn tracked<R>(
    operation: &'static str,
    result: Result<R, SupplyChainError>,
) -> Result<R, SupplyChainError> {
    if let Err(err) = &result {
        warn!(operation, error_type = err.error_type(), error = %err, "Operation failed");
        observe::failure(operation, err);
    }
    result
}

impl<W, T, N> SupplyChainApi for SupplyChainService<W, T, N>
where
    W: WorldState,
    T: TimeSource,
    N: NonceSource,
{
    #[instrument(skip(self, contact))]
    fn create_manufacturer(&self, name: &str, contact: &str) -> Result<(), SupplyChainError> {
        tracked("CreateManufacturer", self.register_manufacturer(name, contact))
    }

    #[instrument(skip(self, contact))]
    fn create_hospital(&self, name: &str, contact: &str) -> Result<(), SupplyChainError> {
        tracked("CreateHospital", self.register_hospital(name, contact))
    }

    #[instrument(skip_all, fields(patient = %patient.name))]
    fn create_patient(&self, patient: Patient) -> Result<(), SupplyChainError> {
        tracked("CreatePatient", self.register_patient(patient))
    }

    fn get_manufacturers(&self) -> Result<Vec<Manufacturer>, SupplyChainError> {
        self.manufacturers.list()
    }

    fn get_hospitals(&self) -> Result<Vec<Hospital>, SupplyChainError> {
        self.hospitals.list()
    }

    fn get_patients(&self) -> Result<Vec<Patient>, SupplyChainError> {
        self.patients.list()
    }

    #[instrument(skip(self))]
    fn produce_drug(
        &self,
        manufacturer: &str,
        drug_name: &str,
        price: f64,
    ) -> Result<TraceCode, SupplyChainError> {
        tracked("ProduceDrug", self.produce(manufacturer, drug_name, price))
    }

    #[instrument(skip(self))]
    fn hospital_buys_drug(
        &self,
        hospital: &str,
        manufacturer: &str,
        drug_name: &str,
    ) -> Result<TraceCode, SupplyChainError> {
        let result = self.transfer_to_hospital(hospital, manufacturer, drug_name);
        observe::transfer("hospital", &result);
        tracked("HospitalBuyDrug", result)
    }

    #[instrument(skip(self))]
    fn patient_buys_drug(
        &self,
        patient: &str,
        hospital: &str,
        drug_name: &str,
    ) -> Result<TraceCode, SupplyChainError> {
        let result = self.sell_to_patient(patient, hospital, drug_name);
        observe::transfer("patient", &result);
        tracked("PatientBuyDrug", result)
    }

    #[instrument(skip(self))]
    fn trace_drug(&self, trace_code: &str) -> Result<DrugInfo, SupplyChainError> {
        tracked("TraceDrug", self.trace(trace_code))
    }

    #[instrument(skip(self))]
    fn enroll_patient(&self, hospital: &str, patient: &str) -> Result<(), SupplyChainError> {
        tracked("EnrollPatient", self.enroll(hospital, patient))
    }

    #[instrument(skip(self))]
    fn conduct_examination(
        &self,
        patient: &str,
        hospital: &str,
    ) -> Result<ReportId, SupplyChainError> {
        tracked("ConductExamination", self.examine(patient, hospital))
    }

    #[instrument(skip(self, symptoms, needed_drugs))]
    fn create_report(
        &self,
        hospital: &str,
        patient: &str,
        symptoms: &str,
        needed_drugs: Vec<String>,
    ) -> Result<ReportId, SupplyChainError> {
        tracked(
            "CreateReport",
            self.file_report(hospital, patient, symptoms, needed_drugs),
        )
    }

    #[instrument(skip(self))]
    fn view_report(
        &self,
        hospital: &str,
        patient: &str,
        report_id: ReportId,
    ) -> Result<MedicalReport, SupplyChainError> {
        tracked("ViewReport", self.read_report(hospital, patient, report_id))
    }
}
