//! # Inbound Ports (Driving Ports)
//!
//! The operation catalog exposed to the contract-invocation boundary.

use crate::domain::{
    DrugInfo, Hospital, Manufacturer, MedicalReport, Patient, ReportId, SupplyChainError,
    TraceCode,
};

/// Primary API of the supply-chain contract.
///
/// Every method is a self-contained unit of work and may run concurrently with
/// any other.
pub trait SupplyChainApi: Send + Sync {
    // === Registry ===

    fn create_manufacturer(&self, name: &str, contact: &str) -> Result<(), SupplyChainError>;

    fn create_hospital(&self, name: &str, contact: &str) -> Result<(), SupplyChainError>;

    fn create_patient(&self, patient: Patient) -> Result<(), SupplyChainError>;

    fn get_manufacturers(&self) -> Result<Vec<Manufacturer>, SupplyChainError>;

    fn get_hospitals(&self) -> Result<Vec<Hospital>, SupplyChainError>;

    fn get_patients(&self) -> Result<Vec<Patient>, SupplyChainError>;

    // === Production & Transfer ===

    fn produce_drug(
        &self,
        manufacturer: &str,
        drug_name: &str,
        price: f64,
    ) -> Result<TraceCode, SupplyChainError>;

    fn hospital_buys_drug(
        &self,
        hospital: &str,
        manufacturer: &str,
        drug_name: &str,
    ) -> Result<TraceCode, SupplyChainError>;

    fn patient_buys_drug(
        &self,
        patient: &str,
        hospital: &str,
        drug_name: &str,
    ) -> Result<TraceCode, SupplyChainError>;

    fn trace_drug(&self, trace_code: &str) -> Result<DrugInfo, SupplyChainError>;

    // === Patients & Reports ===

    fn enroll_patient(&self, hospital: &str, patient: &str) -> Result<(), SupplyChainError>;

    fn conduct_examination(&self, patient: &str, hospital: &str)
        -> Result<ReportId, SupplyChainError>;

    fn create_report(
        &self,
        hospital: &str,
        patient: &str,
        symptoms: &str,
        needed_drugs: Vec<String>,
    ) -> Result<ReportId, SupplyChainError>;

    fn view_report(
        &self,
        hospital: &str,
        patient: &str,
        report_id: ReportId,
    ) -> Result<MedicalReport, SupplyChainError>;
}

impl<A: SupplyChainApi + ?Sized> SupplyChainApi for std::sync::Arc<A> {
    fn create_manufacturer(&self, name: &str, contact: &str) -> Result<(), SupplyChainError> {
        (**self).create_manufacturer(name, contact)
    }

    fn create_hospital(&self, name: &str, contact: &str) -> Result<(), SupplyChainError> {
        (**self).create_hospital(name, contact)
    }

    fn create_patient(&self, patient: Patient) -> Result<(), SupplyChainError> {
        (**self).create_patient(patient)
    }

    fn get_manufacturers(&self) -> Result<Vec<Manufacturer>, SupplyChainError> {
        (**self).get_manufacturers()
    }

    fn get_hospitals(&self) -> Result<Vec<Hospital>, SupplyChainError> {
        (**self).get_hospitals()
    }

    fn get_patients(&self) -> Result<Vec<Patient>, SupplyChainError> {
        (**self).get_patients()
    }

    fn produce_drug(
        &self,
        manufacturer: &str,
        drug_name: &str,
        price: f64,
    ) -> Result<TraceCode, SupplyChainError> {
        (**self).produce_drug(manufacturer, drug_name, price)
    }

    fn hospital_buys_drug(
        &self,
        hospital: &str,
        manufacturer: &str,
        drug_name: &str,
    ) -> Result<TraceCode, SupplyChainError> {
        (**self).hospital_buys_drug(hospital, manufacturer, drug_name)
    }

    fn patient_buys_drug(
        &self,
        patient: &str,
        hospital: &str,
        drug_name: &str,
    ) -> Result<TraceCode, SupplyChainError> {
        (**self).patient_buys_drug(patient, hospital, drug_name)
    }

    fn trace_drug(&self, trace_code: &str) -> Result<DrugInfo, SupplyChainError> {
        (**self).trace_drug(trace_code)
    }

    fn enroll_patient(&self, hospital: &str, patient: &str) -> Result<(), SupplyChainError> {
        (**self).enroll_patient(hospital, patient)
    }

    fn conduct_examination(
        &self,
        patient: &str,
        hospital: &str,
    ) -> Result<ReportId, SupplyChainError> {
        (**self).conduct_examination(patient, hospital)
    }

    fn create_report(
        &self,
        hospital: &str,
        patient: &str,
        symptoms: &str,
        needed_drugs: Vec<String>,
    ) -> Result<ReportId, SupplyChainError> {
        (**self).create_report(hospital, patient, symptoms, needed_drugs)
    }

    fn view_report(
        &self,
        hospital: &str,
        patient: &str,
        report_id: ReportId,
    ) -> Result<MedicalReport, SupplyChainError> {
        (**self).view_report(hospital, patient, report_id)
    }
}
