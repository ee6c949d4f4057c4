//! # Registry
//!
//! Creation and listing of manufacturers, hospitals and patients.

use super::*;
use crate::domain::validation::{validate_measure, validate_name, validate_text};
use crate::domain::{Document, SupplyChainError};
use tracing::info;

impl<W, T, N> SupplyChainService<W, T, N>
where
    W: WorldState,
    T: TimeSource,
    N: NonceSource,
{
    pub(crate) fn register_manufacturer(
        &self,
        name: &str,
        contact: &str,
    ) -> Result<(), SupplyChainError> {
        validate_name(&self.config, "manufacturer name", name)?;
        validate_text(&self.config, "contact", contact)?;

        self.manufacturers.create(Manufacturer::new(name, contact))?;

        info!(manufacturer = %name, "Manufacturer registered");
        observe::entity_registered(Manufacturer::KIND);
        Ok(())
    }

    pub(crate) fn register_hospital(
        &self,
        name: &str,
        contact: &str,
    ) -> Result<(), SupplyChainError> {
        validate_name(&self.config, "hospital name", name)?;
        validate_text(&self.config, "contact", contact)?;

        self.hospitals.create(Hospital::new(name, contact))?;

        info!(hospital = %name, "Hospital registered");
        observe::entity_registered(Hospital::KIND);
        Ok(())
    }

    pub(crate) fn register_patient(&self, patient: Patient) -> Result<(), SupplyChainError> {
        validate_name(&self.config, "patient name", &patient.name)?;
        validate_text(&self.config, "birth date", &patient.birth_date)?;
        validate_text(&self.config, "gender", &patient.gender)?;
        validate_text(&self.config, "contact", &patient.contact)?;
        validate_measure("height", patient.height)?;
        validate_measure("weight", patient.weight)?;

        let name = patient.name.clone();
        self.patients.create(patient)?;

        info!(patient = %name, "Patient registered");
        observe::entity_registered(Patient::KIND);
        Ok(())
    }
}
