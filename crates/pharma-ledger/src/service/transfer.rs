//! # Ownership Transfer Engine
//!
//! Drug lifecycle: produced at a manufacturer, bought by a hospital, sold to a
//! patient.
//!
//! ```text
//! Produced(in stock @ manufacturer)
//!     │ hospital_buys_drug   (locks manufacturer, then hospital)
//!     ▼
//! AtHospital(in stock @ hospital)
//!     │ patient_buys_drug    (locks hospital)
//!     ▼
//! SoldToPatient(out of stock @ hospital, sold_to = patient)
//! ```

use super::*;
use crate::domain::trace_code::{self, check_price, Provenance};
use crate::domain::validation::validate_name;
use crate::domain::{
    DrugHolder, DrugInfo, EntityKind, HospitalDrug, ManufacturerDrug, StockItem,
    SupplyChainError, TraceCode,
};
use tracing::{debug, error, info};

/// Nonce draws before giving up on finding an unused trace code.
const MAX_NONCE_DRAWS: usize = 8;

impl<W, T, N> SupplyChainService<W, T, N>
where
    W: WorldState,
    T: TimeSource,
    N: NonceSource,
{
    pub(crate) fn produce(
        &self,
        manufacturer: &str,
        drug_name: &str,
        price: f64,
    ) -> Result<TraceCode, SupplyChainError> {
        validate_name(&self.config, "drug name", drug_name)?;
        check_price(price)?;

        let mut guard = self.manufacturers.lock(manufacturer)?;
        if guard.inventory.find_in_stock(drug_name).is_some() {
            return Err(SupplyChainError::DuplicateDrug {
                manufacturer: manufacturer.to_string(),
                drug: drug_name.to_string(),
            });
        }

        let production_time = self.time_source.now_rfc3339();
        let provenance = Provenance::new(drug_name, manufacturer, price, production_time);
        let code = self.unused_trace_code(&provenance, |code| guard.inventory.contains(code))?;

        let mut next = (*guard).clone();
        next.add_drug(ManufacturerDrug {
            name: provenance.drug_name,
            trace_code: code.clone(),
            manufacturer: provenance.manufacturer,
            price: provenance.price,
            production_time: provenance.production_time,
            in_stock: true,
        });
        self.manufacturers.save(&mut guard, next)?;

        info!(manufacturer = %manufacturer, drug = %drug_name, trace_code = %code, "Drug produced");
        observe::drug_produced();
        Ok(code)
    }

    fn unused_trace_code(
        &self,
        provenance: &Provenance,
        taken: impl Fn(&str) -> bool,
    ) -> Result<TraceCode, SupplyChainError> {
        for _ in 0..MAX_NONCE_DRAWS {
            let code = trace_code::encode(provenance, self.nonce_source.next_nonce())?;
            if !taken(&code) {
                return Ok(code);
            }
            debug!(trace_code = %code, "Trace code collision, drawing a new nonce");
        }
        Err(SupplyChainError::invalid(
            "nonce",
            format!("no unused trace code after {} draws", MAX_NONCE_DRAWS),
        ))
    }

    /// Move one in-stock unit from a manufacturer to a hospital.
    ///
    /// Both documents are encoded before either is written. The manufacturer
    /// is written first; if the hospital write then fails the result is
    /// `PartialTransfer` and nothing is rolled back.
    pub(crate) fn transfer_to_hospital(
        &self,
        hospital: &str,
        manufacturer: &str,
        drug_name: &str,
    ) -> Result<TraceCode, SupplyChainError> {
        let seller_handle = self.manufacturers.handle(manufacturer)?;
        let buyer_handle = self.hospitals.handle(hospital)?;

        // Lock order: Manufacturer < Hospital
        debug_assert!(EntityKind::Manufacturer < EntityKind::Hospital);
        let mut seller = seller_handle.lock();
        let mut buyer = buyer_handle.lock();

        let mut next_seller = (*seller).clone();
        let unit = next_seller.remove_drug(drug_name)?;
        let code = unit.trace_code.clone();

        let mut next_buyer = (*buyer).clone();
        next_buyer.add_drug(HospitalDrug::received(unit, hospital));

        let staged_seller = self.manufacturers.stage(&seller, next_seller)?;
        let staged_buyer = self.hospitals.stage(&buyer, next_buyer)?;

        self.manufacturers.commit(&mut seller, staged_seller)?;
        if let Err(cause) = self.hospitals.commit(&mut buyer, staged_buyer) {
            error!(
                manufacturer = %manufacturer,
                hospital = %hospital,
                trace_code = %code,
                error = %cause,
                "Hospital write failed after manufacturer write, transfer is partial"
            );
            return Err(SupplyChainError::PartialTransfer {
                trace_code: code,
                committed: manufacturer.to_string(),
                failed: hospital.to_string(),
                cause,
            });
        }

        info!(
            manufacturer = %manufacturer,
            hospital = %hospital,
            trace_code = %code,
            "Drug transferred to hospital"
        );
        Ok(code)
    }

    /// Sell one in-stock unit to a registered patient. The unit stays in the
    /// hospital inventory, marked out of stock.
    pub(crate) fn sell_to_patient(
        &self,
        patient: &str,
        hospital: &str,
        drug_name: &str,
    ) -> Result<TraceCode, SupplyChainError> {
        if !self.patients.exists(patient)? {
            return Err(SupplyChainError::not_found(EntityKind::Patient, patient));
        }

        let mut guard = self.hospitals.lock(hospital)?;
        let code = guard
            .inventory
            .find_in_stock(drug_name)
            .map(|unit| unit.trace_code().to_string())
            .ok_or_else(|| SupplyChainError::DrugNotAvailable {
                holder: hospital.to_string(),
                drug: drug_name.to_string(),
            })?;

        let mut next = (*guard).clone();
        next.mark_sold(&code)?.sold_to = Some(patient.to_string());
        self.hospitals.save(&mut guard, next)?;

        info!(hospital = %hospital, patient = %patient, trace_code = %code, "Drug sold to patient");
        Ok(code)
    }

    /// Decode a trace code and, if enabled, find the unit's current holder.
    pub(crate) fn trace(&self, code: &str) -> Result<DrugInfo, SupplyChainError> {
        let provenance = trace_code::decode(code)?;
        let mut info = DrugInfo {
            name: provenance.drug_name,
            trace_code: code.to_string(),
            manufacturer: provenance.manufacturer,
            price: provenance.price,
            production_time: provenance.production_time,
            holder: None,
            holder_kind: None,
            in_stock: None,
        };

        if self.config.trace_holder_scan {
            self.attach_holder(&mut info)?;
        }
        observe::trace_lookup();
        Ok(info)
    }

    /// Hospitals first: once bought, a unit no longer exists at its
    /// manufacturer.
    fn attach_holder(&self, info: &mut DrugInfo) -> Result<(), SupplyChainError> {
        let code = info.trace_code.as_str();

        let at_hospital = self.hospitals.list()?.into_iter().find_map(|hospital| {
            hospital
                .inventory
                .get(code)
                .map(|unit| (hospital.name.clone(), unit.in_stock()))
        });
        if let Some((holder, in_stock)) = at_hospital {
            info.holder = Some(holder);
            info.holder_kind = Some(EntityKind::Hospital);
            info.in_stock = Some(in_stock);
            return Ok(());
        }

        // The manufacturer named in the code is the only one that can hold it
        let at_manufacturer = self.manufacturers.find(&info.manufacturer)?.and_then(|handle| {
            let manufacturer = handle.snapshot();
            manufacturer.inventory.get(code).map(|unit| unit.in_stock())
        });
        if let Some(in_stock) = at_manufacturer {
            info.holder = Some(info.manufacturer.clone());
            info.holder_kind = Some(EntityKind::Manufacturer);
            info.in_stock = Some(in_stock);
        }
        Ok(())
    }
}
