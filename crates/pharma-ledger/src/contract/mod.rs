//! # Contract Router
//!
//! Entry point for contract invocations: an operation name plus positional
//! string arguments, dispatched to `SupplyChainApi` and answered with JSON.
//!
//! | Operation | Arguments |
//! |-----------|-----------|
//! | `CreateManufacturer` | name, contact |
//! | `ProduceDrug` | manufacturer, drugName, price |
//! | `CreateHospital` | name, contact |
//! | `CreatePatient` | name, birthDate, height, weight, gender, contact |
//! | `EnrollPatient`, `CreatePatientRecord` | hospital, patient |
//! | `ConductExamination` | patient, hospital |
//! | `HospitalBuyDrug` | hospital, manufacturer, drugName |
//! | `PatientBuyDrug` | patient, hospital, drugName |
//! | `BuyDrug` | buyerKind, buyer, seller, drugName |
//! | `CreateReport`, `ModifyReport` | hospital, patient, symptoms, [neededDrugs] |
//! | `ViewReport` | patient, hospital, reportID |
//! | `TraceDrug` | traceCode |
//! | `GetManufacturers`, `GetHospitals`, `GetPatients` | |

mod args;

use crate::domain::{Patient, SupplyChainError};
use crate::ports::inbound::SupplyChainApi;
use args::{expect_arity, parse_arg, parse_drug_list};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Every operation name the router accepts.
pub const OPERATIONS: &[&str] = &[
    "CreateManufacturer",
    "ProduceDrug",
    "CreateHospital",
    "CreatePatient",
    "EnrollPatient",
    "CreatePatientRecord",
    "ConductExamination",
    "HospitalBuyDrug",
    "PatientBuyDrug",
    "BuyDrug",
    "CreateReport",
    "ModifyReport",
    "ViewReport",
    "TraceDrug",
    "GetManufacturers",
    "GetHospitals",
    "GetPatients",
];

/// Errors at the invocation boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid arguments for {operation}: {reason}")]
    InvalidArguments { operation: String, reason: String },

    #[error(transparent)]
    SupplyChain(#[from] SupplyChainError),

    #[error("response encoding failed: {0}")]
    Encoding(String),
}

/// Dispatches named operations to a `SupplyChainApi`.
pub struct ContractRouter<A: SupplyChainApi> {
    api: A,
}

impl<A: SupplyChainApi> ContractRouter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run one operation. Unit results come back as `null`.
    pub fn invoke(&self, operation: &str, args: &[String]) -> Result<Value, ContractError> {
        debug!(operation, argc = args.len(), "Contract invocation");

        match operation {
            "CreateManufacturer" => {
                expect_arity(operation, args, 2)?;
                self.api.create_manufacturer(&args[0], &args[1])?;
                Ok(Value::Null)
            }
            "CreateHospital" => {
                expect_arity(operation, args, 2)?;
                self.api.create_hospital(&args[0], &args[1])?;
                Ok(Value::Null)
            }
            "CreatePatient" => {
                expect_arity(operation, args, 6)?;
                let patient = Patient {
                    name: args[0].clone(),
                    birth_date: args[1].clone(),
                    height: parse_arg(operation, args, 2)?,
                    weight: parse_arg(operation, args, 3)?,
                    gender: args[4].clone(),
                    contact: args[5].clone(),
                };
                self.api.create_patient(patient)?;
                Ok(Value::Null)
            }
            "ProduceDrug" => {
                expect_arity(operation, args, 3)?;
                let price: f64 = parse_arg(operation, args, 2)?;
                to_json(self.api.produce_drug(&args[0], &args[1], price)?)
            }
            "HospitalBuyDrug" => {
                expect_arity(operation, args, 3)?;
                to_json(self.api.hospital_buys_drug(&args[0], &args[1], &args[2])?)
            }
            "PatientBuyDrug" => {
                expect_arity(operation, args, 3)?;
                to_json(self.api.patient_buys_drug(&args[0], &args[1], &args[2])?)
            }
            "BuyDrug" => {
                expect_arity(operation, args, 4)?;
                let code = match args[0].to_ascii_lowercase().as_str() {
                    "hospital" => self.api.hospital_buys_drug(&args[1], &args[2], &args[3])?,
                    "patient" => self.api.patient_buys_drug(&args[1], &args[2], &args[3])?,
                    other => {
                        return Err(ContractError::InvalidArguments {
                            operation: operation.to_string(),
                            reason: format!(
                                "buyer kind must be hospital or patient, got '{}'",
                                other
                            ),
                        })
                    }
                };
                to_json(code)
            }
            "TraceDrug" => {
                expect_arity(operation, args, 1)?;
                to_json(self.api.trace_drug(&args[0])?)
            }
            "EnrollPatient" | "CreatePatientRecord" => {
                expect_arity(operation, args, 2)?;
                self.api.enroll_patient(&args[0], &args[1])?;
                Ok(Value::Null)
            }
            "ConductExamination" => {
                expect_arity(operation, args, 2)?;
                to_json(self.api.conduct_examination(&args[0], &args[1])?)
            }
            "CreateReport" | "ModifyReport" => {
                if args.len() != 3 {
                    expect_arity(operation, args, 4)?;
                }
                let needed = parse_drug_list(operation, args, 3)?;
                to_json(self.api.create_report(&args[0], &args[1], &args[2], needed)?)
            }
            "ViewReport" => {
                expect_arity(operation, args, 3)?;
                let report_id = parse_arg(operation, args, 2)?;
                to_json(self.api.view_report(&args[1], &args[0], report_id)?)
            }
            "GetManufacturers" => {
                expect_arity(operation, args, 0)?;
                to_json(self.api.get_manufacturers()?)
            }
            "GetHospitals" => {
                expect_arity(operation, args, 0)?;
                to_json(self.api.get_hospitals()?)
            }
            "GetPatients" => {
                expect_arity(operation, args, 0)?;
                to_json(self.api.get_patients()?)
            }
            _ => Err(ContractError::UnknownOperation(operation.to_string())),
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ContractError> {
    serde_json::to_value(value).map_err(|e| ContractError::Encoding(e.to_string()))
}
