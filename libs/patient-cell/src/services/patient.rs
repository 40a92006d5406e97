use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use shared_models::names::capitalize;
use shared_models::{Listed, enumerate_listed};

use crate::models::{CreatePatientRequest, Gender, Mrn, Patient, PatientError, parse_date_of_birth};
use crate::services::mrn::MrnAllocator;

#[derive(Debug, Default)]
struct PatientDirectory {
    allocator: MrnAllocator,
    patients: BTreeMap<Mrn, Patient>,
}

/// In-memory patient directory. Insert-only: patients are never removed.
#[derive(Debug, Default)]
pub struct PatientService {
    directory: RwLock<PatientDirectory>,
}

impl PatientService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allocator(allocator: MrnAllocator) -> Self {
        Self {
            directory: RwLock::new(PatientDirectory {
                allocator,
                patients: BTreeMap::new(),
            }),
        }
    }

    pub async fn create_patient(&self, request: CreatePatientRequest) -> Result<Patient, PatientError> {
        debug!("Creating patient record for: {} {}", request.first_name, request.last_name);

        // Validate before allocating so a rejected request never burns an MRN.
        let gender = Gender::parse(&request.gender).inspect_err(|e| warn!("{}", e))?;
        let date_of_birth = parse_date_of_birth(&request.date_of_birth).inspect_err(|e| warn!("{}", e))?;

        let mut directory = self.directory.write().await;
        let mrn = directory.allocator.allocate().inspect_err(|e| warn!("{}", e))?;
        let patient = Patient {
            mrn,
            first_name: capitalize(&request.first_name),
            last_name: capitalize(&request.last_name),
            gender,
            date_of_birth,
        };
        directory.patients.insert(patient.mrn, patient.clone());

        info!("Patient created with MRN: {}", patient.mrn);
        Ok(patient)
    }

    pub async fn get_patient(&self, mrn: Mrn) -> Result<Patient, PatientError> {
        self.directory
            .read()
            .await
            .patients
            .get(&mrn)
            .cloned()
            .ok_or(PatientError::NotFound(mrn))
    }

    pub async fn contains(&self, mrn: Mrn) -> bool {
        self.directory.read().await.patients.contains_key(&mrn)
    }

    /// All patients in MRN order, numbered for selection.
    pub async fn list_patients(&self) -> Vec<Listed<Patient>> {
        let directory = self.directory.read().await;
        enumerate_listed(directory.patients.values().cloned())
    }

    pub async fn len(&self) -> usize {
        self.directory.read().await.patients.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
