// libs/appointment-cell/src/services/registry.rs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use doctor_cell::{CreateProviderRequest, Provider};
use patient_cell::{Mrn, PatientService};
use shared_models::{Listed, enumerate_listed};

use crate::error::RegistryError;
use crate::models::{Booking, CancelOutcome, ScheduleTable, SlotRef};
use crate::services::calendar::Calendar;

#[derive(Debug, Default)]
struct Schedules {
    providers: Vec<Provider>,
    calendars: HashMap<Uuid, Arc<Mutex<Calendar>>>,
}

/// Maps each provider to the one calendar created for them.
///
/// Schedules are insert-only. Each calendar sits behind its own mutex, so
/// operations on one provider's grid are serialized without holding up the
/// rest of the practice.
pub struct ScheduleRegistry {
    patients: Arc<PatientService>,
    schedules: RwLock<Schedules>,
}

impl ScheduleRegistry {
    pub fn new(patients: Arc<PatientService>) -> Self {
        Self {
            patients,
            schedules: RwLock::new(Schedules::default()),
        }
    }

    pub fn patients(&self) -> &Arc<PatientService> {
        &self.patients
    }

    pub async fn create_schedule(&self, request: CreateProviderRequest) -> Provider {
        let provider = Provider::new(request);
        let calendar = Calendar::new(provider.clone());

        let mut schedules = self.schedules.write().await;
        schedules.calendars.insert(provider.id, Arc::new(Mutex::new(calendar)));
        schedules.providers.push(provider.clone());

        info!("{}'s schedule has successfully been created", provider);
        provider
    }

    /// Providers in creation order, numbered for selection.
    pub async fn list_providers(&self) -> Vec<Listed<Provider>> {
        let schedules = self.schedules.read().await;
        enumerate_listed(schedules.providers.iter().cloned())
    }

    pub async fn provider(&self, provider_id: Uuid) -> Result<Provider, RegistryError> {
        let schedules = self.schedules.read().await;
        schedules
            .providers
            .iter()
            .find(|p| p.id == provider_id)
            .cloned()
            .ok_or(RegistryError::ProviderNotFound(provider_id))
    }

    pub async fn calendar(&self, provider_id: Uuid) -> Result<Arc<Mutex<Calendar>>, RegistryError> {
        let schedules = self.schedules.read().await;
        schedules
            .calendars
            .get(&provider_id)
            .cloned()
            .ok_or_else(|| {
                warn!("Schedule lookup failed for provider {}", provider_id);
                RegistryError::ProviderNotFound(provider_id)
            })
    }

    pub async fn is_available(&self, provider_id: Uuid, day: i32, slot: &str) -> Result<bool, RegistryError> {
        debug!("Checking availability for provider {} on day {} at {}", provider_id, day, slot);
        let calendar = self.calendar(provider_id).await?;
        let available = calendar.lock().await.is_available(day, slot)?;
        Ok(available)
    }

    pub async fn available_slots(&self, provider_id: Uuid, day: i32) -> Result<Vec<SlotRef>, RegistryError> {
        debug!("Pulling availability for provider {} on day {}", provider_id, day);
        let calendar = self.calendar(provider_id).await?;
        let slots = calendar.lock().await.available_slots(day)?;
        Ok(slots)
    }

    /// Books after confirming the MRN belongs to a registered patient.
    pub async fn book(
        &self,
        provider_id: Uuid,
        day: i32,
        slot: &str,
        mrn: Mrn,
        appointment_type: &str,
    ) -> Result<Booking, RegistryError> {
        debug!("Booking {} for MRN {} with provider {}", appointment_type, mrn, provider_id);
        let calendar = self.calendar(provider_id).await?;

        if !self.patients.contains(mrn).await {
            warn!("Booking rejected: MRN {} is not registered", mrn);
            return Err(RegistryError::PatientNotFound(mrn));
        }

        let booking = calendar.lock().await.book(day, slot, mrn, appointment_type)?;
        Ok(booking)
    }

    pub async fn cancel(&self, provider_id: Uuid, day: i32, slot: &str) -> Result<CancelOutcome, RegistryError> {
        debug!("Cancelling day {} at {} for provider {}", day, slot, provider_id);
        let calendar = self.calendar(provider_id).await?;
        let outcome = calendar.lock().await.cancel(day, slot)?;
        Ok(outcome)
    }

    pub async fn block(&self, provider_id: Uuid, day: i32, slot: &str) -> Result<SlotRef, RegistryError> {
        debug!("Blocking day {} at {} for provider {}", day, slot, provider_id);
        let calendar = self.calendar(provider_id).await?;
        let blocked = calendar.lock().await.block(day, slot)?;
        Ok(blocked)
    }

    pub async fn unblock(&self, provider_id: Uuid, day: i32, slot: &str) -> Result<SlotRef, RegistryError> {
        debug!("Unblocking day {} at {} for provider {}", day, slot, provider_id);
        let calendar = self.calendar(provider_id).await?;
        let reopened = calendar.lock().await.unblock(day, slot)?;
        Ok(reopened)
    }

    pub async fn render_week(&self, provider_id: Uuid) -> Result<ScheduleTable, RegistryError> {
        let calendar = self.calendar(provider_id).await?;
        let table = calendar.lock().await.render_week();
        Ok(table)
    }

    pub async fn render_day(&self, provider_id: Uuid, day: i32) -> Result<ScheduleTable, RegistryError> {
        let calendar = self.calendar(provider_id).await?;
        let table = calendar.lock().await.render_day(day)?;
        Ok(table)
    }

    pub async fn find_by_patient(&self, provider_id: Uuid, mrn: Mrn) -> Result<Vec<SlotRef>, RegistryError> {
        let calendar = self.calendar(provider_id).await?;
        let slots = calendar.lock().await.find_by_patient(mrn);
        Ok(slots)
    }
}
