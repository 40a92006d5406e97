use thiserror::Error;
use uuid::Uuid;

use patient_cell::Mrn;

use crate::models::{TimeSlot, Weekday};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid day code {0}, expected 2 (Monday) through 6 (Friday)")]
    InvalidDay(i32),

    #[error("Invalid time slot '{0}', expected HH:MM AM/PM from 09:00 AM to 04:30 PM")]
    InvalidSlotLabel(String),

    #[error("{slot} on {day} is not available")]
    SlotUnavailable { day: Weekday, slot: TimeSlot },

    #[error("{slot} on {day} has an appointment or is already blocked")]
    SlotNotOpen { day: Weekday, slot: TimeSlot },

    #[error("{slot} on {day} is not blocked")]
    SlotNotBlocked { day: Weekday, slot: TimeSlot },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No schedule exists for provider {0}")]
    ProviderNotFound(Uuid),

    #[error("No patient with MRN {0}")]
    PatientNotFound(Mrn),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
