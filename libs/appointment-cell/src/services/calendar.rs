// libs/appointment-cell/src/services/calendar.rs

use tracing::{debug, info, warn};

use doctor_cell::Provider;
use patient_cell::Mrn;

use crate::error::CalendarError;
use crate::models::{
    Booking, CancelOutcome, CellState, SlotRef, TimeSlot, Weekday, DAYS_PER_WEEK, SLOTS_PER_DAY,
};

type Grid = [[CellState; SLOTS_PER_DAY]; DAYS_PER_WEEK];

/// One provider's Monday-Friday, 09:00 AM-05:00 PM appointment grid.
///
/// Every operation validates the day code and slot label before it reads or
/// mutates a cell, so a rejected call never leaves the grid half-changed.
/// Cells move `Open -> Occupied -> Open` through [`Calendar::book`] and
/// [`Calendar::cancel`], and `Open -> Blocked -> Open` through
/// [`Calendar::block`] and [`Calendar::unblock`]. There is no direct
/// transition between `Occupied` and `Blocked`.
#[derive(Debug, Clone)]
pub struct Calendar {
    provider: Provider,
    grid: Grid,
}

impl Calendar {
    pub fn new(provider: Provider) -> Self {
        debug!("Creating schedule for {}", provider);
        Self {
            provider,
            grid: std::array::from_fn(|_| std::array::from_fn(|_| CellState::Open)),
        }
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn cell(&self, day: Weekday, slot: TimeSlot) -> &CellState {
        &self.grid[day.ordinal()][slot.ordinal()]
    }

    fn cell_mut(&mut self, at: SlotRef) -> &mut CellState {
        &mut self.grid[at.day.ordinal()][at.slot.ordinal()]
    }

    pub(crate) fn day_cells(&self, day: Weekday) -> impl Iterator<Item = (TimeSlot, &CellState)> {
        TimeSlot::all().zip(self.grid[day.ordinal()].iter())
    }

    /// Resolves a day code and slot label, day first.
    pub fn locate(day: i32, slot: &str) -> Result<SlotRef, CalendarError> {
        let day = Weekday::from_code(day)?;
        let slot = TimeSlot::from_label(slot)?;
        Ok(SlotRef { day, slot })
    }

    pub fn is_available(&self, day: i32, slot: &str) -> Result<bool, CalendarError> {
        let at = Self::locate(day, slot)?;
        Ok(self.cell(at.day, at.slot).is_open())
    }

    /// Open slots for the day in label order. Recomputed on every call.
    pub fn available_slots(&self, day: i32) -> Result<Vec<SlotRef>, CalendarError> {
        let day = Weekday::from_code(day)?;
        Ok(self
            .day_cells(day)
            .filter(|(_, state)| state.is_open())
            .map(|(slot, _)| SlotRef { day, slot })
            .collect())
    }

    pub fn book(
        &mut self,
        day: i32,
        slot: &str,
        mrn: Mrn,
        appointment_type: impl Into<String>,
    ) -> Result<Booking, CalendarError> {
        let at = Self::locate(day, slot)?;
        let appointment_type = appointment_type.into();

        if !self.cell(at.day, at.slot).is_open() {
            warn!("Booking rejected for {}: {} is not open", self.provider, at);
            return Err(CalendarError::SlotUnavailable { day: at.day, slot: at.slot });
        }

        *self.cell_mut(at) = CellState::Occupied {
            mrn,
            appointment_type: appointment_type.clone(),
        };

        let booking = Booking {
            provider_id: self.provider.id,
            day: at.day,
            slot: at.slot,
            mrn,
            appointment_type,
        };
        info!("{} ({} with {})", booking.confirmation(), at, self.provider);
        Ok(booking)
    }

    /// Frees an occupied cell. Open and blocked cells are left alone and
    /// reported as [`CancelOutcome::NothingToCancel`].
    pub fn cancel(&mut self, day: i32, slot: &str) -> Result<CancelOutcome, CalendarError> {
        let at = Self::locate(day, slot)?;

        let previous = std::mem::take(self.cell_mut(at));
        match previous {
            CellState::Occupied { mrn, appointment_type } => {
                info!("Appointment canceled for {} with {}", at, self.provider);
                Ok(CancelOutcome::Cancelled(Booking {
                    provider_id: self.provider.id,
                    day: at.day,
                    slot: at.slot,
                    mrn,
                    appointment_type,
                }))
            }
            untouched => {
                *self.cell_mut(at) = untouched;
                debug!("Nothing to cancel for {} with {}", at, self.provider);
                Ok(CancelOutcome::NothingToCancel)
            }
        }
    }

    pub fn block(&mut self, day: i32, slot: &str) -> Result<SlotRef, CalendarError> {
        let at = Self::locate(day, slot)?;

        if !self.cell(at.day, at.slot).is_open() {
            warn!("Block rejected for {}: {} is not open", self.provider, at);
            return Err(CalendarError::SlotNotOpen { day: at.day, slot: at.slot });
        }

        *self.cell_mut(at) = CellState::Blocked;
        info!("{} has been blocked for {}", at, self.provider);
        Ok(at)
    }

    pub fn unblock(&mut self, day: i32, slot: &str) -> Result<SlotRef, CalendarError> {
        let at = Self::locate(day, slot)?;

        if *self.cell(at.day, at.slot) != CellState::Blocked {
            warn!("Unblock rejected for {}: {} is not blocked", self.provider, at);
            return Err(CalendarError::SlotNotBlocked { day: at.day, slot: at.slot });
        }

        *self.cell_mut(at) = CellState::Open;
        info!("{} has been reopened for {}", at, self.provider);
        Ok(at)
    }

    /// Every slot booked for `mrn`, Monday first, earliest slot first.
    pub fn find_by_patient(&self, mrn: Mrn) -> Vec<SlotRef> {
        Weekday::ALL
            .into_iter()
            .flat_map(move |day| {
                self.day_cells(day)
                    .filter(move |(_, state)| state.patient() == Some(mrn))
                    .map(move |(slot, _)| SlotRef { day, slot })
            })
            .collect()
    }
}
