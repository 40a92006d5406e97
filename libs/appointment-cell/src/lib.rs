// =====================================================================================
// APPOINTMENT CELL - PER-PROVIDER WEEKLY CALENDARS
// =====================================================================================
//
// Each provider owns a fixed Monday-Friday grid of sixteen 30-minute slots.
// This cell provides:
// - The calendar state machine (book, cancel, block, unblock)
// - Availability queries and patient lookups
// - Weekly and daily table views
// - The schedule registry and its HTTP routes
//
// =====================================================================================

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::{CalendarError, RegistryError};
pub use models::{
    Booking, CancelOutcome, CellState, ScheduleRow, ScheduleTable, SlotRef, TimeSlot, Weekday,
};
pub use router::schedule_routes;
pub use services::{Calendar, ScheduleRegistry};
