// libs/appointment-cell/src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use patient_cell::Mrn;

use crate::error::CalendarError;

// ==============================================================================
// GRID COORDINATES
// ==============================================================================

pub const DAYS_PER_WEEK: usize = 5;
pub const SLOTS_PER_DAY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Day codes run 2 (Monday) through 6 (Friday).
    pub fn from_code(code: i32) -> Result<Self, CalendarError> {
        match code {
            2 => Ok(Weekday::Monday),
            3 => Ok(Weekday::Tuesday),
            4 => Ok(Weekday::Wednesday),
            5 => Ok(Weekday::Thursday),
            6 => Ok(Weekday::Friday),
            _ => Err(CalendarError::InvalidDay(code)),
        }
    }

    pub fn code(self) -> i32 {
        self.ordinal() as i32 + 2
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const SLOT_LABELS: [&str; SLOTS_PER_DAY] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM",
    "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM",
    "01:00 PM", "01:30 PM", "02:00 PM", "02:30 PM",
    "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
];

/// A 30-minute appointment block, named by its start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOTS_PER_DAY as u8).map(TimeSlot)
    }

    /// Exact match against the canonical labels, e.g. `"02:30 PM"`.
    pub fn from_label(label: &str) -> Result<Self, CalendarError> {
        SLOT_LABELS
            .iter()
            .position(|candidate| *candidate == label)
            .map(|index| TimeSlot(index as u8))
            .ok_or_else(|| CalendarError::InvalidSlotLabel(label.to_string()))
    }

    pub fn label(self) -> &'static str {
        SLOT_LABELS[self.ordinal()]
    }

    pub(crate) fn ordinal(self) -> usize {
        self.0 as usize
    }
}

impl FromStr for TimeSlot {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::from_label(s)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        TimeSlot::from_label(&label).map_err(serde::de::Error::custom)
    }
}

/// Trims and upper-cases user input so "9:30 am"-style casing differences
/// don't reject an otherwise canonical label.
pub fn normalize_slot_label(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub day: Weekday,
    pub slot: TimeSlot,
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.day, self.slot)
    }
}

// ==============================================================================
// CELL STATE
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CellState {
    #[default]
    Open,
    Blocked,
    Occupied {
        mrn: Mrn,
        appointment_type: String,
    },
}

impl CellState {
    pub fn is_open(&self) -> bool {
        matches!(self, CellState::Open)
    }

    pub fn patient(&self) -> Option<Mrn> {
        match self {
            CellState::Occupied { mrn, .. } => Some(*mrn),
            _ => None,
        }
    }
}

// ==============================================================================
// OPERATION RESULTS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub provider_id: Uuid,
    pub day: Weekday,
    pub slot: TimeSlot,
    pub mrn: Mrn,
    pub appointment_type: String,
}

impl Booking {
    pub fn confirmation(&self) -> String {
        format!("{} appointment booked for MRN# {}!", self.appointment_type, self.mrn)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CancelOutcome {
    Cancelled(Booking),
    NothingToCancel,
}

/// Time slots as rows, weekdays as columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTable {
    pub title: String,
    pub columns: Vec<Weekday>,
    pub rows: Vec<ScheduleRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub slot: TimeSlot,
    pub entries: Vec<String>,
}

impl ScheduleTable {
    pub fn row(&self, slot: TimeSlot) -> Option<&ScheduleRow> {
        self.rows.iter().find(|row| row.slot == slot)
    }

    pub fn entry(&self, slot: TimeSlot, day: Weekday) -> Option<&str> {
        let column = self.columns.iter().position(|d| *d == day)?;
        self.row(slot)?.entries.get(column).map(String::as_str)
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRequest {
    pub day: i32,
    pub slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub day: i32,
    pub slot: String,
    pub mrn: Mrn,
    pub appointment_type: String,
}
