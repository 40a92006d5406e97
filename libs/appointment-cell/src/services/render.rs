// libs/appointment-cell/src/services/render.rs

use crate::error::CalendarError;
use crate::models::{CellState, ScheduleRow, ScheduleTable, TimeSlot, Weekday};
use crate::services::calendar::Calendar;

pub fn cell_label(state: &CellState) -> String {
    match state {
        CellState::Open => "OPEN".to_string(),
        CellState::Blocked => "BLOCKED".to_string(),
        CellState::Occupied { mrn, appointment_type } => format!("MRN: {} {}", mrn, appointment_type),
    }
}

impl Calendar {
    /// Sixteen rows of slots, one column per weekday.
    pub fn render_week(&self) -> ScheduleTable {
        self.render_columns(&Weekday::ALL)
    }

    pub fn render_day(&self, day: i32) -> Result<ScheduleTable, CalendarError> {
        let day = Weekday::from_code(day)?;
        Ok(self.render_columns(&[day]))
    }

    fn render_columns(&self, days: &[Weekday]) -> ScheduleTable {
        let rows = TimeSlot::all()
            .map(|slot| ScheduleRow {
                slot,
                entries: days.iter().map(|day| cell_label(self.cell(*day, slot))).collect(),
            })
            .collect();

        ScheduleTable {
            title: format!("{}'s schedule", self.provider()),
            columns: days.to_vec(),
            rows,
        }
    }
}
