pub mod calendar;
pub mod registry;
pub mod render;

pub use calendar::Calendar;
pub use registry::ScheduleRegistry;
pub use render::cell_label;
