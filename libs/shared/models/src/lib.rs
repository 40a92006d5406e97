pub mod error;
pub mod listing;
pub mod names;

pub use error::AppError;
pub use listing::{Listed, enumerate_listed};
