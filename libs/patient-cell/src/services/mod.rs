pub mod mrn;
pub mod patient;

pub use mrn::MrnAllocator;
pub use patient::PatientService;
