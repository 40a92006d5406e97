use crate::models::{Mrn, PatientError};

pub const FIRST_MRN: u32 = 1001;

/// Hands out medical record numbers in sequence. Numbers are never reused
/// by the same allocator; once `u32::MAX` is issued, allocation fails.
#[derive(Debug)]
pub struct MrnAllocator {
    next: Option<u32>,
}

impl Default for MrnAllocator {
    fn default() -> Self {
        Self::starting_at(FIRST_MRN)
    }
}

impl MrnAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    pub fn peek(&self) -> Option<Mrn> {
        self.next.map(Mrn)
    }

    pub fn allocate(&mut self) -> Result<Mrn, PatientError> {
        let mrn = self.next.ok_or(PatientError::MrnExhausted)?;
        self.next = mrn.checked_add(1);
        Ok(Mrn(mrn))
    }
}
