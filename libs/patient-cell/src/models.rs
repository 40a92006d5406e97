use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date-of-birth input format, e.g. `07/04/1985`.
pub const DOB_FORMAT: &str = "%m/%d/%Y";

/// Medical record number. Unique per patient for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mrn(pub u32);

impl fmt::Display for Mrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    /// Accepts any input whose first letter is M, F or O in either case,
    /// so "female" and "F" both parse.
    pub fn parse(input: &str) -> Result<Self, PatientError> {
        let code = input.trim().chars().next().map(|c| c.to_ascii_uppercase());
        match code {
            Some('M') => Ok(Gender::Male),
            Some('F') => Ok(Gender::Female),
            Some('O') => Ok(Gender::Other),
            _ => Err(PatientError::InvalidGender(input.to_string())),
        }
    }

    pub fn code(&self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
            Gender::Other => 'O',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parses `MM/DD/YYYY`. chrono's `%Y` also takes short years, so the year
/// segment must be exactly four digits.
pub fn parse_date_of_birth(input: &str) -> Result<NaiveDate, PatientError> {
    let trimmed = input.trim();
    let invalid = || PatientError::InvalidDate(input.to_string());

    let year = trimmed.rsplit('/').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DOB_FORMAT).map_err(|_| invalid())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub mrn: Mrn,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn display_name(&self) -> String {
        format!("{}, MRN: {}", self.full_name(), self.mrn)
    }

    /// Demographic row used by the patient list.
    pub fn info(&self) -> PatientInfo {
        PatientInfo {
            mrn: self.mrn,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender,
            date_of_birth: self.date_of_birth.format(DOB_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub mrn: Mrn,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    /// `MM/DD/YYYY`
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PatientError {
    #[error("Invalid gender code '{0}', expected M, F or O")]
    InvalidGender(String),

    #[error("Invalid date of birth '{0}', expected MM/DD/YYYY")]
    InvalidDate(String),

    #[error("No patient with MRN {0}")]
    NotFound(Mrn),

    #[error("Medical record numbers are exhausted")]
    MrnExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn gender_uses_first_letter_case_insensitively() {
        assert_eq!(Gender::parse("female").unwrap(), Gender::Female);
        assert_eq!(Gender::parse("m").unwrap(), Gender::Male);
        assert_eq!(Gender::parse(" O ").unwrap(), Gender::Other);
    }

    #[test]
    fn gender_rejects_unknown_codes() {
        assert_eq!(Gender::parse("x"), Err(PatientError::InvalidGender("x".into())));
        assert_eq!(Gender::parse(""), Err(PatientError::InvalidGender(String::new())));
    }

    #[test]
    fn date_of_birth_is_strict() {
        let dob = parse_date_of_birth("07/04/1985").unwrap();
        assert_eq!((dob.month(), dob.day(), dob.year()), (7, 4, 1985));

        assert!(parse_date_of_birth("02/30/2020").is_err());
        assert!(parse_date_of_birth("1985-07-04").is_err());
        assert!(parse_date_of_birth("13/01/2000").is_err());
        assert!(parse_date_of_birth("").is_err());
        assert_eq!(
            parse_date_of_birth("07/04/85"),
            Err(PatientError::InvalidDate("07/04/85".into()))
        );
        assert!(parse_date_of_birth("07/04/+1985").is_err());
        assert!(parse_date_of_birth("07/04/01985").is_err());

        // Single-digit month and day are still accepted.
        assert_eq!(parse_date_of_birth("7/4/1985").unwrap(), dob);
    }

    #[test]
    fn info_row_formats_date_as_mm_dd_yyyy() {
        let patient = Patient {
            mrn: Mrn(1001),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            gender: Gender::Female,
            date_of_birth: parse_date_of_birth("2/1/1815").unwrap(),
        };
        assert_eq!(patient.info().date_of_birth, "02/01/1815");
        assert_eq!(patient.to_string(), "Ada Lovelace, MRN: 1001");
    }
}
