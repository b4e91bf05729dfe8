use serde::Serialize;
use strum::{AsRefStr, Display};

/// Stable error kinds exposed to the outer layer, which maps them to
/// client-facing statuses and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NoVaccinationData,
    NoPersonData,
    InvalidDateOfBirth,
    InvalidMedicinalProduct,
    InvalidDoses,
    InvalidVaccinationDate,
    InvalidCountryOfVaccination,
    InvalidGivenName,
    InvalidFamilyName,
    NoTestData,
    InvalidMemberStateOfTest,
    InvalidTypOfTest,
    InvalidTestCenter,
    InvalidSampleOrResultDateTime,
    NoRecoveryData,
    InvalidDateOfFirstPositiveTestResult,
    InvalidCountryOfTest,
    InvalidLanguage,

    MappingError,
    BarcodeEncoding,
    PdfRendering,
    Configuration,
}

impl ErrorCode {
    pub const fn code(&self) -> u16 {
        match self {
            ErrorCode::NoVaccinationData => 451,
            ErrorCode::NoPersonData => 452,
            ErrorCode::InvalidDateOfBirth => 453,
            ErrorCode::InvalidMedicinalProduct => 454,
            ErrorCode::InvalidDoses => 455,
            ErrorCode::InvalidVaccinationDate => 456,
            ErrorCode::InvalidCountryOfVaccination => 457,
            ErrorCode::InvalidGivenName => 458,
            ErrorCode::InvalidFamilyName => 459,
            ErrorCode::NoTestData => 460,
            ErrorCode::InvalidMemberStateOfTest => 461,
            ErrorCode::InvalidTypOfTest => 462,
            ErrorCode::InvalidTestCenter => 463,
            ErrorCode::InvalidSampleOrResultDateTime => 464,
            ErrorCode::NoRecoveryData => 465,
            ErrorCode::InvalidDateOfFirstPositiveTestResult => 466,
            ErrorCode::InvalidCountryOfTest => 467,
            ErrorCode::InvalidLanguage => 468,

            ErrorCode::MappingError => 500,
            ErrorCode::BarcodeEncoding => 501,
            ErrorCode::PdfRendering => 502,
            ErrorCode::Configuration => 503,
        }
    }

    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::NoVaccinationData => "No vaccination data was specified",
            ErrorCode::NoPersonData => "No person data was specified",
            ErrorCode::InvalidDateOfBirth => {
                "Invalid dateOfBirth! Must be after 1900-01-01 and not in the future"
            }
            ErrorCode::InvalidMedicinalProduct => "Invalid medicinal product",
            ErrorCode::InvalidDoses => "Invalid number of doses",
            ErrorCode::InvalidVaccinationDate => {
                "Invalid vaccination date! Date cannot be in the future"
            }
            ErrorCode::InvalidCountryOfVaccination => "Invalid country of vaccination",
            ErrorCode::InvalidGivenName => "Invalid given name! Must not exceed 50 chars",
            ErrorCode::InvalidFamilyName => "Invalid family name! Must not exceed 50 chars",
            ErrorCode::NoTestData => "No test data was specified",
            ErrorCode::InvalidMemberStateOfTest => "Invalid member state of test",
            ErrorCode::InvalidTypOfTest => {
                "Invalid type of test and manufacturer code combination! Must either be a PCR test type and no manufacturer code or give a manufacturer code and the antigen test type code"
            }
            ErrorCode::InvalidTestCenter => "Invalid testing center or facility",
            ErrorCode::InvalidSampleOrResultDateTime => {
                "Invalid sample or result date time! Date cannot be in the future"
            }
            ErrorCode::NoRecoveryData => "No recovery data specified",
            ErrorCode::InvalidDateOfFirstPositiveTestResult => {
                "Invalid date of first positive test result"
            }
            ErrorCode::InvalidCountryOfTest => "Invalid country of test",
            ErrorCode::InvalidLanguage => "The given language does not match any of the supported languages: de, it, fr, rm",

            ErrorCode::MappingError => "Certificate data mapping error",
            ErrorCode::BarcodeEncoding => "Barcode encoding error",
            ErrorCode::PdfRendering => "PDF rendering error",
            ErrorCode::Configuration => "Configuration error",
        }
    }
}

pub trait ErrorCodeMixin {
    fn error_code(&self) -> ErrorCode;
}
