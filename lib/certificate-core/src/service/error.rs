use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::provider::barcode::error::BarcodeError;
use crate::provider::pdf::error::PdfError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error("Mapping error: `{0}`")]
    MappingError(String),
    #[error("Barcode error: `{0}`")]
    Barcode(#[from] BarcodeError),
    #[error("PDF error: `{0}`")]
    Pdf(#[from] PdfError),
    #[error("Config validation error `{0}`")]
    ConfigValidationError(#[from] ConfigValidationError),
}

/// Field-level request errors, raised before any mapping happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No person data was specified")]
    NoPersonData,
    #[error("Invalid family name")]
    InvalidFamilyName,
    #[error("Invalid given name")]
    InvalidGivenName,
    #[error("Invalid date of birth")]
    InvalidDateOfBirth,
    #[error("Invalid language")]
    InvalidLanguage,

    #[error("No vaccination data was specified")]
    NoVaccinationData,
    #[error("Invalid number of doses")]
    InvalidDoses,
    #[error("Invalid vaccination date")]
    InvalidVaccinationDate,
    #[error("Invalid country of vaccination")]
    InvalidCountryOfVaccination,

    #[error("No test data was specified")]
    NoTestData,
    #[error("Invalid type of test")]
    InvalidTypeOfTest,
    #[error("Invalid sample date time")]
    InvalidSampleDateTime,
    #[error("Invalid testing centre or facility")]
    InvalidTestCenter,
    #[error("Invalid member state of test")]
    InvalidMemberStateOfTest,

    #[error("No recovery data was specified")]
    NoRecoveryData,
    #[error("Invalid date of first positive test result")]
    InvalidDateOfFirstPositiveTestResult,
    #[error("Invalid country of test")]
    InvalidCountryOfTest,
}

/// Reference data lookups failing during mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessLogicError {
    #[error("Unknown medicinal product `{0}`")]
    UnknownMedicinalProduct(String),
    #[error("Unknown country of vaccination `{0}`")]
    UnknownCountryOfVaccination(String),
    #[error("Unknown test type `{0}`")]
    UnknownTestType(String),
    #[error("Unknown test manufacturer `{0}`")]
    UnknownTestManufacturer(String),
    #[error("Test type `{type_code}` cannot be combined with manufacturer `{manufacturer_code:?}`")]
    IncompatibleTestManufacturer {
        type_code: String,
        manufacturer_code: Option<String>,
    },
    #[error("Unknown member state of test `{0}`")]
    UnknownMemberStateOfTest(String),
    #[error("Unknown country of test `{0}`")]
    UnknownCountryOfTest(String),
}

impl ErrorCodeMixin for ServiceError {
    fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::MappingError,
            ServiceError::Barcode(error) => error.error_code(),
            ServiceError::Pdf(error) => error.error_code(),
            ServiceError::ConfigValidationError(error) => error.error_code(),
        }
    }
}

impl ErrorCodeMixin for ValidationError {
    fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::NoPersonData => ErrorCode::NoPersonData,
            ValidationError::InvalidFamilyName => ErrorCode::InvalidFamilyName,
            ValidationError::InvalidGivenName => ErrorCode::InvalidGivenName,
            ValidationError::InvalidDateOfBirth => ErrorCode::InvalidDateOfBirth,
            ValidationError::InvalidLanguage => ErrorCode::InvalidLanguage,
            ValidationError::NoVaccinationData => ErrorCode::NoVaccinationData,
            ValidationError::InvalidDoses => ErrorCode::InvalidDoses,
            ValidationError::InvalidVaccinationDate => ErrorCode::InvalidVaccinationDate,
            ValidationError::InvalidCountryOfVaccination => {
                ErrorCode::InvalidCountryOfVaccination
            }
            ValidationError::NoTestData => ErrorCode::NoTestData,
            ValidationError::InvalidTypeOfTest => ErrorCode::InvalidTypOfTest,
            ValidationError::InvalidSampleDateTime => ErrorCode::InvalidSampleOrResultDateTime,
            ValidationError::InvalidTestCenter => ErrorCode::InvalidTestCenter,
            ValidationError::InvalidMemberStateOfTest => ErrorCode::InvalidMemberStateOfTest,
            ValidationError::NoRecoveryData => ErrorCode::NoRecoveryData,
            ValidationError::InvalidDateOfFirstPositiveTestResult => {
                ErrorCode::InvalidDateOfFirstPositiveTestResult
            }
            ValidationError::InvalidCountryOfTest => ErrorCode::InvalidCountryOfTest,
        }
    }
}

impl ErrorCodeMixin for BusinessLogicError {
    fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::UnknownMedicinalProduct(_) => ErrorCode::InvalidMedicinalProduct,
            BusinessLogicError::UnknownCountryOfVaccination(_) => {
                ErrorCode::InvalidCountryOfVaccination
            }
            BusinessLogicError::UnknownTestType(_)
            | BusinessLogicError::UnknownTestManufacturer(_)
            | BusinessLogicError::IncompatibleTestManufacturer { .. } => {
                ErrorCode::InvalidTypOfTest
            }
            BusinessLogicError::UnknownMemberStateOfTest(_) => ErrorCode::InvalidMemberStateOfTest,
            BusinessLogicError::UnknownCountryOfTest(_) => ErrorCode::InvalidCountryOfTest,
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(value: serde_json::Error) -> Self {
        ServiceError::MappingError(value.to_string())
    }
}

impl From<time::error::Format> for ServiceError {
    fn from(value: time::error::Format) -> Self {
        ServiceError::MappingError(value.to_string())
    }
}
