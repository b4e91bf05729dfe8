use thiserror::Error;

use crate::error::{ErrorCode, ErrorCodeMixin};

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parsing error: `{0}`")]
    Parsing(#[from] ConfigParsingError),
    #[error("Config validation error: `{0}`")]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Value set `{0}` is empty")]
    EmptyValueSet(&'static str),
    #[error("Duplicate code `{code}` in value set `{value_set}`")]
    DuplicateCode { value_set: &'static str, code: String },
    #[error("Missing display name in value set `{value_set}` for code `{code}`")]
    MissingDisplayName { value_set: &'static str, code: String },
    #[error("Issuer name is empty")]
    EmptyIssuerName,
    #[error("Invalid schema version `{0}`")]
    InvalidSchemaVersion(String),
    #[error("Invalid UVCI country `{0}`, expected two uppercase letters")]
    InvalidUvciCountry(String),
    #[error("Invalid UVCI version `{0}`, expected two digits")]
    InvalidUvciVersion(String),
    #[error(
        "Invalid recovery validity window: from {valid_from_days} days until {valid_until_days} days"
    )]
    InvalidRecoveryValidity {
        valid_from_days: u16,
        valid_until_days: u16,
    },
}

impl ErrorCodeMixin for ConfigValidationError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::Configuration
    }
}
