use std::error::Error;

use thiserror::Error;

use crate::error::{ErrorCode, ErrorCodeMixin};

#[derive(Debug, Error)]
pub enum BarcodeError {
    #[error("Barcode encoding failed: {0}")]
    Encoding(Box<dyn Error + Send + Sync + 'static>),
    #[error("Payload of {size} bytes exceeds the barcode capacity of {max_size} bytes")]
    PayloadTooLarge { size: usize, max_size: usize },
}

impl BarcodeError {
    pub fn encoding(e: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self::Encoding(e.into())
    }
}

impl ErrorCodeMixin for BarcodeError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::BarcodeEncoding
    }
}
