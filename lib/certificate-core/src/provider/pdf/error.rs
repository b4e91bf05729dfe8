use std::error::Error;

use thiserror::Error;

use crate::error::{ErrorCode, ErrorCodeMixin};

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF rendering failed: {0}")]
    Rendering(Box<dyn Error + Send + Sync + 'static>),
}

impl PdfError {
    pub fn rendering(e: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self::Rendering(e.into())
    }
}

impl ErrorCodeMixin for PdfError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::PdfRendering
    }
}
