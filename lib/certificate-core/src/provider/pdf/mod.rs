//! PDF rendering boundary; layout and fonts belong to the implementation.

use async_trait::async_trait;

use self::error::PdfError;
use crate::model::certificate::CertificatePdf;
use crate::provider::barcode::model::Barcode;

pub mod error;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait PdfService: Send + Sync {
    /// Renders the certificate document, embedding the barcode image.
    async fn generate_covid_certificate(
        &self,
        pdf: &CertificatePdf,
        barcode: &Barcode,
    ) -> Result<Vec<u8>, PdfError>;
}
