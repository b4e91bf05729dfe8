use time::OffsetDateTime;

use super::CertificateGenerationService;
use super::dto::{CertificateCreateRequestDTO, CovidCertificateCreateResponseDTO};
use super::mapper::{MappingContext, to_pdf, to_qr_code};
use super::validator::validate_create_request;
use crate::error::ErrorCodeMixin;
use crate::service::error::ServiceError;

impl CertificateGenerationService {
    /// Issues a certificate: the QR payload is encoded into a barcode and
    /// rendered together with the human-readable data into a PDF.
    ///
    /// # Arguments
    ///
    /// * `request` - vaccination, test or recovery certificate request
    ///
    /// Nothing is sent to the barcode or PDF providers if the request fails
    /// validation or cannot be mapped into a QR payload.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(certificate_type = %request.certificate_type())
    )]
    pub async fn generate_covid_certificate(
        &self,
        request: CertificateCreateRequestDTO,
    ) -> Result<CovidCertificateCreateResponseDTO, ServiceError> {
        self.issue_certificate(&request).await.inspect_err(|error| {
            tracing::debug!(error_code = %error.error_code(), "Certificate not issued");
        })
    }

    /// Runs the request checks alone, without issuing anything.
    pub fn validate_covid_certificate(
        &self,
        request: &CertificateCreateRequestDTO,
    ) -> Result<(), ServiceError> {
        validate_create_request(request, self.clock.now_utc())?;
        Ok(())
    }

    async fn issue_certificate(
        &self,
        request: &CertificateCreateRequestDTO,
    ) -> Result<CovidCertificateCreateResponseDTO, ServiceError> {
        let now = self.clock.now_utc();
        validate_create_request(request, now)?;

        let context = self.mapping_context(now);

        let qr_code = to_qr_code(request, &context)?;
        let uvci = qr_code
            .uvci()
            .ok_or(ServiceError::MappingError("UVCI is None".to_string()))?
            .to_owned();
        let contents = serde_json::to_string(&qr_code)?;

        let barcode = self.barcode_service.create_barcode(&contents).await?;

        let pdf_data = to_pdf(request, &qr_code, &context)?;
        let pdf = self
            .pdf_service
            .generate_covid_certificate(&pdf_data, &barcode)
            .await?;

        tracing::info!(%uvci, certificate_type = %qr_code.certificate_type(), "Certificate issued");

        Ok(CovidCertificateCreateResponseDTO {
            qr_code: barcode.image,
            pdf,
            uvci,
        })
    }

    fn mapping_context(&self, now: OffsetDateTime) -> MappingContext<'_> {
        MappingContext {
            value_sets: &self.value_sets,
            uvci_generator: self.uvci_generator.as_ref(),
            issuer: &self.config.issuer,
            recovery: &self.config.recovery,
            now,
        }
    }
}
