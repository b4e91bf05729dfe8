use serde::Serialize;
use strum::{AsRefStr, Display};

use super::recovery_certificate::{RecoveryCertificatePdf, RecoveryCertificateQrCode};
use super::test_certificate::{TestCertificatePdf, TestCertificateQrCode};
use super::vaccination_certificate::{VaccinationCertificatePdf, VaccinationCertificateQrCode};

/// SNOMED CT code of COVID-19, the only targeted disease
pub const DISEASE_OR_AGENT_TARGETED: &str = "840539006";
pub const DISEASE_OR_AGENT_TARGETED_DISPLAY: &str = "COVID-19";
/// SNOMED CT "Not detected"; only negative results are certified
pub const TEST_RESULT_NOT_DETECTED: &str = "260415000";
pub const TEST_RESULT_NOT_DETECTED_DISPLAY: &str = "Not detected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateType {
    Vaccination,
    Test,
    Recovery,
}

/// Barcode payload. Serializes transparently to the type-specific JSON shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CertificateQrCode {
    Vaccination(VaccinationCertificateQrCode),
    Test(TestCertificateQrCode),
    Recovery(RecoveryCertificateQrCode),
}

impl CertificateQrCode {
    pub fn certificate_type(&self) -> CertificateType {
        match self {
            Self::Vaccination(_) => CertificateType::Vaccination,
            Self::Test(_) => CertificateType::Test,
            Self::Recovery(_) => CertificateType::Recovery,
        }
    }

    /// UVCI of the certificate, taken from its first (and only issued) entry.
    pub fn uvci(&self) -> Option<&str> {
        match self {
            Self::Vaccination(qr_code) => qr_code
                .vaccination_info
                .first()
                .map(|data| data.identifier.as_str()),
            Self::Test(qr_code) => qr_code
                .test_info
                .first()
                .map(|data| data.identifier.as_str()),
            Self::Recovery(qr_code) => qr_code
                .recovery_info
                .first()
                .map(|data| data.identifier.as_str()),
        }
    }
}

/// Human-readable view handed to the PDF renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificatePdf {
    Vaccination(VaccinationCertificatePdf),
    Test(TestCertificatePdf),
    Recovery(RecoveryCertificatePdf),
}

impl CertificatePdf {
    pub fn certificate_type(&self) -> CertificateType {
        match self {
            Self::Vaccination(_) => CertificateType::Vaccination,
            Self::Test(_) => CertificateType::Test,
            Self::Recovery(_) => CertificateType::Recovery,
        }
    }
}
