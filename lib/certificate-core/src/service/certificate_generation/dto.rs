use time::{Date, OffsetDateTime};

use crate::model::certificate::CertificateType;

#[derive(Clone, Debug)]
pub enum CertificateCreateRequestDTO {
    Vaccination(VaccinationCertificateCreateDTO),
    Test(TestCertificateCreateDTO),
    Recovery(RecoveryCertificateCreateDTO),
}

impl CertificateCreateRequestDTO {
    pub fn certificate_type(&self) -> CertificateType {
        match self {
            Self::Vaccination(_) => CertificateType::Vaccination,
            Self::Test(_) => CertificateType::Test,
            Self::Recovery(_) => CertificateType::Recovery,
        }
    }

    pub(crate) fn person_data(&self) -> Option<&CovidCertificatePersonDTO> {
        match self {
            Self::Vaccination(request) => request.person_data.as_ref(),
            Self::Test(request) => request.person_data.as_ref(),
            Self::Recovery(request) => request.person_data.as_ref(),
        }
    }

    pub(crate) fn language(&self) -> Option<&str> {
        match self {
            Self::Vaccination(request) => request.language.as_deref(),
            Self::Test(request) => request.language.as_deref(),
            Self::Recovery(request) => request.language.as_deref(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CovidCertificatePersonDTO {
    pub name: Option<CovidCertificatePersonNameDTO>,
    pub date_of_birth: Option<Date>,
}

#[derive(Clone, Debug)]
pub struct CovidCertificatePersonNameDTO {
    pub family_name: Option<String>,
    pub given_name: Option<String>,
}

#[derive(Clone, Debug)]
pub struct VaccinationCertificateCreateDTO {
    pub person_data: Option<CovidCertificatePersonDTO>,
    pub vaccination_info: Vec<VaccinationCertificateDataDTO>,
    pub language: Option<String>,
}

#[derive(Clone, Debug)]
pub struct VaccinationCertificateDataDTO {
    pub medicinal_product_code: Option<String>,
    pub number_of_doses: Option<i32>,
    pub total_number_of_doses: Option<i32>,
    pub vaccination_date: Option<Date>,
    pub country_of_vaccination: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TestCertificateCreateDTO {
    pub person_data: Option<CovidCertificatePersonDTO>,
    pub test_info: Vec<TestCertificateDataDTO>,
    pub language: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TestCertificateDataDTO {
    pub type_code: Option<String>,
    pub manufacturer_code: Option<String>,
    pub sample_date_time: Option<OffsetDateTime>,
    pub testing_centre_or_facility: Option<String>,
    pub member_state_of_test: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RecoveryCertificateCreateDTO {
    pub person_data: Option<CovidCertificatePersonDTO>,
    pub recovery_info: Vec<RecoveryCertificateDataDTO>,
    pub language: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RecoveryCertificateDataDTO {
    pub date_of_first_positive_test_result: Option<Date>,
    pub country_of_test: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CovidCertificateCreateResponseDTO {
    /// Barcode image bytes
    pub qr_code: Vec<u8>,
    pub pdf: Vec<u8>,
    pub uvci: String,
}
