use serde::Serialize;
use time::Date;

use super::person::CovidCertificatePerson;
use super::value_set::Language;
use crate::util::date_format::into_iso_date;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VaccinationCertificateQrCode {
    #[serde(rename = "ver")]
    pub version: String,
    #[serde(flatten)]
    pub person_data: CovidCertificatePerson,
    #[serde(rename = "v")]
    pub vaccination_info: Vec<VaccinationCertificateData>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VaccinationCertificateData {
    #[serde(rename = "tg")]
    pub disease_or_agent_targeted: String,
    #[serde(rename = "vp")]
    pub vaccine_prophylaxis: String,
    #[serde(rename = "mp")]
    pub medicinal_product: String,
    #[serde(rename = "ma")]
    pub marketing_authorization_holder: String,
    #[serde(rename = "dn")]
    pub number_of_doses: u8,
    #[serde(rename = "sd")]
    pub total_number_of_doses: u8,
    #[serde(rename = "dt", serialize_with = "into_iso_date")]
    pub vaccination_date: Date,
    #[serde(rename = "co")]
    pub country_of_vaccination: String,
    #[serde(rename = "is")]
    pub issuer: String,
    #[serde(rename = "ci")]
    pub identifier: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationCertificatePdf {
    pub language: Language,
    pub family_name: String,
    pub given_name: String,
    pub date_of_birth: String,
    pub identifier: String,
    pub disease_or_agent_targeted: String,
    pub vaccine_prophylaxis: String,
    pub medicinal_product: String,
    pub marketing_authorization_holder: String,
    pub number_of_doses: u8,
    pub total_number_of_doses: u8,
    pub vaccination_date: String,
    pub country_of_vaccination: String,
    pub country_of_vaccination_en: String,
    pub issuer: String,
    pub creation_date: String,
}
