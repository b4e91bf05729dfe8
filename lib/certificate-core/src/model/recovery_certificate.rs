use serde::Serialize;
use time::Date;

use super::person::CovidCertificatePerson;
use super::value_set::Language;
use crate::util::date_format::into_iso_date;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecoveryCertificateQrCode {
    #[serde(rename = "ver")]
    pub version: String,
    #[serde(flatten)]
    pub person_data: CovidCertificatePerson,
    #[serde(rename = "r")]
    pub recovery_info: Vec<RecoveryCertificateData>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecoveryCertificateData {
    #[serde(rename = "tg")]
    pub disease_or_agent_targeted: String,
    #[serde(rename = "fr", serialize_with = "into_iso_date")]
    pub date_of_first_positive_test_result: Date,
    #[serde(rename = "co")]
    pub country_of_test: String,
    #[serde(rename = "is")]
    pub issuer: String,
    #[serde(rename = "df", serialize_with = "into_iso_date")]
    pub valid_from: Date,
    #[serde(rename = "du", serialize_with = "into_iso_date")]
    pub valid_until: Date,
    #[serde(rename = "ci")]
    pub identifier: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryCertificatePdf {
    pub language: Language,
    pub family_name: String,
    pub given_name: String,
    pub date_of_birth: String,
    pub identifier: String,
    pub disease_or_agent_targeted: String,
    pub date_of_first_positive_test_result: String,
    pub country_of_test: String,
    pub country_of_test_en: String,
    pub valid_from: String,
    pub valid_until: String,
    pub issuer: String,
    pub creation_date: String,
}
