use serde::Serialize;
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use super::person::CovidCertificatePerson;
use super::value_set::Language;
use crate::util::date_format::into_rfc3339;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestCertificateQrCode {
    #[serde(rename = "ver")]
    pub version: String,
    #[serde(flatten)]
    pub person_data: CovidCertificatePerson,
    #[serde(rename = "t")]
    pub test_info: Vec<TestCertificateData>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestCertificateData {
    #[serde(rename = "tg")]
    pub disease_or_agent_targeted: String,
    #[serde(rename = "tt")]
    pub type_of_test: String,
    /// NAA test name, only present for tests without a manufacturer
    #[serde(rename = "nm")]
    pub test_name: Option<String>,
    /// RAT manufacturer code
    #[serde(rename = "ma")]
    pub test_manufacturer: Option<String>,
    #[serde(rename = "sc", serialize_with = "into_rfc3339")]
    pub sample_date_time: OffsetDateTime,
    #[serde(rename = "tr")]
    pub test_result: String,
    #[serde(rename = "tc")]
    pub testing_centre_or_facility: String,
    #[serde(rename = "co")]
    pub member_state_of_test: String,
    #[serde(rename = "is")]
    pub issuer: String,
    #[serde(rename = "ci")]
    pub identifier: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCertificatePdf {
    pub language: Language,
    pub family_name: String,
    pub given_name: String,
    pub date_of_birth: String,
    pub identifier: String,
    pub disease_or_agent_targeted: String,
    pub type_of_test: String,
    pub test_name: Option<String>,
    pub test_manufacturer: Option<String>,
    pub sample_date_time: String,
    pub test_result: String,
    pub testing_centre_or_facility: String,
    pub member_state_of_test: String,
    pub member_state_of_test_en: String,
    pub issuer: String,
    pub creation_date: String,
}
