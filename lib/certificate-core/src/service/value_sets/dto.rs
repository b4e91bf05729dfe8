use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::model::value_set::{CountryDisplay, Language};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetsResponseDTO {
    pub languages: Vec<Language>,
    pub countries: Vec<CountryResponseDTO>,
    pub vaccines: Vec<VaccineResponseDTO>,
    pub test_types: Vec<TestTypeResponseDTO>,
    pub test_manufacturers: Vec<TestManufacturerResponseDTO>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponseDTO {
    pub code: String,
    pub display: CountryDisplay,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineResponseDTO {
    pub code: String,
    pub display: String,
    pub prophylaxis_code: String,
    pub prophylaxis: String,
    pub auth_holder_code: String,
    pub auth_holder: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestTypeResponseDTO {
    pub code: String,
    pub display: String,
    pub manufacturer_required: bool,
    pub test_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestManufacturerResponseDTO {
    pub code: String,
    pub display: String,
}
