use strum::IntoEnumIterator;

use super::dto::{
    CountryResponseDTO, TestManufacturerResponseDTO, TestTypeResponseDTO, ValueSetsResponseDTO,
    VaccineResponseDTO,
};
use crate::model::value_set::{Language, ValueSets};

impl From<&ValueSets> for ValueSetsResponseDTO {
    fn from(value: &ValueSets) -> Self {
        Self {
            languages: Language::iter().collect(),
            countries: value
                .countries()
                .map(|(code, display)| CountryResponseDTO {
                    code: code.to_owned(),
                    display: display.to_owned(),
                })
                .collect(),
            vaccines: value
                .vaccines()
                .map(|(code, vaccine)| VaccineResponseDTO {
                    code: code.to_owned(),
                    display: vaccine.display.to_owned(),
                    prophylaxis_code: vaccine.prophylaxis_code.to_owned(),
                    prophylaxis: vaccine.prophylaxis.to_owned(),
                    auth_holder_code: vaccine.auth_holder_code.to_owned(),
                    auth_holder: vaccine.auth_holder.to_owned(),
                })
                .collect(),
            test_types: value
                .test_types()
                .map(|(code, test_type)| TestTypeResponseDTO {
                    code: code.to_owned(),
                    display: test_type.display.to_owned(),
                    manufacturer_required: test_type.manufacturer_required,
                    test_name: test_type.test_name.to_owned(),
                })
                .collect(),
            test_manufacturers: value
                .test_manufacturers()
                .map(|(code, manufacturer)| TestManufacturerResponseDTO {
                    code: code.to_owned(),
                    display: manufacturer.display.to_owned(),
                })
                .collect(),
        }
    }
}
