use std::sync::Arc;

use indoc::indoc;
use serde::{Deserialize, Serialize};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

use crate::config::core_config::AppConfig;
use crate::model::value_set::ValueSets;
use crate::provider::uvci::MockUvciGenerator;
use crate::service::certificate_generation::dto::{
    CovidCertificatePersonDTO, CovidCertificatePersonNameDTO, RecoveryCertificateCreateDTO,
    RecoveryCertificateDataDTO, TestCertificateCreateDTO, TestCertificateDataDTO,
    VaccinationCertificateCreateDTO, VaccinationCertificateDataDTO,
};
use crate::util::clock::MockClock;

pub const ISSUER: &str = "Bundesamt für Gesundheit (BAG)";
pub const UVCI: &str = "urn:uvci:01:CH:2987CC9617DD5593806D4285";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomConfig {}

pub fn generic_config() -> AppConfig<CustomConfig> {
    let config = indoc! {"
        issuer:
            name: 'Bundesamt für Gesundheit (BAG)'
            schemaVersion: '1.0.0'
        valueSets:
            countries:
                - code: 'CH'
                  de: 'Schweiz'
                  fr: 'Suisse'
                  it: 'Svizzera'
                  rm: 'Svizra'
                  en: 'Switzerland'
                - code: 'DE'
                  de: 'Deutschland'
                  fr: 'Allemagne'
                  it: 'Germania'
                  rm: 'Germania'
                  en: 'Germany'
                - code: 'FR'
                  de: 'Frankreich'
                  fr: 'France'
                  it: 'Francia'
                  rm: 'Frantscha'
                  en: 'France'
            vaccines:
                - code: 'EU/1/20/1528'
                  display: 'Comirnaty'
                  prophylaxisCode: '1119349007'
                  prophylaxis: 'SARS-CoV-2 mRNA vaccine'
                  authHolderCode: 'ORG-100030215'
                  authHolder: 'Biontech Manufacturing GmbH'
                - code: 'EU/1/20/1507'
                  display: 'Spikevax'
                  prophylaxisCode: '1119349007'
                  prophylaxis: 'SARS-CoV-2 mRNA vaccine'
                  authHolderCode: 'ORG-100031184'
                  authHolder: 'Moderna Biotech Spain S.L.'
            testTypes:
                - code: 'LP6464-4'
                  display: 'Nucleic acid amplification with probe detection'
                  testName: 'PCR'
                - code: 'LP217198-3'
                  display: 'Rapid immunoassay'
                  manufacturerRequired: true
            testManufacturers:
                - code: '1232'
                  display: 'Abbott Rapid Diagnostics, Panbio COVID-19 Ag Rapid Test'
                - code: '1304'
                  display: 'AMEDA Labordiagnostik GmbH, AMP Rapid Test SARS-CoV-2 Ag'
    "};

    AppConfig::from_yaml([config]).unwrap()
}

pub fn generic_value_sets() -> ValueSets {
    ValueSets::try_from(&generic_config().core.value_sets).unwrap()
}

pub fn get_dummy_now() -> OffsetDateTime {
    datetime!(2021-06-01 10:00 UTC)
}

pub fn yesterday() -> Date {
    date!(2021 - 05 - 31)
}

pub fn fixed_clock() -> Arc<MockClock> {
    let mut clock = MockClock::new();
    clock.expect_now_utc().returning(get_dummy_now);
    Arc::new(clock)
}

pub fn fixed_uvci_generator() -> Arc<MockUvciGenerator> {
    let mut uvci_generator = MockUvciGenerator::new();
    uvci_generator
        .expect_generate()
        .returning(|| UVCI.to_owned());
    Arc::new(uvci_generator)
}

pub fn dummy_person() -> CovidCertificatePersonDTO {
    CovidCertificatePersonDTO {
        name: Some(CovidCertificatePersonNameDTO {
            family_name: Some("Müller".to_owned()),
            given_name: Some("Anna Maria".to_owned()),
        }),
        date_of_birth: Some(date!(1980 - 03 - 15)),
    }
}

pub fn dummy_vaccination_data() -> VaccinationCertificateDataDTO {
    VaccinationCertificateDataDTO {
        medicinal_product_code: Some("EU/1/20/1528".to_owned()),
        number_of_doses: Some(1),
        total_number_of_doses: Some(2),
        vaccination_date: Some(yesterday()),
        country_of_vaccination: Some("CH".to_owned()),
    }
}

pub fn dummy_vaccination_request() -> VaccinationCertificateCreateDTO {
    VaccinationCertificateCreateDTO {
        person_data: Some(dummy_person()),
        vaccination_info: vec![dummy_vaccination_data()],
        language: Some("de".to_owned()),
    }
}

pub fn dummy_test_data() -> TestCertificateDataDTO {
    TestCertificateDataDTO {
        type_code: Some("LP6464-4".to_owned()),
        manufacturer_code: None,
        sample_date_time: Some(datetime!(2021-05-31 08:00 UTC)),
        testing_centre_or_facility: Some("Testcenter Bern".to_owned()),
        member_state_of_test: Some("CH".to_owned()),
    }
}

pub fn dummy_test_request() -> TestCertificateCreateDTO {
    TestCertificateCreateDTO {
        person_data: Some(dummy_person()),
        test_info: vec![dummy_test_data()],
        language: Some("de".to_owned()),
    }
}

pub fn dummy_recovery_data() -> RecoveryCertificateDataDTO {
    RecoveryCertificateDataDTO {
        date_of_first_positive_test_result: Some(date!(2021 - 05 - 01)),
        country_of_test: Some("CH".to_owned()),
    }
}

pub fn dummy_recovery_request() -> RecoveryCertificateCreateDTO {
    RecoveryCertificateCreateDTO {
        person_data: Some(dummy_person()),
        recovery_info: vec![dummy_recovery_data()],
        language: Some("de".to_owned()),
    }
}
