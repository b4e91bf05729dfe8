use rstest::rstest;
use time::Duration;
use time::macros::{date, datetime};

use super::*;
use crate::service::certificate_generation::dto::{
    CovidCertificatePersonNameDTO, RecoveryCertificateCreateDTO, TestCertificateCreateDTO,
    VaccinationCertificateCreateDTO,
};
use crate::service::test_utilities::*;

fn vaccination(data: VaccinationCertificateDataDTO) -> CertificateCreateRequestDTO {
    CertificateCreateRequestDTO::Vaccination(VaccinationCertificateCreateDTO {
        vaccination_info: vec![data],
        ..dummy_vaccination_request()
    })
}

fn test_request(data: TestCertificateDataDTO) -> CertificateCreateRequestDTO {
    CertificateCreateRequestDTO::Test(TestCertificateCreateDTO {
        test_info: vec![data],
        ..dummy_test_request()
    })
}

fn recovery(data: RecoveryCertificateDataDTO) -> CertificateCreateRequestDTO {
    CertificateCreateRequestDTO::Recovery(RecoveryCertificateCreateDTO {
        recovery_info: vec![data],
        ..dummy_recovery_request()
    })
}

#[test]
fn test_validate_valid_requests() {
    let now = get_dummy_now();

    assert!(validate_create_request(&vaccination(dummy_vaccination_data()), now).is_ok());
    assert!(validate_create_request(&test_request(dummy_test_data()), now).is_ok());
    assert!(validate_create_request(&recovery(dummy_recovery_data()), now).is_ok());
}

#[rstest]
#[case(Some(1), Some(2), None)]
#[case(Some(2), Some(2), None)]
#[case(Some(9), Some(9), None)]
#[case(Some(1), Some(0), Some(ValidationError::InvalidDoses))]
#[case(Some(5), Some(2), Some(ValidationError::InvalidDoses))]
#[case(Some(0), Some(2), Some(ValidationError::InvalidDoses))]
#[case(Some(10), Some(10), Some(ValidationError::InvalidDoses))]
#[case(Some(1), Some(10), Some(ValidationError::InvalidDoses))]
#[case(Some(-1), Some(2), Some(ValidationError::InvalidDoses))]
#[case(None, Some(2), Some(ValidationError::InvalidDoses))]
#[case(Some(1), None, Some(ValidationError::InvalidDoses))]
fn test_validate_vaccination_doses(
    #[case] number_of_doses: Option<i32>,
    #[case] total_number_of_doses: Option<i32>,
    #[case] expected: Option<ValidationError>,
) {
    let request = vaccination(VaccinationCertificateDataDTO {
        number_of_doses,
        total_number_of_doses,
        ..dummy_vaccination_data()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()).err(),
        expected
    );
}

#[rstest]
#[case(Some(date!(2021 - 06 - 01)), None)]
#[case(Some(date!(2020 - 12 - 27)), None)]
#[case(Some(date!(2021 - 06 - 02)), Some(ValidationError::InvalidVaccinationDate))]
#[case(None, Some(ValidationError::InvalidVaccinationDate))]
fn test_validate_vaccination_date(
    #[case] vaccination_date: Option<Date>,
    #[case] expected: Option<ValidationError>,
) {
    let request = vaccination(VaccinationCertificateDataDTO {
        vaccination_date,
        ..dummy_vaccination_data()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()).err(),
        expected
    );
}

#[test]
fn test_validate_vaccination_missing_country() {
    let request = vaccination(VaccinationCertificateDataDTO {
        country_of_vaccination: None,
        ..dummy_vaccination_data()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::InvalidCountryOfVaccination)
    );
}

#[test]
fn test_validate_vaccination_unknown_country_passes() {
    // value set membership is checked while mapping
    let request = vaccination(VaccinationCertificateDataDTO {
        country_of_vaccination: Some("XX".to_owned()),
        ..dummy_vaccination_data()
    });

    assert!(validate_create_request(&request, get_dummy_now()).is_ok());
}

#[test]
fn test_validate_vaccination_rules_order() {
    let request = vaccination(VaccinationCertificateDataDTO {
        number_of_doses: Some(5),
        total_number_of_doses: Some(2),
        vaccination_date: None,
        country_of_vaccination: None,
        ..dummy_vaccination_data()
    });
    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::InvalidDoses)
    );

    let request = vaccination(VaccinationCertificateDataDTO {
        vaccination_date: None,
        country_of_vaccination: None,
        ..dummy_vaccination_data()
    });
    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::InvalidVaccinationDate)
    );
}

#[test]
fn test_validate_empty_entries() {
    let now = get_dummy_now();

    let request = CertificateCreateRequestDTO::Vaccination(VaccinationCertificateCreateDTO {
        vaccination_info: vec![],
        ..dummy_vaccination_request()
    });
    assert_eq!(
        validate_create_request(&request, now),
        Err(ValidationError::NoVaccinationData)
    );

    let request = CertificateCreateRequestDTO::Test(TestCertificateCreateDTO {
        test_info: vec![],
        ..dummy_test_request()
    });
    assert_eq!(
        validate_create_request(&request, now),
        Err(ValidationError::NoTestData)
    );

    let request = CertificateCreateRequestDTO::Recovery(RecoveryCertificateCreateDTO {
        recovery_info: vec![],
        ..dummy_recovery_request()
    });
    assert_eq!(
        validate_create_request(&request, now),
        Err(ValidationError::NoRecoveryData)
    );
}

#[test]
fn test_validate_second_entry_is_checked() {
    let request = CertificateCreateRequestDTO::Vaccination(VaccinationCertificateCreateDTO {
        vaccination_info: vec![
            dummy_vaccination_data(),
            VaccinationCertificateDataDTO {
                vaccination_date: None,
                ..dummy_vaccination_data()
            },
        ],
        ..dummy_vaccination_request()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::InvalidVaccinationDate)
    );
}

#[rstest]
#[case(Some("Müller"), Some("Anna"), None)]
#[case(Some(""), Some("Anna"), Some(ValidationError::InvalidFamilyName))]
#[case(Some("   "), Some("Anna"), Some(ValidationError::InvalidFamilyName))]
#[case(None, Some("Anna"), Some(ValidationError::InvalidFamilyName))]
#[case(Some("Müller"), None, Some(ValidationError::InvalidGivenName))]
#[case(Some("Müller"), Some(""), Some(ValidationError::InvalidGivenName))]
#[case(None, None, Some(ValidationError::InvalidFamilyName))]
#[case(Some("李"), Some("小龍"), Some(ValidationError::InvalidFamilyName))]
#[case(Some("Lee"), Some("小龍"), Some(ValidationError::InvalidGivenName))]
#[case(Some("Lee"), Some("- -"), Some(ValidationError::InvalidGivenName))]
fn test_validate_person_names(
    #[case] family_name: Option<&str>,
    #[case] given_name: Option<&str>,
    #[case] expected: Option<ValidationError>,
) {
    let request = CertificateCreateRequestDTO::Vaccination(VaccinationCertificateCreateDTO {
        person_data: Some(CovidCertificatePersonDTO {
            name: Some(CovidCertificatePersonNameDTO {
                family_name: family_name.map(str::to_owned),
                given_name: given_name.map(str::to_owned),
            }),
            ..dummy_person()
        }),
        ..dummy_vaccination_request()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()).err(),
        expected
    );
}

#[test]
fn test_validate_person_name_length() {
    let at_limit = "ä".repeat(50);
    let too_long = "a".repeat(51);

    let request = |family_name: &str| {
        CertificateCreateRequestDTO::Recovery(RecoveryCertificateCreateDTO {
            person_data: Some(CovidCertificatePersonDTO {
                name: Some(CovidCertificatePersonNameDTO {
                    family_name: Some(family_name.to_owned()),
                    given_name: Some("Anna".to_owned()),
                }),
                ..dummy_person()
            }),
            ..dummy_recovery_request()
        })
    };

    assert!(validate_create_request(&request(&at_limit), get_dummy_now()).is_ok());
    assert_eq!(
        validate_create_request(&request(&too_long), get_dummy_now()),
        Err(ValidationError::InvalidFamilyName)
    );
}

#[test]
fn test_validate_missing_person() {
    let request = CertificateCreateRequestDTO::Test(TestCertificateCreateDTO {
        person_data: None,
        ..dummy_test_request()
    });
    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::NoPersonData)
    );

    let request = CertificateCreateRequestDTO::Test(TestCertificateCreateDTO {
        person_data: Some(CovidCertificatePersonDTO {
            name: None,
            ..dummy_person()
        }),
        ..dummy_test_request()
    });
    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::NoPersonData)
    );
}

#[rstest]
#[case(Some(date!(1900 - 01 - 01)), None)]
#[case(Some(date!(2021 - 06 - 01)), None)]
#[case(Some(date!(1899 - 12 - 31)), Some(ValidationError::InvalidDateOfBirth))]
#[case(Some(date!(2021 - 06 - 02)), Some(ValidationError::InvalidDateOfBirth))]
#[case(None, Some(ValidationError::InvalidDateOfBirth))]
fn test_validate_date_of_birth(
    #[case] date_of_birth: Option<Date>,
    #[case] expected: Option<ValidationError>,
) {
    let request = CertificateCreateRequestDTO::Vaccination(VaccinationCertificateCreateDTO {
        person_data: Some(CovidCertificatePersonDTO {
            date_of_birth,
            ..dummy_person()
        }),
        ..dummy_vaccination_request()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()).err(),
        expected
    );
}

#[rstest]
#[case(Some("de"), None)]
#[case(Some("fr"), None)]
#[case(Some("it"), None)]
#[case(Some("rm"), None)]
#[case(Some("en"), Some(ValidationError::InvalidLanguage))]
#[case(Some("DE"), Some(ValidationError::InvalidLanguage))]
#[case(Some(""), Some(ValidationError::InvalidLanguage))]
#[case(None, Some(ValidationError::InvalidLanguage))]
fn test_validate_language(#[case] language: Option<&str>, #[case] expected: Option<ValidationError>) {
    let request = CertificateCreateRequestDTO::Vaccination(VaccinationCertificateCreateDTO {
        language: language.map(str::to_owned),
        ..dummy_vaccination_request()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()).err(),
        expected
    );
}

#[test]
fn test_validate_person_before_entries() {
    let request = CertificateCreateRequestDTO::Vaccination(VaccinationCertificateCreateDTO {
        person_data: None,
        vaccination_info: vec![],
        language: None,
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::NoPersonData)
    );
}

#[rstest]
#[case(None, Some(ValidationError::InvalidTypeOfTest))]
#[case(Some(""), Some(ValidationError::InvalidTypeOfTest))]
#[case(Some("unknown"), None)]
fn test_validate_test_type(
    #[case] type_code: Option<&str>,
    #[case] expected: Option<ValidationError>,
) {
    let request = test_request(TestCertificateDataDTO {
        type_code: type_code.map(str::to_owned),
        ..dummy_test_data()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()).err(),
        expected
    );
}

#[rstest]
#[case(Some(datetime!(2021-06-01 10:00 UTC)), None)]
#[case(Some(datetime!(2021-06-01 11:30 +02:00)), None)]
#[case(Some(datetime!(2021-06-01 10:01 UTC)), Some(ValidationError::InvalidSampleDateTime))]
#[case(None, Some(ValidationError::InvalidSampleDateTime))]
fn test_validate_sample_date_time(
    #[case] sample_date_time: Option<OffsetDateTime>,
    #[case] expected: Option<ValidationError>,
) {
    let request = test_request(TestCertificateDataDTO {
        sample_date_time,
        ..dummy_test_data()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()).err(),
        expected
    );
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("  "))]
fn test_validate_missing_testing_centre(#[case] centre: Option<&str>) {
    let request = test_request(TestCertificateDataDTO {
        testing_centre_or_facility: centre.map(str::to_owned),
        ..dummy_test_data()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::InvalidTestCenter)
    );
}

#[test]
fn test_validate_testing_centre_too_long() {
    let request = test_request(TestCertificateDataDTO {
        testing_centre_or_facility: Some("x".repeat(51)),
        ..dummy_test_data()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::InvalidTestCenter)
    );
}

#[test]
fn test_validate_missing_member_state_of_test() {
    let request = test_request(TestCertificateDataDTO {
        member_state_of_test: None,
        ..dummy_test_data()
    });

    assert_eq!(
        validate_create_request(&request, get_dummy_now()),
        Err(ValidationError::InvalidMemberStateOfTest)
    );
}

#[test]
fn test_validate_recovery() {
    let now = get_dummy_now();

    let request = recovery(RecoveryCertificateDataDTO {
        date_of_first_positive_test_result: Some(now.date() + Duration::days(1)),
        ..dummy_recovery_data()
    });
    assert_eq!(
        validate_create_request(&request, now),
        Err(ValidationError::InvalidDateOfFirstPositiveTestResult)
    );

    let request = recovery(RecoveryCertificateDataDTO {
        date_of_first_positive_test_result: None,
        ..dummy_recovery_data()
    });
    assert_eq!(
        validate_create_request(&request, now),
        Err(ValidationError::InvalidDateOfFirstPositiveTestResult)
    );

    let request = recovery(RecoveryCertificateDataDTO {
        date_of_first_positive_test_result: Some(now.date()),
        country_of_test: None,
    });
    assert_eq!(
        validate_create_request(&request, now),
        Err(ValidationError::InvalidCountryOfTest)
    );
}

#[test]
fn test_parse_language() {
    assert_eq!(parse_language(Some("rm")), Some(Language::Rm));
    assert_eq!(parse_language(Some("xx")), None);
    assert_eq!(parse_language(None), None);
}
