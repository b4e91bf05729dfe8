use std::str::FromStr;

use time::macros::date;
use time::{Date, OffsetDateTime};

use crate::model::value_set::Language;
use crate::service::certificate_generation::dto::{
    CertificateCreateRequestDTO, CovidCertificatePersonDTO, RecoveryCertificateDataDTO,
    TestCertificateDataDTO, VaccinationCertificateDataDTO,
};
use crate::service::error::ValidationError;
use crate::util::standardized_name::standardize_name;

const MAX_NAME_LENGTH: usize = 50;
const MAX_TESTING_CENTRE_LENGTH: usize = 50;
const MAX_DOSES: i32 = 9;
const MIN_DATE_OF_BIRTH: Date = date!(1900 - 01 - 01);

/// Checks a request before any mapping. Rules are evaluated in a fixed order
/// and the first violation is reported.
pub(crate) fn validate_create_request(
    request: &CertificateCreateRequestDTO,
    now: OffsetDateTime,
) -> Result<(), ValidationError> {
    let today = now.date();

    validate_person(request.person_data(), today)?;
    validate_language(request.language())?;

    match request {
        CertificateCreateRequestDTO::Vaccination(request) => {
            if request.vaccination_info.is_empty() {
                return Err(ValidationError::NoVaccinationData);
            }
            request
                .vaccination_info
                .iter()
                .try_for_each(|data| validate_vaccination_data(data, today))
        }
        CertificateCreateRequestDTO::Test(request) => {
            if request.test_info.is_empty() {
                return Err(ValidationError::NoTestData);
            }
            request
                .test_info
                .iter()
                .try_for_each(|data| validate_test_data(data, now))
        }
        CertificateCreateRequestDTO::Recovery(request) => {
            if request.recovery_info.is_empty() {
                return Err(ValidationError::NoRecoveryData);
            }
            request
                .recovery_info
                .iter()
                .try_for_each(|data| validate_recovery_data(data, today))
        }
    }
}

pub(crate) fn parse_language(language: Option<&str>) -> Option<Language> {
    language.and_then(|language| Language::from_str(language).ok())
}

fn validate_person(
    person: Option<&CovidCertificatePersonDTO>,
    today: Date,
) -> Result<(), ValidationError> {
    let person = person.ok_or(ValidationError::NoPersonData)?;
    let name = person.name.as_ref().ok_or(ValidationError::NoPersonData)?;

    if !is_valid_name(name.family_name.as_deref()) {
        return Err(ValidationError::InvalidFamilyName);
    }
    if !is_valid_name(name.given_name.as_deref()) {
        return Err(ValidationError::InvalidGivenName);
    }

    match person.date_of_birth {
        Some(date_of_birth) if (MIN_DATE_OF_BIRTH..=today).contains(&date_of_birth) => Ok(()),
        _ => Err(ValidationError::InvalidDateOfBirth),
    }
}

fn validate_language(language: Option<&str>) -> Result<(), ValidationError> {
    parse_language(language)
        .map(|_| ())
        .ok_or(ValidationError::InvalidLanguage)
}

fn validate_vaccination_data(
    data: &VaccinationCertificateDataDTO,
    today: Date,
) -> Result<(), ValidationError> {
    match (data.number_of_doses, data.total_number_of_doses) {
        (Some(doses), Some(total))
            if (1..=MAX_DOSES).contains(&doses) && total <= MAX_DOSES && doses <= total => {}
        _ => return Err(ValidationError::InvalidDoses),
    }

    if !data.vaccination_date.is_some_and(|date| date <= today) {
        return Err(ValidationError::InvalidVaccinationDate);
    }

    if data.country_of_vaccination.is_none() {
        return Err(ValidationError::InvalidCountryOfVaccination);
    }

    Ok(())
}

fn validate_test_data(
    data: &TestCertificateDataDTO,
    now: OffsetDateTime,
) -> Result<(), ValidationError> {
    // type and manufacturer combination is checked against the value sets while mapping
    if !is_valid_text(data.type_code.as_deref(), usize::MAX) {
        return Err(ValidationError::InvalidTypeOfTest);
    }

    if !data
        .sample_date_time
        .is_some_and(|sample_date_time| sample_date_time <= now)
    {
        return Err(ValidationError::InvalidSampleDateTime);
    }

    if !is_valid_text(
        data.testing_centre_or_facility.as_deref(),
        MAX_TESTING_CENTRE_LENGTH,
    ) {
        return Err(ValidationError::InvalidTestCenter);
    }

    if data.member_state_of_test.is_none() {
        return Err(ValidationError::InvalidMemberStateOfTest);
    }

    Ok(())
}

fn validate_recovery_data(
    data: &RecoveryCertificateDataDTO,
    today: Date,
) -> Result<(), ValidationError> {
    if !data
        .date_of_first_positive_test_result
        .is_some_and(|date| date <= today)
    {
        return Err(ValidationError::InvalidDateOfFirstPositiveTestResult);
    }

    if data.country_of_test.is_none() {
        return Err(ValidationError::InvalidCountryOfTest);
    }

    Ok(())
}

/// A name must also leave something after standardization, otherwise the
/// payload would carry an empty `fnt`/`gnt`.
fn is_valid_name(value: Option<&str>) -> bool {
    is_valid_text(value, MAX_NAME_LENGTH)
        && value.is_some_and(|value| !standardize_name(value).is_empty())
}

fn is_valid_text(value: Option<&str>, max_length: usize) -> bool {
    value.is_some_and(|value| !value.trim().is_empty() && value.chars().count() <= max_length)
}

#[cfg(test)]
mod test;
