use time::{Date, Duration, OffsetDateTime};

use crate::config::core_config::{IssuerConfig, RecoveryConfig};
use crate::model::certificate::{
    CertificatePdf, CertificateQrCode, DISEASE_OR_AGENT_TARGETED,
    DISEASE_OR_AGENT_TARGETED_DISPLAY, TEST_RESULT_NOT_DETECTED, TEST_RESULT_NOT_DETECTED_DISPLAY,
};
use crate::model::person::{CovidCertificatePerson, CovidCertificatePersonName};
use crate::model::recovery_certificate::{
    RecoveryCertificateData, RecoveryCertificatePdf, RecoveryCertificateQrCode,
};
use crate::model::test_certificate::{
    TestCertificateData, TestCertificatePdf, TestCertificateQrCode,
};
use crate::model::vaccination_certificate::{
    VaccinationCertificateData, VaccinationCertificatePdf, VaccinationCertificateQrCode,
};
use crate::model::value_set::{Language, ValueSets};
use crate::provider::uvci::UvciGenerator;
use crate::service::certificate_generation::dto::{
    CertificateCreateRequestDTO, CovidCertificatePersonDTO, RecoveryCertificateCreateDTO,
    RecoveryCertificateDataDTO, TestCertificateCreateDTO, TestCertificateDataDTO,
    VaccinationCertificateCreateDTO, VaccinationCertificateDataDTO,
};
use crate::service::certificate_generation::validator::parse_language;
use crate::service::error::{BusinessLogicError, ServiceError};
use crate::util::date_format::{format_display_date, format_display_date_time};
use crate::util::standardized_name::standardize_name;

/// Everything the mappers read besides the request itself.
pub(crate) struct MappingContext<'a> {
    pub value_sets: &'a ValueSets,
    pub uvci_generator: &'a dyn UvciGenerator,
    pub issuer: &'a IssuerConfig,
    pub recovery: &'a RecoveryConfig,
    pub now: OffsetDateTime,
}

pub(crate) fn to_qr_code(
    request: &CertificateCreateRequestDTO,
    context: &MappingContext,
) -> Result<CertificateQrCode, ServiceError> {
    Ok(match request {
        CertificateCreateRequestDTO::Vaccination(request) => {
            CertificateQrCode::Vaccination(to_vaccination_qr_code(request, context)?)
        }
        CertificateCreateRequestDTO::Test(request) => {
            CertificateQrCode::Test(to_test_qr_code(request, context)?)
        }
        CertificateCreateRequestDTO::Recovery(request) => {
            CertificateQrCode::Recovery(to_recovery_qr_code(request, context)?)
        }
    })
}

/// Builds the printable model from the already mapped QR payload; the
/// request only contributes the language.
pub(crate) fn to_pdf(
    request: &CertificateCreateRequestDTO,
    qr_code: &CertificateQrCode,
    context: &MappingContext,
) -> Result<CertificatePdf, ServiceError> {
    let language = parse_language(request.language())
        .ok_or_else(|| ServiceError::MappingError("missing certificate language".to_owned()))?;

    Ok(match (request, qr_code) {
        (CertificateCreateRequestDTO::Vaccination(_), CertificateQrCode::Vaccination(qr_code)) => {
            CertificatePdf::Vaccination(to_vaccination_pdf(qr_code, language, context)?)
        }
        (CertificateCreateRequestDTO::Test(_), CertificateQrCode::Test(qr_code)) => {
            CertificatePdf::Test(to_test_pdf(qr_code, language, context)?)
        }
        (CertificateCreateRequestDTO::Recovery(_), CertificateQrCode::Recovery(qr_code)) => {
            CertificatePdf::Recovery(to_recovery_pdf(qr_code, language, context)?)
        }
        (request, qr_code) => {
            return Err(ServiceError::MappingError(format!(
                "{} request cannot be combined with {} QR code",
                request.certificate_type(),
                qr_code.certificate_type()
            )));
        }
    })
}

fn to_vaccination_qr_code(
    request: &VaccinationCertificateCreateDTO,
    context: &MappingContext,
) -> Result<VaccinationCertificateQrCode, ServiceError> {
    let person_data = to_person(request.person_data.as_ref())?;
    let identifier = context.uvci_generator.generate();

    let vaccination_info = request
        .vaccination_info
        .iter()
        .map(|data| to_vaccination_data(data, &identifier, context))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(VaccinationCertificateQrCode {
        version: context.issuer.schema_version.to_owned(),
        person_data,
        vaccination_info,
    })
}

fn to_vaccination_data(
    data: &VaccinationCertificateDataDTO,
    identifier: &str,
    context: &MappingContext,
) -> Result<VaccinationCertificateData, ServiceError> {
    let medicinal_product = data.medicinal_product_code.as_deref().unwrap_or_default();
    let vaccine = context.value_sets.vaccine(medicinal_product).ok_or_else(|| {
        BusinessLogicError::UnknownMedicinalProduct(medicinal_product.to_owned())
    })?;

    Ok(VaccinationCertificateData {
        disease_or_agent_targeted: DISEASE_OR_AGENT_TARGETED.to_owned(),
        vaccine_prophylaxis: vaccine.prophylaxis_code.to_owned(),
        medicinal_product: medicinal_product.to_owned(),
        marketing_authorization_holder: vaccine.auth_holder_code.to_owned(),
        number_of_doses: to_dose_count(data.number_of_doses, "numberOfDoses")?,
        total_number_of_doses: to_dose_count(data.total_number_of_doses, "totalNumberOfDoses")?,
        vaccination_date: required(data.vaccination_date, "vaccinationDate")?,
        country_of_vaccination: required(
            data.country_of_vaccination.to_owned(),
            "countryOfVaccination",
        )?,
        issuer: context.issuer.name.to_owned(),
        identifier: identifier.to_owned(),
    })
}

fn to_test_qr_code(
    request: &TestCertificateCreateDTO,
    context: &MappingContext,
) -> Result<TestCertificateQrCode, ServiceError> {
    let person_data = to_person(request.person_data.as_ref())?;
    let identifier = context.uvci_generator.generate();

    let test_info = request
        .test_info
        .iter()
        .map(|data| to_test_data(data, &identifier, context))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TestCertificateQrCode {
        version: context.issuer.schema_version.to_owned(),
        person_data,
        test_info,
    })
}

fn to_test_data(
    data: &TestCertificateDataDTO,
    identifier: &str,
    context: &MappingContext,
) -> Result<TestCertificateData, ServiceError> {
    let type_code = data.type_code.as_deref().unwrap_or_default();
    let test_type = context
        .value_sets
        .test_type(type_code)
        .ok_or_else(|| BusinessLogicError::UnknownTestType(type_code.to_owned()))?;

    let manufacturer_code = data
        .manufacturer_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty());

    match (test_type.manufacturer_required, manufacturer_code) {
        (true, Some(code)) => {
            if context.value_sets.test_manufacturer(code).is_none() {
                return Err(BusinessLogicError::UnknownTestManufacturer(code.to_owned()).into());
            }
        }
        (false, None) => {}
        (_, manufacturer_code) => {
            return Err(BusinessLogicError::IncompatibleTestManufacturer {
                type_code: type_code.to_owned(),
                manufacturer_code: manufacturer_code.map(str::to_owned),
            }
            .into());
        }
    }

    Ok(TestCertificateData {
        disease_or_agent_targeted: DISEASE_OR_AGENT_TARGETED.to_owned(),
        type_of_test: type_code.to_owned(),
        test_name: test_type.test_name.to_owned(),
        test_manufacturer: manufacturer_code.map(str::to_owned),
        sample_date_time: required(data.sample_date_time, "sampleDateTime")?,
        test_result: TEST_RESULT_NOT_DETECTED.to_owned(),
        testing_centre_or_facility: required(
            data.testing_centre_or_facility.to_owned(),
            "testingCentreOrFacility",
        )?,
        member_state_of_test: required(
            data.member_state_of_test.to_owned(),
            "memberStateOfTest",
        )?,
        issuer: context.issuer.name.to_owned(),
        identifier: identifier.to_owned(),
    })
}

fn to_recovery_qr_code(
    request: &RecoveryCertificateCreateDTO,
    context: &MappingContext,
) -> Result<RecoveryCertificateQrCode, ServiceError> {
    let person_data = to_person(request.person_data.as_ref())?;
    let identifier = context.uvci_generator.generate();

    let recovery_info = request
        .recovery_info
        .iter()
        .map(|data| to_recovery_data(data, &identifier, context))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecoveryCertificateQrCode {
        version: context.issuer.schema_version.to_owned(),
        person_data,
        recovery_info,
    })
}

fn to_recovery_data(
    data: &RecoveryCertificateDataDTO,
    identifier: &str,
    context: &MappingContext,
) -> Result<RecoveryCertificateData, ServiceError> {
    let first_positive = required(
        data.date_of_first_positive_test_result,
        "dateOfFirstPositiveTestResult",
    )?;

    Ok(RecoveryCertificateData {
        disease_or_agent_targeted: DISEASE_OR_AGENT_TARGETED.to_owned(),
        date_of_first_positive_test_result: first_positive,
        country_of_test: required(data.country_of_test.to_owned(), "countryOfTest")?,
        issuer: context.issuer.name.to_owned(),
        valid_from: add_days(first_positive, context.recovery.valid_from_days)?,
        valid_until: add_days(first_positive, context.recovery.valid_until_days)?,
        identifier: identifier.to_owned(),
    })
}

fn to_vaccination_pdf(
    qr_code: &VaccinationCertificateQrCode,
    language: Language,
    context: &MappingContext,
) -> Result<VaccinationCertificatePdf, ServiceError> {
    let data = first_entry(&qr_code.vaccination_info, "vaccination")?;

    let country = context
        .value_sets
        .country(&data.country_of_vaccination)
        .ok_or_else(|| {
            BusinessLogicError::UnknownCountryOfVaccination(data.country_of_vaccination.to_owned())
        })?;
    let vaccine = context
        .value_sets
        .vaccine(&data.medicinal_product)
        .ok_or_else(|| BusinessLogicError::UnknownMedicinalProduct(data.medicinal_product.to_owned()))?;

    Ok(VaccinationCertificatePdf {
        language,
        family_name: qr_code.person_data.name.family_name.to_owned(),
        given_name: qr_code.person_data.name.given_name.to_owned(),
        date_of_birth: format_display_date(qr_code.person_data.date_of_birth)?,
        identifier: data.identifier.to_owned(),
        disease_or_agent_targeted: DISEASE_OR_AGENT_TARGETED_DISPLAY.to_owned(),
        vaccine_prophylaxis: vaccine.prophylaxis.to_owned(),
        medicinal_product: vaccine.display.to_owned(),
        marketing_authorization_holder: vaccine.auth_holder.to_owned(),
        number_of_doses: data.number_of_doses,
        total_number_of_doses: data.total_number_of_doses,
        vaccination_date: format_display_date(data.vaccination_date)?,
        country_of_vaccination: country.localized(language).to_owned(),
        country_of_vaccination_en: country.english().to_owned(),
        issuer: data.issuer.to_owned(),
        creation_date: format_display_date_time(context.now, context.issuer.display_offset)?,
    })
}

fn to_test_pdf(
    qr_code: &TestCertificateQrCode,
    language: Language,
    context: &MappingContext,
) -> Result<TestCertificatePdf, ServiceError> {
    let data = first_entry(&qr_code.test_info, "test")?;

    let member_state = context
        .value_sets
        .country(&data.member_state_of_test)
        .ok_or_else(|| {
            BusinessLogicError::UnknownMemberStateOfTest(data.member_state_of_test.to_owned())
        })?;
    let test_type = context
        .value_sets
        .test_type(&data.type_of_test)
        .ok_or_else(|| BusinessLogicError::UnknownTestType(data.type_of_test.to_owned()))?;
    let test_manufacturer = data
        .test_manufacturer
        .as_deref()
        .map(|code| {
            context
                .value_sets
                .test_manufacturer(code)
                .map(|manufacturer| manufacturer.display.to_owned())
                .ok_or_else(|| BusinessLogicError::UnknownTestManufacturer(code.to_owned()))
        })
        .transpose()?;

    Ok(TestCertificatePdf {
        language,
        family_name: qr_code.person_data.name.family_name.to_owned(),
        given_name: qr_code.person_data.name.given_name.to_owned(),
        date_of_birth: format_display_date(qr_code.person_data.date_of_birth)?,
        identifier: data.identifier.to_owned(),
        disease_or_agent_targeted: DISEASE_OR_AGENT_TARGETED_DISPLAY.to_owned(),
        type_of_test: test_type.display.to_owned(),
        test_name: data.test_name.to_owned(),
        test_manufacturer,
        sample_date_time: format_display_date_time(
            data.sample_date_time,
            context.issuer.display_offset,
        )?,
        test_result: TEST_RESULT_NOT_DETECTED_DISPLAY.to_owned(),
        testing_centre_or_facility: data.testing_centre_or_facility.to_owned(),
        member_state_of_test: member_state.localized(language).to_owned(),
        member_state_of_test_en: member_state.english().to_owned(),
        issuer: data.issuer.to_owned(),
        creation_date: format_display_date_time(context.now, context.issuer.display_offset)?,
    })
}

fn to_recovery_pdf(
    qr_code: &RecoveryCertificateQrCode,
    language: Language,
    context: &MappingContext,
) -> Result<RecoveryCertificatePdf, ServiceError> {
    let data = first_entry(&qr_code.recovery_info, "recovery")?;

    let country = context
        .value_sets
        .country(&data.country_of_test)
        .ok_or_else(|| BusinessLogicError::UnknownCountryOfTest(data.country_of_test.to_owned()))?;

    Ok(RecoveryCertificatePdf {
        language,
        family_name: qr_code.person_data.name.family_name.to_owned(),
        given_name: qr_code.person_data.name.given_name.to_owned(),
        date_of_birth: format_display_date(qr_code.person_data.date_of_birth)?,
        identifier: data.identifier.to_owned(),
        disease_or_agent_targeted: DISEASE_OR_AGENT_TARGETED_DISPLAY.to_owned(),
        date_of_first_positive_test_result: format_display_date(
            data.date_of_first_positive_test_result,
        )?,
        country_of_test: country.localized(language).to_owned(),
        country_of_test_en: country.english().to_owned(),
        valid_from: format_display_date(data.valid_from)?,
        valid_until: format_display_date(data.valid_until)?,
        issuer: data.issuer.to_owned(),
        creation_date: format_display_date_time(context.now, context.issuer.display_offset)?,
    })
}

fn to_person(
    person: Option<&CovidCertificatePersonDTO>,
) -> Result<CovidCertificatePerson, ServiceError> {
    let person = required(person, "personData")?;
    let name = required(person.name.as_ref(), "name")?;
    let family_name = required(name.family_name.as_deref(), "familyName")?;
    let given_name = required(name.given_name.as_deref(), "givenName")?;

    Ok(CovidCertificatePerson {
        name: CovidCertificatePersonName {
            family_name: family_name.to_owned(),
            family_name_standardized: standardize_name(family_name),
            given_name: given_name.to_owned(),
            given_name_standardized: standardize_name(given_name),
        },
        date_of_birth: required(person.date_of_birth, "dateOfBirth")?,
    })
}

fn first_entry<'a, T>(entries: &'a [T], kind: &str) -> Result<&'a T, ServiceError> {
    entries
        .first()
        .ok_or_else(|| ServiceError::MappingError(format!("{kind} info is empty")))
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::MappingError(format!("missing `{field}`")))
}

fn to_dose_count(value: Option<i32>, field: &str) -> Result<u8, ServiceError> {
    u8::try_from(required(value, field)?)
        .map_err(|_| ServiceError::MappingError(format!("`{field}` out of range")))
}

fn add_days(date: Date, days: u16) -> Result<Date, ServiceError> {
    date.checked_add(Duration::days(days.into()))
        .ok_or_else(|| ServiceError::MappingError(format!("{date} + {days} days overflows")))
}
