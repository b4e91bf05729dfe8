use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::config::ConfigValidationError;
use crate::config::core_config::{ValueSetEntry, ValueSetsConfig};

/// Certificate languages. English is always printed alongside.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    Fr,
    It,
    Rm,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDisplay {
    pub de: String,
    pub fr: String,
    pub it: String,
    pub rm: String,
    pub en: String,
}

impl CountryDisplay {
    pub fn localized(&self, language: Language) -> &str {
        match language {
            Language::De => &self.de,
            Language::Fr => &self.fr,
            Language::It => &self.it,
            Language::Rm => &self.rm,
        }
    }

    pub fn english(&self) -> &str {
        &self.en
    }

    fn names(&self) -> [&str; 5] {
        [&self.de, &self.fr, &self.it, &self.rm, &self.en]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccine {
    pub display: String,
    pub prophylaxis_code: String,
    pub prophylaxis: String,
    pub auth_holder_code: String,
    pub auth_holder: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestType {
    pub display: String,
    /// Rapid antigen tests are identified by their manufacturer, NAA tests must not carry one
    #[serde(default)]
    pub manufacturer_required: bool,
    #[serde(default)]
    pub test_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestManufacturer {
    pub display: String,
}

/// Reference data lookup table. Built once from configuration and shared
/// read-only between requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueSets {
    countries: IndexMap<String, CountryDisplay>,
    vaccines: IndexMap<String, Vaccine>,
    test_types: IndexMap<String, TestType>,
    test_manufacturers: IndexMap<String, TestManufacturer>,
}

impl ValueSets {
    pub fn country(&self, code: &str) -> Option<&CountryDisplay> {
        self.countries.get(code)
    }

    pub fn vaccine(&self, code: &str) -> Option<&Vaccine> {
        self.vaccines.get(code)
    }

    pub fn test_type(&self, code: &str) -> Option<&TestType> {
        self.test_types.get(code)
    }

    pub fn test_manufacturer(&self, code: &str) -> Option<&TestManufacturer> {
        self.test_manufacturers.get(code)
    }

    pub fn countries(&self) -> impl Iterator<Item = (&str, &CountryDisplay)> {
        self.countries.iter().map(|(code, value)| (code.as_str(), value))
    }

    pub fn vaccines(&self) -> impl Iterator<Item = (&str, &Vaccine)> {
        self.vaccines.iter().map(|(code, value)| (code.as_str(), value))
    }

    pub fn test_types(&self) -> impl Iterator<Item = (&str, &TestType)> {
        self.test_types.iter().map(|(code, value)| (code.as_str(), value))
    }

    pub fn test_manufacturers(&self) -> impl Iterator<Item = (&str, &TestManufacturer)> {
        self.test_manufacturers
            .iter()
            .map(|(code, value)| (code.as_str(), value))
    }
}

impl TryFrom<&ValueSetsConfig> for ValueSets {
    type Error = ConfigValidationError;

    fn try_from(config: &ValueSetsConfig) -> Result<Self, Self::Error> {
        let countries = index_entries("countries", &config.countries, |country| {
            country.names().iter().all(|name| !name.trim().is_empty())
        })?;
        let vaccines = index_entries("vaccines", &config.vaccines, |vaccine| {
            !vaccine.display.trim().is_empty()
                && !vaccine.prophylaxis_code.trim().is_empty()
                && !vaccine.auth_holder_code.trim().is_empty()
        })?;
        let test_types = index_entries("testTypes", &config.test_types, |test_type| {
            !test_type.display.trim().is_empty()
        })?;
        let test_manufacturers =
            index_entries("testManufacturers", &config.test_manufacturers, |manufacturer| {
                !manufacturer.display.trim().is_empty()
            })?;

        if countries.is_empty() {
            return Err(ConfigValidationError::EmptyValueSet("countries"));
        }
        if vaccines.is_empty() {
            return Err(ConfigValidationError::EmptyValueSet("vaccines"));
        }
        if test_types.is_empty() {
            return Err(ConfigValidationError::EmptyValueSet("testTypes"));
        }
        if test_types
            .values()
            .any(|test_type| test_type.manufacturer_required)
            && test_manufacturers.is_empty()
        {
            return Err(ConfigValidationError::EmptyValueSet("testManufacturers"));
        }

        Ok(Self {
            countries,
            vaccines,
            test_types,
            test_manufacturers,
        })
    }
}

/// Keys the entries by code, keeping their configured order.
fn index_entries<T: Clone>(
    value_set: &'static str,
    entries: &[ValueSetEntry<T>],
    has_display: impl Fn(&T) -> bool,
) -> Result<IndexMap<String, T>, ConfigValidationError> {
    let mut result = IndexMap::with_capacity(entries.len());

    for ValueSetEntry { code, value } in entries {
        if code.trim().is_empty() || !has_display(value) {
            return Err(ConfigValidationError::MissingDisplayName {
                value_set,
                code: code.to_owned(),
            });
        }
        if result.insert(code.to_owned(), value.clone()).is_some() {
            return Err(ConfigValidationError::DuplicateCode {
                value_set,
                code: code.to_owned(),
            });
        }
    }

    Ok(result)
}
