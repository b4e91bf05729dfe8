use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use time::UtcOffset;

use super::{ConfigError, ConfigParsingError, ConfigValidationError};
use crate::model::value_set::{CountryDisplay, TestManufacturer, TestType, Vaccine};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    pub(super) app: Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    #[serde(default)]
    pub app: Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    pub issuer: IssuerConfig,
    #[serde(default)]
    pub recovery: RecoveryConfig,
    pub value_sets: ValueSetsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerConfig {
    /// Printed on the certificate and embedded as `is`
    pub name: String,
    /// Payload schema version embedded as `ver`
    pub schema_version: String,
    #[serde(default)]
    pub uvci: UvciConfig,
    /// Offset printed times are shown at, e.g. `+01:00`
    #[serde(
        default = "default_display_offset",
        with = "crate::util::date_format::utc_offset"
    )]
    pub display_offset: UtcOffset,
}

fn default_display_offset() -> UtcOffset {
    UtcOffset::UTC
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UvciConfig {
    pub version: String,
    pub country: String,
    pub checksum: bool,
}

impl Default for UvciConfig {
    fn default() -> Self {
        Self {
            version: "01".to_owned(),
            country: "CH".to_owned(),
            checksum: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecoveryConfig {
    pub valid_from_days: u16,
    pub valid_until_days: u16,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            valid_from_days: 10,
            valid_until_days: 179,
        }
    }
}

/// Value sets are lists so the configured order survives parsing. A later
/// input replaces a whole list rather than extending it.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueSetsConfig {
    pub countries: Vec<ValueSetEntry<CountryDisplay>>,
    pub vaccines: Vec<ValueSetEntry<Vaccine>>,
    pub test_types: Vec<ValueSetEntry<TestType>>,
    pub test_manufacturers: Vec<ValueSetEntry<TestManufacturer>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSetEntry<T> {
    pub code: String,
    #[serde(flatten)]
    pub value: T,
}

impl CoreConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.issuer.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyIssuerName);
        }

        let version = &self.issuer.schema_version;
        let version_parts: Vec<&str> = version.split('.').collect();
        if version_parts.len() != 3
            || version_parts
                .iter()
                .any(|part| part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(ConfigValidationError::InvalidSchemaVersion(
                version.to_owned(),
            ));
        }

        let uvci = &self.issuer.uvci;
        if uvci.country.len() != 2 || !uvci.country.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigValidationError::InvalidUvciCountry(
                uvci.country.to_owned(),
            ));
        }
        if uvci.version.len() != 2 || !uvci.version.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigValidationError::InvalidUvciVersion(
                uvci.version.to_owned(),
            ));
        }

        let RecoveryConfig {
            valid_from_days,
            valid_until_days,
        } = self.recovery;
        if valid_from_days >= valid_until_days {
            return Err(ConfigValidationError::InvalidRecoveryValidity {
                valid_from_days,
                valid_until_days,
            });
        }

        Ok(())
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: Serialize + DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    /// Parses `files` and validates the resulting core configuration.
    pub fn load(files: &[impl AsRef<Path>]) -> Result<Self, ConfigError> {
        let config = Self::from_files(files)?;
        config.core.validate()?;
        Ok(config)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    /// Later inputs override earlier ones; with `config_env`, `CC_`-prefixed
    /// environment variables (nested keys separated by `__`) override all files.
    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("CC_").split("__").lowercase(false));
        }

        let core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
