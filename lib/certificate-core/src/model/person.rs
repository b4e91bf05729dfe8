use serde::Serialize;
use time::Date;

use crate::util::date_format::into_iso_date;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CovidCertificatePerson {
    #[serde(rename = "nam")]
    pub name: CovidCertificatePersonName,
    #[serde(rename = "dob", serialize_with = "into_iso_date")]
    pub date_of_birth: Date,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CovidCertificatePersonName {
    #[serde(rename = "fn")]
    pub family_name: String,
    /// ICAO 9303 standardised family name
    #[serde(rename = "fnt")]
    pub family_name_standardized: String,
    #[serde(rename = "gn")]
    pub given_name: String,
    #[serde(rename = "gnt")]
    pub given_name_standardized: String,
}
