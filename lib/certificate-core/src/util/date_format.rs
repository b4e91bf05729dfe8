use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

pub(crate) const ISO_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

pub(crate) const DISPLAY_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[day].[month].[year]");

pub(crate) const DISPLAY_DATE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[day].[month].[year], [hour]:[minute]");

pub(crate) const UTC_OFFSET_FORMAT: &[FormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

/// Serializes a calendar date as `YYYY-MM-DD`, the form used inside the QR payload.
pub(crate) fn into_iso_date<S>(date: &Date, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = date
        .format(ISO_DATE_FORMAT)
        .map_err(serde::ser::Error::custom)?;
    formatted.serialize(s)
}

pub(crate) fn into_rfc3339<S>(date_time: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = date_time
        .format(&Rfc3339)
        .map_err(serde::ser::Error::custom)?;
    formatted.serialize(s)
}

pub(crate) fn format_display_date(date: Date) -> Result<String, time::error::Format> {
    date.format(DISPLAY_DATE_FORMAT)
}

/// Printed times are shown at the issuer's configured offset.
pub(crate) fn format_display_date_time(
    date_time: OffsetDateTime,
    offset: UtcOffset,
) -> Result<String, time::error::Format> {
    date_time.to_offset(offset).format(DISPLAY_DATE_TIME_FORMAT)
}

/// `UtcOffset` as `+HH:MM` in configuration files.
pub(crate) mod utc_offset {
    use super::*;

    pub(crate) fn serialize<S>(offset: &UtcOffset, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = offset
            .format(UTC_OFFSET_FORMAT)
            .map_err(serde::ser::Error::custom)?;
        formatted.serialize(s)
    }

    pub(crate) fn deserialize<'de, D>(d: D) -> Result<UtcOffset, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(d)?;
        UtcOffset::parse(&value, UTC_OFFSET_FORMAT).map_err(serde::de::Error::custom)
    }
}
