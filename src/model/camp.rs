use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::model::talk::TalkDto;

/// Camp shape used for reads and writes.
///
/// The camp location is flattened into `venue` and `location*` fields. On writes the
/// `talks` collection is ignored, and on updates so is `moniker`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub moniker: String,
    /// Accepts a date or a date-time; the time of day is dropped.
    #[serde(default = "default_event_date", deserialize_with = "deserialize_event_date")]
    pub event_date: NaiveDate,
    #[serde(default = "default_length")]
    pub length: i32,
    pub venue: Option<String>,
    pub location_address1: Option<String>,
    pub location_address2: Option<String>,
    pub location_address3: Option<String>,
    pub location_city_town: Option<String>,
    pub location_state_province: Option<String>,
    pub location_postal_code: Option<String>,
    pub location_country: Option<String>,
    #[serde(default)]
    pub talks: Vec<TalkDto>,
}

fn default_length() -> i32 {
    1
}

fn default_event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or_default()
}

/// Parses an event date given as `YYYY-MM-DD` or as an ISO 8601 date-time.
pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn deserialize_event_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    parse_event_date(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid event date: {}", value)))
}
