use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Operational status of a flight, rendered by its symbolic name.
///
/// Accepts the name in any letter case or its numeric code (declaration order, starting at 0)
/// on input.
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    Cancelled,
    InAir,
    Landed,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 5] = [
        FlightStatus::Scheduled,
        FlightStatus::Delayed,
        FlightStatus::Cancelled,
        FlightStatus::InAir,
        FlightStatus::Landed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Delayed => "Delayed",
            Self::Cancelled => "Cancelled",
            Self::InAir => "InAir",
            Self::Landed => "Landed",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(value.trim()))
    }

    pub fn from_code(code: u64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FlightStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StatusVisitor;

        impl serde::de::Visitor<'_> for StatusVisitor {
            type Value = FlightStatus;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("one of Scheduled, Delayed, Cancelled, InAir, Landed or a code 0-4")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<FlightStatus, E> {
                FlightStatus::from_name(value)
                    .ok_or_else(|| E::custom(format!("unknown flight status '{}'", value)))
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<FlightStatus, E> {
                FlightStatus::from_code(value)
                    .ok_or_else(|| E::custom(format!("unknown flight status code {}", value)))
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<FlightStatus, E> {
                u64::try_from(value)
                    .ok()
                    .and_then(FlightStatus::from_code)
                    .ok_or_else(|| E::custom(format!("unknown flight status code {}", value)))
            }
        }

        deserializer.deserialize_any(StatusVisitor)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub id: i32,
    pub flight_number: String,
    pub airline: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
}

/// Request body for creating a flight.
///
/// Every field is optional at the JSON level so that missing fields are reported per field by
/// validation instead of failing the whole body.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightDto {
    #[schema(required = true, max_length = 10)]
    pub flight_number: Option<String>,
    #[schema(required = true, max_length = 50)]
    pub airline: Option<String>,
    #[schema(required = true, max_length = 3)]
    pub departure_airport: Option<String>,
    #[schema(required = true, max_length = 3)]
    pub arrival_airport: Option<String>,
    #[schema(required = true)]
    pub departure_time: Option<DateTime<Utc>>,
    #[schema(required = true)]
    pub arrival_time: Option<DateTime<Utc>>,
    #[schema(required = true)]
    pub status: Option<FlightStatus>,
}

/// Request body for a partial update; omitted or `null` fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightDto {
    #[schema(max_length = 10)]
    pub flight_number: Option<String>,
    #[schema(max_length = 50)]
    pub airline: Option<String>,
    #[schema(max_length = 3)]
    pub departure_airport: Option<String>,
    #[schema(max_length = 3)]
    pub arrival_airport: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub status: Option<FlightStatus>,
}

#[derive(Deserialize, Clone, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number, 1-based (default: 1)
    pub page_number: Option<i64>,
    /// Items per page (default: 10, max: 100)
    pub page_size: Option<i64>,
}

#[derive(Deserialize, Clone, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchFlightsQuery {
    /// Case-insensitive partial airline name
    pub airline: Option<String>,
    /// Case-insensitive partial departure airport code
    pub departure_airport: Option<String>,
    /// Case-insensitive partial arrival airport code
    pub arrival_airport: Option<String>,
    /// Departure date (ignored when both startDate and endDate are given)
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    #[param(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
    /// Start of an inclusive departure date range
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    #[param(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    /// End of an inclusive departure date range
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    #[param(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
}

/// Parses a query date given either as `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are reduced to their UTC calendar date. Empty values count as absent.
pub fn parse_query_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
    })
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if raw.trim().is_empty() {
        return Ok(None);
    }

    parse_query_date(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("'{}' is not a valid date", raw)))
}
