use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::error::VerifyError;

/// Wire format for event times: minute precision, no zone.
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Body of `POST /groups/{id}/events`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "serialize_event_time")]
    pub start_time: NaiveDateTime,
    #[serde(serialize_with = "serialize_event_time")]
    pub end_time: NaiveDateTime,
    pub location: String,
}

impl EventRequest {
    /// The two-hour virtual meetup created by each run.
    pub fn community_meetup() -> Result<Self, VerifyError> {
        let day = NaiveDate::from_ymd_opt(2026, 12, 31).ok_or_else(|| VerifyError::Config {
            message: "invalid event date".to_string(),
        })?;
        Self::new(
            "Community Meetup",
            "Let's meet!",
            at_hour(day, 10)?,
            at_hour(day, 12)?,
            "Virtual",
        )
    }

    /// Build an event, rejecting an empty or inverted time window.
    pub fn new(
        title: &str,
        description: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        location: &str,
    ) -> Result<Self, VerifyError> {
        if end_time <= start_time {
            return Err(VerifyError::Config {
                message: format!(
                    "event ends ({}) before it starts ({})",
                    end_time.format(EVENT_TIME_FORMAT),
                    start_time.format(EVENT_TIME_FORMAT)
                ),
            });
        }
        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            start_time,
            end_time,
            location: location.to_string(),
        })
    }
}

fn at_hour(day: NaiveDate, hour: u32) -> Result<NaiveDateTime, VerifyError> {
    day.and_hms_opt(hour, 0, 0).ok_or_else(|| VerifyError::Config {
        message: format!("invalid event hour {hour}"),
    })
}

fn serialize_event_time<S: Serializer>(
    value: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(EVENT_TIME_FORMAT))
}
