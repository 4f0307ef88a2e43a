use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};

use crate::error::{EventError, EventResult};

/// Lifecycle of an event.
///
/// Only `Scheduled -> Completed` is ever performed. `Cancelled` is a valid
/// stored value but nothing transitions into it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    #[default]
    #[sea_orm(string_value = "SCHEDULED")]
    Scheduled,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

/// A named, time-stamped record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Store-assigned identifier; `None` until the first save
    pub id: Option<i64>,
    /// Display name
    pub name: String,
    /// When the event is due
    pub scheduled_time: DateTime<Utc>,
    /// Current lifecycle state
    pub status: EventStatus,
}

impl Event {
    /// Unsaved event in the `Scheduled` state
    pub fn new(name: impl Into<String>, scheduled_time: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: name.into(),
            scheduled_time,
            status: EventStatus::Scheduled,
        }
    }

    pub fn complete(&mut self) {
        self.status = EventStatus::Completed;
    }
}

/// Query parameters of `POST /events`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateEventParams {
    /// Display name of the event
    pub name: String,
    /// ISO-8601 instant, e.g. `2025-06-23T17:00:00Z`
    #[serde(rename = "scheduledTime")]
    pub scheduled_time: String,
}

/// Parse an ISO-8601 instant; offsets are normalized to UTC.
///
/// Date and time must be joined by `T`. Surrounding whitespace is rejected.
pub fn parse_instant(raw: &str) -> EventResult<DateTime<Utc>> {
    let invalid = || EventError::InvalidTimestamp(raw.to_string());

    if !matches!(raw.as_bytes().get(10), Some(b'T' | b't')) {
        return Err(invalid());
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_event_is_scheduled_without_id() {
        let at = Utc.with_ymd_and_hms(2025, 6, 23, 17, 0, 0).unwrap();
        let event = Event::new("launch", at);
        assert_eq!(event.id, None);
        assert_eq!(event.status, EventStatus::Scheduled);
        assert_eq!(event.scheduled_time, at);
    }

    #[test]
    fn test_parse_instant_accepts_zulu_and_offsets() {
        let zulu = parse_instant("2025-06-23T17:00:00Z").unwrap();
        let offset = parse_instant("2025-06-23T19:00:00+02:00").unwrap();
        assert_eq!(zulu, offset);
        assert_eq!(zulu, Utc.with_ymd_and_hms(2025, 6, 23, 17, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        for raw in [
            "tomorrow",
            "2025-06-23",
            "2025-06-23T17:00:00",
            "",
            "2025-06-23 17:00:00Z",
            " 2025-06-23T17:00:00Z ",
            "2025-06-23T17:00:00Z ",
        ] {
            assert!(
                matches!(parse_instant(raw), Err(EventError::InvalidTimestamp(ref r)) if r == raw),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_event_json_shape() {
        let at = Utc.with_ymd_and_hms(2025, 6, 23, 16, 0, 0).unwrap();
        let mut event = Event::new("standup", at);
        event.id = Some(3);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "standup");
        assert_eq!(json["scheduledTime"], "2025-06-23T16:00:00Z");
        assert_eq!(json["status"], "SCHEDULED");
    }

    #[test]
    fn test_status_string_forms() {
        assert_eq!(EventStatus::Cancelled.to_string(), "CANCELLED");
        assert_eq!(EventStatus::Completed.to_string(), "COMPLETED");
    }
}
