use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserSummary;

/// Booking lifecycle state. Transitions are requested by the client but
/// enforced by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(BookingStatus::Pending),
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            "COMPLETED" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    /// Whether a student may still call the session off.
    pub fn cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub tutor_id: Uuid,
    pub student_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor: Option<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub tutor_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&UpdateBookingStatusRequest {
                status: BookingStatus::Cancelled
            })
            .unwrap(),
            r#"{"status":"CANCELLED"}"#
        );
        assert_eq!(BookingStatus::parse("COMPLETED"), Some(BookingStatus::Completed));
    }

    #[test]
    fn test_cancellable() {
        assert!(BookingStatus::Pending.cancellable());
        assert!(BookingStatus::Confirmed.cancellable());
        assert!(!BookingStatus::Completed.cancellable());
        assert!(!BookingStatus::Cancelled.cancellable());
    }

    #[test]
    fn test_instants_are_rfc3339() {
        let request: CreateBookingRequest = serde_json::from_str(
            r#"{
                "tutorId": "bb2b51cc-c84e-4d55-93b8-47f38a45f98e",
                "startTime": "2024-06-01T09:00:00Z",
                "endTime": "2024-06-01T13:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!((request.end_time - request.start_time).num_hours(), 4);
    }
}
