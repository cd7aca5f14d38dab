use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserSummary;

/// Weekday name -> list of human-entered time ranges like "09:00-12:00".
/// The backend does not enforce any schema on the ranges beyond non-empty text.
pub type AvailabilityMap = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub hourly_rate: f64,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<AvailabilityMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

/// Create-or-replace payload for the caller's own tutor profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTutorProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub hourly_rate: f64,
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub availability: AvailabilityMap,
}

/// Filter parameters for the tutor listing. Absent fields are omitted from the
/// query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rate: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_tolerates_sparse_payload() {
        let profile: TutorProfile = serde_json::from_str(
            r#"{
                "id": "0a81ad46-9c43-43fb-8f37-6dc4ae04c77b",
                "userId": "bb2b51cc-c84e-4d55-93b8-47f38a45f98e",
                "hourlyRate": 35.0
            }"#,
        )
        .unwrap();
        assert!(profile.bio.is_none());
        assert!(profile.subjects.is_empty());
        assert!(profile.availability.is_none());
    }

    #[test]
    fn test_availability_round_trip() {
        let mut availability = AvailabilityMap::new();
        availability.insert("monday".to_string(), vec!["09:00-12:00".to_string()]);
        let request = UpdateAvailabilityRequest { availability };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"availability":{"monday":["09:00-12:00"]}}"#);
    }
}
