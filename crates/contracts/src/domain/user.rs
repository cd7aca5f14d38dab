use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Student,
    Tutor,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Tutor => "TUTOR",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "STUDENT" => Some(UserRole::Student),
            "TUTOR" => Some(UserRole::Tutor),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Blocked => "BLOCKED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Minimal user shape the backend embeds in bookings, reviews and profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&UserRole::Student).unwrap(), r#""STUDENT""#);
        assert_eq!(UserRole::parse("TUTOR"), Some(UserRole::Tutor));
        assert_eq!(UserRole::parse("teacher"), None);
    }

    #[test]
    fn test_user_camel_case() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "7e5c43a4-5e64-4f0e-b8a4-3f5a2f1f4f33",
                "name": "Ada",
                "email": "ada@example.com",
                "role": "STUDENT",
                "status": "ACTIVE",
                "createdAt": "2024-03-15T14:02:26Z"
            }"#,
        )
        .unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.role, UserRole::Student);
        assert!(user.updated_at.is_none());
    }
}
