use serde::{Deserialize, Serialize};

/// Uniform response wrapper returned by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiEnvelope<T> {
    /// Envelope standing in for an empty or non-JSON response body (e.g. a 204).
    pub fn empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
            error: None,
        }
    }
}

/// Structured error block nested inside a failed envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_success_envelope() {
        let envelope: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"data":["a","b"]}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap(), vec!["a", "b"]);
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_parses_error_envelope() {
        let envelope: ApiEnvelope<()> = serde_json::from_str(
            r#"{"success":false,"error":{"code":"NOT_FOUND","message":"Tutor not found"}}"#,
        )
        .unwrap();
        assert!(!envelope.success);
        let error = envelope.error.unwrap();
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.message, "Tutor not found");
    }

    #[test]
    fn test_parses_empty_object() {
        let envelope: ApiEnvelope<Vec<String>> = serde_json::from_str("{}").unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }
}
