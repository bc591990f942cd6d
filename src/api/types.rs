use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub category: String,
    pub suggested_subject: String,
    pub suggested_reply: String,
}

use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            status: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            status: None,
        }
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            status: Some(status),
        }
    }

    pub fn empty_response() -> Self {
        Self::request_failed("Empty response body")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_user_profile() {
        let raw = r#"{"id": 7, "username": "alice", "email": "alice@example.com"}"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.id, 7);
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "alice@example.com");
    }

    #[test]
    fn serialize_reset_password_request_uses_snake_case() {
        let request = ResetPasswordRequest {
            token: "one-time".into(),
            new_password: "N3wPassword".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["token"], serde_json::json!("one-time"));
        assert_eq!(value["new_password"], serde_json::json!("N3wPassword"));
    }

    #[test]
    fn deserialize_analysis_response() {
        let raw = r#"{
            "category": "Productive",
            "suggested_subject": "Re: invoice",
            "suggested_reply": "Thanks, received."
        }"#;
        let analysis: AnalysisResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(analysis.category, "Productive");
        assert_eq!(analysis.suggested_subject, "Re: invoice");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::http(503, "upstream down");
        assert_eq!(format!("{}", error), "upstream down");
        assert_eq!(error.status, Some(503));

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_unauthorized_check() {
        assert!(ApiError::http(401, "unauthorized").is_unauthorized());
        assert!(!ApiError::http(403, "forbidden").is_unauthorized());
        assert!(!ApiError::request_failed("network").is_unauthorized());
    }
}
