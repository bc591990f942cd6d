use super::{
    client::ApiClient,
    types::{
        ApiError, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
        ResetPasswordRequest, TokenResponse, UserProfile,
    },
};
use crate::state::session;

/// Identity hints used to synthesize a profile when `/api/auth/me` is
/// unavailable. Display-only; the session token stays authoritative.
#[derive(Debug, Clone, Default)]
pub struct ProfileFallback {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let token: TokenResponse = self
            .post_json(
                "/api/auth/login",
                &LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                false,
            )
            .await?
            .ok_or_else(ApiError::empty_response)?;

        session::set_auth_token(&token.access_token);

        let me = self
            .safe_fetch_me(ProfileFallback {
                username: None,
                email: Some(email.to_string()),
            })
            .await;
        session::set_current_user(&me);

        Ok(token)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError> {
        let token: TokenResponse = self
            .post_json(
                "/api/auth/register",
                &RegisterRequest {
                    username: username.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                },
                false,
            )
            .await?
            .ok_or_else(ApiError::empty_response)?;

        session::set_auth_token(&token.access_token);

        let me = self
            .safe_fetch_me(ProfileFallback {
                username: Some(username.to_string()),
                email: Some(email.to_string()),
            })
            .await;
        session::set_current_user(&me);

        Ok(token)
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.post_json(
            "/api/auth/forgot-password",
            &ForgotPasswordRequest {
                email: email.to_string(),
            },
            false,
        )
        .await?
        .ok_or_else(ApiError::empty_response)
    }

    /// The reset token is a distinct one-time credential from the password
    /// reset email, not the bearer session token.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json(
            "/api/auth/reset-password",
            &ResetPasswordRequest {
                token: token.to_string(),
                new_password: new_password.to_string(),
            },
            false,
        )
        .await?
        .ok_or_else(ApiError::empty_response)
    }

    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/auth/me", true)
            .await?
            .ok_or_else(ApiError::empty_response)
    }

    /// Fetches the authenticated profile, degrading to a synthesized
    /// fallback on any failure. Never errors.
    pub async fn safe_fetch_me(&self, fallback: ProfileFallback) -> UserProfile {
        match self.get_me().await {
            Ok(me) => me,
            Err(_) => fallback_profile(fallback),
        }
    }
}

pub(crate) fn fallback_profile(fallback: ProfileFallback) -> UserProfile {
    let email = fallback.email.unwrap_or_default();
    let username = fallback
        .username
        .filter(|name| !name.trim().is_empty())
        .or_else(|| {
            email
                .split('@')
                .next()
                .filter(|local| !local.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "user".to_string());
    UserProfile {
        id: 0,
        username,
        email,
    }
}
