use crate::api::{ApiClient, ApiError, MessageResponse, TokenResponse};

pub async fn login(email: String, password: String) -> Result<TokenResponse, ApiError> {
    ApiClient::new().login(&email, &password).await
}

pub async fn register(
    username: String,
    email: String,
    password: String,
) -> Result<TokenResponse, ApiError> {
    ApiClient::new().register(&username, &email, &password).await
}

pub async fn forgot_password(email: String) -> Result<MessageResponse, ApiError> {
    ApiClient::new().forgot_password(&email).await
}
