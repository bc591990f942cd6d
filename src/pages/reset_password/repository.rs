use crate::api::{ApiClient, ApiError, MessageResponse};

pub async fn reset_password(token: String, new_password: String) -> Result<MessageResponse, ApiError> {
    ApiClient::new().reset_password(&token, &new_password).await
}
