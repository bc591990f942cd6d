use crate::api::{AnalysisResponse, AnalyzeUpload, ApiClient, ApiError};

pub async fn analyze(
    email_text: String,
    upload: Option<AnalyzeUpload>,
) -> Result<AnalysisResponse, ApiError> {
    ApiClient::new().analyze(&email_text, upload).await
}
