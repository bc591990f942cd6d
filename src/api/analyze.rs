use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{AnalysisResponse, ApiError},
};

/// A file selected for analysis alongside (or instead of) pasted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    pub async fn analyze(
        &self,
        email_text: &str,
        upload: Option<AnalyzeUpload>,
    ) -> Result<AnalysisResponse, ApiError> {
        let mut form = Form::new().text("email_text", email_text.to_string());
        if let Some(upload) = upload {
            form = form.part("file", Part::bytes(upload.bytes).file_name(upload.file_name));
        }
        self.post_multipart("/api/analyze", form, true)
            .await?
            .ok_or_else(ApiError::empty_response)
    }
}
