use log::warn;
use reqwest::{header, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config, state::session};

const GENERIC_ERROR_MESSAGE: &str = "Request failed.";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    api_key: Option<String>,
}

pub(crate) enum RequestBody {
    Empty,
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            api_key: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(config::api_key)
            .filter(|key| !key.is_empty())
    }

    /// Request core shared by every endpoint. Returns the parsed JSON body,
    /// or `None` for 204 and non-JSON success responses.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        auth: bool,
    ) -> Result<Option<Value>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let base_url = base_url.trim_end_matches('/');
        let url = if path.starts_with('/') {
            format!("{base_url}{path}")
        } else {
            format!("{base_url}/{path}")
        };

        let mut request = self.client.request(method, &url);

        if let Some(api_key) = self.resolved_api_key() {
            request = request.header("X-API-Key", api_key);
        }

        if auth {
            // No token is not an error here; the server gets to reject.
            if let Some(token) = session::auth_token() {
                request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
            }
        }

        let request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            // Content-type stays unset so the transport writes the
            // multipart boundary itself.
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED && auth {
            warn!("authenticated request to {url} returned 401; clearing session");
            session::clear_session();
        }

        if !status.is_success() {
            let message = parse_error_message(response).await;
            return Err(ApiError::http(status.as_u16(), message));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);
        if !is_json {
            return Ok(None);
        }

        let value = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {e}")))?;
        Ok(Some(value))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: bool,
    ) -> Result<Option<T>, ApiError> {
        decode(self.request(Method::GET, path, RequestBody::Empty, auth).await?)
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &impl Serialize,
        auth: bool,
    ) -> Result<Option<T>, ApiError> {
        let value = serde_json::to_value(payload)
            .map_err(|e| ApiError::request_failed(format!("Failed to serialize request: {e}")))?;
        decode(
            self.request(Method::POST, path, RequestBody::Json(value), auth)
                .await?,
        )
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        auth: bool,
    ) -> Result<Option<T>, ApiError> {
        decode(
            self.request(Method::POST, path, RequestBody::Multipart(form), auth)
                .await?,
        )
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn decode<T: DeserializeOwned>(body: Option<Value>) -> Result<Option<T>, ApiError> {
    body.map(serde_json::from_value)
        .transpose()
        .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {e}")))
}

/// Best-effort extraction of a server-provided message from an error body.
/// Accepts `detail` or `message` string fields; anything else (including an
/// unparseable body) falls back to a generic message.
async fn parse_error_message(response: reqwest::Response) -> String {
    let Ok(value) = response.json::<Value>().await else {
        return GENERIC_ERROR_MESSAGE.to_string();
    };
    value
        .get("detail")
        .and_then(Value::as_str)
        .or_else(|| value.get("message").and_then(Value::as_str))
        .unwrap_or(GENERIC_ERROR_MESSAGE)
        .to_string()
}
