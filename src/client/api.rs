//! JSON helpers for talking to `/api`.
//!
//! Every helper resolves to `Result<T, ApiError>`; callers only care whether a request worked
//! and, for gated actions, whether it failed with `402 Payment Required`.

use serde::{de::DeserializeOwned, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// HTTP status, `0` when the request never reached the server
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_insufficient_tokens(&self) -> bool {
        self.status == 402
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "Request failed with status {}: {}", self.status, self.message)
        }
    }
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send::<(), T>("GET", path, None).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send("POST", path, Some(body)).await
}

/// `POST` without a request body
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send::<(), T>("POST", path, None).await
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send("PUT", path, Some(body)).await
}

#[cfg(feature = "web")]
async fn send<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<&B>,
) -> Result<T, ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    let request = match method {
        "POST" => Request::post(path),
        "PUT" => Request::put(path),
        _ => Request::get(path),
    }
    .credentials(RequestCredentials::Include);

    let request = match body {
        Some(body) => {
            let json = serde_json::to_string(body)
                .map_err(|e| ApiError::new(0, format!("Failed to encode request: {}", e)))?;
            request.header("Content-Type", "application/json").body(json)
        }
        None => request,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::new(0, format!("Failed to send request: {}", e)))?;

    read_response(response).await
}

/// Sends raw bytes, used for phase two of an upload
#[cfg(feature = "web")]
pub async fn put_bytes(url: &str, content_type: &str, bytes: Vec<u8>) -> Result<(), ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", content_type)
        .body(bytes)
        .send()
        .await
        .map_err(|e| ApiError::new(0, format!("Failed to send request: {}", e)))?;

    match response.status() {
        200..=299 => Ok(()),
        status => Err(error_from(status, response).await),
    }
}

#[cfg(feature = "web")]
async fn read_response<T: DeserializeOwned>(
    response: reqwasm::http::Response,
) -> Result<T, ApiError> {
    match response.status() {
        204 => serde_json::from_str("null")
            .map_err(|e| ApiError::new(204, format!("Expected a response body: {}", e))),
        200..=299 => response
            .json::<T>()
            .await
            .map_err(|e| ApiError::new(response.status(), format!("Failed to parse response: {}", e))),
        status => Err(error_from(status, response).await),
    }
}

#[cfg(feature = "web")]
async fn error_from(status: u16, response: reqwasm::http::Response) -> ApiError {
    use crate::model::api::ErrorDto;

    match response.json::<ErrorDto>().await {
        Ok(error_dto) => ApiError::new(status, error_dto.error),
        Err(_) => ApiError::new(status, "Unknown error"),
    }
}

#[cfg(not(feature = "web"))]
async fn send<B: Serialize, T: DeserializeOwned>(
    _method: &str,
    _path: &str,
    _body: Option<&B>,
) -> Result<T, ApiError> {
    Err(ApiError::new(0, "Requests are only sent from the browser"))
}

#[cfg(not(feature = "web"))]
pub async fn put_bytes(_url: &str, _content_type: &str, _bytes: Vec<u8>) -> Result<(), ApiError> {
    Err(ApiError::new(0, "Requests are only sent from the browser"))
}
