use std::fmt;

use once_cell::sync::Lazy;
use serde::Deserialize;
use wasm_bindgen_futures::JsFuture;

use crate::app::session::Session;
use crate::app::types::{FileRecord, FileType};

pub const API_BASE: &str = "http://localhost:3000";
pub const STATIC_BASE: &str = "http://localhost:3000/files";

// reqwest pools connections internally; one shared client for the whole app.
static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Clone)]
pub enum ApiError {
    /// Server-provided auth message, surfaced verbatim.
    Auth(String),
    /// Transport-level failure before a response arrived.
    Request(String),
    /// Non-2xx response without a usable message body.
    Status(u16),
    /// Response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth(msg) => write!(f, "{}", msg),
            Self::Request(msg) => write!(f, "request failed: {}", msg),
            Self::Status(code) => write!(f, "server responded with status {}", code),
            Self::Decode(msg) => write!(f, "unexpected response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Retrieval URL for the static file root, opened in a new browsing context.
pub fn file_url(filename: &str) -> String {
    format!("{}/{}", STATIC_BASE, filename)
}

/// Query pairs for the list endpoint. `type` is omitted entirely on the All
/// tab; `tags` is always present, verbatim, even when empty.
pub fn filter_query(type_filter: Option<FileType>, tags: &str) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(file_type) = type_filter {
        query.push(("type", file_type.as_str().to_string()));
    }
    query.push(("tags", tags.to_string()));
    query
}

fn authorized(builder: reqwest::RequestBuilder, session: Session) -> reqwest::RequestBuilder {
    match session.token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

#[derive(Debug, Default, Deserialize)]
struct AuthResponse {
    access_token: Option<String>,
    status: Option<String>,
    message: Option<String>,
}

pub async fn login(username: &str, password: &str) -> Result<String, ApiError> {
    let response = CLIENT
        .post(endpoint("/auth/login"))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let status = response.status();
    let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
    let body: AuthResponse = serde_json::from_str(&text).unwrap_or_default();
    // the backend reports some auth failures as a 2xx {status: "error"} payload
    if body.status.as_deref() == Some("error") {
        return Err(ApiError::Auth(
            body.message.unwrap_or_else(|| "Invalid credentials".to_string()),
        ));
    }
    if !status.is_success() {
        return Err(match body.message {
            Some(message) => ApiError::Auth(message),
            None => ApiError::Status(status.as_u16()),
        });
    }
    body.access_token
        .ok_or_else(|| ApiError::Decode("login response is missing access_token".to_string()))
}

pub async fn register(username: &str, password: &str) -> Result<(), ApiError> {
    let response = CLIENT
        .post(endpoint("/auth/register"))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body: AuthResponse = response.json().await.unwrap_or_default();
    Err(match body.message {
        Some(message) => ApiError::Auth(message),
        None => ApiError::Status(status.as_u16()),
    })
}

pub async fn filter_files(
    session: Session,
    type_filter: Option<FileType>,
    tags: &str,
) -> Result<Vec<FileRecord>, ApiError> {
    let response = authorized(CLIENT.get(endpoint("/files/filter")), session)
        .query(&filter_query(type_filter, tags))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }
    response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn delete_file(session: Session, id: &str) -> Result<(), ApiError> {
    let response = authorized(CLIENT.delete(endpoint(&format!("/files/{}", id))), session)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status().as_u16()))
    }
}

pub async fn register_view(session: Session, id: &str) -> Result<(), ApiError> {
    let response = authorized(CLIENT.post(endpoint(&format!("/files/view/{}", id))), session)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status().as_u16()))
    }
}

#[derive(Debug, Deserialize)]
struct ShareResponse {
    link: String,
}

pub async fn share_file(session: Session, id: &str) -> Result<String, ApiError> {
    let response = authorized(CLIENT.post(endpoint(&format!("/files/share/{}", id))), session)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }
    let body: ShareResponse = response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.link)
}

/// Multipart upload of the selected file plus the raw tags string. Splitting
/// the comma-separated tags is the server's job; the client sends it unparsed.
pub async fn upload_file(session: Session, file: &web_sys::File, tags: &str) -> Result<(), ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Request(format!("failed to read file: {:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let part = reqwest::multipart::Part::bytes(bytes).file_name(file.name());
    let form = reqwest::multipart::Form::new()
        .part("file", part)
        .text("tags", tags.to_string());
    let response = authorized(CLIENT.post(endpoint("/files/upload")), session)
        .multipart(form)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status().as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tab_sends_only_tags() {
        assert_eq!(filter_query(None, ""), vec![("tags", String::new())]);
    }

    #[test]
    fn type_tab_sends_type_and_verbatim_tags() {
        assert_eq!(
            filter_query(Some(FileType::Image), ""),
            vec![("type", "image".to_string()), ("tags", String::new())]
        );
        assert_eq!(
            filter_query(Some(FileType::Pdf), "a, b"),
            vec![("type", "pdf".to_string()), ("tags", "a, b".to_string())]
        );
    }

    #[test]
    fn file_url_joins_the_static_root() {
        assert_eq!(file_url("a.png"), "http://localhost:3000/files/a.png");
    }

    #[test]
    fn endpoint_joins_the_api_base() {
        assert_eq!(endpoint("/files/filter"), "http://localhost:3000/files/filter");
    }
}
