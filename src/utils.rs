use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::{error::ApiError, types::Credentials};

/// Encodes `client_id:client_secret` for a Basic authorization header.
pub fn encode_client_credentials(credentials: &Credentials) -> Result<String, ApiError> {
    if credentials.client_id.is_empty() || credentials.client_secret.is_empty() {
        return Err(ApiError::MissingCredentials);
    }

    let raw = format!("{}:{}", credentials.client_id, credentials.client_secret);
    Ok(STANDARD.encode(raw.as_bytes()))
}

/// Returns the trailing path segment of a URL, e.g. the id in
/// `https://open.spotify.com/track/<id>`.
pub fn last_path_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Splits a comma separated seed argument into trimmed, non-empty parts.
pub fn split_seeds(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Reads the body of `res` and decodes it as JSON.
///
/// A body that does not match `T` is reported as
/// [`ApiError::MalformedResponse`]; only failures reading the body stay
/// [`ApiError::Http`].
pub async fn decode_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let body = res.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
