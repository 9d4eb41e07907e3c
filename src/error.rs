use std::fmt;

use reqwest::StatusCode;

/// Errors raised while talking to the Spotify Web API.
///
/// Resource accessors that swallow non-2xx responses (album, artist, track,
/// playlists, genre seeds) never produce [`ApiError::Status`]; they only fail
/// on token or transport problems.
#[derive(Debug)]
pub enum ApiError {
    /// Client id or client secret is empty.
    MissingCredentials,
    /// The token endpoint answered with a non-2xx status.
    Authentication { status: StatusCode },
    /// Every authentication attempt returned a token that was already expired.
    TokenUnavailable { attempts: u32 },
    /// A non-2xx status on an endpoint that surfaces it.
    Status(StatusCode),
    /// The response JSON did not have the expected shape.
    MalformedResponse(String),
    /// A search returned no items.
    EmptyResult(String),
    Http(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingCredentials => {
                write!(f, "client_id and client_secret must both be set")
            }
            ApiError::Authentication { status } => {
                write!(f, "could not authenticate client (status {})", status)
            }
            ApiError::TokenUnavailable { attempts } => write!(
                f,
                "no valid access token after {} authentication attempts",
                attempts
            ),
            ApiError::Status(status) => write!(f, "request failed with status {}", status),
            ApiError::MalformedResponse(detail) => write!(f, "malformed response: {}", detail),
            ApiError::EmptyResult(query) => write!(f, "no results for '{}'", query),
            ApiError::Http(e) => write!(f, "http error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}
