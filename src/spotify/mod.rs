//! # Spotify Integration Module
//!
//! This module implements the client used by moodmix to talk to the Spotify
//! Web API. A [`SpotifyClient`] owns one set of client credentials, a reusable
//! HTTP client and a [`TokenManager`] that runs the OAuth 2.0
//! client-credentials flow whenever the cached token is missing or expired.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! SpotifyClient
//!     ├── Resources (albums, artists, tracks, playlists, genre seeds, profile)
//!     ├── Recommendations (seeded recommendations, recommended songs)
//!     ├── Search (artist and track lookup)
//!     └── Playlist (creation)
//!          ↓
//! TokenManager (client-credentials grant)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Response Contracts
//!
//! The accessors do not share a single failure contract:
//! - Resource lookups return an empty JSON object for any non-2xx status.
//! - [`SpotifyClient::recommend_track`] reports a rejected request as
//!   [`crate::types::Recommendations::Rejected`] carrying the status code.
//! - Search, profile and playlist creation surface [`ApiError::Status`].
//! - Unexpected JSON shapes become [`ApiError::MalformedResponse`].
//!
//! Authentication failures always propagate as [`ApiError::Authentication`].
//!
//! ## Thread Safety
//!
//! Every call that may refresh the token takes `&mut self`. Share a client
//! between tasks by wrapping it in `tokio::sync::Mutex`.

pub mod playlist;
pub mod recommendations;
pub mod resources;
pub mod search;

use reqwest::{Client, Response};
use serde_json::{Map, Value};

use crate::{
    error::ApiError,
    management::TokenManager,
    types::{Credentials, Endpoints},
    utils,
};

pub struct SpotifyClient {
    http: Client,
    endpoints: Endpoints,
    token_mgr: TokenManager,
}

impl SpotifyClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoints(credentials, Endpoints::default())
    }

    pub fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> Self {
        let http = Client::new();
        let token_mgr = TokenManager::new(http.clone(), credentials, &endpoints.auth_url);
        SpotifyClient {
            http,
            endpoints,
            token_mgr,
        }
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.token_mgr
    }

    pub async fn authenticate(&mut self) -> Result<(), ApiError> {
        self.token_mgr.authenticate().await
    }

    pub async fn get_token(&mut self) -> Result<String, ApiError> {
        self.token_mgr.get_token().await
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{base}/{path}",
            base = self.endpoints.api_url.trim_end_matches('/'),
            path = path.trim_start_matches('/')
        )
    }

    /// Picks the caller supplied bearer token, falling back to the managed one.
    async fn bearer(&mut self, access_token: Option<&str>) -> Result<String, ApiError> {
        match access_token {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => self.token_mgr.get_token().await,
        }
    }

    /// GETs `url` and decodes the body, or returns `{}` on a non-2xx status.
    async fn get_json_or_empty(&mut self, url: &str) -> Result<Value, ApiError> {
        let token = self.token_mgr.get_token().await?;
        let res = self.http.get(url).bearer_auth(token).send().await?;

        if !res.status().is_success() {
            return Ok(empty_object());
        }

        utils::decode_json(res).await
    }
}

pub(crate) fn empty_object() -> Value {
    Value::Object(Map::new())
}

pub(crate) fn ensure_success(res: Response) -> Result<Response, ApiError> {
    if res.status().is_success() {
        Ok(res)
    } else {
        Err(ApiError::Status(res.status()))
    }
}
