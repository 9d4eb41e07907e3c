use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Base URLs of the accounts service and the Web API.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub auth_url: String,
    pub api_url: String,
}

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenState {
    pub access_token: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub is_expired: bool,
}

impl Default for TokenState {
    fn default() -> Self {
        Self {
            access_token: None,
            expires_at: Utc::now(),
            is_expired: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSeed {
    pub artists: Vec<String>,
    pub genres: Vec<String>,
    pub tracks: Vec<String>,
    pub limit: u32,
}

pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 10;

impl RecommendationSeed {
    pub fn new(artists: Vec<String>, genres: Vec<String>, tracks: Vec<String>) -> Self {
        Self {
            artists,
            genres,
            tracks,
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("seed_artists", self.artists.join(",")),
            ("seed_genres", self.genres.join(",")),
            ("seed_tracks", self.tracks.join(",")),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Parameters of [`crate::spotify::SpotifyClient::get_recommended_songs`].
///
/// Seeds are passed through as given, usually comma separated ids.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedSongsQuery {
    pub limit: u32,
    pub seed_artists: String,
    pub seed_tracks: String,
    pub seed_genres: String,
    pub max_instrumentalness: f64,
}

impl Default for RecommendedSongsQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            seed_artists: String::new(),
            seed_tracks: String::new(),
            seed_genres: String::new(),
            max_instrumentalness: 0.45,
        }
    }
}

/// Outcome of [`crate::spotify::SpotifyClient::recommend_track`].
///
/// A rejected request carries the bare status code instead of a body.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    Found(Value),
    Rejected(StatusCode),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationTrack {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<RecommendationTrack>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedTrack {
    pub id: String,
    pub name: String,
    pub artist: String,
}

#[derive(Tabled)]
pub struct RecommendedTrackTableRow {
    pub name: String,
    pub artist: String,
    pub id: String,
}

impl From<RecommendedTrack> for RecommendedTrackTableRow {
    fn from(track: RecommendedTrack) -> Self {
        Self {
            name: track.name,
            artist: track.artist,
            id: track.id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtist {
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: Page<SearchArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTrack {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: Page<SearchTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}
