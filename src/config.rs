//! Configuration management for moodmix.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file stored in the local data directory:
//! - Linux: `~/.local/share/moodmix/.env`
//! - macOS: `~/Library/Application Support/moodmix/.env`
//! - Windows: `%LOCALAPPDATA%/moodmix/.env`
//!
//! # Variables
//!
//! - `SPOTIFY_API_AUTH_CLIENT_ID` - Client id of the Spotify application (required)
//! - `SPOTIFY_API_AUTH_CLIENT_SECRET` - Client secret of the Spotify application (required)
//! - `SPOTIFY_API_AUTH_URL` - Accounts service base URL (optional)
//! - `SPOTIFY_API_URL` - Web API base URL (optional)
//! - `SPOTIFY_USER_ID` - Default user for playlist commands (optional)

use std::{env, path::PathBuf};

use crate::{
    Res,
    types::{Credentials, DEFAULT_API_URL, DEFAULT_AUTH_URL, Endpoints},
};

/// Loads `{data_local_dir}/moodmix/.env` into the environment.
///
/// Creates the directory when it does not exist yet. A missing file is not an
/// error; variables already set in the process environment take precedence.
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodmix/.env");
    path
}

pub fn spotify_client_id() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

pub fn spotify_client_secret() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

pub fn spotify_user() -> Option<String> {
    env::var("SPOTIFY_USER_ID").ok().filter(|v| !v.is_empty())
}

/// Client credentials from `SPOTIFY_API_AUTH_CLIENT_ID` and
/// `SPOTIFY_API_AUTH_CLIENT_SECRET`; an error names the first missing one.
pub fn credentials() -> Res<Credentials> {
    Ok(Credentials::new(spotify_client_id()?, spotify_client_secret()?))
}

pub fn endpoints() -> Endpoints {
    Endpoints {
        auth_url: spotify_apiauth_url(),
        api_url: spotify_apiurl(),
    }
}

fn required(key: &str) -> Result<String, String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("{} must be set", key)),
    }
}
