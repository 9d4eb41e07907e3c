//! # CLI Module
//!
//! Command-line layer of moodmix. Each command builds a [`SpotifyClient`] from
//! the configured credentials, runs one accessor and prints the result: raw
//! JSON for lookups, a table for recommended songs and plain ids for search.
//!
//! ## Commands
//!
//! - [`auth`] - Requests a client-credentials token and reports its expiry
//! - [`album`], [`artist`], [`track`] - Single resource lookups
//! - [`playlists`] - Public playlists of a user
//! - [`genres`] - Available genre seeds
//! - [`profile`] - Profile of the token owner
//! - [`recommend`] - Seeded recommendations, optionally driven by an activity
//! - [`songs`] - Recommended songs as a table
//! - [`search`] - First artist or track id for a query
//! - [`create_playlist`] - Creates a public playlist
//! - [`activity`] - Genre lookup for an activity label
//!
//! Fatal problems (missing credentials, authentication failures) end the
//! process through the crate's `error!` macro.

mod activity;
mod auth;
mod playlist;
mod recommend;
mod resources;
mod search;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

pub use activity::activity;
pub use auth::auth;
pub use playlist::create_playlist;
pub use recommend::recommend;
pub use recommend::songs;
pub use resources::album;
pub use resources::artist;
pub use resources::genres;
pub use resources::playlists;
pub use resources::profile;
pub use resources::track;
pub use search::SearchKind;
pub use search::search;

use crate::{config, error, spotify::SpotifyClient, warning};

fn client() -> SpotifyClient {
    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!(
            "Missing Spotify credentials. Add them to {}\n Error: {}",
            config::env_path().display(),
            e
        ),
    };

    SpotifyClient::with_endpoints(credentials, config::endpoints())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn print_json(value: &Value) {
    if value.as_object().is_some_and(|o| o.is_empty()) {
        warning!("Nothing found.");
        return;
    }

    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => warning!("Cannot render response. Err: {}", e),
    }
}
