use serde_json::Value;

use crate::{config, error, error::ApiError};

fn show(result: Result<Value, ApiError>) {
    match result {
        Ok(value) => super::print_json(&value),
        Err(e) => error!("Request failed. Err: {}", e),
    }
}

pub async fn album(id: String) {
    let mut client = super::client();
    let pb = super::spinner("Fetching album...");
    let result = client.get_album(&id).await;
    pb.finish_and_clear();
    show(result);
}

pub async fn artist(id: String) {
    let mut client = super::client();
    let pb = super::spinner("Fetching artist...");
    let result = client.get_artist(&id).await;
    pb.finish_and_clear();
    show(result);
}

pub async fn track(id: String) {
    let mut client = super::client();
    let pb = super::spinner("Fetching track...");
    let result = client.get_track(&id).await;
    pb.finish_and_clear();
    show(result);
}

pub async fn playlists(user_id: Option<String>) {
    let user_id = match user_id.or_else(config::spotify_user) {
        Some(u) => u,
        None => error!("No user given. Pass a user id or set SPOTIFY_USER_ID."),
    };

    let mut client = super::client();
    let pb = super::spinner("Fetching playlists...");
    let result = client.get_user_playlists(&user_id).await;
    pb.finish_and_clear();
    show(result);
}

pub async fn genres() {
    let mut client = super::client();
    let pb = super::spinner("Fetching genre seeds...");
    let result = client.get_available_genres().await;
    pb.finish_and_clear();
    show(result);
}

pub async fn profile() {
    let mut client = super::client();
    let pb = super::spinner("Fetching profile...");
    let result = client.get_user_profile().await;
    pb.finish_and_clear();
    show(result);
}
