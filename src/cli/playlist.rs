use crate::{config, error, info, success};

pub async fn create_playlist(
    user_id: Option<String>,
    name: String,
    description: Option<String>,
    token: Option<String>,
) {
    let user_id = match user_id.or_else(config::spotify_user) {
        Some(u) => u,
        None => error!("No user given. Pass --user or set SPOTIFY_USER_ID."),
    };

    if token.is_none() {
        info!("No user token given, trying with the client-credentials token.");
    }

    let mut client = super::client();
    let pb = super::spinner("Creating playlist...");
    let result = client
        .create_playlist(
            &user_id,
            &name,
            description.as_deref().unwrap_or_default(),
            token.as_deref(),
        )
        .await;
    pb.finish_and_clear();

    match result {
        Ok(playlist) => success!(
            "Playlist {} created with id {}",
            name,
            playlist["id"].as_str().unwrap_or("?")
        ),
        Err(e) => error!("Failed to create playlist. Err: {}", e),
    }
}
