use chrono::Local;

use crate::{error, success};

pub async fn auth() {
    let mut client = super::client();

    let pb = super::spinner("Requesting access token...");
    let result = client.authenticate().await;
    pb.finish_and_clear();

    if let Err(e) = result {
        error!("Authentication failed. Err: {}", e);
    }

    let expires_at = client.token_manager().state().expires_at;
    success!(
        "Authentication successful! Token valid until {}",
        expires_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
    );
}
