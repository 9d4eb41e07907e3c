use serde_json::Value;

use crate::{
    error::ApiError,
    spotify::{SpotifyClient, ensure_success},
    types::CreatePlaylistRequest,
    utils,
};

impl SpotifyClient {
    /// Creates a public playlist owned by `user_id`.
    ///
    /// Creating playlists needs a user token with the
    /// `playlist-modify-public` scope, which the client-credentials grant
    /// cannot provide. Pass such a token as `access_token`; without one the
    /// managed token is used and Spotify will usually answer 403.
    ///
    /// # Returns
    ///
    /// - `Ok(Value)` - The created playlist object
    /// - `Err(ApiError::Status)` - Spotify rejected the request
    ///
    /// # Example
    ///
    /// ```
    /// let playlist = client
    ///     .create_playlist("wizzler", "Morning Walk", "folk and techno", Some(&user_token))
    ///     .await?;
    /// println!("created {}", playlist["id"]);
    /// ```
    pub async fn create_playlist(
        &mut self,
        user_id: &str,
        name: &str,
        description: &str,
        access_token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = self.api_url(&format!("v1/users/{}/playlists", user_id));
        let token = self.bearer(access_token).await?;

        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: true,
        };

        let res = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let res = ensure_success(res)?;
        utils::decode_json(res).await
    }
}
