use serde_json::Value;

use crate::{error::ApiError, spotify::SpotifyClient, utils};

pub const DEFAULT_API_VERSION: &str = "v1";

impl SpotifyClient {
    /// Fetches `{api}/{version}/{resource_type}/{lookup_id}`.
    ///
    /// # Returns
    ///
    /// - `Ok(Value)` - The decoded body on a 2xx response
    /// - `Ok({})` - An empty object for any other status
    /// - `Err(ApiError)` - Token acquisition or transport failure
    ///
    /// # Example
    ///
    /// ```
    /// let album = client.get_resource("4aawyAB9vmqN3uQ7FjRGTy", "albums", "v1").await?;
    /// ```
    pub async fn get_resource(
        &mut self,
        lookup_id: &str,
        resource_type: &str,
        version: &str,
    ) -> Result<Value, ApiError> {
        let url = self.api_url(&format!(
            "{version}/{resource_type}/{lookup_id}",
            version = version,
            resource_type = resource_type,
            lookup_id = lookup_id
        ));
        self.get_json_or_empty(&url).await
    }

    /// Fetches an album by its Spotify id.
    ///
    /// # Arguments
    ///
    /// * `id` - Spotify album id, e.g. `4aawyAB9vmqN3uQ7FjRGTy`
    ///
    /// # Returns
    ///
    /// - `Ok(Value)` - The album object
    /// - `Ok({})` - The album could not be fetched (any non-2xx status)
    /// - `Err(ApiError)` - Token acquisition, transport or decode failure
    ///
    /// # Example
    ///
    /// ```
    /// let album = client.get_album("4aawyAB9vmqN3uQ7FjRGTy").await?;
    /// println!("{}", album["name"]);
    /// ```
    pub async fn get_album(&mut self, id: &str) -> Result<Value, ApiError> {
        self.get_resource(id, "albums", DEFAULT_API_VERSION).await
    }

    /// Fetches an artist by its Spotify id.
    ///
    /// # Arguments
    ///
    /// * `id` - Spotify artist id
    ///
    /// # Returns
    ///
    /// The artist object, or `{}` for any non-2xx status.
    ///
    /// # Example
    ///
    /// ```
    /// let artist = client.get_artist("0TnOYISbd1XYRBk9myaseg").await?;
    /// ```
    pub async fn get_artist(&mut self, id: &str) -> Result<Value, ApiError> {
        self.get_resource(id, "artists", DEFAULT_API_VERSION).await
    }

    /// Fetches a track by its Spotify id; `{}` when Spotify answers non-2xx.
    ///
    /// # Arguments
    ///
    /// * `id` - Spotify track id
    ///
    /// # Example
    ///
    /// ```
    /// let track = client.get_track("11dFghVXANMlKmJXsNCbNl").await?;
    /// if track.as_object().is_some_and(|t| t.is_empty()) {
    ///     println!("track not available");
    /// }
    /// ```
    pub async fn get_track(&mut self, id: &str) -> Result<Value, ApiError> {
        self.get_resource(id, "tracks", DEFAULT_API_VERSION).await
    }

    /// Public playlists of `user_id`; `{}` when the user cannot be read.
    pub async fn get_user_playlists(&mut self, user_id: &str) -> Result<Value, ApiError> {
        let url = self.api_url(&format!("v1/users/{}/playlists", user_id));
        self.get_json_or_empty(&url).await
    }

    /// Genres accepted as `seed_genres` by the recommendation endpoint.
    pub async fn get_available_genres(&mut self) -> Result<Value, ApiError> {
        let url = self.api_url("v1/recommendations/available-genre-seeds");
        self.get_json_or_empty(&url).await
    }

    /// Profile of the user the current token belongs to.
    ///
    /// Unlike the lookups above, a non-2xx status is returned as
    /// [`ApiError::Status`].
    pub async fn get_user_profile(&mut self) -> Result<Value, ApiError> {
        let token = self.get_token().await?;
        let res = self
            .http
            .get(self.api_url("v1/me"))
            .bearer_auth(token)
            .send()
            .await?;

        let res = super::ensure_success(res)?;
        utils::decode_json(res).await
    }
}
