use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    spotify::{SpotifyClient, ensure_success},
    types::{SearchArtistsResponse, SearchTracksResponse},
    utils,
};

impl SpotifyClient {
    /// Returns the id of the first artist matching `query`.
    ///
    /// The id is taken from the last segment of the artist's Spotify URL
    /// (`external_urls.spotify`), not from the `id` field.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text artist search, e.g. `"daft punk"`
    ///
    /// # Returns
    ///
    /// - `Ok(String)` - Id of the first matching artist
    /// - `Err(ApiError::EmptyResult)` - The search returned no artists
    /// - `Err(ApiError::Status)` - Spotify rejected the search
    ///
    /// # Example
    ///
    /// ```
    /// let artist_id = client.search_artist("daft punk").await?;
    /// let artist = client.get_artist(&artist_id).await?;
    /// ```
    pub async fn search_artist(&mut self, query: &str) -> Result<String, ApiError> {
        let res: SearchArtistsResponse = self.search(query, "artist").await?;
        let first = res
            .artists
            .items
            .first()
            .ok_or_else(|| ApiError::EmptyResult(query.to_string()))?;

        Ok(utils::last_path_segment(&first.external_urls.spotify).to_string())
    }

    /// Returns the id of the first track matching `query`.
    ///
    /// Fails with [`ApiError::EmptyResult`] when nothing matches and with
    /// [`ApiError::Status`] on a non-2xx response.
    pub async fn search_track(&mut self, query: &str) -> Result<String, ApiError> {
        let res: SearchTracksResponse = self.search(query, "track").await?;
        res.tracks
            .items
            .into_iter()
            .next()
            .map(|track| track.id)
            .ok_or_else(|| ApiError::EmptyResult(query.to_string()))
    }

    async fn search<T: DeserializeOwned>(
        &mut self,
        query: &str,
        search_type: &str,
    ) -> Result<T, ApiError> {
        let search_type = search_type.to_lowercase();
        let token = self.get_token().await?;
        let res = self
            .http
            .get(self.api_url("v1/search"))
            .query(&[("q", query), ("type", search_type.as_str())])
            .bearer_auth(token)
            .send()
            .await?;

        let res = ensure_success(res)?;
        utils::decode_json(res).await
    }
}
