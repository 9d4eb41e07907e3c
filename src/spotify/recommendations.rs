use serde_json::Value;

use crate::{
    error::ApiError,
    info,
    spotify::SpotifyClient,
    types::{
        RecommendationSeed, Recommendations, RecommendationsResponse, RecommendedSongsQuery,
        RecommendedTrack,
    },
    utils, warning,
};

impl SpotifyClient {
    /// Asks for ten recommendations seeded by artists, genres and tracks.
    ///
    /// A non-2xx response is not an error here: it comes back as
    /// [`Recommendations::Rejected`] with the status code.
    pub async fn recommend_track(
        &mut self,
        artists: &[String],
        genres: &[String],
        tracks: &[String],
    ) -> Result<Recommendations, ApiError> {
        let seed = RecommendationSeed::new(artists.to_vec(), genres.to_vec(), tracks.to_vec());
        self.recommend(&seed).await
    }

    /// Requests recommendations for a prepared seed.
    ///
    /// Sends `GET /v1/recommendations` with the seed's comma-joined
    /// `seed_artists`, `seed_genres` and `seed_tracks` plus its `limit`,
    /// authorized with the managed token.
    ///
    /// # Arguments
    ///
    /// * `seed` - Artists, genres, tracks and result limit to ask for
    ///
    /// # Returns
    ///
    /// - `Ok(Recommendations::Found(Value))` - The decoded body on a 2xx response
    /// - `Ok(Recommendations::Rejected(StatusCode))` - Spotify answered non-2xx
    /// - `Err(ApiError)` - Token acquisition, transport or decode failure
    ///
    /// # Example
    ///
    /// ```
    /// let seed = RecommendationSeed::new(vec![], vec!["folk".into(), "techno".into()], vec![]);
    /// match client.recommend(&seed).await? {
    ///     Recommendations::Found(body) => println!("{}", body["tracks"]),
    ///     Recommendations::Rejected(status) => println!("rejected: {}", status),
    /// }
    /// ```
    pub async fn recommend(
        &mut self,
        seed: &RecommendationSeed,
    ) -> Result<Recommendations, ApiError> {
        let token = self.get_token().await?;
        let res = self
            .http
            .get(self.api_url("v1/recommendations"))
            .query(&seed.query())
            .bearer_auth(token)
            .send()
            .await?;

        if !res.status().is_success() {
            return Ok(Recommendations::Rejected(res.status()));
        }

        Ok(Recommendations::Found(utils::decode_json(res).await?))
    }

    /// Fetches recommended tracks and returns their ids in response order.
    ///
    /// When `access_token` is given it is used as the bearer token for this
    /// request only; the managed token is left alone.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MalformedResponse`] if the body has no `tracks` list or a
    ///   track lacks a name, an artist or a Spotify URL
    /// - Token and transport errors as for every other call
    ///
    /// A non-2xx status yields an empty list.
    pub async fn get_recommended_songs(
        &mut self,
        query: &RecommendedSongsQuery,
        access_token: Option<&str>,
    ) -> Result<Vec<String>, ApiError> {
        let tracks = self.recommended_tracks(query, access_token).await?;

        if !tracks.is_empty() {
            info!("Recommended songs:");
        }
        for (i, track) in tracks.iter().enumerate() {
            info!("{}) \"{}\" by {}", i + 1, track.name, track.artist);
        }

        Ok(tracks.into_iter().map(|t| t.id).collect())
    }

    /// Same request as [`Self::get_recommended_songs`] but keeps the track
    /// name and first artist next to the id.
    pub async fn recommended_tracks(
        &mut self,
        query: &RecommendedSongsQuery,
        access_token: Option<&str>,
    ) -> Result<Vec<RecommendedTrack>, ApiError> {
        // seeds are already comma separated ids, sent without encoding
        let url = format!(
            "{endpoint}?limit={limit}&max_instrumentalness={max}&seed_artists={artists}&seed_genres={genres}&seed_tracks={tracks}",
            endpoint = self.api_url("v1/recommendations"),
            limit = query.limit,
            max = query.max_instrumentalness,
            artists = query.seed_artists,
            genres = query.seed_genres,
            tracks = query.seed_tracks,
        );

        let token = self.bearer(access_token).await?;
        let res = self.http.get(&url).bearer_auth(token).send().await?;

        if !res.status().is_success() {
            warning!("Recommendation request rejected with status {}", res.status());
            return Ok(Vec::new());
        }

        let body: Value = utils::decode_json(res).await?;
        parse_recommended_tracks(body)
    }
}

fn parse_recommended_tracks(body: Value) -> Result<Vec<RecommendedTrack>, ApiError> {
    if body.get("tracks").is_none() {
        return Err(ApiError::MalformedResponse(
            "missing 'tracks' in recommendations".to_string(),
        ));
    }

    let res: RecommendationsResponse = serde_json::from_value(body)
        .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

    res.tracks
        .into_iter()
        .map(|track| {
            let artist = track
                .artists
                .first()
                .map(|a| a.name.clone())
                .ok_or_else(|| {
                    ApiError::MalformedResponse(format!("track '{}' has no artists", track.name))
                })?;

            Ok(RecommendedTrack {
                id: utils::last_path_segment(&track.external_urls.spotify).to_string(),
                name: track.name,
                artist,
            })
        })
        .collect()
}
