use chrono::{TimeDelta, Utc};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    error::ApiError,
    types::{Credentials, TokenResponse, TokenState},
    utils,
};

/// Upper bound on authentications performed by a single `get_token` call.
pub const MAX_AUTH_ATTEMPTS: u32 = 3;

pub struct TokenManager {
    client: Client,
    credentials: Credentials,
    token_url: String,
    state: TokenState,
}

impl TokenManager {
    pub fn new(client: Client, credentials: Credentials, auth_url: &str) -> Self {
        TokenManager {
            client,
            credentials,
            token_url: format!("{}/api/token", auth_url.trim_end_matches('/')),
            state: TokenState::default(),
        }
    }

    /// Requests a new access token with the client-credentials grant.
    ///
    /// The token state is only written after a 2xx response has been decoded
    /// and its expiry computed, so a failed call leaves the previous token in
    /// place.
    pub async fn authenticate(&mut self) -> Result<(), ApiError> {
        let basic = utils::encode_client_credentials(&self.credentials)?;

        let res = self
            .client
            .post(&self.token_url)
            .header(AUTHORIZATION, format!("Basic {}", basic))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ApiError::Authentication {
                status: res.status(),
            });
        }

        let token: TokenResponse = utils::decode_json(res).await?;
        let now = Utc::now();
        let expires_at = TimeDelta::try_seconds(token.expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                ApiError::MalformedResponse(format!(
                    "expires_in out of range: {}",
                    token.expires_in
                ))
            })?;

        self.state = TokenState {
            access_token: Some(token.access_token),
            expires_at,
            is_expired: expires_at < now,
        };

        Ok(())
    }

    /// Returns the cached token while it is valid, authenticating otherwise.
    pub async fn get_token(&mut self) -> Result<String, ApiError> {
        for _ in 0..MAX_AUTH_ATTEMPTS {
            if let Some(token) = self.valid_token() {
                return Ok(token);
            }
            self.authenticate().await?;
        }

        self.valid_token().ok_or(ApiError::TokenUnavailable {
            attempts: MAX_AUTH_ATTEMPTS,
        })
    }

    pub fn is_expired(&self) -> bool {
        self.state.access_token.is_none() || Utc::now() >= self.state.expires_at
    }

    pub fn state(&self) -> &TokenState {
        &self.state
    }

    fn valid_token(&self) -> Option<String> {
        if self.is_expired() {
            return None;
        }
        self.state.access_token.clone()
    }
}
