use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    config::SpotifyCredentials,
    http::{ApiError, PreviewResolver},
};

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const TRACKS_URL: &str = "https://api.spotify.com/v1/tracks";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrackResponse {
    preview_url: Option<String>,
}

/// Resolves preview clips through the Spotify Web API using the client
/// credentials flow.
pub struct SpotifyResolver {
    client: reqwest::Client,
    credentials: SpotifyCredentials,
}

impl SpotifyResolver {
    pub fn new(client: reqwest::Client, credentials: SpotifyCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }
}

#[async_trait]
impl PreviewResolver for SpotifyResolver {
    async fn fetch_token(&self) -> Result<String, ApiError> {
        let response: TokenResponse = self
            .client
            .post(TOKEN_URL)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        match response.access_token {
            Some(token) if !token.is_empty() => {
                debug!("spotify_token_acquired");
                Ok(token)
            }
            _ => Err(ApiError::Token(
                response.error.unwrap_or_else(|| "no access token".to_string()),
            )),
        }
    }

    async fn fetch_preview_url(
        &self,
        token: &str,
        track_id: &str,
    ) -> Result<Option<String>, ApiError> {
        let track: TrackResponse = self
            .client
            .get(format!("{TRACKS_URL}/{track_id}"))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(
            track_id,
            has_preview = track.preview_url.is_some(),
            "spotify_track_fetched"
        );
        Ok(track.preview_url.filter(|url| !url.is_empty()))
    }

    async fn fetch_audio(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(bytes.to_vec())
    }
}
