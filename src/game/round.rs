use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    game::{cancel::CancelToken, song::SongEntry},
    http::{AlbumArt, ApiError, ArtSource, PreviewResolver, SongSource},
};

#[derive(Error, Debug)]
pub enum RoundError {
    #[error("Could not load the song list: {0}")]
    SongSource(#[from] ApiError),

    #[error("Loading was cancelled")]
    Cancelled,
}

/// A downloaded preview clip.
#[derive(Debug, Clone)]
pub struct Preview {
    pub url: String,
    pub audio: Arc<[u8]>,
}

#[derive(Debug, Clone)]
pub struct Round {
    pub song: SongEntry,
    pub preview: Option<Preview>,
    pub art: Option<AlbumArt>,
}

/// Two-stage loader: pick a song from the table, then try to resolve its
/// preview clip. Only the first stage can fail the round.
pub struct RoundLoader {
    songs: Arc<dyn SongSource>,
    previews: Option<Arc<dyn PreviewResolver>>,
    art: Arc<dyn ArtSource>,
    fallback_title: String,
}

impl RoundLoader {
    pub fn new(
        songs: Arc<dyn SongSource>,
        previews: Option<Arc<dyn PreviewResolver>>,
        art: Arc<dyn ArtSource>,
        fallback_title: String,
    ) -> Self {
        Self {
            songs,
            previews,
            art,
            fallback_title,
        }
    }

    pub async fn load(&self, cancel: &CancelToken) -> Result<Round, RoundError> {
        let song = self.select_song(cancel).await?;
        info!(title = song.title.as_str(), track_ref = song.track_ref.as_str(), "song_selected");

        let art = self.fetch_art(&song, cancel).await?;
        let preview = self.resolve_preview(&song, cancel).await?;

        Ok(Round { song, preview, art })
    }

    async fn select_song(&self, cancel: &CancelToken) -> Result<SongEntry, RoundError> {
        let rows = cancel
            .run(self.songs.fetch_rows())
            .await
            .ok_or(RoundError::Cancelled)??;

        Ok(SongEntry::pick(&rows, &self.fallback_title, &mut rand::rng()))
    }

    async fn fetch_art(
        &self,
        song: &SongEntry,
        cancel: &CancelToken,
    ) -> Result<Option<AlbumArt>, RoundError> {
        if song.album_art_url.is_empty() {
            return Ok(None);
        }

        match cancel.run(self.art.fetch_art(&song.album_art_url)).await {
            None => Err(RoundError::Cancelled),
            Some(Ok(art)) => Ok(Some(art)),
            Some(Err(e)) => {
                warn!(url = song.album_art_url.as_str(), error = %e, "album_art_unavailable");
                Ok(None)
            }
        }
    }

    async fn resolve_preview(
        &self,
        song: &SongEntry,
        cancel: &CancelToken,
    ) -> Result<Option<Preview>, RoundError> {
        let Some(resolver) = &self.previews else {
            warn!("preview_resolver_not_configured");
            return Ok(None);
        };
        let Some(track_id) = song.track_id() else {
            warn!(track_ref = song.track_ref.as_str(), "track_id_missing");
            return Ok(None);
        };

        let resolved = cancel
            .run(async {
                let token = resolver.fetch_token().await?;
                let Some(url) = resolver.fetch_preview_url(&token, track_id).await? else {
                    return Ok::<_, ApiError>(None);
                };
                let audio = resolver.fetch_audio(&url).await?;
                Ok(Some(Preview {
                    url,
                    audio: audio.into(),
                }))
            })
            .await
            .ok_or(RoundError::Cancelled)?;

        match resolved {
            Ok(Some(preview)) => {
                info!(track_id, url = preview.url.as_str(), "preview_resolved");
                Ok(Some(preview))
            }
            Ok(None) => {
                warn!(track_id, "preview_not_available");
                Ok(None)
            }
            Err(e) => {
                warn!(track_id, error = %e, "preview_lookup_failed");
                Ok(None)
            }
        }
    }
}
