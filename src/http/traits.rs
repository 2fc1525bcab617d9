use async_trait::async_trait;

use crate::http::{AlbumArt, ApiError};

#[async_trait]
pub trait SongSource: Send + Sync {
    /// Returns every data row of the song table, one `Vec` of raw fields per row.
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, ApiError>;
}

#[async_trait]
pub trait PreviewResolver: Send + Sync {
    async fn fetch_token(&self) -> Result<String, ApiError>;
    async fn fetch_preview_url(&self, token: &str, track_id: &str)
    -> Result<Option<String>, ApiError>;
    async fn fetch_audio(&self, url: &str) -> Result<Vec<u8>, ApiError>;
}

#[async_trait]
pub trait ArtSource: Send + Sync {
    async fn fetch_art(&self, url: &str) -> Result<AlbumArt, ApiError>;
}
