use async_trait::async_trait;
use image::{RgbImage, imageops::FilterType};

use crate::http::{ApiError, ArtSource};

/// Covers are kept small; the terminal never shows more than a few dozen
/// cells across.
const MAX_SIDE: u32 = 96;

#[derive(Debug, Clone)]
pub struct AlbumArt {
    image: RgbImage,
}

impl AlbumArt {
    pub fn decode(bytes: &[u8]) -> Result<Self, ApiError> {
        let image = image::load_from_memory(bytes)?;
        let image = if image.width() > MAX_SIDE || image.height() > MAX_SIDE {
            image.resize(MAX_SIDE, MAX_SIDE, FilterType::Triangle)
        } else {
            image
        };

        Ok(Self {
            image: image.to_rgb8(),
        })
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Returns the cover scaled to `width` x `height` pixels.
    pub fn scaled(&self, width: u32, height: u32) -> RgbImage {
        image::imageops::resize(&self.image, width, height, FilterType::Nearest)
    }
}

pub struct ArtFetcher {
    client: reqwest::Client,
}

impl ArtFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArtSource for ArtFetcher {
    async fn fetch_art(&self, url: &str) -> Result<AlbumArt, ApiError> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        AlbumArt::decode(&bytes)
    }
}
