pub mod art;
pub mod error;
pub mod sheet;
pub mod spotify;
pub mod traits;

use std::time::Duration;

pub use art::{AlbumArt, ArtFetcher};
pub use error::ApiError;
pub use sheet::SheetSource;
pub use spotify::SpotifyResolver;
pub use traits::{ArtSource, PreviewResolver, SongSource};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn build_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .gzip(true)
        .user_agent(concat!("songle/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ApiError::from)
}
