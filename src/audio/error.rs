use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    #[error("Audio output device error: {0}")]
    DeviceError(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Playback error: {0}")]
    PlaybackError(String),
}
