use std::sync::Arc;

use tracing::debug;

use crate::audio::{
    error::AudioError,
    playback::PlaybackEngine,
    traits::{AudioOutput, OutputStatus},
};

/// Plays one downloaded clip. The output device is only opened on the first
/// `play`, so a missing device surfaces as a playback failure rather than
/// blocking the round.
pub struct PreviewPlayer {
    audio: Arc<[u8]>,
    engine: Option<PlaybackEngine>,
}

impl PreviewPlayer {
    pub fn new(audio: Arc<[u8]>) -> Self {
        Self {
            audio,
            engine: None,
        }
    }

    fn engine(&mut self) -> Result<&PlaybackEngine, AudioError> {
        if self.engine.is_none() {
            debug!("opening_output_device");
            self.engine = Some(PlaybackEngine::new()?);
        }

        self.engine
            .as_ref()
            .ok_or_else(|| AudioError::DeviceError("output device not initialized".to_string()))
    }
}

impl AudioOutput for PreviewPlayer {
    fn play(&mut self) -> Result<(), AudioError> {
        let audio = self.audio.clone();
        let engine = self.engine()?;

        if engine.is_empty() {
            engine.load(audio)?;
        }
        engine.play();
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(engine) = &self.engine {
            engine.pause();
        }
    }

    fn status(&self) -> Result<OutputStatus, AudioError> {
        match &self.engine {
            Some(engine) if !engine.is_empty() => Ok(OutputStatus::Active),
            _ => Ok(OutputStatus::Finished),
        }
    }
}
