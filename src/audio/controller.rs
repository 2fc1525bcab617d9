use flume::Sender;
use tracing::{info, warn};

use crate::{
    audio::{
        error::AudioError,
        preview::PreviewPlayer,
        state::PlaybackState,
        traits::{AudioOutput, OutputStatus},
    },
    event::events::Event,
    game::round::Preview,
};

pub const NO_PREVIEW_NOTICE: &str = "No preview available for this song";

/// Owns the audio output of the current round. Dropping the controller
/// releases the output device.
pub struct PlaybackController {
    output: Option<Box<dyn AudioOutput>>,
    state: PlaybackState,
    event_tx: Sender<Event>,
}

impl PlaybackController {
    pub fn new(output: Option<Box<dyn AudioOutput>>, event_tx: Sender<Event>) -> Self {
        let state = if output.is_some() {
            PlaybackState::Idle
        } else {
            PlaybackState::Unavailable
        };

        Self {
            output,
            state,
            event_tx,
        }
    }

    pub fn for_preview(preview: Option<&Preview>, event_tx: Sender<Event>) -> Self {
        let output = preview
            .map(|p| Box::new(PreviewPlayer::new(p.audio.clone())) as Box<dyn AudioOutput>);
        Self::new(output, event_tx)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Flips between playing and paused. Without a playable preview this only
    /// posts a notice. A failed start marks the preview unavailable and returns
    /// the error.
    pub fn toggle(&mut self) -> Result<PlaybackState, AudioError> {
        if self.state == PlaybackState::Unavailable {
            self.notify(NO_PREVIEW_NOTICE.to_string());
            return Ok(self.state);
        }
        let Some(output) = self.output.as_mut() else {
            self.notify(NO_PREVIEW_NOTICE.to_string());
            return Ok(self.state);
        };

        match self.state {
            PlaybackState::Playing => {
                output.pause();
                self.state = PlaybackState::Idle;
            }
            _ => match output.play() {
                Ok(()) => {
                    info!("preview_playing");
                    self.state = PlaybackState::Playing;
                }
                Err(e) => {
                    self.report_failure(e.clone());
                    return Err(e);
                }
            },
        }

        Ok(self.state)
    }

    /// Polls the output while playing: a finished clip returns to idle, an
    /// output error is treated as a playback failure.
    pub fn tick(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        let Some(output) = &self.output else {
            return;
        };

        match output.status() {
            Ok(OutputStatus::Active) => {}
            Ok(OutputStatus::Finished) => {
                info!("preview_finished");
                self.state = PlaybackState::Idle;
            }
            Err(e) => self.report_failure(e),
        }
    }

    pub fn report_failure(&mut self, error: AudioError) {
        if self.state == PlaybackState::Unavailable {
            return;
        }

        warn!(error = %error, "preview_playback_failed");
        if let Some(output) = &mut self.output {
            output.pause();
        }
        self.state = PlaybackState::Unavailable;
        self.notify(format!("Could not play preview: {error}"));
    }

    fn notify(&self, message: String) {
        let _ = self.event_tx.send(Event::Notice(message));
    }
}
