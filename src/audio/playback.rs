use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, Sink};

use crate::audio::{
    error::AudioError,
    util::{construct_sink, setup_device_config},
};

/// Output device plus the sink the preview clip is queued on.
pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Sink,
}

impl PlaybackEngine {
    pub fn new() -> Result<Self, AudioError> {
        let (device, stream_config, sample_format) = setup_device_config()?;
        let (stream, sink) = construct_sink(device, &stream_config, sample_format)?;

        Ok(Self {
            _stream: stream,
            sink,
        })
    }

    /// Decodes the clip and queues it. Call only once the sink has drained.
    pub fn load(&self, audio: Arc<[u8]>) -> Result<(), AudioError> {
        let source = Decoder::new(Cursor::new(audio))
            .map_err(|e| AudioError::DecodingError(e.to_string()))?;

        self.sink.append(source);
        Ok(())
    }

    pub fn pause(&self) {
        self.sink.pause();
    }

    pub fn play(&self) {
        self.sink.play();
    }

    pub fn is_empty(&self) -> bool {
        self.sink.empty()
    }
}
