use crate::audio::error::AudioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    Active,
    Finished,
}

/// Audio sink for a single preview clip.
pub trait AudioOutput: Send {
    /// Starts or resumes the clip. A finished clip restarts from the beginning.
    fn play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self);
    fn status(&self) -> Result<OutputStatus, AudioError>;
}
