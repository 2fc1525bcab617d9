use crate::game::round::Round;

#[derive(Debug, Clone)]
pub enum Event {
    // Loading
    RoundLoaded(Box<Round>),
    RoundFailed(String),

    // Playback
    Notice(String),
}
