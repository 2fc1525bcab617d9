use flume::Sender;
use tracing::debug;

use crate::{
    audio::controller::PlaybackController,
    event::events::Event,
    game::{guess::GuessState, round::Round},
    http::AlbumArt,
};

/// Everything that belongs to one round. Replacing the game drops the
/// previous round's audio output.
pub struct Game {
    pub guess: GuessState,
    pub playback: PlaybackController,
    pub art: Option<AlbumArt>,
}

impl Game {
    pub fn new(round: Round, event_tx: Sender<Event>) -> Self {
        let playback = PlaybackController::for_preview(round.preview.as_ref(), event_tx);

        Self {
            guess: GuessState::new(&round.song.title),
            playback,
            art: round.art,
        }
    }

    pub fn guess(&mut self, c: char) {
        let revealed = self.guess.guess(c);
        debug!(guess = %c, revealed, "letter_guessed");
    }
}

#[derive(Default)]
pub enum Screen {
    #[default]
    Loading,
    Failed(String),
    Playing(Box<Game>),
}
