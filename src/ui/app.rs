use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{debug, error, info, warn};

use crate::{
    config::Config,
    event::events::Event,
    game::{
        cancel::CancelToken,
        round::{RoundError, RoundLoader},
    },
    http::{self, ArtFetcher, PreviewResolver, SheetSource, SpotifyResolver},
    ui::{
        message::AppMessage,
        state::{Game, Screen},
        tui,
        util::handler::EventHandler,
    },
    util::task::TaskManager,
};

const ROUND_TASK: &str = "round";

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub loader: Arc<RoundLoader>,
    pub screen: Screen,
    pub notice: Option<String>,
    pub last_key: Option<char>,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let client = http::build_client()?;

        let previews = match config.spotify {
            Some(credentials) => Some(
                Arc::new(SpotifyResolver::new(client.clone(), credentials))
                    as Arc<dyn PreviewResolver>,
            ),
            None => {
                warn!("spotify_credentials_missing");
                None
            }
        };

        let loader = RoundLoader::new(
            Arc::new(SheetSource::new(client.clone(), config.sheet)),
            previews,
            Arc::new(ArtFetcher::new(client)),
            config.fallback_title,
        );

        Ok(Self::with_loader(Arc::new(loader)))
    }

    pub fn with_loader(loader: Arc<RoundLoader>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            event_tx,
            loader,
            screen: Screen::Loading,
            notice: None,
            last_key: None,
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true);
        tui.enter()?;

        self.start_round();
        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    /// Starts loading a round in the background. The result arrives on the
    /// event channel.
    pub fn start_round(&mut self) {
        self.screen = Screen::Loading;
        self.notice = None;

        let cancel = CancelToken::new();
        let loader = self.loader.clone();
        let tx = self.event_tx.clone();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            match loader.load(&token).await {
                Ok(round) => {
                    let _ = tx.send(Event::RoundLoaded(Box::new(round)));
                }
                Err(RoundError::Cancelled) => debug!("round_load_cancelled"),
                Err(e) => {
                    error!(error = %e, "round_load_failed");
                    let _ = tx.send(Event::RoundFailed(e.to_string()));
                }
            }
        });

        self.task_manager.spawn(ROUND_TASK, cancel, handle);
    }

    pub fn apply_event(&mut self, event: Event) {
        match event {
            Event::RoundLoaded(round) => {
                info!(title = round.song.title.as_str(), "round_started");
                self.screen = Screen::Playing(Box::new(Game::new(*round, self.event_tx.clone())));
            }
            Event::RoundFailed(message) => {
                self.screen = Screen::Failed(message);
            }
            Event::Notice(message) => {
                self.notice = Some(message);
            }
        }
    }

    pub fn dispatch(&mut self, message: AppMessage) {
        let quit = match (message, &mut self.screen) {
            (AppMessage::Quit, _) | (AppMessage::Guess('q' | 'Q'), Screen::Failed(_)) => true,
            (AppMessage::Guess(c), Screen::Playing(game)) => {
                self.last_key = Some(c);
                game.guess(c);
                false
            }
            (AppMessage::TogglePlayback, Screen::Playing(game)) => {
                if let Err(e) = game.playback.toggle() {
                    debug!(error = %e, "toggle_failed");
                }
                false
            }
            _ => false,
        };

        if quit {
            self.quit();
        }
    }

    pub fn tick(&mut self) {
        if let Screen::Playing(game) = &mut self.screen {
            game.playback.tick();
        }
    }

    fn quit(&mut self) {
        self.task_manager.abort_all();
        self.should_quit = true;
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        audio::{controller::NO_PREVIEW_NOTICE, state::PlaybackState},
        http::{AlbumArt, ApiError, ArtSource, SongSource},
    };

    struct OneSong;

    #[async_trait]
    impl SongSource for OneSong {
        async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, ApiError> {
            Ok(vec![vec!["Wonderwall".into()]])
        }
    }

    struct Offline;

    #[async_trait]
    impl SongSource for Offline {
        async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, ApiError> {
            Err(ApiError::ragged_sheet())
        }
    }

    #[async_trait]
    impl ArtSource for Offline {
        async fn fetch_art(&self, _url: &str) -> Result<AlbumArt, ApiError> {
            AlbumArt::decode(b"<html>offline</html>")
        }
    }

    fn app(songs: Arc<dyn SongSource>) -> App {
        App::with_loader(Arc::new(RoundLoader::new(
            songs,
            None,
            Arc::new(Offline),
            "Wonderwall".into(),
        )))
    }

    async fn next_event(app: &App) -> Event {
        app.event_rx.recv_async().await.unwrap()
    }

    #[tokio::test]
    async fn loaded_round_starts_game_without_preview() {
        let mut app = app(Arc::new(OneSong));
        app.start_round();
        assert!(matches!(app.screen, Screen::Loading));

        let event = next_event(&app).await;
        app.apply_event(event);

        let Screen::Playing(game) = &app.screen else {
            panic!("expected a running game");
        };
        assert_eq!(game.guess.masked(), "__________");
        assert_eq!(game.playback.state(), PlaybackState::Unavailable);
    }

    #[tokio::test]
    async fn guesses_and_toggle_reach_the_game() {
        let mut app = app(Arc::new(OneSong));
        app.start_round();
        let event = next_event(&app).await;
        app.apply_event(event);

        app.dispatch(AppMessage::Guess('W'));
        app.dispatch(AppMessage::Guess('l'));
        app.dispatch(AppMessage::TogglePlayback);

        let Screen::Playing(game) = &app.screen else {
            panic!("expected a running game");
        };
        assert_eq!(game.guess.masked(), "W_____w_ll");
        assert_eq!(app.last_key, Some('l'));

        let notice = next_event(&app).await;
        app.apply_event(notice);
        assert_eq!(app.notice.as_deref(), Some(NO_PREVIEW_NOTICE));
    }

    #[tokio::test]
    async fn failed_source_shows_failure_screen() {
        let mut app = app(Arc::new(Offline));
        app.start_round();
        let event = next_event(&app).await;
        app.apply_event(event);

        assert!(matches!(
            &app.screen,
            Screen::Failed(msg) if msg.contains("Malformed sheet data")
        ));

        app.dispatch(AppMessage::Guess('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn input_is_ignored_while_loading() {
        let mut app = app(Arc::new(OneSong));
        app.dispatch(AppMessage::Guess('q'));
        app.dispatch(AppMessage::TogglePlayback);
        assert!(!app.should_quit);
        assert!(app.last_key.is_none());

        app.dispatch(AppMessage::Quit);
        assert!(app.should_quit);
    }
}
