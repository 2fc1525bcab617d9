use ratatui::layout::Rect;

use crate::ui::{
    app::App,
    input::InputHandler,
    layout::GameLayout,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains the app channel.
    /// Returns whether the frame needs redrawing.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if matches!(evt, TerminalEvent::FocusGained) {
                tui.clear()?;
            }
            should_render = Self::handle_event(app, evt, tui.area()?);
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.apply_event(evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, area: Rect) -> bool {
        match evt {
            TerminalEvent::Init | TerminalEvent::Resize(_, _) => {}
            TerminalEvent::FocusGained => app.has_focus = true,
            TerminalEvent::FocusLost => {
                app.has_focus = false;
                return false;
            }
            TerminalEvent::Key(key) => {
                if let Some(message) = InputHandler::handle_key(key) {
                    app.dispatch(message);
                }
            }
            TerminalEvent::Mouse(mouse) => {
                let layout = GameLayout::new(area);
                if let Some(message) = InputHandler::handle_mouse(mouse, &layout) {
                    app.dispatch(message);
                }
            }
            TerminalEvent::Tick => {
                app.tick();
                return app.has_focus;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::{
        game::round::RoundLoader,
        http::{AlbumArt, ApiError, ArtSource, SongSource},
    };

    struct Idle;

    #[async_trait]
    impl SongSource for Idle {
        async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl ArtSource for Idle {
        async fn fetch_art(&self, _url: &str) -> Result<AlbumArt, ApiError> {
            AlbumArt::decode(&[])
        }
    }

    fn app() -> App {
        App::with_loader(Arc::new(RoundLoader::new(
            Arc::new(Idle),
            None,
            Arc::new(Idle),
            "Wonderwall".into(),
        )))
    }

    const AREA: Rect = Rect::new(0, 0, 80, 40);

    #[test]
    fn ticks_redraw_only_while_focused() {
        let mut app = app();
        assert!(EventHandler::handle_event(&mut app, TerminalEvent::Tick, AREA));

        assert!(!EventHandler::handle_event(&mut app, TerminalEvent::FocusLost, AREA));
        assert!(!app.has_focus);
        assert!(!EventHandler::handle_event(&mut app, TerminalEvent::Tick, AREA));

        assert!(EventHandler::handle_event(&mut app, TerminalEvent::FocusGained, AREA));
        assert!(app.has_focus);
        assert!(EventHandler::handle_event(&mut app, TerminalEvent::Tick, AREA));
    }

    #[test]
    fn escape_key_quits() {
        let mut app = app();
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(EventHandler::handle_event(&mut app, TerminalEvent::Key(esc), AREA));
        assert!(app.should_quit);
    }
}
