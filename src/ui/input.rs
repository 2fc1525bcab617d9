use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::{components::keyboard::Keyboard, layout::GameLayout, message::AppMessage};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => Some(AppMessage::TogglePlayback),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Some(AppMessage::Guess(c))
            }
            _ => None,
        }
    }

    pub fn handle_mouse(mouse: MouseEvent, layout: &GameLayout) -> Option<AppMessage> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let position = (mouse.column, mouse.row).into();
        if layout.cover.contains(position) {
            return Some(AppMessage::TogglePlayback);
        }

        Keyboard::key_at(layout.keyboard_inner, mouse.column, mouse.row).map(AppMessage::Guess)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn letters_become_guesses() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('w'), KeyModifiers::NONE)),
            Some(AppMessage::Guess('w'))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('W'), KeyModifiers::SHIFT)),
            Some(AppMessage::Guess('W'))
        );
    }

    #[test]
    fn control_keys() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppMessage::Quit)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(AppMessage::Quit)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(AppMessage::TogglePlayback)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Tab, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn clicks_hit_cover_and_keys() {
        let layout = GameLayout::new(Rect::new(0, 0, 120, 40));

        let cover = layout.cover;
        assert_eq!(
            InputHandler::handle_mouse(click(cover.x + 3, cover.y + 3), &layout),
            Some(AppMessage::TogglePlayback)
        );

        let q = Keyboard::key_rect(layout.keyboard_inner, 1, 0).unwrap();
        assert_eq!(
            InputHandler::handle_mouse(click(q.x + 1, q.y), &layout),
            Some(AppMessage::Guess('Q'))
        );

        let title = layout.title_inner;
        assert_eq!(InputHandler::handle_mouse(click(title.x, title.y), &layout), None);
    }

    #[test]
    fn only_left_press_counts() {
        let layout = GameLayout::new(Rect::new(0, 0, 120, 40));
        let mut event = click(layout.cover.x + 1, layout.cover.y + 1);
        event.kind = MouseEventKind::Up(MouseButton::Left);
        assert_eq!(InputHandler::handle_mouse(event, &layout), None);

        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(InputHandler::handle_mouse(event, &layout), None);
    }
}
