use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
};

use crate::ui::components::keyboard;

const STATUS_HEIGHT: u16 = 3;

/// Screen regions of the game view. Rendering and mouse hit-testing both go
/// through this so they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub cover: Rect,
    pub cover_inner: Rect,
    pub title: Rect,
    pub title_inner: Rect,
    pub keyboard: Rect,
    pub keyboard_inner: Rect,
    pub status: Rect,
}

impl GameLayout {
    pub fn new(area: Rect) -> Self {
        let [main, status] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
            .areas(area);

        let [cover, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Min(1)])
            .areas(main);

        let [title, keyboard] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(keyboard::HEIGHT + 2)])
            .areas(right);

        let inner = |rect: Rect| Block::bordered().inner(rect);

        Self {
            cover,
            cover_inner: inner(cover),
            title,
            title_inner: inner(title),
            keyboard,
            keyboard_inner: inner(keyboard),
            status,
        }
    }
}
