use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

const HINTS: &str = "type or click a key to guess · space / click cover: play · esc: quit";

pub struct StatusBar<'a> {
    notice: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(notice: Option<&'a str>) -> Self {
        Self { notice }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.notice {
            Some(notice) => Line::from(vec![
                Span::raw(" ! ").fg(colors::ERROR).bold(),
                Span::raw(notice).fg(colors::ACCENT),
            ]),
            None => Line::from(HINTS.fg(colors::NEUTRAL)),
        };

        Paragraph::new(line)
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::default().fg(colors::NEUTRAL)),
            )
            .render(area, buf);
    }
}
