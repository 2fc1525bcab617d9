use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::util::colors;

pub const ROWS: [&str; 4] = ["1234567890", "QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];
pub const KEY_WIDTH: u16 = 5;
const ROW_STEP: u16 = 2;
pub const HEIGHT: u16 = ROWS.len() as u16 * ROW_STEP - 1;

/// On-screen keyboard. Rows are centered horizontally and separated by one
/// blank line.
pub struct Keyboard {
    highlighted: Option<char>,
}

impl Keyboard {
    pub fn new(highlighted: Option<char>) -> Self {
        Self {
            highlighted: highlighted.map(|c| c.to_ascii_uppercase()),
        }
    }

    fn row_origin(area: Rect, row: usize) -> Option<(u16, u16)> {
        let keys = ROWS.get(row)?.len() as u16;
        let y = area.y + row as u16 * ROW_STEP;
        if y >= area.bottom() {
            return None;
        }
        let x = area.x + area.width.saturating_sub(keys * KEY_WIDTH) / 2;
        Some((x, y))
    }

    pub fn key_rect(area: Rect, row: usize, index: usize) -> Option<Rect> {
        let (x, y) = Self::row_origin(area, row)?;
        let x = x + index as u16 * KEY_WIDTH;
        if index >= ROWS[row].len() || x + KEY_WIDTH > area.right() {
            return None;
        }
        Some(Rect::new(x, y, KEY_WIDTH, 1))
    }

    /// Maps a terminal cell to the key drawn there.
    pub fn key_at(area: Rect, column: u16, row: u16) -> Option<char> {
        ROWS.iter().enumerate().find_map(|(r, keys)| {
            keys.chars().enumerate().find_map(|(i, key)| {
                Self::key_rect(area, r, i)
                    .filter(|rect| rect.contains((column, row).into()))
                    .map(|_| key)
            })
        })
    }
}

impl Widget for Keyboard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (r, keys) in ROWS.iter().enumerate() {
            for (i, key) in keys.chars().enumerate() {
                let Some(rect) = Self::key_rect(area, r, i) else {
                    continue;
                };

                let style = if Some(key) == self.highlighted {
                    Style::default()
                        .fg(colors::BACKGROUND)
                        .bg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::ACCENT)
                };
                buf.set_string(rect.x, rect.y, format!("[ {key} ]"), style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(10, 5, 60, HEIGHT);

    #[test]
    fn every_key_maps_back_to_itself() {
        for (r, keys) in ROWS.iter().enumerate() {
            for (i, key) in keys.chars().enumerate() {
                let rect = Keyboard::key_rect(AREA, r, i).unwrap();
                assert_eq!(Keyboard::key_at(AREA, rect.x, rect.y), Some(key));
                assert_eq!(Keyboard::key_at(AREA, rect.right() - 1, rect.y), Some(key));
            }
        }
    }

    #[test]
    fn gaps_and_outside_hit_nothing() {
        let first = Keyboard::key_rect(AREA, 0, 0).unwrap();
        assert_eq!(Keyboard::key_at(AREA, first.x, first.y + 1), None);
        assert_eq!(Keyboard::key_at(AREA, first.x - 1, first.y), None);
        assert_eq!(Keyboard::key_at(AREA, 0, 0), None);
    }

    #[test]
    fn narrow_area_drops_overflowing_keys() {
        let narrow = Rect::new(0, 0, 12, HEIGHT);
        assert!(Keyboard::key_rect(narrow, 1, 1).is_some());
        assert!(Keyboard::key_rect(narrow, 1, 2).is_none());
    }

    #[test]
    fn renders_highlighted_key() {
        let mut buf = Buffer::empty(AREA);
        Keyboard::new(Some('q')).render(AREA, &mut buf);

        let rect = Keyboard::key_rect(AREA, 1, 0).unwrap();
        let cell = &buf[(rect.x + 2, rect.y)];
        assert_eq!(cell.symbol(), "Q");
        assert_eq!(cell.bg, colors::PRIMARY);
    }
}
