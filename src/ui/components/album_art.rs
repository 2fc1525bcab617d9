use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::{http::AlbumArt, util::colors};

const UPPER_HALF: &str = "▀";
const PLACEHOLDER: &str = "♪";

/// Draws the cover with half-block characters: every terminal cell shows two
/// vertically stacked pixels.
pub struct AlbumArtWidget<'a> {
    art: Option<&'a AlbumArt>,
}

impl<'a> AlbumArtWidget<'a> {
    pub fn new(art: Option<&'a AlbumArt>) -> Self {
        Self { art }
    }

    /// Square region the cover occupies inside `area`.
    pub fn cover_rect(area: Rect) -> Rect {
        let side = area.width.min(area.height.saturating_mul(2));
        let rows = side / 2;
        Rect::new(
            area.x + (area.width - side) / 2,
            area.y + (area.height - rows) / 2,
            side,
            rows,
        )
    }
}

impl Widget for AlbumArtWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cover = Self::cover_rect(area);
        if cover.is_empty() {
            return;
        }

        let Some(art) = self.art else {
            buf.set_string(
                area.x + area.width / 2,
                area.y + area.height / 2,
                PLACEHOLDER,
                Style::default().fg(colors::NEUTRAL),
            );
            return;
        };

        let pixels = art.scaled(cover.width as u32, cover.height as u32 * 2);
        for row in 0..cover.height {
            for col in 0..cover.width {
                let top = pixels.get_pixel(col as u32, row as u32 * 2);
                let bottom = pixels.get_pixel(col as u32, row as u32 * 2 + 1);

                buf[(cover.x + col, cover.y + row)]
                    .set_symbol(UPPER_HALF)
                    .set_fg(Color::Rgb(top[0], top[1], top[2]))
                    .set_bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
            }
        }
    }
}
