use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    game::guess::{Cell, GuessState},
    util::colors,
};

/// The masked title, one word per line with spaced cells.
pub struct MaskedTitle<'a> {
    guess: &'a GuessState,
}

impl<'a> MaskedTitle<'a> {
    pub fn new(guess: &'a GuessState) -> Self {
        Self { guess }
    }

    fn word_line(cells: &[Cell]) -> Line<'static> {
        let spans: Vec<Span> = cells
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                let style = match cell {
                    Cell::Revealed(_) => Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                    Cell::Hidden => Style::default().fg(colors::NEUTRAL),
                };
                let gap = (i > 0).then(|| Span::raw(" "));
                gap.into_iter()
                    .chain(std::iter::once(Span::styled(cell.symbol().to_string(), style)))
            })
            .collect();

        Line::from(spans).centered()
    }
}

impl Widget for MaskedTitle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .guess
            .words()
            .iter()
            .map(|word| Self::word_line(word))
            .collect();

        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let area = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim()
            .to_string()
    }

    #[test]
    fn renders_each_word_on_its_own_line() {
        let mut guess = GuessState::new("Go Let It Out");
        guess.guess('t');

        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        MaskedTitle::new(&guess).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "_ _");
        assert_eq!(row(&buf, 1), "_ _ t");
        assert_eq!(row(&buf, 2), "_ t");
        assert_eq!(row(&buf, 3), "_ _ t");
    }
}
