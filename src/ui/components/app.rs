use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    ui::{
        app::App,
        components::{
            album_art::AlbumArtWidget, keyboard::Keyboard, spinner::Spinner, status::StatusBar,
            title::MaskedTitle,
        },
        layout::GameLayout,
        state::{Game, Screen},
        util::playback_caption,
    },
    util::colors,
};

fn panel(title: impl Into<Line<'static>>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(colors::NEUTRAL))
        .title(title)
        .title_alignment(Alignment::Center)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        match &self.screen {
            Screen::Loading => Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading songs...")
                .render(area, buf),
            Screen::Failed(message) => render_failure(message, area, buf),
            Screen::Playing(game) => render_game(game, self, area, buf),
        }
    }
}

fn render_failure(message: &str, area: Rect, buf: &mut Buffer) {
    let text = vec![
        Line::from("Could not start a round".fg(colors::ERROR).bold()),
        Line::from(""),
        Line::from(message.fg(colors::ACCENT)),
        Line::from(""),
        Line::from("press q or esc to quit".fg(colors::NEUTRAL)),
    ];

    let top = area.height.saturating_sub(text.len() as u16) / 2;
    let area = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };

    Paragraph::new(text)
        .centered()
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_game(game: &Game, app: &App, area: Rect, buf: &mut Buffer) {
    let layout = GameLayout::new(area);

    let caption = Line::from(playback_caption(game.playback.state())).style(
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD),
    );
    panel(" cover ")
        .title_bottom(caption.centered())
        .render(layout.cover, buf);
    AlbumArtWidget::new(game.art.as_ref()).render(layout.cover_inner, buf);

    let word_count = game.guess.word_count();
    let title = format!(
        " {} {} ",
        word_count,
        if word_count == 1 { "word" } else { "words" }
    );
    panel(title).render(layout.title, buf);
    MaskedTitle::new(&game.guess).render(layout.title_inner, buf);

    panel(" keyboard ").render(layout.keyboard, buf);
    Keyboard::new(app.last_key).render(layout.keyboard_inner, buf);

    StatusBar::new(app.notice.as_deref()).render(layout.status, buf);
}
