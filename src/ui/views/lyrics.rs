use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    ui::{
        context::AppContext, message::AppMessage, state::AppState, traits::View,
        views::placeholder,
    },
    util::colors,
};

/// Catalog lyrics carry escaped newlines.
pub fn lyric_lines(lyrics: &str) -> Vec<String> {
    lyrics
        .replace("\\n", "\n")
        .lines()
        .map(str::to_string)
        .collect()
}

#[derive(Default)]
pub struct Lyrics {
    scroll: u16,
}

impl View for Lyrics {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        f.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::PRIMARY))
            .title(" Lyrics ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let playback = ctx.audio.state();
        let Some(song) = &playback.current_song else {
            f.render_widget(placeholder("Nothing is playing."), inner);
            return;
        };
        let Some(lyrics) = song.lyrics.as_deref().filter(|l| !l.trim().is_empty()) else {
            f.render_widget(placeholder("No lyrics found for this song."), inner);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                song.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(song.artist.clone(), Style::default().fg(colors::MUTED))),
            Line::default(),
        ];
        lines.extend(lyric_lines(lyrics).into_iter().map(Line::from));

        let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
        self.scroll = self.scroll.min(max_scroll);

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .scroll((self.scroll, 0)),
            inner,
        );
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &mut AppState,
        _ctx: &AppContext,
    ) -> Option<AppMessage> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Esc | KeyCode::Char('q') => Some(AppMessage::CloseOverlay),
            _ => None,
        }
    }
}
