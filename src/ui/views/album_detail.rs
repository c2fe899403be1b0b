use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, ListState, Padding, Paragraph},
};

use crate::{
    audio::queue::PlaybackContext,
    ui::{
        context::AppContext,
        message::AppMessage,
        state::AppState,
        traits::View,
        util::{clamp_selection, move_selection},
        views::{placeholder, selectable_list, song_item},
    },
    util::{colors, format::total_duration},
};

pub struct AlbumDetail {
    album_id: String,
    list_state: ListState,
}

impl AlbumDetail {
    pub fn new(album_id: String) -> Self {
        Self {
            album_id,
            list_state: ListState::default(),
        }
    }

    fn context(&self) -> PlaybackContext {
        PlaybackContext::Album(self.album_id.clone())
    }
}

impl View for AlbumDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let Some(album) = ctx.catalog.album(&self.album_id) else {
            f.render_widget(placeholder("Album not found."), area);
            return;
        };

        let [header_area, songs_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

        let playback = ctx.audio.state();
        let status = if playback.is_context(&self.context()) && playback.is_playing {
            "  ▶ playing"
        } else {
            ""
        };

        let header = Paragraph::new(vec![
            Line::from(Span::styled("Album", Style::default().fg(colors::MUTED))),
            Line::from(vec![
                Span::styled(
                    album.name.clone(),
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(status, Style::default().fg(colors::SECONDARY)),
            ]),
            Line::from(format!(
                "{} • {} • {} songs, {}",
                album.artist,
                album.year,
                album.songs.len(),
                total_duration(album.songs.iter().map(|s| s.duration.as_str())),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(colors::hint_or(
                    album.dominant_color.as_deref(),
                    colors::SURFACE,
                ))),
        );
        f.render_widget(header, header_area);

        if album.songs.is_empty() {
            f.render_widget(placeholder("This album is empty."), songs_area);
            return;
        }

        clamp_selection(&mut self.list_state, album.songs.len());
        let items: Vec<ListItem> = album.songs.iter().map(|s| song_item(s, playback)).collect();
        f.render_stateful_widget(selectable_list(items), songs_area, &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &mut AppState,
        ctx: &AppContext,
    ) -> Option<AppMessage> {
        let album = ctx.catalog.album(&self.album_id)?;
        clamp_selection(&mut self.list_state, album.songs.len());
        if move_selection(&mut self.list_state, album.songs.len(), key.code) {
            return None;
        }
        let selected = self.list_state.selected().and_then(|i| album.songs.get(i));

        match key.code {
            KeyCode::Char('P') => Some(AppMessage::ActivateContext(self.context())),
            KeyCode::Enter => {
                selected.map(|song| AppMessage::ActivateSong(song.clone(), Some(self.context())))
            }
            KeyCode::Char('a') => selected.map(|song| AppMessage::AddToQueue(song.clone())),
            _ => None,
        }
    }
}
