use std::cmp::Ordering;

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
    catalog::{Playlist, Song},
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Default,
    Title,
    Artist,
}

impl SortBy {
    pub fn next(self) -> Self {
        match self {
            SortBy::Default => SortBy::Title,
            SortBy::Title => SortBy::Artist,
            SortBy::Artist => SortBy::Default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Default => "Default",
            SortBy::Title => "Title",
            SortBy::Artist => "Artist",
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Songs matching `filter` on title or artist, in `sort` order. The sort is
/// stable, so ties keep playlist order.
pub fn visible_songs<'a>(songs: &'a [Song], filter: &str, sort: SortBy) -> Vec<&'a Song> {
    let filter = filter.trim().to_lowercase();
    let mut visible: Vec<&Song> = songs
        .iter()
        .filter(|s| {
            filter.is_empty()
                || s.title.to_lowercase().contains(&filter)
                || s.artist.to_lowercase().contains(&filter)
        })
        .collect();

    match sort {
        SortBy::Default => {}
        SortBy::Title => visible.sort_by(|a, b| compare_text(&a.title, &b.title)),
        SortBy::Artist => visible.sort_by(|a, b| compare_text(&a.artist, &b.artist)),
    }
    visible
}

fn summary(playlist: &Playlist) -> String {
    let duration = playlist.total_duration.clone().unwrap_or_else(|| {
        total_duration(playlist.songs.iter().map(|s| s.duration.as_str()))
    });
    let songs = format!("{} songs, about {duration}", playlist.songs.len());
    match playlist.likes {
        Some(likes) => format!("{likes} likes • {songs}"),
        None => songs,
    }
}

pub struct PlaylistDetail {
    playlist_id: String,
    filter: String,
    is_filtering: bool,
    sort: SortBy,
    list_state: ListState,
}

impl PlaylistDetail {
    pub fn new(playlist_id: String) -> Self {
        Self {
            playlist_id,
            filter: String::new(),
            is_filtering: false,
            sort: SortBy::default(),
            list_state: ListState::default(),
        }
    }

    fn context(&self) -> PlaybackContext {
        PlaybackContext::Playlist(self.playlist_id.clone())
    }
}

impl View for PlaylistDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let Some(playlist) = ctx.catalog.playlist(&self.playlist_id) else {
            f.render_widget(placeholder("Playlist not found."), area);
            return;
        };

        let [header_area, controls_area, songs_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let playback = ctx.audio.state();
        let is_playing_here = playback.is_playing && playback.is_context(&self.context());

        let mut title = vec![Span::styled(
            playlist.name.clone(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(colors::PRIMARY),
        )];
        if is_playing_here {
            title.push(Span::styled("  ▶ playing", Style::default().fg(colors::SECONDARY)));
        }

        let header = Paragraph::new(vec![
            Line::from(title),
            Line::from(Span::styled(
                playlist.description.clone().unwrap_or_default(),
                Style::default().fg(colors::MUTED),
            )),
            Line::from(format!("By {}", playlist.owner)),
            Line::from(Span::styled(summary(playlist), Style::default().fg(colors::MUTED))),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .padding(Padding::new(1, 1, 0, 1)),
        );
        f.render_widget(header, header_area);

        let filter_style = if self.is_filtering {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::MUTED)
        };
        let cursor = if self.is_filtering { "▏" } else { "" };
        let controls = Paragraph::new(Line::from(vec![
            Span::styled(" / Find in playlist: ", filter_style),
            Span::raw(format!("{}{cursor}", self.filter)),
            Span::styled("   o Sort by: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                self.sort.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        f.render_widget(controls, controls_area);

        let songs = visible_songs(&playlist.songs, &self.filter, self.sort);
        if songs.is_empty() {
            let message = if self.filter.trim().is_empty() {
                "This playlist is empty.".to_string()
            } else {
                format!("Couldn't find \"{}\"", self.filter)
            };
            f.render_widget(placeholder(message), songs_area);
            return;
        }

        clamp_selection(&mut self.list_state, songs.len());
        let items: Vec<ListItem> = songs.iter().map(|s| song_item(s, playback)).collect();
        f.render_stateful_widget(selectable_list(items), songs_area, &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &mut AppState,
        ctx: &AppContext,
    ) -> Option<AppMessage> {
        if self.is_filtering {
            match key.code {
                KeyCode::Char(c) => self.filter.push(c),
                KeyCode::Backspace => {
                    self.filter.pop();
                }
                KeyCode::Esc | KeyCode::Enter => self.is_filtering = false,
                _ => {}
            }
            self.list_state.select(None);
            return None;
        }

        let playlist = ctx.catalog.playlist(&self.playlist_id)?;
        let songs = visible_songs(&playlist.songs, &self.filter, self.sort);
        clamp_selection(&mut self.list_state, songs.len());
        if move_selection(&mut self.list_state, songs.len(), key.code) {
            return None;
        }
        let selected = self.list_state.selected().and_then(|i| songs.get(i));

        match key.code {
            KeyCode::Char('/') => {
                self.is_filtering = true;
                None
            }
            KeyCode::Char('o') => {
                self.sort = self.sort.next();
                None
            }
            KeyCode::Char('P') => Some(AppMessage::ActivateContext(self.context())),
            KeyCode::Enter => {
                selected.map(|song| AppMessage::ActivateSong((*song).clone(), Some(self.context())))
            }
            KeyCode::Char('a') => selected.map(|song| AppMessage::AddToQueue((*song).clone())),
            _ => None,
        }
    }

    fn captures_input(&self) -> bool {
        self.is_filtering
    }
}
