use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, ListState},
};

use crate::{
    audio::queue::PlaybackContext,
    ui::{
        context::AppContext,
        message::{AppMessage, ViewRoute},
        state::AppState,
        traits::View,
        util::{clamp_selection, get_active_track_icon, move_selection},
        views::{placeholder, selectable_list},
    },
    util::colors,
};

#[derive(Default)]
pub struct Library {
    list_state: ListState,
}

impl View for Library {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let playlists = ctx.catalog.playlists();
        if playlists.is_empty() {
            f.render_widget(placeholder("Your library is empty."), area);
            return;
        }
        clamp_selection(&mut self.list_state, playlists.len());

        let playback = ctx.audio.state();
        let items: Vec<ListItem> = playlists
            .iter()
            .map(|p| {
                let active = playback.is_context(&PlaybackContext::Playlist(p.id.clone()));
                let marker = if active {
                    format!("{} ", get_active_track_icon(playback.is_playing))
                } else {
                    "  ".to_string()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(colors::PRIMARY)),
                    Span::raw(p.name.clone()),
                    Span::styled(
                        format!("  Playlist • {} • {} songs", p.owner, p.songs.len()),
                        Style::default().fg(colors::MUTED),
                    ),
                ]))
            })
            .collect();

        let list = selectable_list(items).block(
            Block::default().borders(Borders::BOTTOM).title(Span::styled(
                "Your Library",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        );
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &mut AppState,
        ctx: &AppContext,
    ) -> Option<AppMessage> {
        let playlists = ctx.catalog.playlists();
        clamp_selection(&mut self.list_state, playlists.len());
        if move_selection(&mut self.list_state, playlists.len(), key.code) {
            return None;
        }
        let playlist = self.list_state.selected().and_then(|i| playlists.get(i))?;

        match key.code {
            KeyCode::Enter => Some(AppMessage::NavigateTo(ViewRoute::Playlist(playlist.id.clone()))),
            KeyCode::Char('P') => Some(AppMessage::ActivateContext(PlaybackContext::Playlist(
                playlist.id.clone(),
            ))),
            _ => None,
        }
    }
}
