pub mod album_detail;
pub mod generate;
pub mod home;
pub mod library;
pub mod lyrics;
pub mod playlist_detail;
pub mod queue;
pub mod search;

pub use album_detail::AlbumDetail;
pub use generate::Generate;
pub use home::Home;
pub use library::Library;
pub use lyrics::Lyrics;
pub use playlist_detail::PlaylistDetail;
pub use queue::Queue;
pub use search::Search;

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::{
    audio::state::PlaybackState,
    catalog::Song,
    ui::{message::ViewRoute, traits::View, util::get_active_track_icon},
    util::colors,
};

pub fn build(route: &ViewRoute) -> Box<dyn View> {
    match route {
        ViewRoute::Home => Box::new(Home::default()),
        ViewRoute::Search => Box::new(Search::default()),
        ViewRoute::Library => Box::new(Library::default()),
        ViewRoute::Playlist(id) => Box::new(PlaylistDetail::new(id.clone())),
        ViewRoute::Album(id) => Box::new(AlbumDetail::new(id.clone())),
    }
}

/// One row per song, the current one marked and tinted.
fn song_item(song: &Song, playback: &PlaybackState) -> ListItem<'static> {
    let is_current = playback.is_current(&song.id);
    let prefix = if is_current {
        format!("{} ", get_active_track_icon(playback.is_playing))
    } else {
        "  ".to_string()
    };

    let line = Line::from(vec![
        Span::raw(prefix),
        Span::raw(song.title.clone()),
        Span::styled(format!(" - {}", song.artist), Style::default().fg(colors::MUTED)),
        Span::styled(format!("  {}", song.duration), Style::default().fg(colors::NEUTRAL)),
    ]);

    let item = ListItem::new(line);
    if is_current {
        item.style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        item
    }
}

fn selectable_list(items: Vec<ListItem<'static>>) -> List<'static> {
    List::new(items)
        .highlight_style(Style::default().bg(colors::SURFACE).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ")
}

fn placeholder(text: impl Into<String>) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text.into(),
        Style::default().fg(colors::MUTED),
    )))
    .alignment(Alignment::Center)
}
