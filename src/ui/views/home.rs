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
    catalog::CatalogItem,
    ui::{
        context::AppContext,
        message::{AppMessage, ViewRoute},
        state::AppState,
        traits::View,
        util::{clamp_selection, move_selection},
        views::{placeholder, selectable_list},
    },
    util::colors,
};

/// Recently played first, then every playlist and album.
fn entries(ctx: &AppContext) -> (Vec<CatalogItem>, Vec<CatalogItem>) {
    let recent = ctx.audio.state().recently_played.items().to_vec();
    let made_for_you = ctx
        .catalog
        .playlists()
        .iter()
        .cloned()
        .map(CatalogItem::Playlist)
        .chain(ctx.catalog.albums().iter().cloned().map(CatalogItem::Album))
        .collect();
    (recent, made_for_you)
}

fn card(item: &CatalogItem) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<9}", item.kind()),
            Style::default().fg(colors::NEUTRAL),
        ),
        Span::styled(
            item.title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", item.subtitle()),
            Style::default().fg(colors::MUTED),
        ),
    ]))
}

fn open(item: &CatalogItem) -> AppMessage {
    match item {
        CatalogItem::Song(song) => AppMessage::ActivateSong(song.clone(), None),
        CatalogItem::Playlist(p) => AppMessage::NavigateTo(ViewRoute::Playlist(p.id.clone())),
        CatalogItem::Album(a) => AppMessage::NavigateTo(ViewRoute::Album(a.id.clone())),
    }
}

fn context_of(item: &CatalogItem) -> Option<PlaybackContext> {
    match item {
        CatalogItem::Song(_) => None,
        CatalogItem::Playlist(p) => Some(PlaybackContext::Playlist(p.id.clone())),
        CatalogItem::Album(a) => Some(PlaybackContext::Album(a.id.clone())),
    }
}

#[derive(Default)]
pub struct Home {
    /// Index across both sections.
    selected: ListState,
}

impl View for Home {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let (recent, made_for_you) = entries(ctx);
        clamp_selection(&mut self.selected, recent.len() + made_for_you.len());
        let selected = self.selected.selected();

        let recent_height = if recent.is_empty() {
            0
        } else {
            recent.len() as u16 + 2
        };
        let [greeting_area, recent_area, made_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(recent_height),
            Constraint::Min(0),
        ])
        .areas(area);

        f.render_widget(
            Paragraph::new(Span::styled(
                "Good to see you",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .block(Block::default().padding(Padding::horizontal(1))),
            greeting_area,
        );

        let section = |title: &'static str| {
            Block::default()
                .borders(Borders::TOP)
                .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
        };

        if !recent.is_empty() {
            let mut state = ListState::default().with_selected(selected.filter(|&i| i < recent.len()));
            let list = selectable_list(recent.iter().map(card).collect()).block(section("Recently Played"));
            f.render_stateful_widget(list, recent_area, &mut state);
        }

        if made_for_you.is_empty() {
            f.render_widget(placeholder("Nothing here yet."), made_area);
            return;
        }
        let mut state = ListState::default().with_selected(
            selected
                .and_then(|i| i.checked_sub(recent.len())),
        );
        let list = selectable_list(made_for_you.iter().map(card).collect()).block(section("Made For You"));
        f.render_stateful_widget(list, made_area, &mut state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &mut AppState,
        ctx: &AppContext,
    ) -> Option<AppMessage> {
        let (recent, made_for_you) = entries(ctx);
        let len = recent.len() + made_for_you.len();
        clamp_selection(&mut self.selected, len);
        if move_selection(&mut self.selected, len, key.code) {
            return None;
        }

        let item = self
            .selected
            .selected()
            .and_then(|i| recent.iter().chain(made_for_you.iter()).nth(i))?;

        match key.code {
            KeyCode::Enter => Some(open(item)),
            KeyCode::Char('P') => context_of(item).map(AppMessage::ActivateContext),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{album, playlist, song};

    #[test]
    fn enter_opens_containers_and_plays_songs() {
        let p = CatalogItem::Playlist(playlist("p", vec![]));
        assert!(matches!(open(&p), AppMessage::NavigateTo(ViewRoute::Playlist(id)) if id == "p"));

        let a = CatalogItem::Album(album("al", vec![]));
        assert!(matches!(open(&a), AppMessage::NavigateTo(ViewRoute::Album(id)) if id == "al"));

        let s = CatalogItem::Song(song("s"));
        assert!(matches!(open(&s), AppMessage::ActivateSong(song, None) if song.id == "s"));
        assert!(context_of(&s).is_none());
    }
}
