use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

use crate::{
    catalog::Playlist,
    ui::message::ViewRoute,
    util::{colors, format::truncate},
};

const NAV_ITEMS: [(&str, &str, ViewRoute); 3] = [
    ("1", "Home", ViewRoute::Home),
    ("2", "Search", ViewRoute::Search),
    ("3", "Your Library", ViewRoute::Library),
];

pub struct Sidebar<'a> {
    playlists: &'a [Playlist],
    current: &'a ViewRoute,
}

impl<'a> Sidebar<'a> {
    pub fn new(playlists: &'a [Playlist], current: &'a ViewRoute) -> Self {
        Self { playlists, current }
    }
}

fn item_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::MUTED)
    }
}

impl<'a> Widget for Sidebar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [nav_area, playlists_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let nav: Vec<ListItem> = NAV_ITEMS
            .iter()
            .map(|(key, label, route)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {key} "), Style::default().fg(colors::NEUTRAL)),
                    Span::raw(*label),
                ]))
                .style(item_style(route == self.current))
            })
            .collect();
        List::new(nav)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(nav_area, buf);

        let width = playlists_area.width.saturating_sub(2) as usize;
        let playlists: Vec<ListItem> = self
            .playlists
            .iter()
            .map(|p| {
                let active = matches!(self.current, ViewRoute::Playlist(id) if *id == p.id);
                ListItem::new(vec![
                    Line::from(format!(" {}", truncate(&p.name, width))),
                    Line::from(Span::styled(
                        format!(" {}", truncate(&p.owner, width)),
                        Style::default().fg(colors::NEUTRAL),
                    )),
                ])
                .style(item_style(active))
            })
            .collect();
        List::new(playlists).render(playlists_area, buf);
    }
}
