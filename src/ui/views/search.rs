use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, ListItem, ListState, Paragraph},
};

use crate::{
    ui::{
        context::AppContext,
        message::AppMessage,
        state::AppState,
        traits::View,
        util::{clamp_selection, move_selection},
        views::{placeholder, selectable_list, song_item},
    },
    util::colors,
};

pub struct Search {
    is_editing: bool,
    list_state: ListState,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            is_editing: true,
            list_state: ListState::default(),
        }
    }
}

impl View for Search {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let [input_area, results_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let border_style = if self.is_editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let cursor = if self.is_editing { "▏" } else { "" };
        let input = Paragraph::new(Line::from(vec![
            Span::raw(state.search_query.clone()),
            Span::styled(cursor, Style::default().fg(colors::PRIMARY)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(" What do you want to listen to? "),
        );
        f.render_widget(input, input_area);

        if state.search_query.trim().is_empty() {
            f.render_widget(placeholder("Search by title, artist or album."), results_area);
            return;
        }

        let results = ctx.catalog.search(&state.search_query);
        if results.is_empty() {
            f.render_widget(
                placeholder(format!("No results found for \"{}\"", state.search_query.trim())),
                results_area,
            );
            return;
        }

        clamp_selection(&mut self.list_state, results.len());
        if self.is_editing {
            self.list_state.select(None);
        }
        let playback = ctx.audio.state();
        let items: Vec<ListItem> = results.iter().map(|s| song_item(s, playback)).collect();
        let list = selectable_list(items).block(
            Block::default().borders(Borders::TOP).title(Span::styled(
                format!("Songs ({})", results.len()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        );
        f.render_stateful_widget(list, results_area, &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &mut AppState,
        ctx: &AppContext,
    ) -> Option<AppMessage> {
        if self.is_editing {
            match key.code {
                KeyCode::Char(c) => state.search_query.push(c),
                KeyCode::Backspace => {
                    state.search_query.pop();
                }
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
                    self.is_editing = false;
                    self.list_state.select(Some(0));
                }
                _ => {}
            }
            return None;
        }

        let results = ctx.catalog.search(&state.search_query);
        clamp_selection(&mut self.list_state, results.len());
        if move_selection(&mut self.list_state, results.len(), key.code) {
            return None;
        }
        let selected = self.list_state.selected().and_then(|i| results.get(i));

        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.is_editing = true;
                None
            }
            KeyCode::Enter => selected.map(|song| AppMessage::ActivateSong((*song).clone(), None)),
            KeyCode::Char('a') => selected.map(|song| AppMessage::AddToQueue((*song).clone())),
            _ => None,
        }
    }

    fn captures_input(&self) -> bool {
        self.is_editing
    }
}
