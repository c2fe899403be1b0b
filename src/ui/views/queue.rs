use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, ListItem, ListState},
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

/// Overlay listing the current song and the user queue.
#[derive(Default)]
pub struct Queue {
    list_state: ListState,
}

impl View for Queue {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        f.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::PRIMARY))
            .title(" Queue ")
            .title_bottom(" d remove • Esc close ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let playback = ctx.audio.state();
        let [now_area, next_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

        let heading = |text: &'static str| {
            Block::default()
                .borders(Borders::TOP)
                .title(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
        };

        match &playback.current_song {
            Some(song) => f.render_widget(
                selectable_list(vec![song_item(song, playback)]).block(heading("Now Playing")),
                now_area,
            ),
            None => f.render_widget(
                placeholder("Nothing is playing.").block(heading("Now Playing")),
                now_area,
            ),
        }

        let queue = &playback.song_queue;
        if queue.is_empty() {
            f.render_widget(
                placeholder("The queue is empty.").block(heading("Next Up")),
                next_area,
            );
            return;
        }
        clamp_selection(&mut self.list_state, queue.len());
        let items: Vec<ListItem> = queue.iter().map(|s| song_item(s, playback)).collect();
        f.render_stateful_widget(
            selectable_list(items).block(heading("Next Up")),
            next_area,
            &mut self.list_state,
        );
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &mut AppState,
        ctx: &AppContext,
    ) -> Option<AppMessage> {
        let queue = &ctx.audio.state().song_queue;
        clamp_selection(&mut self.list_state, queue.len());
        if move_selection(&mut self.list_state, queue.len(), key.code) {
            return None;
        }
        let selected = self.list_state.selected().and_then(|i| queue.iter().nth(i));

        match key.code {
            KeyCode::Char('d') | KeyCode::Delete => {
                selected.map(|song| AppMessage::RemoveFromQueue(song.id.clone()))
            }
            KeyCode::Enter => selected.map(|song| AppMessage::ActivateSong(song.clone(), None)),
            KeyCode::Esc | KeyCode::Char('q') => Some(AppMessage::CloseOverlay),
            _ => None,
        }
    }
}
