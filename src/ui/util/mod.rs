pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{
    crossterm::event::KeyCode,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::ListState,
};

pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if is_playing {
        const FRAME_STEP_MS: u128 = 100;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let step = (now / FRAME_STEP_MS) as usize % 6;

        match step {
            0 | 5 => "·",
            1 | 4 => "•",
            _ => "●",
        }
    } else {
        "•"
    }
}

/// j/k, arrows, g/G over a list of `len` rows. Returns whether the key was
/// a movement key.
pub fn move_selection(list_state: &mut ListState, len: usize, code: KeyCode) -> bool {
    let selected = list_state.selected();
    let next = match code {
        KeyCode::Down | KeyCode::Char('j') => selected.map_or(0, |i| (i + 1).min(len.saturating_sub(1))),
        KeyCode::Up | KeyCode::Char('k') => selected.map_or(0, |i| i.saturating_sub(1)),
        KeyCode::Char('g') | KeyCode::Home => 0,
        KeyCode::Char('G') | KeyCode::End => len.saturating_sub(1),
        _ => return false,
    };
    if len > 0 {
        list_state.select(Some(next));
    }
    true
}

/// Keeps the selection inside `0..len`, selecting the first row when
/// nothing is selected.
pub fn clamp_selection(list_state: &mut ListState, len: usize) {
    match (list_state.selected(), len) {
        (_, 0) => list_state.select(None),
        (None, _) => list_state.select(Some(0)),
        (Some(i), _) if i >= len => list_state.select(Some(len - 1)),
        _ => {}
    }
}

pub fn centered_rect(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = ListState::default();
        assert!(move_selection(&mut state, 3, KeyCode::Char('j')));
        assert_eq!(state.selected(), Some(0));
        move_selection(&mut state, 3, KeyCode::Char('G'));
        move_selection(&mut state, 3, KeyCode::Down);
        assert_eq!(state.selected(), Some(2));
        move_selection(&mut state, 3, KeyCode::Char('g'));
        move_selection(&mut state, 3, KeyCode::Up);
        assert_eq!(state.selected(), Some(0));
        assert!(!move_selection(&mut state, 3, KeyCode::Enter));
    }

    #[test]
    fn clamp_follows_shrinking_lists() {
        let mut state = ListState::default();
        state.select(Some(5));
        clamp_selection(&mut state, 2);
        assert_eq!(state.selected(), Some(1));
        clamp_selection(&mut state, 0);
        assert_eq!(state.selected(), None);
        clamp_selection(&mut state, 4);
        assert_eq!(state.selected(), Some(0));
    }
}
