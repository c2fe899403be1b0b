use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Color,
    widgets::Widget,
};

use crate::{
    audio::state::PlaybackState,
    catalog::Catalog,
    ui::components::{controls::PlayerControlsWidget, progress::ProgressWidget},
    util::colors,
};

/// Backdrop tint for the bar: the dominant color of the current song's
/// album, when the catalog has one.
pub fn now_playing_backdrop(catalog: &Catalog, state: &PlaybackState) -> Color {
    let hint = state
        .current_song
        .as_ref()
        .and_then(|song| catalog.album_named(&song.album))
        .and_then(|album| album.dominant_color.as_deref());
    colors::hint_or(hint, colors::SURFACE)
}

/// The bottom bar: what is playing, how far along, and the mode flags.
pub struct PlayerWidget<'a> {
    state: &'a PlaybackState,
    backdrop: Color,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(state: &'a PlaybackState) -> Self {
        Self {
            state,
            backdrop: colors::SURFACE,
        }
    }

    pub fn with_backdrop(mut self, backdrop: Color) -> Self {
        self.backdrop = backdrop;
        self
    }
}

impl<'a> Widget for PlayerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [progress_area, controls_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(25)]).areas(area);

        let (title, artist) = match &self.state.current_song {
            Some(song) => (song.title.as_str(), Some(song.artist.as_str())),
            None => ("Nothing playing", None),
        };

        ProgressWidget::new(
            self.state.current_time,
            self.state.duration,
            title,
            artist,
            self.state.is_playing,
        )
        .with_backdrop(self.backdrop)
        .render(progress_area, buf);

        PlayerControlsWidget::new(self.state.is_repeat, self.state.is_shuffle, self.state.volume)
            .render(controls_area, buf);
    }
}
