use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols::{self, border},
    text::ToSpan,
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::util::{colors, format::format_time};

pub struct ProgressWidget<'a> {
    current_time: f64,
    duration: f64,
    title: &'a str,
    artist: Option<&'a str>,
    is_playing: bool,
    backdrop: Color,
}

impl<'a> ProgressWidget<'a> {
    pub fn new(
        current_time: f64,
        duration: f64,
        title: &'a str,
        artist: Option<&'a str>,
        is_playing: bool,
    ) -> Self {
        Self {
            current_time,
            duration,
            title,
            artist,
            is_playing,
            backdrop: colors::SURFACE,
        }
    }

    pub fn with_backdrop(mut self, backdrop: Color) -> Self {
        self.backdrop = backdrop;
        self
    }
}

impl<'a> Widget for ProgressWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ratio = if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut info = format!(
            "{}  {}",
            if self.is_playing { "▶" } else { "⏸" },
            self.title
        );
        if let Some(artist) = self.artist {
            info = format!("{info} by {artist}");
        }

        let time = format!(
            "{} / {}",
            format_time(self.current_time),
            format_time(self.duration)
        );

        Gauge::default()
            .block(
                Block::default()
                    .title_top(info)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_set(border::Set {
                        top_right: symbols::line::ROUNDED.horizontal_down,
                        bottom_right: symbols::line::ROUNDED.horizontal_up,
                        ..symbols::border::ROUNDED
                    }),
            )
            .gauge_style(Style::new().fg(colors::PRIMARY).bg(self.backdrop))
            .ratio(ratio)
            .label(time.to_span().fg(colors::TEXT))
            .use_unicode(true)
            .render(area, buf);
    }
}
