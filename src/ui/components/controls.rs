use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    symbols::{self, border},
    text::{Line, ToSpan},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::util::colors;

pub struct PlayerControlsWidget {
    is_repeat: bool,
    is_shuffle: bool,
    volume: f32,
}

impl PlayerControlsWidget {
    pub fn new(is_repeat: bool, is_shuffle: bool, volume: f32) -> Self {
        Self {
            is_repeat,
            is_shuffle,
            volume,
        }
    }
}

impl Widget for PlayerControlsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let flag = |on: bool, label: &'static str| {
            if on {
                label.fg(colors::PRIMARY).bold()
            } else {
                label.fg(colors::NEUTRAL)
            }
        };

        let controls_text = Line::from(vec![
            flag(self.is_shuffle, "shuf"),
            "  ".into(),
            flag(self.is_repeat, "rep"),
        ]);

        let [controls_area, volume_area] =
            Layout::horizontal([Constraint::Length(13), Constraint::Length(12)]).areas(area);

        let controls_block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_set(border::Set {
                top_left: symbols::line::ROUNDED.horizontal_down,
                top_right: symbols::line::ROUNDED.horizontal_down,
                bottom_left: symbols::line::ROUNDED.horizontal_up,
                bottom_right: symbols::line::ROUNDED.horizontal_up,
                ..symbols::border::ROUNDED
            });
        Paragraph::new(controls_text)
            .block(controls_block)
            .centered()
            .render(controls_area, buf);

        let volume = self.volume.clamp(0.0, 1.0);
        let label = format!("{}%", (volume * 100.0).round() as u8);

        let volume_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::Set {
                top_left: symbols::line::ROUNDED.horizontal_down,
                bottom_left: symbols::line::ROUNDED.horizontal_up,
                ..symbols::border::ROUNDED
            });

        Gauge::default()
            .block(volume_block)
            .gauge_style(Style::new().fg(colors::PRIMARY).bg(colors::NEUTRAL))
            .ratio(volume as f64)
            .label(label.to_span())
            .render(volume_area, buf);
    }
}
