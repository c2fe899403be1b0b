use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    ui::{
        components::spinner::Spinner, context::AppContext, message::AppMessage, state::AppState,
        traits::View,
    },
    util::colors,
};

pub const EXAMPLE_PROMPTS: [&str; 6] = [
    "Upbeat indie pop for a morning boost",
    "Late night coding session with lofi beats",
    "90s rock anthems for a road trip",
    "Acoustic covers for a rainy afternoon",
    "High-energy electronic for a workout",
    "Classic jazz for a dinner party",
];

pub const MOODS: [&str; 12] = [
    "Happy",
    "Sad",
    "Energetic",
    "Relaxing",
    "Pop",
    "Rock",
    "Hip-Hop",
    "Electronic",
    "Indie",
    "Classical",
    "Jazz",
    "Folk",
];

/// Adds a mood chip to the prompt, comma separated.
pub fn append_mood(prompt: &str, mood: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        mood.to_string()
    } else if trimmed.ends_with(',') {
        format!("{trimmed} {mood}")
    } else {
        format!("{trimmed}, {mood}")
    }
}

/// Chips are the example prompts followed by the moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chip {
    Example(usize),
    Mood(usize),
}

const CHIP_COUNT: usize = EXAMPLE_PROMPTS.len() + MOODS.len();

fn chip(index: usize) -> Chip {
    if index < EXAMPLE_PROMPTS.len() {
        Chip::Example(index)
    } else {
        Chip::Mood(index - EXAMPLE_PROMPTS.len())
    }
}

#[derive(Default)]
pub struct Generate {
    prompt: String,
    highlighted: usize,
}

impl Generate {
    fn apply_chip(&mut self) {
        self.prompt = match chip(self.highlighted) {
            Chip::Example(i) => EXAMPLE_PROMPTS[i].to_string(),
            Chip::Mood(i) => append_mood(&self.prompt, MOODS[i]),
        };
    }

    fn chip_spans(&self, range: std::ops::Range<usize>, labels: &[&'static str]) -> Line<'static> {
        let spans: Vec<Span> = range
            .zip(labels)
            .flat_map(|(index, label)| {
                let style = if index == self.highlighted {
                    Style::default()
                        .fg(colors::BACKGROUND)
                        .bg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::MUTED)
                };
                [Span::styled(format!(" {label} "), style), Span::raw(" ")]
            })
            .collect();
        Line::from(spans)
    }
}

impl View for Generate {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        f.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::PRIMARY))
            .title(" Create a playlist with AI ")
            .title_bottom(" Enter generate • ←/→ pick • Tab apply • Esc close ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [input_area, status_area, examples_area, moods_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Min(3),
        ])
        .areas(inner);

        let input = Paragraph::new(Line::from(vec![
            Span::raw(self.prompt.clone()),
            Span::styled("▏", Style::default().fg(colors::PRIMARY)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Describe the vibe "),
        );
        f.render_widget(input, input_area);

        if ctx.generation.is_loading {
            f.render_widget(
                Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Generating your playlist..."),
                status_area,
            );
        } else if let Some(error) = &ctx.generation.error {
            f.render_widget(
                Paragraph::new(Span::styled(error.clone(), Style::default().fg(colors::ERROR)))
                    .wrap(Wrap { trim: true }),
                status_area,
            );
        }

        let examples = Paragraph::new(self.chip_spans(0..EXAMPLE_PROMPTS.len(), &EXAMPLE_PROMPTS))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Try an example"));
        f.render_widget(examples, examples_area);

        let moods = Paragraph::new(self.chip_spans(EXAMPLE_PROMPTS.len()..CHIP_COUNT, &MOODS))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Add a mood or genre"));
        f.render_widget(moods, moods_area);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &mut AppState,
        ctx: &AppContext,
    ) -> Option<AppMessage> {
        match key.code {
            KeyCode::Esc => Some(AppMessage::CloseOverlay),
            KeyCode::Enter if !ctx.generation.is_loading => {
                Some(AppMessage::GeneratePlaylist(self.prompt.clone()))
            }
            KeyCode::Left => {
                self.highlighted = (self.highlighted + CHIP_COUNT - 1) % CHIP_COUNT;
                None
            }
            KeyCode::Right => {
                self.highlighted = (self.highlighted + 1) % CHIP_COUNT;
                None
            }
            KeyCode::Tab => {
                self.apply_chip();
                None
            }
            KeyCode::Backspace => {
                self.prompt.pop();
                None
            }
            KeyCode::Char(c) => {
                self.prompt.push(c);
                None
            }
            _ => None,
        }
    }

    fn captures_input(&self) -> bool {
        true
    }
}
