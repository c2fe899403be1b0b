use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{
        app::{App, OverlayKind},
        components::{
            player::{PlayerWidget, now_playing_backdrop},
            sidebar::Sidebar,
        },
        util::centered_rect,
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let [main_area, player_area, hint_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(25), Constraint::Min(1)]).areas(main_area);

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("riffle")
            .title_alignment(Alignment::Center);
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED);

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        let app = self.app;
        f.render_widget(
            Sidebar::new(app.ctx.catalog.playlists(), app.ctx.history.current()),
            sidebar_inner,
        );

        app.view.render(f, content_inner, &app.state, &app.ctx);

        let backdrop = now_playing_backdrop(&app.ctx.catalog, app.ctx.audio.state());
        f.render_widget(
            PlayerWidget::new(app.ctx.audio.state()).with_backdrop(backdrop),
            player_area,
        );
        f.render_widget(hints(app), hint_area);

        if let Some(overlay) = app.overlay.as_mut() {
            let (w, h) = match overlay.kind {
                OverlayKind::Generator => (70, 70),
                OverlayKind::Queue | OverlayKind::Lyrics => (60, 80),
            };
            let popup = centered_rect(area, w, h);
            overlay.view.render(f, popup, &app.state, &app.ctx);
        }
    }
}

fn hints(app: &App) -> Paragraph<'static> {
    if let Some(error) = &app.ctx.generation.error
        && app.overlay.is_none()
    {
        return Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(colors::ERROR),
        ));
    }

    let muted = Style::default().fg(colors::NEUTRAL);
    let mut spans = vec![Span::styled(
        " space play • n/p next/prev • H/L seek • +/- volume • s shuffle • r repeat • q queue • y lyrics • c create",
        muted,
    )];
    if app.ctx.history.can_go_back() {
        spans.push(Span::styled(" • esc back", muted));
    }
    if app.ctx.generation.is_loading {
        spans.push(Span::styled(" • generating...", Style::default().fg(colors::PRIMARY)));
    }
    Paragraph::new(Line::from(spans))
}
