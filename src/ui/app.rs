use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;

use crate::{
    audio::{config::AudioConfig, system::AudioSystem},
    catalog::Catalog,
    event::events::Event,
    http::ApiService,
    ui::{
        context::AppContext,
        layout::AppLayout,
        message::ViewRoute,
        state::AppState,
        traits::View,
        views::{self, Generate, Lyrics, Queue},
    },
};

use super::{
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Queue,
    Lyrics,
    Generator,
}

impl OverlayKind {
    fn build(self) -> Box<dyn View> {
        match self {
            OverlayKind::Queue => Box::new(Queue::default()),
            OverlayKind::Lyrics => Box::new(Lyrics::default()),
            OverlayKind::Generator => Box::new(Generate::default()),
        }
    }
}

pub struct Overlay {
    pub kind: OverlayKind,
    pub view: Box<dyn View>,
}

pub struct App {
    pub ctx: AppContext,
    pub state: AppState,
    pub event_rx: Receiver<Event>,
    pub view: Box<dyn View>,
    pub view_route: ViewRoute,
    pub overlay: Option<Overlay>,
}

impl App {
    pub async fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let catalog = Catalog::seeded()?;
        let api = Arc::new(ApiService::new()?);
        let audio = AudioSystem::new(event_tx.clone(), AudioConfig::default())?;

        Ok(Self::with_context(
            AppContext::new(catalog, audio, api, event_tx),
            event_rx,
        ))
    }

    pub fn with_context(ctx: AppContext, event_rx: Receiver<Event>) -> Self {
        let view_route = ctx.history.current().clone();
        Self {
            view: views::build(&view_route),
            view_route,
            ctx,
            state: AppState {
                has_focus: true,
                ..AppState::default()
            },
            event_rx,
            overlay: None,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.state.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.ctx.cancel_generation();
        tui.exit()?;
        Ok(())
    }

    /// Rebuilds the main view when navigation moved to another route.
    pub fn sync_view(&mut self) {
        let current = self.ctx.history.current();
        if *current != self.view_route {
            self.view_route = current.clone();
            self.view = views::build(&self.view_route);
        }
    }

    pub fn toggle_overlay(&mut self, kind: OverlayKind) {
        match &self.overlay {
            Some(overlay) if overlay.kind == kind => self.overlay = None,
            _ => {
                self.overlay = Some(Overlay {
                    kind,
                    view: kind.build(),
                })
            }
        }
    }

    pub fn close_overlay(&mut self) {
        if self
            .overlay
            .as_ref()
            .is_some_and(|o| o.kind == OverlayKind::Generator)
        {
            self.ctx.generation.error = None;
        }
        self.overlay = None;
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.state.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}
