use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::{App, OverlayKind},
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await
            && Self::handle_event(app, evt, tui)?
        {
            should_render = true;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::Quit => app.state.should_quit = true,
            TerminalEvent::FocusGained => {
                app.state.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.state.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Paste(text) => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    Self::handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
                }
            }
            TerminalEvent::Tick => {
                return Ok(app.state.has_focus);
            }
            _ => {}
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        let generated = matches!(evt, Event::PlaylistGenerated(_));
        app.ctx.handle_event(evt);
        if generated
            && app
                .overlay
                .as_ref()
                .is_some_and(|o| o.kind == OverlayKind::Generator)
        {
            app.overlay = None;
        }
        app.sync_view();
    }

    /// Ctrl+C always quits. An overlay sees keys before the page, and a
    /// view that captures input sees nothing fall through to the global
    /// bindings.
    pub fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            app.state.should_quit = true;
            return;
        }

        let (message, captured) = match app.overlay.as_mut() {
            Some(overlay) => (
                overlay.view.handle_input(key, &mut app.state, &app.ctx),
                overlay.view.captures_input(),
            ),
            None => {
                let captured = app.view.captures_input();
                (app.view.handle_input(key, &mut app.state, &app.ctx), captured)
            }
        };

        let message = match message {
            Some(message) => Some(message),
            None if captured => None,
            None => InputHandler::handle_key(key),
        };

        if let Some(message) = message {
            Self::dispatch(app, message);
        }
    }

    pub fn dispatch(app: &mut App, message: AppMessage) {
        debug!(?message, "dispatch");
        let ctx = &mut app.ctx;
        match message {
            AppMessage::Quit => app.state.should_quit = true,
            AppMessage::TogglePlayPause => ctx.audio.toggle_play(),
            AppMessage::NextTrack => ctx.audio.play_next(&ctx.catalog),
            AppMessage::PreviousTrack => ctx.audio.play_previous(&ctx.catalog),
            AppMessage::VolumeUp => ctx.audio.volume_up(),
            AppMessage::VolumeDown => ctx.audio.volume_down(),
            AppMessage::SeekForward => ctx.audio.seek_forwards(),
            AppMessage::SeekBackward => ctx.audio.seek_backwards(),
            AppMessage::ToggleShuffle => ctx.audio.toggle_shuffle(),
            AppMessage::ToggleRepeat => ctx.audio.toggle_repeat(),

            AppMessage::NavigateTo(route) => {
                ctx.history.navigate_to(route);
                app.overlay = None;
            }
            AppMessage::GoBack => {
                if app.overlay.is_some() {
                    app.close_overlay();
                } else {
                    ctx.history.go_back();
                }
            }
            AppMessage::GoForward => ctx.history.go_forward(),
            AppMessage::ToggleQueue => app.toggle_overlay(OverlayKind::Queue),
            AppMessage::ToggleLyrics => app.toggle_overlay(OverlayKind::Lyrics),
            AppMessage::OpenGenerator => {
                if !app
                    .overlay
                    .as_ref()
                    .is_some_and(|o| o.kind == OverlayKind::Generator)
                {
                    app.toggle_overlay(OverlayKind::Generator);
                }
            }
            AppMessage::CloseOverlay => app.close_overlay(),

            AppMessage::ActivateSong(song, context) => ctx.activate_song(song, context),
            AppMessage::ActivateContext(context) => ctx.activate_context(context),
            AppMessage::AddToQueue(song) => ctx.audio.add_to_queue(song),
            AppMessage::RemoveFromQueue(song_id) => ctx.audio.remove_from_queue(&song_id),

            AppMessage::GeneratePlaylist(prompt) => ctx.start_generation(&prompt),
        }
        app.sync_view();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        audio::{config::AudioConfig, controller::PlaybackController, system::AudioSystem},
        catalog::Catalog,
        test_support::{FakeGenerator, FakeTransport, album, playlist, song},
        ui::{context::AppContext, message::ViewRoute},
    };

    fn app(generator: FakeGenerator) -> App {
        let songs = vec![song("a"), song("b"), song("c")];
        let catalog = Catalog::new(
            vec![playlist("p", songs.clone())],
            vec![album("al", songs[1..].to_vec())],
            songs,
        )
        .unwrap();
        let (transport, _) = FakeTransport::new();
        let audio = AudioSystem::with_parts(
            PlaybackController::with_rng(StdRng::seed_from_u64(9)),
            Box::new(transport),
            AudioConfig::default(),
        );
        let (tx, rx) = flume::unbounded();
        App::with_context(AppContext::new(catalog, audio, Arc::new(generator), tx), rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        EventHandler::handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn ctrl_c_quits_even_while_typing() {
        let mut app = app(FakeGenerator::failing());
        press(&mut app, KeyCode::Char('c'));
        assert!(app.overlay.is_some());

        EventHandler::handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.state.should_quit);
    }

    #[test]
    fn navigation_rebuilds_the_view() {
        let mut app = app(FakeGenerator::failing());
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.view_route, ViewRoute::Library);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view_route, ViewRoute::Playlist("p".into()));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view_route, ViewRoute::Library);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.view_route, ViewRoute::Playlist("p".into()));
    }

    #[test]
    fn search_captures_global_keys() {
        let mut app = app(FakeGenerator::failing());
        press(&mut app, KeyCode::Char('2'));
        type_text(&mut app, "song b");
        assert_eq!(app.state.search_query, "song b");
        assert!(app.overlay.is_none());

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(app.ctx.audio.state().is_current("b"));
        assert!(app.ctx.audio.state().is_playing);

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.ctx.audio.state().is_playing);
    }

    #[test]
    fn playlist_keys_play_and_queue() {
        let mut app = app(FakeGenerator::failing());
        EventHandler::dispatch(&mut app, AppMessage::NavigateTo(ViewRoute::Playlist("p".into())));

        press(&mut app, KeyCode::Char('P'));
        assert!(app.ctx.audio.state().is_current("a"));

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ctx.audio.state().song_queue.len(), 1);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.overlay.as_ref().map(|o| o.kind), Some(OverlayKind::Queue));
        press(&mut app, KeyCode::Char('d'));
        assert!(app.ctx.audio.state().song_queue.is_empty());
        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
    }

    #[tokio::test]
    async fn generated_playlist_closes_the_generator() {
        let mut app = app(FakeGenerator::succeeding("Mix"));
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "rainy day");
        press(&mut app, KeyCode::Enter);
        assert!(app.ctx.generation.is_loading);

        let event = app.event_rx.recv_async().await.unwrap();
        EventHandler::handle_action(&mut app, event);

        assert!(app.overlay.is_none());
        let created = app.ctx.catalog.playlists()[0].id.clone();
        assert_eq!(app.view_route, ViewRoute::Playlist(created));
    }
}
