use std::sync::Arc;

use flume::Sender;
use tracing::info;

use crate::{
    audio::{queue::PlaybackContext, system::AudioSystem},
    catalog::{Catalog, Playlist, Song, generate::generate_playlist},
    event::events::Event,
    http::{PlaylistGenerator, error::GenerateError},
    ui::{message::ViewRoute, router::Router},
    util::task::TaskManager,
};

const GENERATE_TASK: &str = "generate_playlist";

#[derive(Debug, Clone, Default)]
pub struct GenerationStatus {
    pub is_loading: bool,
    pub error: Option<String>,
}

/// The session: everything views read, and the only path by which they
/// change playback or navigation.
pub struct AppContext {
    pub catalog: Catalog,
    pub audio: AudioSystem,
    pub history: Router,
    pub generation: GenerationStatus,
    pub event_tx: Sender<Event>,
    generator: Arc<dyn PlaylistGenerator>,
    tasks: TaskManager,
}

impl AppContext {
    pub fn new(
        catalog: Catalog,
        audio: AudioSystem,
        generator: Arc<dyn PlaylistGenerator>,
        event_tx: Sender<Event>,
    ) -> Self {
        Self {
            catalog,
            audio,
            history: Router::default(),
            generation: GenerationStatus::default(),
            event_tx,
            generator,
            tasks: TaskManager::new(),
        }
    }

    pub fn activate_song(&mut self, song: Song, context: Option<PlaybackContext>) {
        if self.audio.state().is_current(&song.id) {
            self.audio.toggle_play();
        } else {
            self.audio.play_song(&self.catalog, song, context);
        }
    }

    pub fn activate_context(&mut self, context: PlaybackContext) {
        let state = self.audio.state();
        if state.is_context(&context) && state.is_playing {
            self.audio.toggle_play();
            return;
        }
        if let Some(first) = self.catalog.songs_for(&context).first().cloned() {
            self.audio.play_song(&self.catalog, first, Some(context));
        }
    }

    /// Kicks off generation in the background. The result comes back as an
    /// [`Event`] and is applied by [`AppContext::complete_generation`].
    pub fn start_generation(&mut self, prompt: &str) {
        let prompt = prompt.trim().to_string();
        if prompt.is_empty() {
            self.generation.error = Some(GenerateError::EmptyPrompt.to_string());
            return;
        }

        self.generation = GenerationStatus {
            is_loading: true,
            error: None,
        };

        let generator = self.generator.clone();
        let fallback_urls = self.catalog.fallback_urls();
        let tx = self.event_tx.clone();
        self.tasks.spawn(GENERATE_TASK, async move {
            let event = match generate_playlist(generator.as_ref(), &prompt, &fallback_urls).await {
                Ok(playlist) => Event::PlaylistGenerated(playlist),
                Err(e) => Event::GenerationFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }

    pub fn cancel_generation(&mut self) {
        self.tasks.abort(GENERATE_TASK);
        self.generation = GenerationStatus::default();
    }

    pub fn complete_generation(&mut self, result: Result<Playlist, String>) {
        self.generation.is_loading = false;
        match result {
            Ok(playlist) => {
                info!(id = playlist.id.as_str(), name = playlist.name.as_str(), "playlist_generated");
                let route = ViewRoute::Playlist(playlist.id.clone());
                self.catalog.add_playlist(playlist);
                self.history.navigate_to(route);
                self.generation.error = None;
            }
            Err(message) => self.generation.error = Some(message),
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Transport(event) => self.audio.handle_transport_event(&self.catalog, event),
            Event::PlaylistGenerated(playlist) => self.complete_generation(Ok(playlist)),
            Event::GenerationFailed(message) => self.complete_generation(Err(message)),
        }
    }
}
