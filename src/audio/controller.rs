use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::{
    audio::{queue::PlaybackContext, state::PlaybackState},
    catalog::{Catalog, CatalogItem, Song},
};

/// Owns the playback state and is the only thing allowed to change it.
///
/// The catalog is passed into every operation that needs to resolve a
/// context, so a context always refers to whatever the catalog holds now.
pub struct PlaybackController {
    state: PlaybackState,
    rng: StdRng,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl PlaybackController {
    pub fn new(volume: f32) -> Self {
        let mut controller = Self::default();
        controller.state.volume = volume;
        controller
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            state: PlaybackState::default(),
            rng,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Jump to a song. A different song discards the manual queue.
    ///
    /// Without an explicit context the catalog is searched for a playlist,
    /// then an album, holding the song; if neither exists the current
    /// context is kept. The recency list gets the context's container when
    /// one was given, the bare song otherwise.
    pub fn play_song(&mut self, catalog: &Catalog, song: Song, context: Option<PlaybackContext>) {
        let recent = match &context {
            Some(context) => catalog.container(context),
            None => Some(CatalogItem::Song(song.clone())),
        };
        let context = context.or_else(|| catalog.find_context_for(&song.id));

        self.start(song, context);

        if let Some(item) = recent {
            self.state.recently_played.record(item);
        }
    }

    pub fn toggle_play(&mut self) {
        if self.state.current_song.is_some() {
            self.state.is_playing = !self.state.is_playing;
            debug!(is_playing = self.state.is_playing, "toggle_play");
        }
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.is_shuffle = !self.state.is_shuffle;
    }

    pub fn toggle_repeat(&mut self) {
        self.state.is_repeat = !self.state.is_repeat;
    }

    /// Stored as given; clamping happens when it is applied to the transport.
    pub fn set_volume(&mut self, volume: f32) {
        self.state.volume = volume;
    }

    pub fn add_to_queue(&mut self, song: Song) {
        debug!(id = song.id.as_str(), "queue_push");
        self.state.song_queue.push(song);
    }

    /// Removes every queued entry with this id.
    pub fn remove_from_queue(&mut self, song_id: &str) {
        let removed = self.state.song_queue.remove_all(song_id);
        debug!(id = song_id, removed, "queue_remove");
    }

    pub fn play_next(&mut self, catalog: &Catalog) {
        if let Some(next) = self.state.song_queue.pop_front() {
            // Keeps the context without searching for one. Like any jump to
            // a different song, this drops what is left of the queue.
            let recent = CatalogItem::Song(next.clone());
            self.start(next, None);
            self.state.recently_played.record(recent);
            return;
        }

        let Some((songs, index, context)) = self.position_in_context(catalog) else {
            return;
        };

        if self.state.is_shuffle {
            let pick = self.shuffle_pick(songs.len(), index);
            self.play_song(catalog, songs[pick].clone(), Some(context));
            return;
        }

        let next = index.map_or(0, |i| i + 1);
        if let Some(song) = songs.get(next) {
            self.play_song(catalog, song.clone(), Some(context));
        } else if self.state.is_repeat {
            self.play_song(catalog, songs[0].clone(), Some(context));
        } else {
            info!(context = context.id(), "context_finished");
            self.state.is_playing = false;
        }
    }

    pub fn play_previous(&mut self, catalog: &Catalog) {
        let Some((songs, index, context)) = self.position_in_context(catalog) else {
            return;
        };

        if self.state.is_shuffle {
            self.play_next(catalog);
            return;
        }

        match index {
            Some(i) if i > 0 => self.play_song(catalog, songs[i - 1].clone(), Some(context)),
            _ if self.state.is_repeat => {
                // No explicit context here: the catalog search runs again.
                let last = songs[songs.len() - 1].clone();
                self.play_song(catalog, last, None);
            }
            _ => {}
        }
    }

    pub fn on_time_update(&mut self, seconds: f64) {
        self.state.current_time = seconds;
    }

    pub fn on_duration_known(&mut self, seconds: f64) {
        self.state.duration = seconds;
    }

    /// A different song discards the manual queue and the progress mirrors.
    fn start(&mut self, song: Song, context: Option<PlaybackContext>) {
        if !self.state.is_current(&song.id) {
            self.state.song_queue.clear();
            self.state.current_time = 0.0;
            self.state.duration = 0.0;
        }

        info!(
            id = song.id.as_str(),
            title = song.title.as_str(),
            context = ?context,
            "play_song"
        );

        self.state.current_song = Some(song);
        self.state.is_playing = true;
        if let Some(context) = context {
            self.state.current_context = Some(context);
        }
    }

    /// The governing song list, the current song's index in it (if it is
    /// there at all) and the context itself. `None` means nothing to do.
    fn position_in_context<'c>(
        &self,
        catalog: &'c Catalog,
    ) -> Option<(&'c [Song], Option<usize>, PlaybackContext)> {
        let current = self.state.current_song.as_ref()?;
        let context = self.state.current_context.clone()?;
        let songs = catalog.songs_for(&context);
        if songs.is_empty() {
            return None;
        }
        let index = songs.iter().position(|s| s.id == current.id);
        Some((songs, index, context))
    }

    /// Uniform pick, re-rolled until it differs from `current` whenever the
    /// list has more than one entry.
    fn shuffle_pick(&mut self, len: usize, current: Option<usize>) -> usize {
        loop {
            let pick = self.rng.random_range(0..len);
            if len <= 1 || Some(pick) != current {
                return pick;
            }
        }
    }
}
