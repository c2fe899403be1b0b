use crate::{
    audio::{
        queue::{PlaybackContext, SongQueue},
        recent::RecentlyPlayed,
    },
    catalog::Song,
};

pub const DEFAULT_VOLUME: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_song: Option<Song>,
    pub is_playing: bool,
    pub current_context: Option<PlaybackContext>,
    pub is_shuffle: bool,
    pub is_repeat: bool,
    /// 0.0 ..= 1.0
    pub volume: f32,
    pub song_queue: SongQueue,
    pub recently_played: RecentlyPlayed,
    /// Seconds, mirrored from the transport.
    pub current_time: f64,
    pub duration: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_song: None,
            is_playing: false,
            current_context: None,
            is_shuffle: false,
            is_repeat: false,
            volume: DEFAULT_VOLUME,
            song_queue: SongQueue::default(),
            recently_played: RecentlyPlayed::default(),
            current_time: 0.0,
            duration: 0.0,
        }
    }
}

impl PlaybackState {
    pub fn status(&self) -> PlaybackStatus {
        match (&self.current_song, self.is_playing) {
            (None, _) => PlaybackStatus::Stopped,
            (Some(_), true) => PlaybackStatus::Playing,
            (Some(_), false) => PlaybackStatus::Paused,
        }
    }

    pub fn is_current(&self, song_id: &str) -> bool {
        self.current_song.as_ref().is_some_and(|s| s.id == song_id)
    }

    pub fn is_context(&self, context: &PlaybackContext) -> bool {
        self.current_context.as_ref() == Some(context)
    }
}
