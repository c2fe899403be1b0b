use crate::{audio::queue::PlaybackContext, catalog::Song};

#[derive(Debug, Clone)]
pub enum AppMessage {
    // User Input
    Quit,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    SeekForward,
    SeekBackward,
    ToggleShuffle,
    ToggleRepeat,

    // Navigation
    NavigateTo(ViewRoute),
    GoBack,
    GoForward,
    ToggleQueue,
    ToggleLyrics,
    OpenGenerator,
    CloseOverlay,

    // Playback requests from views
    /// Toggles play/pause when the song is already current.
    ActivateSong(Song, Option<PlaybackContext>),
    /// Toggles play/pause when the context is already playing, otherwise
    /// starts its first song.
    ActivateContext(PlaybackContext),
    AddToQueue(Song),
    RemoveFromQueue(String),

    GeneratePlaylist(String),
}

/// A screen in the navigation history. Playlists and albums are referenced
/// by id and looked up on every render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewRoute {
    #[default]
    Home,
    Search,
    Library,
    Playlist(String),
    Album(String),
}
