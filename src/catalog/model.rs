use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Display duration, `M:SS`.
    pub duration: String,
    pub album_cover: String,
    pub url: String,
    #[serde(default)]
    pub lyrics: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub songs: Vec<Song>,
    pub owner: String,
    pub cover: String,
    pub description: Option<String>,
    pub likes: Option<u64>,
    pub total_duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub year: u16,
    pub cover: String,
    pub songs: Vec<Song>,
    /// `#rrggbb` accent for theming the album and its now-playing bar.
    pub dominant_color: Option<String>,
}

/// Anything that can show up as a card on the home screen or in the
/// recently played list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogItem {
    Song(Song),
    Playlist(Playlist),
    Album(Album),
}

impl CatalogItem {
    pub fn id(&self) -> &str {
        match self {
            CatalogItem::Song(song) => &song.id,
            CatalogItem::Playlist(playlist) => &playlist.id,
            CatalogItem::Album(album) => &album.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CatalogItem::Song(song) => &song.title,
            CatalogItem::Playlist(playlist) => &playlist.name,
            CatalogItem::Album(album) => &album.name,
        }
    }

    pub fn subtitle(&self) -> String {
        match self {
            CatalogItem::Song(song) => song.artist.clone(),
            CatalogItem::Playlist(playlist) => format!("By {}", playlist.owner),
            CatalogItem::Album(album) => album.artist.clone(),
        }
    }

    pub fn cover(&self) -> &str {
        match self {
            CatalogItem::Song(song) => &song.album_cover,
            CatalogItem::Playlist(playlist) => &playlist.cover,
            CatalogItem::Album(album) => &album.cover,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CatalogItem::Song(_) => "Song",
            CatalogItem::Playlist(_) => "Playlist",
            CatalogItem::Album(_) => "Album",
        }
    }
}
