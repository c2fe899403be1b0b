use std::collections::HashSet;

use tracing::info;

use crate::{
    audio::queue::PlaybackContext,
    catalog::{
        error::CatalogError,
        model::{Album, CatalogItem, Playlist, Song},
    },
};

/// In-memory collections of everything browsable. Only playlist creation
/// mutates it after startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    playlists: Vec<Playlist>,
    albums: Vec<Album>,
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new(
        playlists: Vec<Playlist>,
        albums: Vec<Album>,
        songs: Vec<Song>,
    ) -> Result<Self, CatalogError> {
        ensure_unique("playlist", playlists.iter().map(|p| p.id.as_str()))?;
        ensure_unique("album", albums.iter().map(|a| a.id.as_str()))?;
        ensure_unique("song", songs.iter().map(|s| s.id.as_str()))?;

        Ok(Self {
            playlists,
            albums,
            songs,
        })
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    pub fn album(&self, id: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == id)
    }

    /// Songs only carry their album's display name.
    pub fn album_named(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.name == name)
    }

    /// The ordered song list a context refers to. Empty when the context
    /// points at something that no longer exists.
    pub fn songs_for(&self, context: &PlaybackContext) -> &[Song] {
        match context {
            PlaybackContext::Playlist(id) => self.playlist(id).map(|p| p.songs.as_slice()),
            PlaybackContext::Album(id) => self.album(id).map(|a| a.songs.as_slice()),
        }
        .unwrap_or(&[])
    }

    pub fn container(&self, context: &PlaybackContext) -> Option<CatalogItem> {
        match context {
            PlaybackContext::Playlist(id) => self.playlist(id).cloned().map(CatalogItem::Playlist),
            PlaybackContext::Album(id) => self.album(id).cloned().map(CatalogItem::Album),
        }
    }

    /// First playlist containing the song, then first album. Playlists win.
    pub fn find_context_for(&self, song_id: &str) -> Option<PlaybackContext> {
        if let Some(playlist) = self
            .playlists
            .iter()
            .find(|p| p.songs.iter().any(|s| s.id == song_id))
        {
            return Some(PlaybackContext::Playlist(playlist.id.clone()));
        }

        self.albums
            .iter()
            .find(|a| a.songs.iter().any(|s| s.id == song_id))
            .map(|a| PlaybackContext::Album(a.id.clone()))
    }

    /// Case-insensitive substring match on title, artist or album.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Song> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.songs
            .iter()
            .filter(|song| {
                song.title.to_lowercase().contains(&query)
                    || song.artist.to_lowercase().contains(&query)
                    || song.album.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Playable URLs generated songs borrow audio from.
    pub fn fallback_urls(&self) -> Vec<String> {
        self.songs.iter().map(|s| s.url.clone()).collect()
    }

    /// New playlists go to the front of the collection.
    pub fn add_playlist(&mut self, playlist: Playlist) {
        info!(
            id = playlist.id.as_str(),
            songs = playlist.songs.len(),
            "catalog_playlist_added"
        );
        self.playlists.retain(|p| p.id != playlist.id);
        self.playlists.insert(0, playlist);
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{album, playlist, song};

    fn catalog() -> Catalog {
        let a = song("a");
        let b = song("b");
        let c = song("c");
        Catalog::new(
            vec![playlist("p1", vec![a.clone(), b.clone()])],
            vec![album("al1", vec![b.clone(), c.clone()])],
            vec![a, b, c],
        )
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(
            vec![playlist("p", vec![]), playlist("p", vec![])],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "playlist", .. }));
    }

    #[test]
    fn playlist_wins_context_lookup() {
        let catalog = catalog();
        assert_eq!(
            catalog.find_context_for("b"),
            Some(PlaybackContext::Playlist("p1".into()))
        );
        assert_eq!(
            catalog.find_context_for("c"),
            Some(PlaybackContext::Album("al1".into()))
        );
        assert_eq!(catalog.find_context_for("zzz"), None);
    }

    #[test]
    fn songs_for_missing_context_is_empty() {
        let catalog = catalog();
        assert!(
            catalog
                .songs_for(&PlaybackContext::Album("gone".into()))
                .is_empty()
        );
        assert_eq!(
            catalog
                .songs_for(&PlaybackContext::Playlist("p1".into()))
                .len(),
            2
        );
    }

    #[test]
    fn search_matches_title_artist_album_case_insensitively() {
        let catalog = catalog();
        assert_eq!(catalog.search("SONG A").len(), 1);
        assert_eq!(catalog.search("artist").len(), 3);
        assert_eq!(catalog.search("album c").len(), 1);
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn added_playlist_goes_first() {
        let mut catalog = catalog();
        catalog.add_playlist(playlist("new", vec![song("x")]));
        assert_eq!(catalog.playlists()[0].id, "new");
        assert_eq!(catalog.playlists().len(), 2);
    }
}
