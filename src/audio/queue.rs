use std::collections::VecDeque;

use crate::catalog::Song;

/// Which ordered song list governs next/previous. Only the id is kept; the
/// list itself is looked up in the catalog every time it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaybackContext {
    Playlist(String),
    Album(String),
}

impl PlaybackContext {
    pub fn id(&self) -> &str {
        match self {
            PlaybackContext::Playlist(id) | PlaybackContext::Album(id) => id,
        }
    }
}

/// Songs the user asked to hear next, independent of any context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongQueue {
    songs: VecDeque<Song>,
}

impl SongQueue {
    pub fn push(&mut self, song: Song) {
        self.songs.push_back(song);
    }

    pub fn pop_front(&mut self) -> Option<Song> {
        self.songs.pop_front()
    }

    /// Drops every entry with this id and returns how many went.
    pub fn remove_all(&mut self, song_id: &str) -> usize {
        let before = self.songs.len();
        self.songs.retain(|s| s.id != song_id);
        before - self.songs.len()
    }

    pub fn clear(&mut self) {
        self.songs.clear();
    }

    pub fn front(&self) -> Option<&Song> {
        self.songs.front()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::song;

    #[test]
    fn fifo_order() {
        let mut queue = SongQueue::default();
        queue.push(song("a"));
        queue.push(song("b"));
        assert_eq!(queue.pop_front().map(|s| s.id), Some("a".into()));
        assert_eq!(queue.pop_front().map(|s| s.id), Some("b".into()));
        assert!(queue.pop_front().is_none());
    }

    #[test]
    fn remove_all_drops_duplicates() {
        let mut queue = SongQueue::default();
        queue.push(song("a"));
        queue.push(song("b"));
        queue.push(song("a"));
        assert_eq!(queue.remove_all("a"), 2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.front().map(|s| s.id.as_str()), Some("b"));
        assert_eq!(queue.remove_all("zzz"), 0);
    }
}
