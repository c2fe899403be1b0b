use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    audio::{
        error::TransportError,
        traits::{LoadToken, MediaTransport},
    },
    catalog::{Album, Playlist, Song},
    http::{
        PlaylistGenerator,
        error::GenerateError,
        schema::{GeneratedPlaylist, SongDescriptor},
    },
};

pub fn song(id: &str) -> Song {
    Song {
        id: id.to_string(),
        title: format!("Song {id}"),
        artist: format!("Artist {id}"),
        album: format!("Album {id}"),
        duration: "3:30".to_string(),
        album_cover: format!("https://covers.test/{id}.jpg"),
        url: format!("https://audio.test/{id}.mp3"),
        lyrics: None,
    }
}

pub fn playlist(id: &str, songs: Vec<Song>) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: format!("Playlist {id}"),
        songs,
        owner: "tester".to_string(),
        cover: format!("https://covers.test/{id}.jpg"),
        description: None,
        likes: None,
        total_duration: None,
    }
}

pub fn album(id: &str, songs: Vec<Song>) -> Album {
    Album {
        id: id.to_string(),
        name: format!("Album {id}"),
        artist: "Various".to_string(),
        year: 2024,
        cover: format!("https://covers.test/{id}.jpg"),
        songs,
        dominant_color: None,
    }
}

pub fn descriptors(count: usize) -> Vec<SongDescriptor> {
    (0..count)
        .map(|i| SongDescriptor {
            title: format!("Generated {i}"),
            artist: format!("Generated Artist {i}"),
            album: format!("Generated Album {i}"),
            duration: "3:00".to_string(),
            lyrics: None,
        })
        .collect()
}

pub struct FakeGenerator {
    answer: Option<String>,
    calls: AtomicUsize,
}

impl FakeGenerator {
    /// Answers every prompt with a full playlist of this name.
    pub fn succeeding(name: &str) -> Self {
        Self {
            answer: Some(name.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaylistGenerator for FakeGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedPlaylist, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Some(name) => Ok(GeneratedPlaylist {
                playlist_name: name.clone(),
                songs: descriptors(10),
            }),
            None => Err(GenerateError::Status(503)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportCall {
    SetSource(Option<String>),
    Load(LoadToken),
    Play,
    Pause,
    Seek(f64),
    Volume(f32),
}

/// Shared view of everything a [`FakeTransport`] was asked to do.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<TransportCall>>>);

impl CallLog {
    fn push(&self, call: TransportCall) {
        self.0.lock().unwrap().push(call);
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn contains(&self, call: &TransportCall) -> bool {
        self.0.lock().unwrap().contains(call)
    }

    pub fn count(&self, call: &TransportCall) -> usize {
        self.0.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    pub fn loads(&self) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, TransportCall::Load(_)))
            .count()
    }

    pub fn last_token(&self) -> Option<LoadToken> {
        self.0.lock().unwrap().iter().rev().find_map(|c| match c {
            TransportCall::Load(token) => Some(*token),
            _ => None,
        })
    }

    /// The source most recently set.
    pub fn source(&self) -> Option<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|c| match c {
                TransportCall::SetSource(source) => Some(source.clone()),
                _ => None,
            })
            .flatten()
    }
}

/// Records calls and reports success; readiness is delivered by the test.
pub struct FakeTransport {
    calls: CallLog,
    source: Option<String>,
    next_token: u64,
    play_error: Option<TransportError>,
    time: f64,
    volume: f32,
}

impl FakeTransport {
    pub fn new() -> (Self, CallLog) {
        let calls = CallLog::default();
        let transport = Self {
            calls: calls.clone(),
            source: None,
            next_token: 0,
            play_error: None,
            time: 0.0,
            volume: 1.0,
        };
        (transport, calls)
    }

    pub fn fail_play_with(&mut self, error: TransportError) {
        self.play_error = Some(error);
    }

    pub fn last_token(&self) -> Option<LoadToken> {
        self.calls.last_token()
    }
}

impl MediaTransport for FakeTransport {
    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn set_source(&mut self, url: Option<&str>) {
        self.source = url.map(str::to_string);
        self.calls.push(TransportCall::SetSource(self.source.clone()));
    }

    fn load(&mut self) -> LoadToken {
        self.next_token += 1;
        let token = LoadToken(self.next_token);
        self.calls.push(TransportCall::Load(token));
        token
    }

    fn play(&mut self) -> Result<(), TransportError> {
        self.calls.push(TransportCall::Play);
        match &self.play_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn pause(&mut self) {
        self.calls.push(TransportCall::Pause);
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) -> Result<(), TransportError> {
        self.time = seconds;
        self.calls.push(TransportCall::Seek(seconds));
        Ok(())
    }

    fn duration(&self) -> f64 {
        0.0
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.calls.push(TransportCall::Volume(volume));
    }
}
