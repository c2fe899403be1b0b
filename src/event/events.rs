use crate::{audio::traits::TransportEvent, catalog::Playlist};

#[derive(Debug, Clone)]
pub enum Event {
    Transport(TransportEvent),
    PlaylistGenerated(Playlist),
    GenerationFailed(String),
}
