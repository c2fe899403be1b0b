use tracing::{debug, warn};

use crate::audio::{
    state::PlaybackState,
    traits::{LoadToken, MediaTransport},
};

/// Keeps the transport in step with the playback state.
///
/// Playback is keyed on `(song id, is_playing)` and volume separately, so a
/// reconcile after an unrelated change (a queue edit, a shuffle toggle)
/// leaves the transport alone.
#[derive(Debug, Default)]
pub struct TransportSync {
    last_playback: Option<(Option<String>, bool)>,
    last_volume: Option<f32>,
    pending_ready: Option<LoadToken>,
}

impl TransportSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reconcile(&mut self, state: &PlaybackState, transport: &mut dyn MediaTransport) {
        let key = (
            state.current_song.as_ref().map(|s| s.id.clone()),
            state.is_playing,
        );
        if self.last_playback.as_ref() != Some(&key) {
            self.last_playback = Some(key);
            self.pending_ready = None;
            self.apply_playback(state, transport);
        }

        if self.last_volume != Some(state.volume) {
            self.last_volume = Some(state.volume);
            transport.set_volume(state.volume.clamp(0.0, 1.0));
        }
    }

    /// Readiness of a load. Only the most recent load of the current
    /// subscription starts playback.
    pub fn on_ready(&mut self, token: LoadToken, transport: &mut dyn MediaTransport) {
        if self.pending_ready != Some(token) {
            debug!(token = token.0, "transport_ready_stale");
            return;
        }
        self.pending_ready = None;
        play(transport);
    }

    pub fn is_waiting(&self) -> bool {
        self.pending_ready.is_some()
    }

    fn apply_playback(&mut self, state: &PlaybackState, transport: &mut dyn MediaTransport) {
        match (&state.current_song, state.is_playing) {
            (Some(song), true) => {
                if transport.source() != Some(song.url.as_str()) {
                    transport.set_source(Some(&song.url));
                    let token = transport.load();
                    debug!(id = song.id.as_str(), token = token.0, "transport_load");
                    self.pending_ready = Some(token);
                } else {
                    play(transport);
                }
            }
            (Some(_), false) => transport.pause(),
            (None, _) => transport.set_source(None),
        }
    }
}

fn play(transport: &mut dyn MediaTransport) {
    match transport.play() {
        Ok(()) => {}
        Err(e) if e.is_superseded() => debug!("transport_play_superseded"),
        Err(e) => warn!(error = %e, "transport_play_failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::error::TransportError;
    use crate::test_support::{FakeTransport, TransportCall, song};

    fn playing(id: &str) -> PlaybackState {
        PlaybackState {
            current_song: Some(song(id)),
            is_playing: true,
            ..PlaybackState::default()
        }
    }

    #[test]
    fn new_song_loads_then_plays_on_ready() {
        let (mut transport, calls) = FakeTransport::new();
        let mut sync = TransportSync::new();

        sync.reconcile(&playing("a"), &mut transport);
        let token = transport.last_token().unwrap();
        assert!(!calls.contains(&TransportCall::Play));

        sync.on_ready(token, &mut transport);
        assert_eq!(calls.count(&TransportCall::Play), 1);
        assert!(!sync.is_waiting());
    }

    #[test]
    fn stale_readiness_is_ignored() {
        let (mut transport, calls) = FakeTransport::new();
        let mut sync = TransportSync::new();

        sync.reconcile(&playing("a"), &mut transport);
        let stale = transport.last_token().unwrap();
        sync.reconcile(&playing("b"), &mut transport);
        let fresh = transport.last_token().unwrap();

        sync.on_ready(stale, &mut transport);
        assert_eq!(calls.count(&TransportCall::Play), 0);
        sync.on_ready(fresh, &mut transport);
        assert_eq!(calls.count(&TransportCall::Play), 1);
    }

    #[test]
    fn pause_keeps_source_and_resume_plays_immediately() {
        let (mut transport, calls) = FakeTransport::new();
        let mut sync = TransportSync::new();
        let mut state = playing("a");

        sync.reconcile(&state, &mut transport);
        let token = transport.last_token().unwrap();
        sync.on_ready(token, &mut transport);

        state.is_playing = false;
        sync.reconcile(&state, &mut transport);
        assert_eq!(calls.count(&TransportCall::Pause), 1);
        assert_eq!(transport.source(), Some(song("a").url.as_str()));

        state.is_playing = true;
        sync.reconcile(&state, &mut transport);
        assert_eq!(calls.count(&TransportCall::Play), 2);
        assert_eq!(calls.loads(), 1);
    }

    #[test]
    fn pausing_drops_pending_readiness() {
        let (mut transport, calls) = FakeTransport::new();
        let mut sync = TransportSync::new();
        let mut state = playing("a");

        sync.reconcile(&state, &mut transport);
        let token = transport.last_token().unwrap();
        state.is_playing = false;
        sync.reconcile(&state, &mut transport);

        sync.on_ready(token, &mut transport);
        assert_eq!(calls.count(&TransportCall::Play), 0);
    }

    #[test]
    fn no_song_clears_source() {
        let (mut transport, calls) = FakeTransport::new();
        let mut sync = TransportSync::new();
        sync.reconcile(&PlaybackState::default(), &mut transport);
        assert!(calls.contains(&TransportCall::SetSource(None)));
        assert_eq!(transport.source(), None);
    }

    #[test]
    fn unrelated_changes_do_not_touch_playback() {
        let (mut transport, calls) = FakeTransport::new();
        let mut sync = TransportSync::new();
        let mut state = playing("a");

        sync.reconcile(&state, &mut transport);
        let before = calls.len();
        state.is_shuffle = true;
        state.song_queue.push(song("z"));
        sync.reconcile(&state, &mut transport);
        assert_eq!(calls.len(), before);
    }

    #[test]
    fn volume_is_clamped() {
        let (mut transport, calls) = FakeTransport::new();
        let mut sync = TransportSync::new();
        let mut state = PlaybackState {
            volume: 1.7,
            ..PlaybackState::default()
        };
        sync.reconcile(&state, &mut transport);
        assert!(calls.contains(&TransportCall::Volume(1.0)));

        state.volume = -0.2;
        sync.reconcile(&state, &mut transport);
        assert!(calls.contains(&TransportCall::Volume(0.0)));
    }

    #[test]
    fn aborted_play_is_swallowed() {
        let (mut transport, calls) = FakeTransport::new();
        transport.fail_play_with(TransportError::Aborted);
        let mut sync = TransportSync::new();

        sync.reconcile(&playing("a"), &mut transport);
        let token = transport.last_token().unwrap();
        sync.on_ready(token, &mut transport);
        assert_eq!(calls.count(&TransportCall::Play), 1);
    }
}
