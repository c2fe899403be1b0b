use flume::Sender;
use tracing::{debug, warn};

use crate::{
    audio::{
        config::AudioConfig,
        controller::PlaybackController,
        error::TransportError,
        playback::RodioTransport,
        queue::PlaybackContext,
        state::PlaybackState,
        sync::TransportSync,
        traits::{MediaTransport, TransportEvent},
    },
    catalog::{Catalog, Song},
    event::events::Event,
};

/// Playback controller plus the transport it drives. Every mutating call
/// reconciles the transport before returning.
pub struct AudioSystem {
    controller: PlaybackController,
    sync: TransportSync,
    transport: Box<dyn MediaTransport>,
    config: AudioConfig,
}

impl AudioSystem {
    pub fn new(event_tx: Sender<Event>, config: AudioConfig) -> color_eyre::Result<Self> {
        let transport = RodioTransport::new(event_tx, config.poll_interval)?;
        let controller = PlaybackController::new(config.volume);
        Ok(Self::with_parts(controller, Box::new(transport), config))
    }

    pub fn with_parts(
        controller: PlaybackController,
        transport: Box<dyn MediaTransport>,
        config: AudioConfig,
    ) -> Self {
        let mut system = Self {
            controller,
            sync: TransportSync::new(),
            transport,
            config,
        };
        system.sync();
        system
    }

    fn sync(&mut self) {
        self.sync
            .reconcile(self.controller.state(), self.transport.as_mut());
    }

    pub fn state(&self) -> &PlaybackState {
        self.controller.state()
    }

    pub fn play_song(&mut self, catalog: &Catalog, song: Song, context: Option<PlaybackContext>) {
        self.controller.play_song(catalog, song, context);
        self.sync();
    }

    pub fn toggle_play(&mut self) {
        self.controller.toggle_play();
        self.sync();
    }

    pub fn toggle_shuffle(&mut self) {
        self.controller.toggle_shuffle();
    }

    pub fn toggle_repeat(&mut self) {
        self.controller.toggle_repeat();
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.controller.set_volume(volume);
        self.sync();
    }

    pub fn volume_up(&mut self) {
        let volume = (self.state().volume + self.config.volume_step).min(1.0);
        self.set_volume(volume);
    }

    pub fn volume_down(&mut self) {
        let volume = (self.state().volume - self.config.volume_step).max(0.0);
        self.set_volume(volume);
    }

    pub fn add_to_queue(&mut self, song: Song) {
        self.controller.add_to_queue(song);
    }

    pub fn remove_from_queue(&mut self, song_id: &str) {
        self.controller.remove_from_queue(song_id);
    }

    pub fn play_next(&mut self, catalog: &Catalog) {
        self.controller.play_next(catalog);
        self.sync();
    }

    pub fn play_previous(&mut self, catalog: &Catalog) {
        self.controller.play_previous(catalog);
        self.sync();
    }

    pub fn seek_forwards(&mut self) {
        self.seek_to(self.state().current_time + self.config.seek_step_secs);
    }

    pub fn seek_backwards(&mut self) {
        self.seek_to(self.state().current_time - self.config.seek_step_secs);
    }

    pub fn seek_to(&mut self, seconds: f64) {
        if self.state().current_song.is_none() {
            return;
        }
        let duration = self.state().duration;
        let mut target = seconds.max(0.0);
        if duration > 0.0 {
            target = target.min(duration);
        }

        match self.transport.set_current_time(target) {
            Ok(()) => self.controller.on_time_update(target),
            Err(TransportError::NotReady) => debug!(target, "seek_before_ready"),
            Err(e) => warn!(error = %e, target, "seek_failed"),
        }
    }

    pub fn handle_transport_event(&mut self, catalog: &Catalog, event: TransportEvent) {
        match event {
            TransportEvent::ReadyToPlay(token) => {
                self.sync.on_ready(token, self.transport.as_mut());
            }
            // Until the new source is ready, progress still describes the
            // previous one.
            TransportEvent::TimeUpdate(_) if self.sync.is_waiting() => {}
            TransportEvent::TimeUpdate(seconds) => self.controller.on_time_update(seconds),
            TransportEvent::DurationKnown(seconds) => self.controller.on_duration_known(seconds),
            TransportEvent::Ended => {
                debug!("transport_ended");
                self.play_next(catalog);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::test_support::{CallLog, FakeTransport, TransportCall, playlist, song};

    fn system() -> (AudioSystem, CallLog) {
        let (transport, calls) = FakeTransport::new();
        let controller = PlaybackController::with_rng(StdRng::seed_from_u64(1));
        let system =
            AudioSystem::with_parts(controller, Box::new(transport), AudioConfig::default());
        (system, calls)
    }

    fn catalog() -> Catalog {
        let songs = vec![song("a"), song("b")];
        Catalog::new(vec![playlist("p", songs.clone())], vec![], songs).unwrap()
    }

    #[test]
    fn ended_advances_to_next_song() {
        let catalog = catalog();
        let (mut system, calls) = system();
        system.play_song(&catalog, song("a"), None);
        system.handle_transport_event(&catalog, TransportEvent::Ended);

        assert!(system.state().is_current("b"));
        assert_eq!(calls.source(), Some(song("b").url));
        assert_eq!(calls.loads(), 2);
    }

    #[test]
    fn ended_at_last_song_pauses() {
        let catalog = catalog();
        let (mut system, calls) = system();
        system.play_song(&catalog, song("b"), None);
        system.handle_transport_event(&catalog, TransportEvent::Ended);

        assert!(!system.state().is_playing);
        assert!(calls.contains(&TransportCall::Pause));
    }

    #[test]
    fn ready_event_starts_playback() {
        let catalog = catalog();
        let (mut system, calls) = system();
        system.play_song(&catalog, song("a"), None);
        let token = calls.last_token().unwrap();
        system.handle_transport_event(&catalog, TransportEvent::ReadyToPlay(token));
        assert_eq!(calls.count(&TransportCall::Play), 1);
    }

    fn ready(system: &mut AudioSystem, catalog: &Catalog, calls: &CallLog) {
        let token = calls.last_token().unwrap();
        system.handle_transport_event(catalog, TransportEvent::ReadyToPlay(token));
    }

    #[test]
    fn progress_events_are_mirrored_and_reset() {
        let catalog = catalog();
        let (mut system, calls) = system();
        system.play_song(&catalog, song("a"), None);
        ready(&mut system, &catalog, &calls);
        system.handle_transport_event(&catalog, TransportEvent::DurationKnown(180.0));
        system.handle_transport_event(&catalog, TransportEvent::TimeUpdate(42.5));
        assert_eq!(system.state().current_time, 42.5);
        assert_eq!(system.state().duration, 180.0);

        system.play_song(&catalog, song("b"), None);
        assert_eq!(system.state().current_time, 0.0);
        assert_eq!(system.state().duration, 0.0);
    }

    #[test]
    fn progress_from_previous_song_is_ignored_until_ready() {
        let catalog = catalog();
        let (mut system, calls) = system();
        system.play_song(&catalog, song("a"), None);
        ready(&mut system, &catalog, &calls);
        system.handle_transport_event(&catalog, TransportEvent::TimeUpdate(95.0));

        system.play_song(&catalog, song("b"), None);
        system.handle_transport_event(&catalog, TransportEvent::TimeUpdate(96.0));
        assert_eq!(system.state().current_time, 0.0);

        ready(&mut system, &catalog, &calls);
        system.handle_transport_event(&catalog, TransportEvent::TimeUpdate(0.4));
        assert_eq!(system.state().current_time, 0.4);
    }

    #[test]
    fn volume_steps_stay_in_range() {
        let (mut system, calls) = system();
        for _ in 0..10 {
            system.volume_up();
        }
        assert_eq!(system.state().volume, 1.0);
        for _ in 0..30 {
            system.volume_down();
        }
        assert_eq!(system.state().volume, 0.0);
        assert!(calls.contains(&TransportCall::Volume(0.0)));
    }

    #[test]
    fn seek_is_clamped_to_duration() {
        let catalog = catalog();
        let (mut system, calls) = system();
        system.play_song(&catalog, song("a"), None);
        ready(&mut system, &catalog, &calls);
        system.handle_transport_event(&catalog, TransportEvent::DurationKnown(12.0));
        system.handle_transport_event(&catalog, TransportEvent::TimeUpdate(10.0));

        system.seek_forwards();
        assert!(calls.contains(&TransportCall::Seek(12.0)));
        assert_eq!(system.state().current_time, 12.0);

        system.seek_to(-3.0);
        assert!(calls.contains(&TransportCall::Seek(0.0)));
    }

    #[test]
    fn seek_without_song_does_nothing() {
        let (mut system, calls) = system();
        let before = calls.len();
        system.seek_forwards();
        assert_eq!(calls.len(), before);
    }
}
