use crate::audio::error::TransportError;

/// Identifies one `load()` call. Readiness reported for any other token is
/// stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    ReadyToPlay(LoadToken),
    /// Seconds
    TimeUpdate(f64),
    DurationKnown(f64),
    Ended,
}

/// The audio element the player drives. Implementations report progress
/// through [`TransportEvent`]s on the app event channel.
pub trait MediaTransport: Send {
    fn source(&self) -> Option<&str>;
    fn set_source(&mut self, url: Option<&str>);
    /// Starts loading the current source.
    fn load(&mut self) -> LoadToken;
    fn play(&mut self) -> Result<(), TransportError>;
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64) -> Result<(), TransportError>;
    fn duration(&self) -> f64;
    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
}
