use std::time::Duration;

use crate::audio::state::DEFAULT_VOLUME;

#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub volume: f32,
    pub volume_step: f32,
    pub seek_step_secs: f64,
    pub poll_interval: Duration,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            volume_step: 0.05,
            seek_step_secs: 5.0,
            poll_interval: Duration::from_millis(100),
        }
    }
}
