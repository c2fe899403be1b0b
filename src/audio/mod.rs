pub mod config;
pub mod controller;
pub mod error;
pub mod playback;
pub mod queue;
pub mod recent;
pub mod state;
pub mod sync;
pub mod system;
pub mod traits;
pub mod util;
