pub mod controls;
pub mod player;
pub mod progress;
pub mod sidebar;
pub mod spinner;
