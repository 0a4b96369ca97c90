//! Hoop Shot - swipe-to-shoot basketball mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, scoring, shots)
//! - `session`: Session controller wrapping the simulation for a host app
//! - `config`: Tunable playfield/hoop/gravity constants
//! - `web`: wasm-bindgen surface for browser hosts

pub mod config;
pub mod session;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, GameConfig};
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per rendered frame at 60 Hz)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Visual spin in degrees per unit of horizontal velocity per tick
    pub const SPIN_PER_VX: f32 = 2.0;

    /// Gesture rejection: minimum swipe length
    pub const MIN_SWIPE_DISTANCE: f32 = 30.0;
    /// Gesture rejection: minimum upward component
    pub const MIN_SWIPE_RISE: f32 = 20.0;
    /// Swipe distance per unit of launch power
    pub const SWIPE_PER_POWER: f32 = 8.0;
    /// Hard cap on launch power
    pub const MAX_POWER: f32 = 18.0;
    /// Horizontal share of power
    pub const HORIZONTAL_POWER_SCALE: f32 = 0.7;
    /// Constant rightward bias toward the hoop
    pub const HOOP_BIAS_VX: f32 = 3.0;
    /// Minimum upward launch speed added on top of the vertical component
    pub const MIN_LAUNCH_RISE: f32 = 2.0;
    /// Swipe distance that reads as 100% on the power meter
    pub const FULL_POWER_SWIPE: f32 = 150.0;
    /// Trajectory preview length in ticks
    pub const PREVIEW_TICKS: usize = 30;

    /// Out of bounds margin below the playfield (ball top-left position)
    pub const OOB_MARGIN_BOTTOM: f32 = 50.0;
    /// Out of bounds margin past the right edge
    pub const OOB_MARGIN_RIGHT: f32 = 50.0;
    /// Out of bounds margin past the left edge
    pub const OOB_MARGIN_LEFT: f32 = 100.0;

    /// Delay between a basket and the next ball
    pub const SCORE_SETTLE_TICKS: u32 = ms_to_ticks(1200);
    /// Delay between the final basket and completion
    pub const COMPLETE_DELAY_TICKS: u32 = ms_to_ticks(1000);
    /// Delay between leaving the playfield and the next ball
    pub const MISS_RESET_TICKS: u32 = ms_to_ticks(600);
    /// How long the score message stays up
    pub const SCORE_MESSAGE_TICKS: u32 = ms_to_ticks(1200);
    /// How long the miss message stays up
    pub const MISS_MESSAGE_TICKS: u32 = ms_to_ticks(1000);

    /// Convert a duration in milliseconds to whole simulation ticks (rounded)
    pub const fn ms_to_ticks(ms: u32) -> u32 {
        (ms * TICKS_PER_SECOND + 500) / 1000
    }
}
