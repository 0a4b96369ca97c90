//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Seeded RNG only (ball respawn)
//! - Timers counted in ticks, never wall-clock
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod collision;
pub mod frame;
pub mod hoop;
pub mod kinematics;
pub mod scoring;
pub mod shot;
pub mod state;
pub mod tick;

pub use autoplay::{ShotOutcome, plan_shot, simulate_shot};
pub use collision::{CollisionReport, Obstacle, resolve_collisions};
pub use frame::{AimOverlay, Frame};
pub use hoop::{HoopGeometry, Rect};
pub use kinematics::{integrate, spin};
pub use scoring::{detect_basket, is_basket};
pub use shot::{Launch, power_percent, trajectory_preview, translate};
pub use state::{
    Action, GameEvent, GamePhase, GameState, Gesture, Message, MessageKind, Projectile, Scheduled,
};
pub use tick::{PointerEvent, handle_pointer, tick};
