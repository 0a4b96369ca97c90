//! Swipe-to-shot translation
//!
//! Turns an aiming gesture into a launch velocity. The same translation
//! drives the trajectory preview and power meter shown while aiming.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hoop::HoopGeometry;
use super::kinematics::integrate;
use super::state::Gesture;
use crate::consts::*;

/// A shot derived from an accepted gesture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    /// Capped at [`MAX_POWER`]
    pub power: f32,
    /// Swipe angle (radians, y up)
    pub angle: f32,
    /// Initial velocity in screen space (y down)
    pub velocity: Vec2,
}

/// Translate a gesture into a launch, or `None` if the swipe is too short or not upward enough
pub fn translate(gesture: &Gesture) -> Option<Launch> {
    let d = gesture.delta();
    let distance = d.length();

    if distance < MIN_SWIPE_DISTANCE || d.y < MIN_SWIPE_RISE {
        return None;
    }

    let power = (distance / SWIPE_PER_POWER).min(MAX_POWER);
    let angle = d.y.atan2(d.x);

    // Bias toward the hoop and always launch upward
    let velocity = Vec2::new(
        angle.cos() * power * HORIZONTAL_POWER_SCALE + HOOP_BIAS_VX,
        -(angle.sin() * power).abs() - MIN_LAUNCH_RISE,
    );

    Some(Launch {
        power,
        angle,
        velocity,
    })
}

/// Power meter reading (0-100) for the gesture so far, accepted or not
pub fn power_percent(gesture: &Gesture) -> f32 {
    (gesture.delta().length() / FULL_POWER_SWIPE * 100.0).min(100.0)
}

/// Ball scale while aiming: grows with power
pub fn aim_scale(power_percent: f32) -> f32 {
    1.0 + power_percent / 300.0
}

/// Aim line from the ball centre along the swipe, or `None` while power is under 15%
pub fn aim_line(center: Vec2, gesture: &Gesture) -> Option<(Vec2, Vec2)> {
    if power_percent(gesture) <= 15.0 {
        return None;
    }
    let d = gesture.delta();
    Some((center, center + Vec2::new(d.x * 0.3, -d.y * 0.3)))
}

/// Predicted ball-centre positions for a launch from `center`.
///
/// Runs the flight integrator for up to [`PREVIEW_TICKS`] ticks, stopping at
/// the first point outside the playfield. Collisions are not simulated.
pub fn trajectory_preview(center: Vec2, launch: &Launch, gravity: f32, hoop: &HoopGeometry) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(PREVIEW_TICKS);
    let (mut pos, mut vel) = (center, launch.velocity);

    for _ in 0..PREVIEW_TICKS {
        (pos, vel) = integrate(pos, vel, gravity);
        if !hoop.in_preview_bounds(pos) {
            break;
        }
        points.push(pos);
    }

    points
}
