//! Per-tick ball kinematics
//!
//! Semi-implicit Euler with constant gravity and a fixed tick: velocity is
//! updated first, then position advances by the new velocity.

use glam::Vec2;

use crate::consts::SPIN_PER_VX;

/// Advance `(pos, vel)` by one tick under downward gravity `g` (screen y grows down)
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, gravity: f32) -> (Vec2, Vec2) {
    let vel = Vec2::new(vel.x, vel.y + gravity);
    (pos + vel, vel)
}

/// Cosmetic spin: rotation (degrees) after one tick at horizontal speed `vx`
#[inline]
pub fn spin(rotation: f32, vx: f32) -> f32 {
    rotation + vx * SPIN_PER_VX
}
