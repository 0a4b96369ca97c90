//! Collision detection and response against the hoop
//!
//! Three obstacles, checked every tick in a fixed order: backboard, left rim
//! post, right rim post. Each response is applied to the projectile as soon as
//! it is detected, so later checks see the corrected velocity. All three use
//! the ball centre taken once at the start of the pass.

use glam::Vec2;

use super::hoop::HoopGeometry;
use super::state::Projectile;

/// Backboard keeps this much of the horizontal speed (reversed)
pub const BACKBOARD_RESTITUTION: f32 = 0.5;
/// Rim posts keep this much of the horizontal speed (pushed outward)
pub const RIM_HORIZONTAL_DAMPING: f32 = 0.4;
/// Rim posts keep this much of the vertical speed (reversed)
pub const RIM_VERTICAL_RESTITUTION: f32 = 0.3;

/// Which obstacle was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Backboard,
    LeftRim,
    RightRim,
}

/// Obstacles hit during one resolution pass, in evaluation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub hits: Vec<Obstacle>,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        !self.hits.is_empty()
    }
}

/// Whether the ball centre overlaps the backboard box
#[inline]
pub fn hits_backboard(center: Vec2, hoop: &HoopGeometry) -> bool {
    hoop.backboard.contains(center)
}

/// Whether the ball centre is within contact distance of a rim post
#[inline]
pub fn hits_rim_post(center: Vec2, post: Vec2, hoop: &HoopGeometry) -> bool {
    center.distance(post) < hoop.rim_contact_distance()
}

/// Bounce off the backboard: reverse and halve vx, push the ball back out in front
pub fn bounce_backboard(ball: &mut Projectile, hoop: &HoopGeometry) {
    ball.vel.x = -ball.vel.x * BACKBOARD_RESTITUTION;
    ball.pos.x = hoop.backboard_rest_x - hoop.ball_radius;
}

/// Bounce off a rim post. `outward` is -1 for leftward, +1 for rightward.
pub fn bounce_rim(ball: &mut Projectile, outward: f32) {
    ball.vel.x = outward * ball.vel.x.abs() * RIM_HORIZONTAL_DAMPING;
    ball.vel.y = -ball.vel.y * RIM_VERTICAL_RESTITUTION;
}

/// Detect and resolve contacts for this tick.
///
/// A ball that has already scored passes through untouched.
pub fn resolve_collisions(ball: &mut Projectile, hoop: &HoopGeometry) -> CollisionReport {
    let mut report = CollisionReport::default();
    if ball.has_scored {
        return report;
    }

    let center = hoop.ball_center(ball.pos);

    if hits_backboard(center, hoop) {
        bounce_backboard(ball, hoop);
        report.hits.push(Obstacle::Backboard);
        log::trace!("Backboard hit at ({:.1}, {:.1})", center.x, center.y);
    }

    // Left post pushes right (the ball is coming from the left of the hoop)
    if hits_rim_post(center, hoop.rim_left, hoop) {
        bounce_rim(ball, 1.0);
        report.hits.push(Obstacle::LeftRim);
        log::trace!("Left rim hit at ({:.1}, {:.1})", center.x, center.y);
    }

    if hits_rim_post(center, hoop.rim_right, hoop) {
        bounce_rim(ball, -1.0);
        report.hits.push(Obstacle::RightRim);
        log::trace!("Right rim hit at ({:.1}, {:.1})", center.x, center.y);
    }

    report
}
