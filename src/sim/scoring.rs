//! Basket detection
//!
//! A shot counts when the ball is descending with its centre inside the rim
//! opening and inside the band just below the rim. Two band conditions are
//! kept side by side: a ±20 window around the reference line and an
//! asymmetric (-5, +30) window. Together they give (-5, +20).

use glam::Vec2;

use super::hoop::HoopGeometry;
use super::state::Projectile;

/// Half-height of the symmetric band around the scoring line
pub const NEAR_LINE_HALF_HEIGHT: f32 = 20.0;
/// Asymmetric band: this far above the scoring line
pub const BAND_ABOVE: f32 = 5.0;
/// Asymmetric band: this far below the scoring line
pub const BAND_BELOW: f32 = 30.0;

/// Whether a ball centre moving with `vel` is passing through the hoop
pub fn is_basket(center: Vec2, vel: Vec2, hoop: &HoopGeometry) -> bool {
    let descending = vel.y > 0.0;
    let in_opening = center.x > hoop.score_left && center.x < hoop.score_right;
    let near_line = (center.y - hoop.score_line_y).abs() < NEAR_LINE_HALF_HEIGHT;
    let in_band =
        center.y > hoop.score_line_y - BAND_ABOVE && center.y < hoop.score_line_y + BAND_BELOW;

    descending && in_opening && near_line && in_band
}

/// Check the projectile for a basket and latch it.
///
/// Returns true at most once per flight: once `has_scored` is set, this
/// never fires again until the projectile is reset.
pub fn detect_basket(ball: &mut Projectile, hoop: &HoopGeometry) -> bool {
    if ball.has_scored {
        return false;
    }
    if is_basket(hoop.ball_center(ball.pos), ball.vel, hoop) {
        ball.has_scored = true;
        return true;
    }
    false
}
