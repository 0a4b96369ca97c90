//! Static hoop geometry
//!
//! Everything the collision resolver and scoring detector test against is
//! derived once from [`GameConfig`]:
//! - two rim posts (points at the rim's left and right ends)
//! - the backboard (axis-aligned box just past the rim's outer edge)
//! - the scoring zone (inset span inside the rim, narrow band below it)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::{OOB_MARGIN_BOTTOM, OOB_MARGIN_LEFT, OOB_MARGIN_RIGHT};

/// Rim posts sit this far below the top of the rim
pub const RIM_POST_DROP: f32 = 8.0;
/// Backboard face sits this far inside the hoop's outer width
pub const BACKBOARD_INSET: f32 = 5.0;
/// Backboard box extents relative to the face
pub const BACKBOARD_FRONT: f32 = 5.0;
pub const BACKBOARD_BACK: f32 = 15.0;
pub const BACKBOARD_ABOVE_RIM: f32 = 45.0;
pub const BACKBOARD_BELOW_RIM: f32 = 50.0;
/// Scoring zone reference line sits this far below the top of the rim
pub const SCORE_LINE_DROP: f32 = 10.0;
/// Scoring zone is inset from each rim edge by this much
pub const SCORE_EDGE_INSET: f32 = 5.0;

/// Axis-aligned box with exclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strictly inside (touching an edge does not count)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

/// Derived hoop and playfield geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoopGeometry {
    pub ball_radius: f32,
    pub rim_radius: f32,
    pub rim_left: Vec2,
    pub rim_right: Vec2,
    pub backboard: Rect,
    /// Ball centre x after being pushed off the backboard
    pub backboard_rest_x: f32,
    /// Exclusive x-span of the scoring opening
    pub score_left: f32,
    pub score_right: f32,
    /// Reference y for the scoring band
    pub score_line_y: f32,
    pub playfield: Vec2,
}

impl HoopGeometry {
    pub fn from_config(config: &GameConfig) -> Self {
        let rim_y = config.hoop_y + RIM_POST_DROP;
        let face_x = config.hoop_x + config.hoop_outer_width - BACKBOARD_INSET;

        Self {
            ball_radius: config.ball_radius(),
            rim_radius: config.rim_thickness / 2.0,
            rim_left: Vec2::new(config.hoop_x + config.rim_thickness / 2.0, rim_y),
            rim_right: Vec2::new(
                config.hoop_x + config.hoop_inner_width - config.rim_thickness / 2.0,
                rim_y,
            ),
            backboard: Rect::new(
                Vec2::new(face_x - BACKBOARD_FRONT, config.hoop_y - BACKBOARD_ABOVE_RIM),
                Vec2::new(face_x + BACKBOARD_BACK, config.hoop_y + BACKBOARD_BELOW_RIM),
            ),
            backboard_rest_x: face_x - BACKBOARD_FRONT,
            score_left: config.hoop_x + config.rim_thickness + SCORE_EDGE_INSET,
            score_right: config.hoop_x + config.hoop_inner_width - SCORE_EDGE_INSET,
            score_line_y: config.hoop_y + SCORE_LINE_DROP,
            playfield: Vec2::new(config.playfield_width, config.playfield_height),
        }
    }

    /// Ball centre from its top-left position
    #[inline]
    pub fn ball_center(&self, pos: Vec2) -> Vec2 {
        pos + Vec2::splat(self.ball_radius)
    }

    /// Top-left position that puts the ball centre at `center`
    #[inline]
    pub fn ball_pos_for_center(&self, center: Vec2) -> Vec2 {
        center - Vec2::splat(self.ball_radius)
    }

    /// Contact distance between the ball centre and a rim post
    #[inline]
    pub fn rim_contact_distance(&self) -> f32 {
        self.ball_radius + self.rim_radius
    }

    /// Whether the ball (top-left `pos`) has left the playfield by the miss margins
    pub fn is_out_of_bounds(&self, pos: Vec2) -> bool {
        pos.y > self.playfield.y + OOB_MARGIN_BOTTOM
            || pos.x > self.playfield.x + OOB_MARGIN_RIGHT
            || pos.x < -OOB_MARGIN_LEFT
    }

    /// Whether a preview point (ball centre) is still inside the visible playfield
    pub fn in_preview_bounds(&self, center: Vec2) -> bool {
        center.y <= self.playfield.y && center.x <= self.playfield.x && center.x >= 0.0
    }
}
