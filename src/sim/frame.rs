//! Render snapshot
//!
//! Everything a presentation layer needs to draw one frame, captured from
//! `GameState` after a tick. Serialisable so web hosts can take it as JSON.

use glam::Vec2;
use serde::Serialize;

use super::shot::{aim_line, aim_scale, power_percent, trajectory_preview, translate};
use super::state::{GamePhase, GameState};

/// Aiming overlay: power meter, aim line and dotted trajectory
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AimOverlay {
    pub power_percent: f32,
    pub aim_line: Option<(Vec2, Vec2)>,
    /// Empty when the gesture would be rejected
    pub trajectory: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub tick: u64,
    pub phase: GamePhase,
    /// Top-left of the ball
    pub ball_pos: Vec2,
    pub ball_center: Vec2,
    pub ball_rotation: f32,
    pub ball_scale: f32,
    pub score: u32,
    pub target_score: u32,
    pub message: Option<&'static str>,
    pub aim: Option<AimOverlay>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let center = state.hoop.ball_center(state.projectile.pos);

        let aim = match (state.phase, state.gesture) {
            (GamePhase::Aiming, Some(gesture)) => {
                let trajectory = translate(&gesture)
                    .map(|launch| {
                        trajectory_preview(center, &launch, state.config.gravity, &state.hoop)
                    })
                    .unwrap_or_default();
                Some(AimOverlay {
                    power_percent: power_percent(&gesture),
                    aim_line: aim_line(center, &gesture),
                    trajectory,
                })
            }
            _ => None,
        };

        Self {
            tick: state.time_ticks,
            phase: state.phase,
            ball_pos: state.projectile.pos,
            ball_center: center,
            ball_rotation: state.projectile.rotation,
            ball_scale: aim.as_ref().map_or(1.0, |a| aim_scale(a.power_percent)),
            score: state.score,
            target_score: state.target_score(),
            message: state.message_text(),
            aim,
        }
    }
}
