//! Demo player
//!
//! Finds a swipe that scores from the current ball position by trying a grid
//! of gestures on a cloned state and running each flight to its end.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState, Gesture};
use super::tick::{PointerEvent, handle_pointer, tick};

/// Horizontal swipe range tried (negative is leftward)
const DX_RANGE: (i32, i32) = (-120, 240);
/// Upward swipe range tried
const DY_RANGE: (i32, i32) = (20, 400);
const GRID_STEP: usize = 4;
/// Give up on a simulated flight after this many ticks
const MAX_FLIGHT_TICKS: usize = 600;

/// Outcome of a simulated shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Rejected,
    Scored,
    Missed,
}

/// Simulate `gesture` from `state` without touching it
pub fn simulate_shot(state: &GameState, gesture: &Gesture) -> ShotOutcome {
    let mut sim = state.clone();
    handle_pointer(&mut sim, PointerEvent::Down(gesture.start));
    handle_pointer(&mut sim, PointerEvent::Move(gesture.current));
    if handle_pointer(&mut sim, PointerEvent::Up) != Some(GameEvent::Launched) {
        return ShotOutcome::Rejected;
    }

    for _ in 0..MAX_FLIGHT_TICKS {
        let events = tick(&mut sim);
        if events.iter().any(|e| matches!(e, GameEvent::Scored { .. })) {
            return ShotOutcome::Scored;
        }
        if sim.phase != GamePhase::Flight {
            break;
        }
    }
    ShotOutcome::Missed
}

/// Pick a scoring swipe for the resting ball, if one exists on the search grid
pub fn plan_shot(state: &GameState) -> Option<Gesture> {
    if state.phase != GamePhase::Idle {
        return None;
    }

    for dy in (DY_RANGE.0..=DY_RANGE.1).step_by(GRID_STEP) {
        for dx in (DX_RANGE.0..=DX_RANGE.1).step_by(GRID_STEP) {
            let gesture = Gesture::new(Vec2::ZERO, Vec2::new(dx as f32, -(dy as f32)));
            if simulate_shot(state, &gesture) == ShotOutcome::Scored {
                log::debug!("Planned swipe ({dx}, {dy})");
                return Some(gesture);
            }
        }
    }

    log::warn!("No scoring swipe found from {:?}", state.projectile.pos);
    None
}
