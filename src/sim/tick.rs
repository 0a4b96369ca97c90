//! Fixed timestep simulation tick
//!
//! Pointer events move the game between Idle, Aiming and Flight. Each tick
//! advances the clock, fires due timers and, while in Flight, runs
//! integrate -> score -> collide -> bounds on the projectile.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Obstacle, resolve_collisions};
use super::kinematics::{integrate, spin};
use super::scoring::detect_basket;
use super::shot::translate;
use super::state::{Action, GameEvent, GamePhase, GameState, Gesture, MessageKind};
use crate::consts::*;

/// Raw pointer input (mouse or touch), in any consistent screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
    /// Pointer left the playfield; ends the gesture like `Up`
    Leave,
}

/// Apply one pointer event. Ignored while a ball is in the air or the game is over.
pub fn handle_pointer(state: &mut GameState, event: PointerEvent) -> Option<GameEvent> {
    match event {
        PointerEvent::Down(pos) => {
            if !matches!(state.phase, GamePhase::Idle | GamePhase::Aiming) {
                return None;
            }
            state.gesture = Some(Gesture::new(pos, pos));
            state.phase = GamePhase::Aiming;
            Some(GameEvent::AimStarted)
        }
        PointerEvent::Move(pos) => {
            if state.phase == GamePhase::Aiming {
                if let Some(gesture) = state.gesture.as_mut() {
                    gesture.current = pos;
                }
            }
            None
        }
        PointerEvent::Up | PointerEvent::Leave => {
            if state.phase != GamePhase::Aiming {
                return None;
            }
            state.phase = GamePhase::Idle;
            let gesture = state.gesture.take()?;
            Some(release(state, &gesture))
        }
    }
}

/// End of an aiming gesture: launch if the swipe is good enough
fn release(state: &mut GameState, gesture: &Gesture) -> GameEvent {
    let Some(launch) = translate(gesture) else {
        log::debug!("Shot rejected: swipe {:?}", gesture.delta());
        return GameEvent::ShotRejected;
    };

    state.flight += 1;
    state.projectile.vel = launch.velocity;
    state.projectile.in_flight = true;
    state.projectile.has_scored = false;
    state.phase = GamePhase::Flight;
    log::debug!(
        "Launch #{}: power {:.1}, vel ({:.2}, {:.2})",
        state.flight,
        launch.power,
        launch.velocity.x,
        launch.velocity.y
    );
    GameEvent::Launched
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if state
        .message
        .is_some_and(|m| m.expires_at <= state.time_ticks)
    {
        state.message = None;
    }

    run_due_actions(state, &mut events);

    if state.phase == GamePhase::Flight {
        step_flight(state, &mut events);
    }

    events
}

fn run_due_actions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for scheduled in state.take_due() {
        if scheduled.flight != state.flight {
            log::debug!("Dropping {:?} from stale flight {}", scheduled.action, scheduled.flight);
            continue;
        }
        match scheduled.action {
            Action::ResetBall => {
                if matches!(state.phase, GamePhase::Flight | GamePhase::Settling) {
                    state.reset_projectile();
                    events.push(GameEvent::BallReset);
                }
            }
            Action::Complete => {
                if state.phase != GamePhase::Complete {
                    state.phase = GamePhase::Complete;
                    state.projectile.in_flight = false;
                    state.gesture = None;
                    state.pending.clear();
                    log::info!("Target reached: {}/{}", state.score, state.target_score());
                    events.push(GameEvent::Completed);
                }
            }
        }
    }
}

fn step_flight(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let hoop = &state.hoop;
    let ball = &mut state.projectile;

    (ball.pos, ball.vel) = integrate(ball.pos, ball.vel, state.config.gravity);
    ball.rotation = spin(ball.rotation, ball.vel.x);

    let scored = detect_basket(ball, hoop);

    let report = resolve_collisions(ball, hoop);
    for obstacle in &report.hits {
        events.push(match obstacle {
            Obstacle::Backboard => GameEvent::Backboard,
            Obstacle::LeftRim | Obstacle::RightRim => GameEvent::Rim,
        });
    }

    let out_of_bounds = hoop.is_out_of_bounds(ball.pos);
    let has_scored = ball.has_scored;

    if scored {
        state.score += 1;
        state.show_message(MessageKind::Score, SCORE_MESSAGE_TICKS);
        log::info!("Basket! {}/{}", state.score, state.target_score());
        events.push(GameEvent::Scored { score: state.score });

        if state.score >= state.target_score() {
            state.schedule(Action::Complete, COMPLETE_DELAY_TICKS);
        } else {
            state.schedule(Action::ResetBall, SCORE_SETTLE_TICKS);
        }
    }

    if out_of_bounds {
        state.projectile.in_flight = false;
        state.phase = GamePhase::Settling;
        // A scored ball already has its follow-up queued
        if !has_scored {
            state.show_message(MessageKind::Miss, MISS_MESSAGE_TICKS);
            state.schedule(Action::ResetBall, MISS_RESET_TICKS);
            log::info!("Miss ({}/{})", state.score, state.target_score());
            events.push(GameEvent::Missed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Projectile;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 12345)
    }

    fn swipe(state: &mut GameState, start: Vec2, end: Vec2) -> Option<GameEvent> {
        handle_pointer(state, PointerEvent::Down(start));
        handle_pointer(state, PointerEvent::Move(end));
        handle_pointer(state, PointerEvent::Up)
    }

    /// Ball positioned so its centre descends through the middle of the hoop next tick
    fn drop_into_hoop(state: &mut GameState) {
        let center = Vec2::new(243.0, 100.0);
        state.projectile = Projectile {
            pos: state.hoop.ball_pos_for_center(center),
            vel: Vec2::new(0.0, 5.0),
            rotation: 0.0,
            has_scored: false,
            in_flight: true,
        };
        state.flight += 1;
        state.phase = GamePhase::Flight;
    }

    fn run_until_idle(state: &mut GameState, max_ticks: usize) -> Vec<GameEvent> {
        let mut all = Vec::new();
        for _ in 0..max_ticks {
            all.extend(tick(state));
            if matches!(state.phase, GamePhase::Idle | GamePhase::Complete) {
                break;
            }
        }
        all
    }

    #[test]
    fn test_pointer_down_starts_aiming() {
        let mut state = new_state();
        let event = handle_pointer(&mut state, PointerEvent::Down(Vec2::new(10.0, 10.0)));
        assert_eq!(event, Some(GameEvent::AimStarted));
        assert_eq!(state.phase, GamePhase::Aiming);
        handle_pointer(&mut state, PointerEvent::Move(Vec2::new(12.0, -40.0)));
        assert_eq!(state.gesture.unwrap().current, Vec2::new(12.0, -40.0));
    }

    #[test]
    fn test_weak_swipe_returns_to_idle() {
        let mut state = new_state();
        let before = state.projectile.clone();
        let event = swipe(&mut state, Vec2::new(100.0, 400.0), Vec2::new(110.0, 395.0));
        assert_eq!(event, Some(GameEvent::ShotRejected));
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.projectile, before);
        assert_eq!(state.flight, 0);
        assert!(state.gesture.is_none());
    }

    #[test]
    fn test_good_swipe_launches() {
        let mut state = new_state();
        let event = swipe(&mut state, Vec2::new(100.0, 400.0), Vec2::new(100.0, 300.0));
        assert_eq!(event, Some(GameEvent::Launched));
        assert_eq!(state.phase, GamePhase::Flight);
        assert!(state.projectile.in_flight);
        assert!((state.projectile.vel.x - 3.0).abs() < 1e-4);
        assert!((state.projectile.vel.y - (-14.5)).abs() < 1e-4);
    }

    #[test]
    fn test_leave_ends_gesture_like_up() {
        let mut state = new_state();
        handle_pointer(&mut state, PointerEvent::Down(Vec2::new(100.0, 400.0)));
        handle_pointer(&mut state, PointerEvent::Move(Vec2::new(100.0, 300.0)));
        let event = handle_pointer(&mut state, PointerEvent::Leave);
        assert_eq!(event, Some(GameEvent::Launched));
    }

    #[test]
    fn test_input_ignored_during_flight() {
        let mut state = new_state();
        swipe(&mut state, Vec2::new(100.0, 400.0), Vec2::new(100.0, 300.0));
        let vel = state.projectile.vel;
        assert_eq!(handle_pointer(&mut state, PointerEvent::Down(Vec2::ZERO)), None);
        assert_eq!(handle_pointer(&mut state, PointerEvent::Up), None);
        assert_eq!(state.phase, GamePhase::Flight);
        assert_eq!(state.projectile.vel, vel);
        assert_eq!(state.flight, 1);
    }

    #[test]
    fn test_flight_applies_gravity_and_spin() {
        let mut state = new_state();
        swipe(&mut state, Vec2::new(100.0, 400.0), Vec2::new(100.0, 300.0));
        let start = state.projectile.pos;
        tick(&mut state);
        let ball = &state.projectile;
        assert!((ball.vel.y - (-14.5 + 0.35)).abs() < 1e-4);
        assert!((ball.pos.y - (start.y - 14.15)).abs() < 1e-3);
        assert!((ball.rotation - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_idle_tick_does_not_move_ball() {
        let mut state = new_state();
        let before = state.projectile.clone();
        for _ in 0..100 {
            tick(&mut state);
        }
        assert_eq!(state.projectile, before);
        assert_eq!(state.time_ticks, 100);
    }

    #[test]
    fn test_basket_scores_once_and_resets() {
        let mut state = new_state();
        drop_into_hoop(&mut state);

        let events = tick(&mut state);
        assert!(events.contains(&GameEvent::Scored { score: 1 }));
        assert_eq!(state.score, 1);
        assert!(state.projectile.has_scored);
        assert_eq!(state.message_text(), Some("Nice! 🏀"));

        let events = run_until_idle(&mut state, 200);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Scored { .. })));
        assert!(!events.contains(&GameEvent::Missed));
        assert!(events.contains(&GameEvent::BallReset));
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(!state.projectile.has_scored);
    }

    #[test]
    fn test_reset_fires_after_settle_delay() {
        let mut state = new_state();
        drop_into_hoop(&mut state);
        tick(&mut state);
        let scored_at = state.time_ticks;
        let events = run_until_idle(&mut state, 200);
        assert!(events.contains(&GameEvent::BallReset));
        assert_eq!(state.time_ticks - scored_at, SCORE_SETTLE_TICKS as u64);
    }

    #[test]
    fn test_score_checked_before_rim_in_same_tick() {
        let mut state = new_state();
        // After one tick the centre is at (225, 115): inside the scoring band
        // and 16.1 from the left rim post (contact distance 20.5)
        state.projectile = Projectile {
            pos: state.hoop.ball_pos_for_center(Vec2::new(225.0, 111.65)),
            vel: Vec2::new(0.0, 3.0),
            rotation: 0.0,
            has_scored: false,
            in_flight: true,
        };
        state.flight = 1;
        state.phase = GamePhase::Flight;

        let events = tick(&mut state);
        let center = state.hoop.ball_center(state.projectile.pos);
        assert!(center.distance(state.hoop.rim_left) < state.hoop.rim_contact_distance());
        assert_eq!(events, vec![GameEvent::Scored { score: 1 }]);
        assert_eq!(state.score, 1);
        // No rim bounce: still falling straight down
        assert_eq!(state.projectile.vel.x, 0.0);
        assert!(state.projectile.vel.y > 0.0);
    }

    #[test]
    fn test_scored_ball_passes_through_rim() {
        let mut state = new_state();
        drop_into_hoop(&mut state);
        tick(&mut state);
        assert!(state.projectile.has_scored);

        // Move the ball onto the left rim post: no bounce may happen
        state.projectile.pos = state.hoop.ball_pos_for_center(state.hoop.rim_left);
        let vel = state.projectile.vel;
        let events = tick(&mut state);
        assert!(!events.contains(&GameEvent::Rim));
        assert_eq!(state.projectile.vel.x, vel.x);
        assert!((state.projectile.vel.y - (vel.y + 0.35)).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_bounds_is_a_miss() {
        let mut state = new_state();
        state.projectile.pos = Vec2::new(100.0, 495.0);
        state.projectile.vel = Vec2::new(0.0, 10.0);
        state.projectile.in_flight = true;
        state.flight = 1;
        state.phase = GamePhase::Flight;

        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::Missed]);
        assert_eq!(state.phase, GamePhase::Settling);
        assert_eq!(state.message_text(), Some("Miss! Try again 💪"));
        assert_eq!(state.score, 0);

        let events = run_until_idle(&mut state, 100);
        assert_eq!(events, vec![GameEvent::BallReset]);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_scored_ball_leaving_playfield_is_not_a_miss() {
        let mut state = new_state();
        drop_into_hoop(&mut state);
        tick(&mut state);
        // Shove it off the bottom before the settle timer fires
        state.projectile.pos.y = 600.0;
        let events = tick(&mut state);
        assert!(!events.contains(&GameEvent::Missed));
        assert_eq!(state.phase, GamePhase::Settling);
        assert_eq!(state.pending.len(), 1);
        assert_eq!(state.message_text(), Some("Nice! 🏀"));
    }

    #[test]
    fn test_message_expires() {
        let mut state = new_state();
        state.show_message(MessageKind::Miss, 3);
        tick(&mut state);
        tick(&mut state);
        assert!(state.message.is_some());
        tick(&mut state);
        assert!(state.message.is_none());
    }

    #[test]
    fn test_final_basket_completes_once() {
        let config = GameConfig {
            target_score: 2,
            ..Default::default()
        };
        let mut state = GameState::new(config, 1);
        let mut completed = 0;

        for round in 0..2 {
            drop_into_hoop(&mut state);
            let mut events = tick(&mut state);
            events.extend(run_until_idle(&mut state, 300));
            completed += events.iter().filter(|e| **e == GameEvent::Completed).count();
            assert_eq!(state.score, round + 1);
        }
        assert_eq!(completed, 1);
        assert_eq!(state.phase, GamePhase::Complete);

        // Terminal: no more input, no more scoring
        assert_eq!(handle_pointer(&mut state, PointerEvent::Down(Vec2::ZERO)), None);
        for _ in 0..200 {
            assert!(tick(&mut state).is_empty());
        }
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_stale_flight_actions_are_dropped() {
        let mut state = new_state();
        state.schedule(Action::ResetBall, 1);
        state.flight += 1;
        state.phase = GamePhase::Flight;
        let events = tick(&mut state);
        assert!(!events.contains(&GameEvent::BallReset));
        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(GameConfig::default(), 99999);
        let mut b = GameState::new(GameConfig::default(), 99999);

        for state in [&mut a, &mut b] {
            for _ in 0..3 {
                swipe(state, Vec2::new(0.0, 0.0), Vec2::new(40.0, -150.0));
                run_until_idle(state, 1000);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.projectile, b.projectile);
        assert_eq!(a.score, b.score);
    }
}
