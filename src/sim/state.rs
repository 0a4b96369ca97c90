//! Game state and core simulation types
//!
//! One owned `GameState` holds everything a session needs: the single live
//! projectile, the aiming gesture, score, the transient message and the
//! pending timed actions. The tick function mutates it in place.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::hoop::HoopGeometry;
use crate::config::{GameConfig, SpawnArea};

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting, waiting for a gesture
    Idle,
    /// Gesture in progress, nothing committed
    Aiming,
    /// Ball moving under simulation; input locked out
    Flight,
    /// Ball left the playfield; waiting for the reset timer
    Settling,
    /// Target score reached (terminal)
    Complete,
}

/// The ball. `pos` is the top-left of its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees, cosmetic only
    pub rotation: f32,
    /// Latched once the current flight scores; cleared only by reset
    pub has_scored: bool,
    pub in_flight: bool,
}

impl Projectile {
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            has_scored: false,
            in_flight: false,
        }
    }
}

/// Pointer positions recorded while aiming
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    pub start: Vec2,
    pub current: Vec2,
}

impl Gesture {
    pub fn new(start: Vec2, current: Vec2) -> Self {
        Self { start, current }
    }

    /// Swipe vector with y flipped so an upward drag is positive
    #[inline]
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.current.x - self.start.x, self.start.y - self.current.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Score,
    Miss,
}

impl MessageKind {
    pub fn text(&self) -> &'static str {
        match self {
            MessageKind::Score => "Nice! 🏀",
            MessageKind::Miss => "Miss! Try again 💪",
        }
    }
}

/// Transient message shown to the player until `expires_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageKind,
    pub expires_at: u64,
}

/// A delayed one-shot action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Put a fresh ball down for the next shot
    ResetBall,
    /// Hand control back to the host
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled {
    pub due: u64,
    /// Flight the action belongs to; stale flights are dropped
    pub flight: u32,
    pub action: Action,
}

/// Things that happened during a tick or pointer event, for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    AimStarted,
    /// Gesture ended without enough swipe
    ShotRejected,
    Launched,
    Backboard,
    Rim,
    Scored { score: u32 },
    Missed,
    BallReset,
    Completed,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub hoop: HoopGeometry,
    rng: Pcg32,
    pub phase: GamePhase,
    pub projectile: Projectile,
    pub gesture: Option<Gesture>,
    pub score: u32,
    pub message: Option<Message>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Increments on every launch
    pub flight: u32,
    pub pending: Vec<Scheduled>,
}

impl GameState {
    /// Create a new game with the given seed. Only reachable through
    /// `Session::new`, which validates the config first.
    pub(crate) fn new(config: GameConfig, seed: u64) -> Self {
        let hoop = HoopGeometry::from_config(&config);
        let projectile = Projectile::at_rest(config.ball_start);
        Self {
            config,
            hoop,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            projectile,
            gesture: None,
            score: 0,
            message: None,
            time_ticks: 0,
            flight: 0,
            pending: Vec::new(),
        }
    }

    pub fn target_score(&self) -> u32 {
        self.config.target_score
    }

    /// Put a fresh ball at a random spot in the spawn area using the game's RNG
    pub fn reset_projectile(&mut self) {
        let pos = random_spawn(&mut self.rng, &self.config.spawn_area);
        self.reset_projectile_at(pos);
    }

    /// Put a fresh ball down using an injected random source
    pub fn reset_projectile_with<R: Rng>(&mut self, rng: &mut R) {
        let pos = random_spawn(rng, &self.config.spawn_area);
        self.reset_projectile_at(pos);
    }

    pub fn reset_projectile_at(&mut self, pos: Vec2) {
        self.projectile = Projectile::at_rest(pos);
        if self.phase != GamePhase::Complete {
            self.phase = GamePhase::Idle;
        }
        log::debug!("Ball reset at ({:.1}, {:.1})", pos.x, pos.y);
    }

    pub fn show_message(&mut self, kind: MessageKind, ticks: u32) {
        self.message = Some(Message {
            kind,
            expires_at: self.time_ticks + ticks as u64,
        });
    }

    pub fn message_text(&self) -> Option<&'static str> {
        self.message.map(|m| m.kind.text())
    }

    /// Queue `action` for the current flight, `delay` ticks from now
    pub fn schedule(&mut self, action: Action, delay: u32) {
        self.pending.push(Scheduled {
            due: self.time_ticks + delay as u64,
            flight: self.flight,
            action,
        });
    }

    /// Drop every pending timer (teardown)
    pub fn cancel_pending(&mut self) {
        self.pending.clear();
        self.message = None;
    }

    /// Remove and return actions that are due now, in scheduling order
    pub(crate) fn take_due(&mut self) -> Vec<Scheduled> {
        let now = self.time_ticks;
        let (due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;
        due
    }
}

/// Uniform position in `[min, max)` on both axes
pub fn random_spawn<R: Rng>(rng: &mut R, area: &SpawnArea) -> Vec2 {
    Vec2::new(
        rng.random_range(area.min.x..area.max.x),
        rng.random_range(area.min.y..area.max.y),
    )
}
