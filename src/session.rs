//! Game session controller
//!
//! Owns the simulation state for one mounted game, feeds it pointer events
//! and frame time, and calls back into the host exactly once when the target
//! score is reached. After `teardown` every entry point is a no-op.

use crate::config::{ConfigError, GameConfig};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::frame::Frame;
use crate::sim::state::{GameEvent, GameState};
use crate::sim::tick::{PointerEvent, handle_pointer, tick};

/// Host callback fired when the game is won
pub type CompletionHandler = Box<dyn FnMut()>;

pub struct Session {
    state: GameState,
    on_complete: Option<CompletionHandler>,
    completion_signaled: bool,
    alive: bool,
    accumulator: f32,
}

impl Session {
    /// Start a session. Fails only if `config` does not validate.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;
        log::info!(
            "Session started: seed {}, target {}",
            seed,
            config.target_score
        );
        Ok(Self {
            state: GameState::new(config, seed),
            on_complete: None,
            completion_signaled: false,
            alive: true,
            accumulator: 0.0,
        })
    }

    pub fn with_on_complete(mut self, handler: impl FnMut() + 'static) -> Self {
        self.set_on_complete(handler);
        self
    }

    pub fn set_on_complete(&mut self, handler: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(handler));
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_complete(&self) -> bool {
        self.completion_signaled
    }

    pub fn pointer(&mut self, event: PointerEvent) -> Option<GameEvent> {
        if !self.alive {
            return None;
        }
        handle_pointer(&mut self.state, event)
    }

    /// Run exactly one simulation tick (one rendered frame)
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if !self.alive {
            return Vec::new();
        }
        let events = tick(&mut self.state);
        self.dispatch(&events);
        events
    }

    /// Feed wall-clock frame time; runs as many fixed ticks as have accrued
    pub fn advance(&mut self, elapsed_secs: f32) -> Vec<GameEvent> {
        if !self.alive || !elapsed_secs.is_finite() {
            return Vec::new();
        }
        self.accumulator += elapsed_secs.clamp(0.0, 0.1);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.tick());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        events
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state)
    }

    /// Cancel all timers and stop the loop. Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.state.cancel_pending();
        self.on_complete = None;
        log::debug!("Session torn down at tick {}", self.state.time_ticks);
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        if self.completion_signaled || !events.contains(&GameEvent::Completed) {
            return;
        }
        self.completion_signaled = true;
        if let Some(handler) = self.on_complete.as_mut() {
            handler();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.teardown();
    }
}
