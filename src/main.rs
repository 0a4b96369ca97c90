//! Hoop Shot entry point
//!
//! Native build runs a headless demo: the autoplay planner takes every shot
//! until the target score is reached. The browser build is driven through
//! `hoop_shot::web` instead.
//!
//! Usage: `hoop-shot [config.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hoop Shot (native demo) starting...");

    if let Err(e) = demo::run(std::env::args().skip(1).collect()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is hoop_shot::web, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::cell::Cell;
    use std::rc::Rc;

    use hoop_shot::consts::TICKS_PER_SECOND;
    use hoop_shot::sim::{GameEvent, GamePhase, PointerEvent, plan_shot};
    use hoop_shot::{ConfigError, GameConfig, Session};

    /// Give up after this many simulated seconds
    const MAX_DEMO_SECS: u64 = 600;

    pub fn run(args: Vec<String>) -> Result<(), ConfigError> {
        let config = match args.first() {
            Some(path) => GameConfig::load_from_file(path)?,
            None => GameConfig::default(),
        };
        let seed = args
            .get(1)
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(0x5EED);

        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        let mut session = Session::new(config, seed)?.with_on_complete(move || flag.set(true));

        let mut shots = 0u32;
        let max_ticks = MAX_DEMO_SECS * TICKS_PER_SECOND as u64;

        while !done.get() && session.state().time_ticks < max_ticks {
            if session.state().phase == GamePhase::Idle {
                let Some(gesture) = plan_shot(session.state()) else {
                    log::warn!("Planner found no shot; stopping");
                    break;
                };
                session.pointer(PointerEvent::Down(gesture.start));
                session.pointer(PointerEvent::Move(gesture.current));
                if session.pointer(PointerEvent::Up) == Some(GameEvent::Launched) {
                    shots += 1;
                }
            }

            for event in session.tick() {
                if let GameEvent::Scored { score } = event {
                    log::info!("Shot {shots}: basket ({score}/{})", session.state().target_score());
                }
            }
        }

        let state = session.state();
        log::info!(
            "Finished: {}/{} in {} shots, {:.1}s simulated",
            state.score,
            state.target_score(),
            shots,
            state.time_ticks as f32 / TICKS_PER_SECOND as f32
        );
        if let Ok(json) = serde_json::to_string(&session.frame()) {
            log::debug!("Final frame: {json}");
        }
        Ok(())
    }
}
