//! Browser bindings
//!
//! Exposes a [`Session`] to JavaScript. The host forwards pointer events in
//! playfield coordinates, calls `frame` from `requestAnimationFrame`, and
//! draws from the JSON snapshot. `destroy` must be called on unmount.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::session::Session;
use crate::sim::PointerEvent;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    // Ignore double init when several games are mounted
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct HoopShot {
    session: Session,
    last_time: Option<f64>,
}

#[wasm_bindgen]
impl HoopShot {
    /// Build a game from an optional JSON config. `on_complete` is called once, with no arguments.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, on_complete: js_sys::Function) -> Result<HoopShot, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => GameConfig::default(),
        };
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(config, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .with_on_complete(move || {
                if let Err(e) = on_complete.call0(&JsValue::NULL) {
                    log::warn!("onComplete threw: {:?}", e);
                }
            });
        log::info!("Hoop Shot initialized with seed: {}", seed);
        Ok(Self {
            session,
            last_time: None,
        })
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.session.pointer(PointerEvent::Down(Vec2::new(x, y)));
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.session.pointer(PointerEvent::Move(Vec2::new(x, y)));
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.session.pointer(PointerEvent::Up);
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.session.pointer(PointerEvent::Leave);
    }

    /// Advance to `now_ms` (the rAF timestamp) and return the frame as JSON
    pub fn frame(&mut self, now_ms: f64) -> String {
        let elapsed = self
            .last_time
            .map_or(0.0, |last| ((now_ms - last) / 1000.0) as f32);
        self.last_time = Some(now_ms);
        self.session.advance(elapsed);
        serde_json::to_string(&self.session.frame()).unwrap_or_default()
    }

    pub fn destroy(&mut self) {
        self.session.teardown();
    }
}
