use brawl_core::{default_config, hash_world, Match, MatchConfig, PlayerInput, Side};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Install panic hook so WASM panics show in browser console instead of silently freezing.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Sound cue handed to the page's audio layer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCue {
    side: Side,
    cue: &'static str,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

/// Parse an optional JSON config. Empty input means the default arena.
fn config_from_json(seed: u32, config_json: &str) -> Result<MatchConfig, JsValue> {
    if config_json.trim().is_empty() {
        return Ok(default_config(seed));
    }
    let mut config: MatchConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("invalid match config: {e}")))?;
    config.seed = seed;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

#[wasm_bindgen]
pub struct WasmMatch {
    inner: Match,
    cues: Vec<JsCue>,
}

#[wasm_bindgen]
impl WasmMatch {
    /// Start a match. `config_json` may be empty; missing keys take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, cpu_p2: bool, config_json: &str) -> Result<WasmMatch, JsValue> {
        let config = config_from_json(seed, config_json)?;
        let inner = if cpu_p2 {
            Match::against_cpu(config)
        } else {
            Match::versus(config)
        };
        Ok(WasmMatch {
            inner,
            cues: Vec::new(),
        })
    }

    /// Step the simulation by one tick. Held masks are level-triggered, pressed
    /// masks only fire on the tick the key went down.
    pub fn step(&mut self, p1_held: u16, p1_pressed: u16, p2_held: u16, p2_pressed: u16) {
        let inputs = [
            PlayerInput {
                held: p1_held,
                pressed: p1_pressed,
            },
            PlayerInput {
                held: p2_held,
                pressed: p2_pressed,
            },
        ];
        let report = self.inner.tick(inputs);
        self.cues.extend(report.cues.into_iter().map(|(side, cue)| JsCue {
            side,
            cue: cue.name(),
        }));
    }

    /// One second of round time; the page calls this from its own timer.
    pub fn tick_second(&mut self) {
        self.inner.tick_second();
    }

    /// Renderer snapshot. `debug` adds live hitboxes.
    pub fn export_state(&self, debug: bool) -> Result<JsValue, JsValue> {
        to_js(&self.inner.snapshot(debug))
    }

    /// Round/match events since the last call.
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events = self.inner.drain_events();
        for event in &events {
            web_sys::console::debug_1(&JsValue::from_str(&format!("{event:?}")));
        }
        to_js(&events)
    }

    /// Sound cues since the last call, oldest first.
    pub fn drain_cues(&mut self) -> Result<JsValue, JsValue> {
        let cues = std::mem::take(&mut self.cues);
        to_js(&cues)
    }

    /// SHA-256 of the gameplay state, a fingerprint of this session's world.
    pub fn world_hash(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&hash_world(self.inner.world())[..])
    }

    // Quick accessors
    pub fn tick(&self) -> u32 { self.inner.world().tick }
    pub fn round(&self) -> u32 { self.inner.state().round }
    pub fn round_timer(&self) -> u32 { self.inner.state().round_timer }
    pub fn match_over(&self) -> bool { self.inner.is_over() }
    pub fn winner(&self) -> Option<String> { self.inner.state().winner.clone() }
}
