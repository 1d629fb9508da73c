//! WebAssembly bindings for the sprite editor.
//!
//! Provides a thin wrapper around `EditSession` for browser environments.
//! The page owns the canvas, the timers and the network; the editor calls
//! back into JS to draw.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    animation::{TickHandle, TickOutcome},
    model::Color,
    schema::{AnimationRecord, EditorConfig, PlaybackConfig},
    session::{Command, CommandOutcome, EditSession, PointerInput, Surface},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

/// Surface backed by two JS callbacks:
/// `drawCell(x, y, size, color)` and `frameText(label)`.
struct JsSurface {
    draw_cell: js_sys::Function,
    frame_text: js_sys::Function,
}

impl Surface for JsSurface {
    fn draw_cell(&mut self, x: u32, y: u32, size: u32, color: &str) {
        let args = js_sys::Array::of4(
            &JsValue::from(x),
            &JsValue::from(y),
            &JsValue::from(size),
            &JsValue::from_str(color),
        );
        if let Err(e) = self.draw_cell.apply(&JsValue::NULL, &args) {
            log::warn!("drawCell callback failed: {e:?}");
        }
    }

    fn frame_label(&mut self, label: &str) {
        if let Err(e) = self.frame_text.call1(&JsValue::NULL, &JsValue::from_str(label)) {
            log::warn!("frameText callback failed: {e:?}");
        }
    }
}

fn parse_config(config_json: &str) -> Result<EditorConfig, JsValue> {
    if config_json.trim().is_empty() {
        return Ok(EditorConfig::default());
    }
    EditorConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(e: crate::EditorError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Playback start as seen from JS.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketSnapshot {
    handle: f64,
    delay_ms: f64,
}

/// WebAssembly wrapper for an editing session.
#[wasm_bindgen]
pub struct WasmEditor {
    session: EditSession<JsSurface>,
}

#[wasm_bindgen]
impl WasmEditor {
    /// Create an editor from a `{title, data}` JSON record.
    ///
    /// # Arguments
    /// * `record_json` - JSON string as served by `GET /api/animations/{id}`
    /// * `config_json` - JSON string containing EditorConfig (empty for defaults)
    /// * `draw_cell` - `(x, y, size, color) => void`
    /// * `frame_text` - `(label) => void`
    ///
    /// Fails on malformed JSON, invalid config or empty data; nothing is drawn then.
    #[wasm_bindgen(constructor)]
    pub fn new(
        record_json: &str,
        config_json: &str,
        draw_cell: js_sys::Function,
        frame_text: js_sys::Function,
    ) -> Result<WasmEditor, JsValue> {
        let record = AnimationRecord::from_json(record_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid animation JSON: {e}")))?;
        let config = parse_config(config_json)?;
        let surface = JsSurface {
            draw_cell,
            frame_text,
        };
        let session = EditSession::new(&record, &config, surface).map_err(to_js_error)?;
        Ok(WasmEditor { session })
    }

    /// Create an editor on a single blank frame.
    #[wasm_bindgen]
    pub fn blank(
        title: &str,
        config_json: &str,
        draw_cell: js_sys::Function,
        frame_text: js_sys::Function,
    ) -> Result<WasmEditor, JsValue> {
        let config = parse_config(config_json)?;
        let surface = JsSurface {
            draw_cell,
            frame_text,
        };
        let session = EditSession::blank(title, &config, surface).map_err(to_js_error)?;
        Ok(WasmEditor { session })
    }

    /// Select paint color by index (0 background, 1 light, 2 medium, 3 dark).
    #[wasm_bindgen(js_name = selectColor)]
    pub fn select_color(&mut self, index: u8) {
        self.session.select_color(Color::from_index(index));
    }

    #[wasm_bindgen(js_name = selectedColor)]
    pub fn selected_color(&self) -> u8 {
        self.session.selected_color() as u8
    }

    /// Display value of a color index, for palette swatches.
    #[wasm_bindgen(js_name = colorValue)]
    pub fn color_value(&self, index: u8) -> String {
        self.session
            .renderer()
            .palette()
            .value(Color::from_index(index))
            .to_string()
    }

    /// Start a stroke at surface-local pixel coordinates. Returns true if a
    /// cell was painted.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_down(PointerInput::new(x, y)).is_some()
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_move(PointerInput::new(x, y)).is_some()
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.session.pointer_up();
    }

    #[wasm_bindgen(js_name = paintCell)]
    pub fn paint_cell(&mut self, row: usize, col: usize) -> Result<(), JsValue> {
        self.session.paint_cell(row, col).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = firstFrame)]
    pub fn first_frame(&mut self) {
        self.session.first_frame();
    }

    #[wasm_bindgen(js_name = prevFrame)]
    pub fn prev_frame(&mut self) {
        self.session.prev_frame();
    }

    #[wasm_bindgen(js_name = nextFrame)]
    pub fn next_frame(&mut self) {
        self.session.next_frame();
    }

    #[wasm_bindgen(js_name = lastFrame)]
    pub fn last_frame(&mut self) {
        self.session.last_frame();
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.session.clear_current_frame();
    }

    #[wasm_bindgen]
    pub fn copy(&mut self) {
        self.session.copy_current_frame();
    }

    #[wasm_bindgen]
    pub fn paste(&mut self) {
        self.session.paste_into_current_frame();
    }

    #[wasm_bindgen(js_name = deleteFrame)]
    pub fn delete_frame(&mut self) -> Result<(), JsValue> {
        self.session.delete_current_frame().map_err(to_js_error)
    }

    /// Dispatch a `KeyboardEvent.code`.
    ///
    /// Returns `{handle, delayMs}` when playback starts, the `{title, data}`
    /// record on save, `undefined` otherwise.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, code: &str) -> Result<JsValue, JsValue> {
        let Some(command) = Command::from_key(code) else {
            return Ok(JsValue::UNDEFINED);
        };
        match self.session.apply(command).map_err(to_js_error)? {
            CommandOutcome::Playing(ticket) => serde_wasm_bindgen::to_value(&TicketSnapshot {
                handle: ticket.handle.id() as f64,
                delay_ms: ticket.delay.as_millis() as f64,
            })
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
            CommandOutcome::Saved(record) => serde_wasm_bindgen::to_value(&record)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
            CommandOutcome::Done | CommandOutcome::Stopped => Ok(JsValue::UNDEFINED),
        }
    }

    /// Start playback from the first frame. Returns the tick handle; call
    /// `tick(handle, ...)` after `delayMs`.
    #[wasm_bindgen]
    pub fn play(&mut self, delay_ms: u32, looping: bool) -> f64 {
        let settings = PlaybackConfig {
            delay_ms: u64::from(delay_ms),
            looping,
        };
        self.session.play(&settings).handle.id() as f64
    }

    /// Show the next frame. Pass the current delay and loop controls; returns
    /// the delay before the next tick, or `undefined` when playback is over
    /// or the handle is stale.
    #[wasm_bindgen]
    pub fn tick(&mut self, handle: f64, delay_ms: u32, looping: bool) -> Option<f64> {
        let settings = PlaybackConfig {
            delay_ms: u64::from(delay_ms),
            looping,
        };
        match self
            .session
            .tick(TickHandle::from_id(handle as u64), &settings)
        {
            TickOutcome::Continue(delay) => Some(delay.as_millis() as f64),
            TickOutcome::Finished | TickOutcome::Cancelled => None,
        }
    }

    #[wasm_bindgen]
    pub fn stop(&mut self) -> bool {
        self.session.stop()
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Replace the animation with new wire data.
    #[wasm_bindgen(js_name = loadAnimation)]
    pub fn load_animation(&mut self, title: &str, data: &str) -> Result<(), JsValue> {
        self.session.load_animation(title, data).map_err(to_js_error)
    }

    /// Flat wire string of every frame.
    #[wasm_bindgen(js_name = exportData)]
    pub fn export_data(&self) -> String {
        self.session.export_wire_string()
    }

    /// `{title, data}` record for `POST /api/animations`.
    #[wasm_bindgen(js_name = getRecord)]
    pub fn get_record(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.session.to_record())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen(js_name = getTitle)]
    pub fn get_title(&self) -> String {
        self.session.title().to_string()
    }

    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&mut self, title: &str) {
        self.session.set_title(title);
    }

    #[wasm_bindgen(js_name = frameCount)]
    pub fn frame_count(&self) -> usize {
        self.session.store().frame_count()
    }

    /// Zero-based index of the current frame.
    #[wasm_bindgen]
    pub fn cursor(&self) -> usize {
        self.session.store().cursor()
    }

    /// Wire codes of the current frame.
    #[wasm_bindgen(js_name = frameData)]
    pub fn frame_data(&self) -> String {
        self.session.store().current_frame().to_codes()
    }
}
