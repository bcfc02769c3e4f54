use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vitrina_carousel_core::{
    rows_from_value, Carousel, CarouselConfig, ConfigPatch, Outputs,
};

/// Browser-facing carousel. Item payloads are arbitrary JSON values echoed
/// back unchanged in the per-frame transform records; the page drives
/// `update(dt)` from its own requestAnimationFrame loop and applies the
/// returned transforms to its scene objects.
#[wasm_bindgen]
pub struct VitrinaCarousel {
    core: Carousel<serde_json::Value>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl VitrinaCarousel {
    /// Create a new carousel. Pass a JSON config object or undefined/null
    /// for defaults.
    /// Example:
    ///   new VitrinaCarousel({ radius: 1.2, snap_enabled: false })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VitrinaCarousel, JsError> {
        console_error_panic_hook::set_once();

        let cfg: CarouselConfig = if jsvalue_is_undefined_or_null(&config) {
            CarouselConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(VitrinaCarousel {
            core: Carousel::new(cfg),
        })
    }

    /// Patch the live configuration. Only the fields present in `patch`
    /// change.
    #[wasm_bindgen]
    pub fn configure(&mut self, patch: JsValue) -> Result<(), JsError> {
        if jsvalue_is_undefined_or_null(&patch) {
            return Ok(());
        }
        let patch: ConfigPatch =
            swb::from_value(patch).map_err(|e| JsError::new(&format!("patch error: {e}")))?;
        self.core.configure(&patch);
        Ok(())
    }

    /// Replace all rows: `rebuild([[item00, item01, ...], [item10, ...]])`.
    /// A malformed shape is rejected and the existing rows stay untouched.
    /// Empty input rows are dropped, shifting the surviving row indices.
    #[wasm_bindgen]
    pub fn rebuild(&mut self, rows: JsValue) -> Result<(), JsError> {
        let value: serde_json::Value =
            swb::from_value(rows).map_err(|e| JsError::new(&format!("rebuild error: {e}")))?;
        let rows2d = rows_from_value(value).map_err(|e| JsError::new(&format!("{e}")))?;
        self.core.rebuild(rows2d);
        Ok(())
    }

    /// Advance by dt (seconds) and return this frame's transform records.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let out: &Outputs<serde_json::Value> = self.core.update(dt);
        swb::to_value(&out.records).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Displace a row's scroll by metres of arc length.
    #[wasm_bindgen(js_name = scroll_by)]
    pub fn scroll_by(&mut self, row: u32, delta_metres: f32) {
        self.core.scroll_by(row as usize, delta_metres);
    }

    /// Set a row's scroll velocity in metres/second.
    #[wasm_bindgen(js_name = set_scroll_velocity)]
    pub fn set_scroll_velocity(&mut self, row: u32, metres_per_second: f32) {
        self.core.set_scroll_velocity(row as usize, metres_per_second);
    }

    /// Displace a row's scroll by items (converted at the current geometry).
    #[wasm_bindgen(js_name = scroll_by_items)]
    pub fn scroll_by_items(&mut self, row: u32, delta_items: f32) {
        self.core.scroll_by_items(row as usize, delta_items);
    }

    /// Set a row's scroll velocity in items/second.
    #[wasm_bindgen(js_name = set_scroll_velocity_items)]
    pub fn set_scroll_velocity_items(&mut self, row: u32, items_per_second: f32) {
        self.core.set_scroll_velocity_items(row as usize, items_per_second);
    }

    #[wasm_bindgen]
    pub fn hover(&mut self, row: u32, index: u32) {
        self.core.hover(row as usize, index as usize);
    }

    #[wasm_bindgen(js_name = clear_hover)]
    pub fn clear_hover(&mut self) {
        self.core.clear_hover();
    }

    #[wasm_bindgen]
    pub fn select(&mut self, row: u32, index: u32) {
        self.core.select(row as usize, index as usize);
    }

    #[wasm_bindgen]
    pub fn deselect(&mut self) {
        self.core.deselect();
    }

    /// Mark a row as externally dragged; snapping pauses while set.
    #[wasm_bindgen(js_name = set_dragging)]
    pub fn set_dragging(&mut self, row: u32, dragging: bool) {
        self.core.set_dragging(row as usize, dragging);
    }

    /// Align a row's scroll to the nearest item slot immediately.
    #[wasm_bindgen(js_name = snap_nearest)]
    pub fn snap_nearest(&mut self, row: u32) {
        self.core.snap_nearest(row as usize);
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
