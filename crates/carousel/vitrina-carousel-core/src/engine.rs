//! Engine: data ownership and the public per-frame API.
//!
//! A [`Carousel`] owns its configuration, mode machine, rows, and a
//! retained output buffer. Hosts call [`Carousel::update`] once per frame
//! and apply the returned transforms; everything else is a synchronous
//! state mutation read by the next update.

use crate::config::{CarouselConfig, ConfigPatch};
use crate::layout::{advance_row, RowFrame};
use crate::outputs::Outputs;
use crate::state::{ItemSlot, Mode, Row, SlotRef};

/// The carousel simulation. `P` is the opaque per-item payload echoed back
/// in every transform record; hosts typically use an id or a JSON value.
///
/// Single logical writer: all methods take `&mut self` and none suspends,
/// so confine an instance to one thread (or wrap it in external mutual
/// exclusion) and drive it from the frame loop.
#[derive(Debug)]
pub struct Carousel<P> {
    cfg: CarouselConfig,
    mode: Mode,
    hovered: Option<SlotRef>,
    rows: Vec<Row<P>>,

    // Per-tick outputs, cleared and refilled by update().
    outputs: Outputs<P>,
}

impl<P: Clone> Default for Carousel<P> {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl<P: Clone> Carousel<P> {
    /// Create a new carousel with the given config.
    pub fn new(cfg: CarouselConfig) -> Self {
        Self {
            cfg,
            mode: Mode::Scrolling,
            hovered: None,
            rows: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    /// Overlay a partial configuration patch. Takes effect from the next
    /// update; geometry-dependent conversions always read the live config.
    pub fn configure(&mut self, patch: &ConfigPatch) {
        patch.apply_to(&mut self.cfg);
    }

    /// Replace all rows and items.
    ///
    /// This is a hard reset: every surviving row gets fresh scroll state
    /// and every item fresh smoothed state. Input rows with zero items are
    /// dropped entirely, so surviving row indices shift relative to the
    /// input when it contains empty rows; hover/selection pointers are not
    /// cleared here and stale ones are the caller's to fix.
    pub fn rebuild(&mut self, rows2d: Vec<Vec<P>>) {
        self.rows.clear();

        let input_rows = rows2d.len();
        for (r, payloads) in rows2d.into_iter().enumerate() {
            if payloads.is_empty() {
                log::warn!("rebuild: dropping empty input row {r}");
                continue;
            }
            let items = payloads
                .into_iter()
                .map(|p| ItemSlot::new(p, &self.cfg))
                .collect();
            self.rows.push(Row::new(items));
        }

        log::debug!("rebuild: {} rows built from {input_rows} input rows", self.rows.len());
    }

    /// Advance the simulation by `dt` seconds and compute transforms for
    /// all items, row-major then index-major. Deterministic for identical
    /// state and `dt`; no clock is read.
    pub fn update(&mut self, dt: f32) -> &Outputs<P> {
        self.outputs.clear();

        let scrolling = matches!(self.mode, Mode::Scrolling);
        for (r, row) in self.rows.iter_mut().enumerate() {
            let hovered = match (scrolling, self.hovered) {
                (true, Some(h)) if h.row == r => Some(h.index),
                _ => None,
            };
            let selected = match self.mode {
                Mode::Selected(s) if s.row == r => Some(s.index),
                _ => None,
            };
            let frame = RowFrame {
                row_index: r,
                scrolling,
                hovered,
                selected,
            };
            advance_row(&self.cfg, frame, row, dt, &mut self.outputs);
        }

        &self.outputs
    }

    /// Displace a row's scroll by `delta_metres` of arc length.
    /// No-op on a nonexistent row.
    pub fn scroll_by(&mut self, row: usize, delta_metres: f32) {
        if let Some(r) = self.rows.get_mut(row) {
            r.scroll += delta_metres;
        }
    }

    /// Set a row's scroll velocity in metres/second.
    pub fn set_scroll_velocity(&mut self, row: usize, metres_per_second: f32) {
        if let Some(r) = self.rows.get_mut(row) {
            r.velocity = metres_per_second;
        }
    }

    /// Displace a row's scroll by whole/fractional items, converting with
    /// the arc-length-per-item factor at call time (the config may change
    /// between calls, so the conversion is intentionally not frame-locked).
    pub fn scroll_by_items(&mut self, row: usize, delta_items: f32) {
        let s_step = self.cfg.arc_length_per_item();
        self.scroll_by(row, delta_items * s_step);
    }

    /// Set a row's scroll velocity in items/second.
    pub fn set_scroll_velocity_items(&mut self, row: usize, items_per_second: f32) {
        let s_step = self.cfg.arc_length_per_item();
        self.set_scroll_velocity(row, items_per_second * s_step);
    }

    /// Mark an item as hovered. Emphasis applies only while scrolling.
    pub fn hover(&mut self, row: usize, index: usize) {
        self.hovered = Some(SlotRef { row, index });
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Select an item, switching the whole carousel into selected mode.
    /// Unconditional; any previous selection is replaced.
    pub fn select(&mut self, row: usize, index: usize) {
        self.mode = Mode::Selected(SlotRef { row, index });
    }

    /// Return to scrolling mode and clear the selection pointer.
    pub fn deselect(&mut self) {
        self.mode = Mode::Scrolling;
    }

    /// Mark a row as externally dragged; snapping is suppressed while set.
    pub fn set_dragging(&mut self, row: usize, dragging: bool) {
        if let Some(r) = self.rows.get_mut(row) {
            r.dragging = dragging;
        }
    }

    /// Force a row's scroll onto the nearest item-aligned position
    /// immediately, without easing.
    pub fn snap_nearest(&mut self, row: usize) {
        let s_step = self.cfg.arc_length_per_item();
        if let Some(r) = self.rows.get_mut(row) {
            let u = r.scroll / s_step;
            r.scroll = u.round() * s_step;
        }
    }

    // ------------------------- read accessors -------------------------

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn item_count(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(|r| r.items.len())
    }

    /// Current scroll position of a row, metres of arc length.
    pub fn row_scroll(&self, row: usize) -> Option<f32> {
        self.rows.get(row).map(|r| r.scroll)
    }

    /// Current velocity of a row, metres/second.
    pub fn row_velocity(&self, row: usize) -> Option<f32> {
        self.rows.get(row).map(|r| r.velocity)
    }

    /// Arc length per item at the current configuration.
    pub fn arc_length_per_item(&self) -> f32 {
        self.cfg.arc_length_per_item()
    }

    /// Whether the carousel is in selected mode and, if so, for which slot.
    pub fn selected(&self) -> Option<SlotRef> {
        match self.mode {
            Mode::Selected(s) => Some(s),
            Mode::Scrolling => None,
        }
    }

    pub fn hovered(&self) -> Option<SlotRef> {
        self.hovered
    }
}
