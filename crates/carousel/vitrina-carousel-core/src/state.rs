//! Owned carousel state: mode machine, rows, and per-item smoothed memory.

use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::outputs::Vec3;

/// Address of one item slot: row index, then item index within the row.
///
/// Indices refer to the row list *after* rebuild dropped any empty input
/// rows; see [`Carousel::rebuild`](crate::Carousel::rebuild).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub row: usize,
    pub index: usize,
}

/// Global interaction mode.
///
/// `Selected` carries the selection pointer so "selected but nothing is
/// selected" is unrepresentable. Hover is tracked separately and only
/// applies while `Scrolling`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Scrolling,
    Selected(SlotRef),
}

/// One vertical carousel band. Scroll position and velocity are arc-length
/// quantities (metres, metres/second) so they share units with positions.
#[derive(Debug)]
pub struct Row<P> {
    pub scroll: f32,
    pub velocity: f32,
    /// While true, snapping is suppressed (an external drag owns the row).
    pub dragging: bool,
    pub items: Vec<ItemSlot<P>>,
}

impl<P> Row<P> {
    pub(crate) fn new(items: Vec<ItemSlot<P>>) -> Self {
        Self {
            scroll: 0.0,
            velocity: 0.0,
            dragging: false,
            items,
        }
    }
}

/// One item slot: the opaque caller payload plus the smoothed pose state
/// carried across frames so scale/rotation ease toward targets instead of
/// snapping.
#[derive(Debug)]
pub struct ItemSlot<P> {
    pub payload: P,
    /// Last exported position offset, metres.
    pub offset: Vec3,
    /// Smoothed pitch, radians.
    pub pitch: f32,
    /// Smoothed yaw, radians.
    pub yaw: f32,
    /// Smoothed scale, unitless.
    pub scale: f32,
    pub visible: bool,
}

impl<P> ItemSlot<P> {
    pub(crate) fn new(payload: P, cfg: &CarouselConfig) -> Self {
        Self {
            payload,
            offset: Vec3::default(),
            pitch: 0.0,
            yaw: 0.0,
            scale: cfg.base_scale,
            visible: true,
        }
    }
}
