//! Per-row frame advance and per-item pose computation.
//!
//! Each frame a row is advanced in order: motion integration (or
//! settle-to-rest outside scrolling mode), optional snapping, then one pose
//! per item: visibility cull, concave-arc placement, edge falloff,
//! hover/select emphasis, velocity lean, and exponential smoothing into the
//! slot's persistent state.

use crate::config::CarouselConfig;
use crate::math::{approach, wrap_delta};
use crate::outputs::{Outputs, RotationDeg, TransformRecord, Vec3};
use crate::state::Row;

/// Tolerance added to the half-FOV cull boundary, radians.
const VISIBILITY_MARGIN_RAD: f32 = 0.20;
/// Snapping runs slightly softer than the configured spring.
const SNAP_RATE_FACTOR: f32 = 0.8;
/// Velocity settle rate while an item is selected, 1/seconds.
const SELECT_SETTLE_RATE: f32 = 8.0;
/// Selected items are pulled to this fraction of the radius, left of center.
const SELECT_PULL_X_FRACTION: f32 = 0.35;
/// Amplitude of the sinusoidal pitch tilt, radians.
const PITCH_AMPLITUDE: f32 = 0.08;

/// Row-local view of the global interaction state for one frame.
#[derive(Copy, Clone, Debug)]
pub(crate) struct RowFrame {
    pub row_index: usize,
    /// True while the global mode is `Scrolling`.
    pub scrolling: bool,
    /// Hovered item index in this row, already gated on mode.
    pub hovered: Option<usize>,
    /// Selected item index in this row, `Some` only in `Selected` mode.
    pub selected: Option<usize>,
}

/// Advance one row by `dt` seconds and append one transform record per item.
pub(crate) fn advance_row<P: Clone>(
    cfg: &CarouselConfig,
    frame: RowFrame,
    row: &mut Row<P>,
    dt: f32,
    out: &mut Outputs<P>,
) {
    let n = row.items.len();
    if n == 0 {
        return;
    }

    if frame.scrolling {
        row.scroll += row.velocity * dt;
        row.velocity *= (-cfg.friction * dt).exp();

        if cfg.snap_enabled && !row.dragging {
            let s_step = cfg.arc_length_per_item();
            let u = row.scroll / s_step;
            let target = u.round() * s_step;
            row.scroll = approach(row.scroll, target, cfg.spring * SNAP_RATE_FACTOR, dt);
        }
    } else {
        // Selection froze the row; bleed off any remaining velocity fast.
        row.velocity = approach(row.velocity, 0.0, SELECT_SETTLE_RATE, dt);
    }

    let step = cfg.effective_step();
    let s_step = cfg.arc_length_per_item();
    let radius = cfg.radius;
    let half_fov = cfg.half_fov_rad().max(f32::EPSILON);
    let u_center = row.scroll / s_step;

    let lean = (-row.velocity * cfg.lean_factor).clamp(-cfg.max_lean, cfg.max_lean);

    for j in 0..n {
        let delta = wrap_delta(j as f32 - u_center, n as f32);
        let theta = delta * step;

        let visible = theta.abs() <= half_fov + VISIBILITY_MARGIN_RAD;
        let slot = &mut row.items[j];
        slot.visible = visible;
        if !visible {
            // Smoothed state is left untouched so the item eases back in
            // from where it last was.
            out.push(TransformRecord {
                row: frame.row_index,
                index: j,
                item: slot.payload.clone(),
                visible: false,
                position: None,
                rotation: None,
                scale: None,
            });
            continue;
        }

        // Concave arc: center item closest to the viewer, edges recede.
        let x_arc = radius * theta.sin();
        let depth = radius * (1.0 - theta.cos());
        let y = -(frame.row_index as f32) * cfg.row_spacing;

        let fall = 1.0 - cfg.scale_falloff * (theta.abs() / half_fov).clamp(0.0, 1.0);
        let mut target_scale = cfg.base_scale * fall;
        let mut z_closer = 0.0;

        if frame.hovered == Some(j) {
            target_scale *= cfg.hover_scale;
            z_closer += cfg.hover_z_closer;
        }

        let (x, z) = if frame.selected == Some(j) {
            target_scale = approach(slot.scale, cfg.select_scale, cfg.spring, dt);
            z_closer += cfg.select_z_closer;
            // Pull left-of-center and toward the viewer, eased from the
            // persisted offset so repeated frames converge.
            (
                approach(slot.offset.x, -radius * SELECT_PULL_X_FRACTION, cfg.spring, dt),
                approach(slot.offset.z, -z_closer, cfg.spring, dt),
            )
        } else {
            (x_arc, depth - z_closer)
        };

        let yaw = -theta + lean;
        let pitch = PITCH_AMPLITUDE * theta.sin();

        slot.yaw = approach(slot.yaw, yaw, cfg.spring, dt);
        slot.pitch = approach(slot.pitch, pitch, cfg.spring, dt);
        slot.scale = approach(slot.scale, target_scale, cfg.spring, dt);
        slot.offset = Vec3 { x, y, z };

        out.push(TransformRecord {
            row: frame.row_index,
            index: j,
            item: slot.payload.clone(),
            visible: true,
            position: Some(slot.offset),
            rotation: Some(RotationDeg {
                pitch: slot.pitch.to_degrees(),
                yaw: slot.yaw.to_degrees(),
                roll: 0.0,
            }),
            scale: Some(slot.scale),
        });
    }
}
