//! Carousel configuration: geometry, spacing, emphasis, and motion feel.

use serde::{Deserialize, Serialize};

/// Floor applied to the configured radius wherever it divides or scales an
/// angular quantity; a radius of zero would make the angle/arc-length
/// conversion degenerate.
pub const MIN_RADIUS: f32 = 0.01;

/// One shared configuration read by every row. All lengths are metres,
/// angles radians unless a field name says otherwise.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Arc radius; smaller = stronger wrap.
    pub radius: f32,
    /// Total horizontal field of view, degrees.
    pub fov_deg: f32,

    /// Vertical distance between stacked rows.
    pub row_spacing: f32,

    /// When true, the angular step is derived from item width + gap so
    /// neighbours cannot overlap even at the largest emphasis scale.
    pub auto_spacing: bool,
    /// Visual item width at scale = 1.
    pub item_width_m: f32,
    /// Gap between neighbouring items.
    pub gap_m: f32,
    /// Fallback angular step when `auto_spacing` is off (or larger).
    pub item_angle_step: f32,

    pub base_scale: f32,
    pub hover_scale: f32,
    pub select_scale: f32,
    /// Fraction by which scale shrinks toward the view edges.
    pub scale_falloff: f32,
    /// Metres toward the viewer on hover.
    pub hover_z_closer: f32,
    /// Metres toward the viewer on select.
    pub select_z_closer: f32,

    /// Velocity damping per second (exact exponential decay).
    pub friction: f32,
    /// Exponential approach rate for snapping and smoothed item state.
    pub spring: f32,
    /// Radians of lean per (metre/second) of row velocity.
    pub lean_factor: f32,
    /// Clamp on the velocity lean term.
    pub max_lean: f32,
    pub snap_enabled: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            radius: 1.00,
            fov_deg: 150.0,
            row_spacing: 0.42,
            auto_spacing: true,
            item_width_m: 0.50,
            gap_m: 0.25,
            item_angle_step: 0.26,
            base_scale: 1.00,
            hover_scale: 1.25,
            select_scale: 1.65,
            scale_falloff: 0.30,
            hover_z_closer: 0.12,
            select_z_closer: 0.28,
            friction: 4.5,
            spring: 12.0,
            lean_factor: 0.11,
            max_lean: 0.35,
            snap_enabled: true,
        }
    }
}

impl CarouselConfig {
    /// Half the field of view, radians.
    #[inline]
    pub fn half_fov_rad(&self) -> f32 {
        self.fov_deg.to_radians() * 0.5
    }

    /// Angular step (radians) between neighbouring items.
    ///
    /// With auto-spacing the step is floored so items do not overlap even
    /// when one is enlarged to the worst-case emphasis scale.
    pub fn effective_step(&self) -> f32 {
        if !self.auto_spacing {
            return self.item_angle_step;
        }
        let max_scale = (self.base_scale * self.hover_scale).max(self.select_scale);
        let item_width_at_max = self.item_width_m * max_scale;
        let min_step = (item_width_at_max + self.gap_m) / self.radius.max(MIN_RADIUS);
        self.item_angle_step.max(min_step)
    }

    /// Arc length (metres) per item at the current radius: `s = R * theta`.
    #[inline]
    pub fn arc_length_per_item(&self) -> f32 {
        self.radius.max(MIN_RADIUS) * self.effective_step()
    }
}

/// Partial configuration update; `None` fields keep their current value.
/// Applied between frames via [`Carousel::configure`](crate::Carousel::configure).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigPatch {
    #[serde(default)]
    pub radius: Option<f32>,
    #[serde(default)]
    pub fov_deg: Option<f32>,
    #[serde(default)]
    pub row_spacing: Option<f32>,
    #[serde(default)]
    pub auto_spacing: Option<bool>,
    #[serde(default)]
    pub item_width_m: Option<f32>,
    #[serde(default)]
    pub gap_m: Option<f32>,
    #[serde(default)]
    pub item_angle_step: Option<f32>,
    #[serde(default)]
    pub base_scale: Option<f32>,
    #[serde(default)]
    pub hover_scale: Option<f32>,
    #[serde(default)]
    pub select_scale: Option<f32>,
    #[serde(default)]
    pub scale_falloff: Option<f32>,
    #[serde(default)]
    pub hover_z_closer: Option<f32>,
    #[serde(default)]
    pub select_z_closer: Option<f32>,
    #[serde(default)]
    pub friction: Option<f32>,
    #[serde(default)]
    pub spring: Option<f32>,
    #[serde(default)]
    pub lean_factor: Option<f32>,
    #[serde(default)]
    pub max_lean: Option<f32>,
    #[serde(default)]
    pub snap_enabled: Option<bool>,
}

impl ConfigPatch {
    /// Overlay this patch onto `cfg`, field by field.
    pub fn apply_to(&self, cfg: &mut CarouselConfig) {
        if let Some(v) = self.radius {
            cfg.radius = v;
        }
        if let Some(v) = self.fov_deg {
            cfg.fov_deg = v;
        }
        if let Some(v) = self.row_spacing {
            cfg.row_spacing = v;
        }
        if let Some(v) = self.auto_spacing {
            cfg.auto_spacing = v;
        }
        if let Some(v) = self.item_width_m {
            cfg.item_width_m = v;
        }
        if let Some(v) = self.gap_m {
            cfg.gap_m = v;
        }
        if let Some(v) = self.item_angle_step {
            cfg.item_angle_step = v;
        }
        if let Some(v) = self.base_scale {
            cfg.base_scale = v;
        }
        if let Some(v) = self.hover_scale {
            cfg.hover_scale = v;
        }
        if let Some(v) = self.select_scale {
            cfg.select_scale = v;
        }
        if let Some(v) = self.scale_falloff {
            cfg.scale_falloff = v;
        }
        if let Some(v) = self.hover_z_closer {
            cfg.hover_z_closer = v;
        }
        if let Some(v) = self.select_z_closer {
            cfg.select_z_closer = v;
        }
        if let Some(v) = self.friction {
            cfg.friction = v;
        }
        if let Some(v) = self.spring {
            cfg.spring = v;
        }
        if let Some(v) = self.lean_factor {
            cfg.lean_factor = v;
        }
        if let Some(v) = self.max_lean {
            cfg.max_lean = v;
        }
        if let Some(v) = self.snap_enabled {
            cfg.snap_enabled = v;
        }
    }
}
