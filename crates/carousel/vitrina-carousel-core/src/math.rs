//! Small numeric helpers shared by row advance and item pose computation.

/// Time-correct exponential approach of `current` toward `target`.
///
/// `current + (target - current) * (1 - exp(-rate * dt))` is a first-order
/// critically-damped filter: frame-rate independent, asymptotic, never
/// overshoots. Used for scroll snapping and all smoothed item state.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-rate * dt).exp())
}

/// Wrap a signed distance into the half-open window `[-period/2, period/2)`.
///
/// Standard circular wrap, so an item's shortest angular distance to the
/// view center is consistent across full revolutions.
#[inline]
pub fn wrap_delta(delta: f32, period: f32) -> f32 {
    delta - period * ((delta + period * 0.5) / period).floor()
}
