//! Scalar and vector helpers shared by physics, input and tactics.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Clamps `value` to `[0, 1]`.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Sign with zero treated as positive, so the result is always `±1`.
#[inline]
pub fn sign(value: f32) -> f32 {
    if value >= 0.0 { 1.0 } else { -1.0 }
}

/// Position of `value` between `a` and `b`, clamped to `[0, 1]`.
///
/// Returns `0.0` for a degenerate range.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    clamp01((value - a) / (b - a))
}

/// Wraps an angle in radians to `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Interpolates between two angles (radians) along the shortest arc.
///
/// `t` is clamped to `[0, 1]`.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let delta = wrap_angle(to - from);
    wrap_angle(from + delta * clamp01(t))
}

/// Critically damped spring toward `target`.
///
/// `velocity` carries the spring state between calls. Never overshoots the
/// target.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(1.0e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// Counter-clockwise perpendicular `(-y, x)`.
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    v.perp()
}
