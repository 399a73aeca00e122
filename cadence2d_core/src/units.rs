//! Conversions between display coordinates and simulation coordinates.
//!
//! Hosts work in pixel-like display units with the y axis pointing down, the
//! convention of 2D scene graphs. The engine works in meters with the y axis
//! pointing up. Every position or distance crossing the boundary is divided
//! (inbound) or multiplied (outbound) by [`SCALE_RATIO`], and the y component
//! is negated. Angles negate for the same mirroring. Accelerations (gravity)
//! only flip; they are specified in m/s² on both sides.

use nalgebra::Vector2;

/// Display units per simulation meter.
///
/// 32 pixels to the meter keeps typical sprite-sized bodies inside the size
/// range the engine solves well. Fixed at build time.
pub const SCALE_RATIO: f32 = 32.0;

/// Scalar distance, display → simulation.
#[inline]
pub fn to_meters(pixels: f32) -> f32 {
    pixels / SCALE_RATIO
}

/// Scalar distance, simulation → display.
#[inline]
pub fn to_pixels(meters: f32) -> f32 {
    meters * SCALE_RATIO
}

/// Position or displacement, display → simulation (scales and flips y).
#[inline]
pub fn point_to_sim(p: Vector2<f32>) -> Vector2<f32> {
    Vector2::new(p.x / SCALE_RATIO, -p.y / SCALE_RATIO)
}

/// Position or displacement, simulation → display (scales and flips y).
#[inline]
pub fn point_to_display(p: Vector2<f32>) -> Vector2<f32> {
    Vector2::new(p.x * SCALE_RATIO, -p.y * SCALE_RATIO)
}

/// Acceleration (gravity), display → simulation. Unscaled, y flipped.
#[inline]
pub fn accel_to_sim(a: Vector2<f32>) -> Vector2<f32> {
    Vector2::new(a.x, -a.y)
}

/// Rotation angle, display (clockwise-positive) ↔ simulation
/// (counterclockwise-positive). Self-inverse.
#[inline]
pub fn flip_angle(radians: f32) -> f32 {
    -radians
}
