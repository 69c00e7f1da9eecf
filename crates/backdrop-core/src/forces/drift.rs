use crate::config::BackdropConfig;
use glam::Vec2;
use std::f64::consts::TAU;

/// Angle of an oscillator running at `freq` rad/s after `time` seconds,
/// reduced into [0, 2π) before narrowing to `f32`.
#[inline]
pub fn cycle_angle(time: f64, freq: f32) -> f32 {
    (time * freq as f64).rem_euclid(TAU) as f32
}

/// Sinusoidal wobble added to the base drift each frame.
///
/// x and y use different frequencies and phase multipliers so particles
/// sharing a phase still trace different paths.
#[inline]
pub fn wobble_offset(time: f64, phase: f32, wobble_scale: f32, config: &BackdropConfig) -> Vec2 {
    let amp = config.wobble_amplitude * wobble_scale;
    Vec2::new(
        (cycle_angle(time, config.wobble_freq_x) + phase).sin() * amp,
        (cycle_angle(time, config.wobble_freq_y) + phase * config.wobble_phase_y).cos() * amp,
    )
}

/// Ambient per-frame displacement: constant drift plus wobble.
#[inline]
pub fn drift_step(
    velocity: Vec2,
    time: f64,
    phase: f32,
    wobble_scale: f32,
    config: &BackdropConfig,
) -> Vec2 {
    velocity + wobble_offset(time, phase, wobble_scale, config)
}
