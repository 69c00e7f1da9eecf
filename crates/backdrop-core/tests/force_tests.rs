use backdrop_core::config::BackdropConfig;
use backdrop_core::forces::drift::{cycle_angle, wobble_offset};
use backdrop_core::forces::pointer::{pointer_nudge, PointerState};
use backdrop_core::forces::shockwave::{shockwave_nudge, RingParams, Shockwave, ShockwaveRegistry};
use backdrop_core::forces::{wrap, wrap_coord};
use glam::Vec2;

fn ring() -> RingParams {
    RingParams {
        speed: 600.0,
        width: 80.0,
        force: 8.0,
        duration: 1.5,
    }
}

// ---------------------------------------------------------------------------
// Wraparound
// ---------------------------------------------------------------------------

#[test]
fn test_wrap_out_of_range_lands_inside() {
    for &v in &[-0.5_f32, -99.0, 100.0, 100.25, 150.0, -250.0, 399.0] {
        let w = wrap_coord(v, 100.0);
        assert!((0.0..100.0).contains(&w), "wrap({v}) = {w}");
    }
}

#[test]
fn test_wrap_in_range_is_noop() {
    for &v in &[0.0_f32, 0.001, 42.5, 99.999] {
        assert_eq!(wrap_coord(v, 100.0), v);
        assert_eq!(wrap_coord(wrap_coord(v, 100.0), 100.0), v);
    }
}

#[test]
fn test_wrap_is_idempotent() {
    let p = wrap(Vec2::new(-3.0, 205.0), 100.0, 200.0);
    assert_eq!(p, Vec2::new(97.0, 5.0));
    assert_eq!(wrap(p, 100.0, 200.0), p);
}

// ---------------------------------------------------------------------------
// Drift
// ---------------------------------------------------------------------------

#[test]
fn test_wobble_axes_are_independent() {
    let config = BackdropConfig::default();
    let w = wobble_offset(0.0, 0.0, 1.0, &config);
    // sin(0) on x, cos(0) on y
    assert!(w.x.abs() < 1e-6);
    assert!((w.y - 0.1).abs() < 1e-6);
}

#[test]
fn test_wobble_scales_with_layer() {
    let config = BackdropConfig::default();
    let near = wobble_offset(1.3, 0.7, 1.0, &config);
    let far = wobble_offset(1.3, 0.7, 0.3, &config);
    assert!((far - near * 0.3).length() < 1e-6);
}

#[test]
fn test_wobble_keeps_frame_resolution_after_long_uptime() {
    let config = BackdropConfig::default();
    let week = 7.0 * 24.0 * 3600.0;
    let xs: Vec<f32> = (0..8)
        .map(|k| wobble_offset(week + k as f64 / 60.0, 0.4, 1.0, &config).x)
        .collect();
    for pair in xs.windows(2) {
        assert_ne!(pair[0], pair[1], "wobble stalled: {xs:?}");
    }
}

#[test]
fn test_cycle_angle_reduces_into_one_turn() {
    let a = cycle_angle(1.0e6, 2.0);
    assert!((0.0..std::f32::consts::TAU).contains(&a), "angle = {a}");
    assert!((cycle_angle(0.25, 2.0) - 0.5).abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

#[test]
fn test_pointer_default_is_off_surface() {
    let mut pointer = PointerState::default();
    assert!(!pointer.is_present());
    pointer.move_to(Vec2::new(10.0, 20.0));
    assert!(pointer.is_present());
    pointer.leave();
    assert_eq!(pointer.position, PointerState::OFF_SURFACE);
}

#[test]
fn test_pointer_pulls_toward_pointer() {
    let nudge = pointer_nudge(Vec2::ZERO, Vec2::new(100.0, 0.0), 200.0, 0.012, 1.0, 1.0);
    assert!(nudge.x > 0.0);
    assert_eq!(nudge.y, 0.0);
    // (1 - 0.5) * 0.012 * 100
    assert!((nudge.x - 0.6).abs() < 1e-5);
}

#[test]
fn test_pointer_zero_at_and_beyond_radius() {
    let at = pointer_nudge(Vec2::ZERO, Vec2::new(200.0, 0.0), 200.0, 0.012, 1.0, 1.0);
    let beyond = pointer_nudge(Vec2::ZERO, Vec2::new(0.0, 350.0), 200.0, 0.012, 1.0, 1.0);
    assert_eq!(at, Vec2::ZERO);
    assert_eq!(beyond, Vec2::ZERO);
}

#[test]
fn test_pointer_zero_when_coincident() {
    let n = pointer_nudge(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 200.0, 0.012, 2.0, 1.0);
    assert_eq!(n, Vec2::ZERO);
}

#[test]
fn test_pointer_sentinel_never_reaches() {
    let n = pointer_nudge(Vec2::ZERO, PointerState::OFF_SURFACE, 400.0, 0.012, 2.0, 1.0);
    assert_eq!(n, Vec2::ZERO);
}

#[test]
fn test_pointer_scales_with_layer_and_dpr() {
    let base = pointer_nudge(Vec2::ZERO, Vec2::new(50.0, 0.0), 200.0, 0.012, 1.0, 1.0);
    let scaled = pointer_nudge(Vec2::ZERO, Vec2::new(50.0, 0.0), 200.0, 0.012, 2.0, 0.2);
    assert!((scaled.x - base.x * 0.4).abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Shockwave registry
// ---------------------------------------------------------------------------

#[test]
fn test_registry_keeps_three_most_recent() {
    let mut reg = ShockwaveRegistry::new(3, 1.5);
    let spawn_times = [0.0_f64, 0.1, 0.2, 0.3, 0.4];
    for (i, &t) in spawn_times.iter().enumerate() {
        reg.spawn(Vec2::splat(i as f32), t);
    }
    assert_eq!(reg.len(), 3);
    let times: Vec<f64> = reg.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![0.2, 0.3, 0.4]);
    assert_eq!(reg.iter().next().map(|s| s.origin), Some(Vec2::splat(2.0)));
}

#[test]
fn test_registry_sweep_boundary() {
    let mut reg = ShockwaveRegistry::new(3, 1.5);
    reg.spawn(Vec2::ZERO, 0.0); // age 1.5 at now = 1.5
    reg.spawn(Vec2::ONE, 0.25); // age 1.25
    reg.sweep(1.5);

    assert_eq!(reg.len(), 1);
    assert_eq!(reg.iter().next().map(|s| s.time), Some(0.25));

    reg.sweep(10.0);
    assert!(reg.is_empty());
}

#[test]
fn test_registry_zero_capacity_ignores_spawn() {
    let mut reg = ShockwaveRegistry::new(0, 1.5);
    reg.spawn(Vec2::ZERO, 0.0);
    assert!(reg.is_empty());
}

// ---------------------------------------------------------------------------
// Shockwave impulse
// ---------------------------------------------------------------------------

#[test]
fn test_shockwave_pushes_outward_on_ring() {
    let wave = Shockwave { origin: Vec2::ZERO, time: 0.0 };
    // ring radius at t = 0.5 is 300
    let n = shockwave_nudge(Vec2::new(300.0, 0.0), &wave, 0.5, &ring());
    assert!(n.x > 0.0, "should push away from origin, got {n}");
    // (1 - 0) * (1 - 1/3) * 8
    assert!((n.x - 8.0 * (2.0 / 3.0)).abs() < 1e-4);
}

#[test]
fn test_shockwave_zero_outside_band() {
    let wave = Shockwave { origin: Vec2::ZERO, time: 0.0 };
    let inside = shockwave_nudge(Vec2::new(100.0, 0.0), &wave, 0.5, &ring());
    let outside = shockwave_nudge(Vec2::new(500.0, 0.0), &wave, 0.5, &ring());
    assert_eq!(inside, Vec2::ZERO);
    assert_eq!(outside, Vec2::ZERO);
}

#[test]
fn test_shockwave_fades_with_age() {
    let wave = Shockwave { origin: Vec2::ZERO, time: 0.0 };
    let young = shockwave_nudge(Vec2::new(60.0, 0.0), &wave, 0.1, &ring()).length();
    let old = shockwave_nudge(Vec2::new(720.0, 0.0), &wave, 1.2, &ring()).length();
    assert!(young > old && old > 0.0, "young = {young}, old = {old}");
}

#[test]
fn test_shockwave_expired_has_no_effect() {
    let wave = Shockwave { origin: Vec2::ZERO, time: 0.0 };
    let n = shockwave_nudge(Vec2::new(900.0, 0.0), &wave, 1.5, &ring());
    assert_eq!(n, Vec2::ZERO);
}

#[test]
fn test_shockwave_skips_particle_at_origin() {
    let wave = Shockwave { origin: Vec2::new(5.0, 5.0), time: 0.0 };
    let n = shockwave_nudge(Vec2::new(5.0, 5.0), &wave, 0.0, &ring());
    assert_eq!(n, Vec2::ZERO);
}
