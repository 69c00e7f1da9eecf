pub mod drift;
pub mod pointer;
pub mod shockwave;

use glam::Vec2;

/// Toroidal wrap of one coordinate into `[0, extent)`.
///
/// Values already in range are returned unchanged. A non-positive or
/// non-finite extent leaves the value untouched.
#[inline]
pub fn wrap_coord(v: f32, extent: f32) -> f32 {
    if !(extent > 0.0) || !extent.is_finite() {
        return v;
    }
    if (0.0..extent).contains(&v) {
        return v;
    }
    let r = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if r >= extent {
        0.0
    } else {
        r
    }
}

/// Wrap a position onto the `width` x `height` torus.
#[inline]
pub fn wrap(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_coord(pos.x, width), wrap_coord(pos.y, height))
}
