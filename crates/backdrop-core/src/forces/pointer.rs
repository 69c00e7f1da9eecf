use glam::Vec2;

/// Pointer position in device pixels.
///
/// When no pointer hovers the page the coordinates sit at an off-surface
/// sentinel far enough away that no particle is ever in range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
}

impl PointerState {
    pub const OFF_SURFACE: Vec2 = Vec2::new(-9999.0, -9999.0);

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn leave(&mut self) {
        self.position = Self::OFF_SURFACE;
    }

    /// Whether the pointer is over the surface (used for the glow overlay).
    pub fn is_present(&self) -> bool {
        self.position.x > 0.0 && self.position.y > 0.0
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Self::OFF_SURFACE,
        }
    }
}

/// One-frame positional nudge pulling a particle toward the pointer.
///
/// Zero unless `0 < distance < radius`. The nudge is linear in the offset
/// and fades to nothing at the edge of the radius.
///
/// # Arguments
///
/// * `radius` - Influence radius in device pixels.
/// * `strength` - Base pull per frame.
/// * `dpr` - Device pixel ratio (already capped).
/// * `layer_factor` - Depth layer pointer sensitivity.
pub fn pointer_nudge(
    pos: Vec2,
    pointer: Vec2,
    radius: f32,
    strength: f32,
    dpr: f32,
    layer_factor: f32,
) -> Vec2 {
    let delta = pointer - pos;
    let dist = delta.length();
    if !(dist < radius && dist > 0.0) {
        return Vec2::ZERO;
    }
    let force = (1.0 - dist / radius) * strength * dpr * layer_factor;
    delta * force
}
