use crate::render::Rgba;

/// Number of depth layers used for the parallax effect.
pub const DEPTH_LAYERS: usize = 3;

/// Per-layer multipliers applied on top of the base tunables.
///
/// Layer 0 is the farthest (smallest, slowest, dimmest) and layer 2 the
/// nearest. The table is static for the lifetime of a simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthScale {
    pub radius: f32,
    pub speed: f32,
    pub brightness: f32,
    pub wobble: f32,
    pub pointer: f32,
}

pub const DEPTH_SCALES: [DepthScale; DEPTH_LAYERS] = [
    DepthScale { radius: 0.4, speed: 0.4, brightness: 0.4, wobble: 0.3, pointer: 0.2 },
    DepthScale { radius: 0.7, speed: 0.7, brightness: 0.7, wobble: 0.7, pointer: 0.6 },
    DepthScale { radius: 1.0, speed: 1.0, brightness: 1.0, wobble: 1.0, pointer: 1.0 },
];

/// All tunables of the background animation.
///
/// Distances are in logical (CSS) pixels and get multiplied by the device
/// pixel ratio at the point of use. Times are in seconds.
#[derive(Clone, Debug)]
pub struct BackdropConfig {
    pub layer_counts: [usize; DEPTH_LAYERS],
    pub depth_scales: [DepthScale; DEPTH_LAYERS],
    pub max_device_pixel_ratio: f32,

    // Motion
    pub base_speed: f32,
    pub wobble_amplitude: f32,
    pub wobble_freq_x: f32,
    pub wobble_freq_y: f32,
    pub wobble_phase_y: f32,

    // Pointer
    pub pointer_radius: f32,
    pub pointer_strength: f32,

    // Shockwaves
    pub shockwave_speed: f32,
    pub shockwave_force: f32,
    pub shockwave_duration: f32,
    pub shockwave_ring_width: f32,
    pub max_shockwaves: usize,

    // Connective edges (also the spatial grid cell size)
    pub connect_distance: f32,
    pub edge_alpha: f32,
    pub edge_width: f32,

    // Dots
    pub pulse_amplitude: f32,
    pub pulse_freq: f32,
    pub alpha_base: f32,
    pub alpha_swing: f32,
    pub alpha_freq: f32,

    // Overlays
    pub scanline_spacing: f32,
    pub scanline_height: f32,
    pub scanline_alpha: f32,
    pub glow_scale: f32,
    pub glow_inner_alpha: f32,
    pub glow_mid_alpha: f32,
    pub vignette_scale: f32,
    pub vignette_inner: f32,
    pub vignette_alpha: f32,

    // Palette
    pub background: Rgba,
    pub bright_tone: Rgba,
    pub dim_tone: Rgba,
    /// Every n-th particle (by creation order) gets the dim tone.
    pub dim_every: usize,
}

impl BackdropConfig {
    pub fn particle_count(&self) -> usize {
        self.layer_counts.iter().sum()
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            layer_counts: [45, 45, 30],
            depth_scales: DEPTH_SCALES,
            max_device_pixel_ratio: 2.0,

            base_speed: 0.15,
            wobble_amplitude: 0.1,
            wobble_freq_x: 0.8,
            wobble_freq_y: 0.6,
            wobble_phase_y: 1.3,

            pointer_radius: 200.0,
            pointer_strength: 0.012,

            shockwave_speed: 600.0,
            shockwave_force: 8.0,
            shockwave_duration: 1.5,
            shockwave_ring_width: 80.0,
            max_shockwaves: 3,

            connect_distance: 150.0,
            edge_alpha: 0.06,
            edge_width: 0.5,

            pulse_amplitude: 0.15,
            pulse_freq: 2.0,
            alpha_base: 0.6,
            alpha_swing: 0.4,
            alpha_freq: 1.5,

            scanline_spacing: 4.0,
            scanline_height: 1.0,
            scanline_alpha: 0.03,
            glow_scale: 1.2,
            glow_inner_alpha: 0.04,
            glow_mid_alpha: 0.015,
            vignette_scale: 0.7,
            vignette_inner: 0.4,
            vignette_alpha: 0.6,

            background: Rgba::opaque(0, 0, 0),
            bright_tone: Rgba::opaque(255, 255, 255),
            dim_tone: Rgba::opaque(136, 136, 136),
            dim_every: 5,
        }
    }
}
