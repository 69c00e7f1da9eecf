use crate::config::{BackdropConfig, DEPTH_LAYERS};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Which of the two palette tones a particle is painted with.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Bright = 0,
    Dim = 1,
}

/// SoA particle storage
///
/// Filled once by [`ParticleSet::initialize`]; afterwards particles are only
/// mutated in place, never added or removed.
#[derive(Default)]
pub struct ParticleSet {
    pub count: usize,
    /// Device-pixel position, kept inside the surface bounds after each step.
    pub position: Vec<Vec2>,
    /// Constant drift per frame. Forces never write to it.
    pub velocity: Vec<Vec2>,
    pub radius: Vec<f32>,
    pub brightness: Vec<f32>,
    pub tone: Vec<Tone>,
    /// Oscillation phase in [0, 2π)
    pub phase: Vec<f32>,
    /// Depth layer index, 0 = farthest
    pub depth: Vec<u8>,
    layers: [Vec<u32>; DEPTH_LAYERS],
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Populate the store with `config.particle_count()` particles scattered
    /// uniformly over a `width` x `height` surface.
    ///
    /// Any previous contents are discarded.
    pub fn initialize<R: Rng>(
        &mut self,
        config: &BackdropConfig,
        width: f32,
        height: f32,
        rng: &mut R,
    ) {
        let total = config.particle_count();
        self.clear();
        self.reserve(total);

        let mut idx = 0usize;
        for (depth, &layer_count) in config.layer_counts.iter().enumerate() {
            let scale = config.depth_scales[depth];
            for _ in 0..layer_count {
                let angle = rng.gen::<f32>() * TAU;
                let speed = config.base_speed * scale.speed;
                let tone = if config.dim_every > 0 && idx % config.dim_every == 0 {
                    Tone::Dim
                } else {
                    Tone::Bright
                };

                self.position.push(Vec2::new(
                    rng.gen::<f32>() * width,
                    rng.gen::<f32>() * height,
                ));
                self.velocity.push(Vec2::from_angle(angle) * speed);
                self.radius.push((0.5 + rng.gen::<f32>() * 0.7) * scale.radius);
                self.brightness.push((0.5 + rng.gen::<f32>() * 0.5) * scale.brightness);
                self.tone.push(tone);
                self.phase.push(rng.gen::<f32>() * TAU);
                self.depth.push(depth as u8);
                self.layers[depth].push(idx as u32);
                idx += 1;
            }
        }
        self.count = idx;
    }

    /// Particle indices of one depth layer, in creation order.
    pub fn layer(&self, depth: usize) -> &[u32] {
        &self.layers[depth]
    }

    pub fn layer_indices(&self) -> &[Vec<u32>; DEPTH_LAYERS] {
        &self.layers
    }

    fn clear(&mut self) {
        self.count = 0;
        self.position.clear();
        self.velocity.clear();
        self.radius.clear();
        self.brightness.clear();
        self.tone.clear();
        self.phase.clear();
        self.depth.clear();
        for layer in self.layers.iter_mut() {
            layer.clear();
        }
    }

    fn reserve(&mut self, n: usize) {
        self.position.reserve(n);
        self.velocity.reserve(n);
        self.radius.reserve(n);
        self.brightness.reserve(n);
        self.tone.reserve(n);
        self.phase.reserve(n);
        self.depth.reserve(n);
    }
}
