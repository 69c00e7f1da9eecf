use crate::config::BackdropConfig;
use crate::forces::drift::drift_step;
use crate::forces::pointer::{pointer_nudge, PointerState};
use crate::forces::shockwave::{shockwave_nudge, RingParams, ShockwaveRegistry};
use crate::forces::wrap;
use crate::grid::SpatialGrid;
use crate::particle::ParticleSet;
use crate::render::{render_frame, FrameStats, Painter};
use crate::surface::SurfaceMetrics;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Simulation context for one mounted background.
///
/// Owns every piece of mutable state the frame stages share. Host events
/// only mutate the pointer and shockwave state; particles move exclusively
/// inside [`step`](Self::step).
pub struct Simulation {
    pub config: BackdropConfig,
    pub metrics: SurfaceMetrics,
    pub particles: ParticleSet,
    pub pointer: PointerState,
    pub shockwaves: ShockwaveRegistry,
    grid: SpatialGrid,
    rng: StdRng,
}

impl Simulation {
    /// New context seeded from OS entropy. Particles are created on the
    /// first [`resize`](Self::resize).
    pub fn new(config: BackdropConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic context for tests and reproducible captures.
    pub fn with_seed(config: BackdropConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: BackdropConfig, rng: StdRng) -> Self {
        let shockwaves = ShockwaveRegistry::new(config.max_shockwaves, config.shockwave_duration);
        let grid = SpatialGrid::new(config.connect_distance);
        Self {
            config,
            metrics: SurfaceMetrics::default(),
            particles: ParticleSet::new(),
            pointer: PointerState::default(),
            shockwaves,
            grid,
            rng,
        }
    }

    /// Adopt new surface metrics.
    ///
    /// The particle store is populated only the first time; later resizes
    /// keep positions and let the next step re-wrap them into the new bounds.
    pub fn resize(&mut self, metrics: SurfaceMetrics) {
        self.metrics = metrics;
        self.grid.set_cell_size(self.config.connect_distance * metrics.dpr);
        if self.particles.is_empty() {
            self.particles
                .initialize(&self.config, metrics.width, metrics.height, &mut self.rng);
            log::debug!(
                "backdrop initialized: {} particles on {}x{} (dpr {})",
                self.particles.count,
                metrics.width,
                metrics.height,
                metrics.dpr
            );
        }
    }

    /// Pointer moved to a client-space position.
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.pointer.move_to(self.metrics.to_device(client_x, client_y));
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    /// Click at a client-space position, `now` in seconds since loop start.
    pub fn click(&mut self, client_x: f32, client_y: f32, now: f64) {
        let origin = self.metrics.to_device(client_x, client_y);
        self.shockwaves.spawn(origin, now);
    }

    /// Advance one frame: expire shockwaves, move particles, rebuild the grid.
    pub fn step(&mut self, now: f64) {
        self.shockwaves.sweep(now);
        self.integrate(now);
        self.rebuild_grid();
    }

    /// Re-bucket particles from their current positions.
    pub fn rebuild_grid(&mut self) {
        self.grid
            .build(&self.particles.position, self.metrics.width, self.metrics.height);
    }

    /// Step, then draw the result.
    pub fn frame<P: Painter>(&mut self, painter: &mut P, now: f64) -> Result<FrameStats, P::Error> {
        self.step(now);
        render_frame(self, painter, now)
    }

    /// Apply drift, pointer attraction, shockwave pushes and wraparound to
    /// every particle, in that order.
    ///
    /// All forces are positional; velocities are left untouched.
    pub fn integrate(&mut self, now: f64) {
        let config = &self.config;
        let dpr = self.metrics.dpr;
        let (width, height) = (self.metrics.width, self.metrics.height);
        let pointer = self.pointer.position;
        let pointer_radius = config.pointer_radius * dpr;
        let ring = RingParams {
            speed: config.shockwave_speed * dpr,
            width: config.shockwave_ring_width * dpr,
            force: config.shockwave_force * dpr,
            duration: config.shockwave_duration,
        };
        let particles = &mut self.particles;

        for i in 0..particles.count {
            let scale = config.depth_scales[particles.depth[i] as usize];
            let mut pos = particles.position[i];

            pos += drift_step(particles.velocity[i], now, particles.phase[i], scale.wobble, config);
            pos += pointer_nudge(
                pos,
                pointer,
                pointer_radius,
                config.pointer_strength,
                dpr,
                scale.pointer,
            );
            for wave in self.shockwaves.iter() {
                pos += shockwave_nudge(pos, wave, now, &ring);
            }

            particles.position[i] = wrap(pos, width, height);
        }
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }
}
