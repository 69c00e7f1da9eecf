use crate::config::{BackdropConfig, DEPTH_LAYERS};
use crate::forces::drift::cycle_angle;
use crate::grid::SpatialGrid;
use crate::particle::{ParticleSet, Tone};
use crate::simulation::Simulation;
use glam::Vec2;
use std::collections::HashSet;
use std::fmt;

/// 8-bit RGB colour with a floating point alpha, as canvas styles take it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// CSS `rgba()` syntax
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Concentric radial gradient between two radii around one centre.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<ColorStop>,
}

/// Sink for the draw commands of one frame.
///
/// Implemented over a browser 2D context by the wasm crate and by recording
/// painters in tests.
pub trait Painter {
    type Error;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    ) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), Self::Error>;

    /// Fill a circle of `radius` around the gradient centre with `gradient`.
    fn fill_gradient_circle(
        &mut self,
        gradient: &RadialGradient,
        radius: f32,
    ) -> Result<(), Self::Error>;

    /// Fill an axis-aligned rectangle with `gradient`.
    fn fill_gradient_rect(
        &mut self,
        gradient: &RadialGradient,
        origin: Vec2,
        size: Vec2,
    ) -> Result<(), Self::Error>;
}

/// Counters from a single rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: u32,
    /// Connective edges drawn, across all layers.
    pub edges: u32,
    pub shockwaves: u32,
    pub pointer_glow: bool,
}

/// Undirected connection between two particles of the same layer, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
    pub distance: f32,
}

/// Collect the connective edges of one depth layer.
///
/// Candidates come from the 3x3 grid block around each particle. Each pair
/// is reported once: the lower index owns the edge, and a key set of
/// `a * N + b` filters repeats from overlapping queries.
pub fn layer_edges(
    particles: &ParticleSet,
    grid: &SpatialGrid,
    depth: usize,
    max_distance: f32,
) -> Vec<Edge> {
    let n = particles.count as u32;
    let max_sq = max_distance * max_distance;
    let mut seen: HashSet<u32> = HashSet::new();
    let mut edges = Vec::new();

    for &i in particles.layer(depth) {
        let p = particles.position[i as usize];
        let (col, row) = grid.cell_of(p);
        grid.for_each_neighbor(col, row, |j| {
            if j <= i || particles.depth[j as usize] as usize != depth {
                return;
            }
            if !seen.insert(i * n + j) {
                return;
            }
            let d2 = p.distance_squared(particles.position[j as usize]);
            if d2 > max_sq {
                return;
            }
            edges.push(Edge { a: i, b: j, distance: d2.sqrt() });
        });
    }
    edges
}

/// Draw one complete frame, back to front.
pub fn render_frame<P: Painter>(
    sim: &Simulation,
    painter: &mut P,
    time: f64,
) -> Result<FrameStats, P::Error> {
    let config = &sim.config;
    let particles = &sim.particles;
    let size = sim.metrics.size();
    let dpr = sim.metrics.dpr;
    let connect = config.connect_distance * dpr;

    let mut stats = FrameStats {
        particles: particles.count as u32,
        shockwaves: sim.shockwaves.len() as u32,
        ..Default::default()
    };

    painter.fill_rect(Vec2::ZERO, size, config.background)?;

    for depth in 0..DEPTH_LAYERS {
        let scale = config.depth_scales[depth];

        for edge in layer_edges(particles, sim.grid(), depth, connect) {
            let alpha = (1.0 - edge.distance / connect) * config.edge_alpha * scale.brightness;
            painter.stroke_line(
                particles.position[edge.a as usize],
                particles.position[edge.b as usize],
                config.edge_width,
                config.bright_tone.with_alpha(alpha),
            )?;
            stats.edges += 1;
        }

        for &i in particles.layer(depth) {
            let i = i as usize;
            let (radius, alpha) = dot_appearance(config, particles, i, time);
            let tone = match particles.tone[i] {
                Tone::Bright => config.bright_tone,
                Tone::Dim => config.dim_tone,
            };
            painter.fill_circle(particles.position[i], radius * dpr, tone.with_alpha(alpha))?;
        }
    }

    draw_scanlines(config, painter, size)?;

    if sim.pointer.is_present() {
        draw_pointer_glow(config, painter, sim.pointer.position, dpr)?;
        stats.pointer_glow = true;
    }

    draw_vignette(config, painter, size)?;

    Ok(stats)
}

/// Pulsing radius (logical px) and alpha of one dot at `time`.
///
/// Size and alpha run on different frequencies so two dots with the same
/// phase never pulse identically in both.
pub fn dot_appearance(
    config: &BackdropConfig,
    particles: &ParticleSet,
    i: usize,
    time: f64,
) -> (f32, f32) {
    let phase = particles.phase[i];
    let pulse =
        1.0 + config.pulse_amplitude * (cycle_angle(time, config.pulse_freq) + phase).sin();
    let alpha = particles.brightness[i]
        * (config.alpha_base
            + config.alpha_swing * (cycle_angle(time, config.alpha_freq) + phase).sin());
    (particles.radius[i] * pulse, alpha)
}

fn draw_scanlines<P: Painter>(
    config: &BackdropConfig,
    painter: &mut P,
    size: Vec2,
) -> Result<(), P::Error> {
    if config.scanline_spacing <= 0.0 {
        return Ok(());
    }
    let color = Rgba::new(255, 255, 255, config.scanline_alpha);
    let mut y = 0.0;
    while y < size.y {
        painter.fill_rect(Vec2::new(0.0, y), Vec2::new(size.x, config.scanline_height), color)?;
        y += config.scanline_spacing;
    }
    Ok(())
}

fn draw_pointer_glow<P: Painter>(
    config: &BackdropConfig,
    painter: &mut P,
    pointer: Vec2,
    dpr: f32,
) -> Result<(), P::Error> {
    let radius = config.pointer_radius * dpr * config.glow_scale;
    let white = Rgba::new(255, 255, 255, 0.0);
    let gradient = RadialGradient {
        center: pointer,
        inner_radius: 0.0,
        outer_radius: radius,
        stops: vec![
            ColorStop { offset: 0.0, color: white.with_alpha(config.glow_inner_alpha) },
            ColorStop { offset: 0.5, color: white.with_alpha(config.glow_mid_alpha) },
            ColorStop { offset: 1.0, color: Rgba::TRANSPARENT },
        ],
    };
    painter.fill_gradient_circle(&gradient, radius)
}

fn draw_vignette<P: Painter>(
    config: &BackdropConfig,
    painter: &mut P,
    size: Vec2,
) -> Result<(), P::Error> {
    let radius = size.max_element() * config.vignette_scale;
    let gradient = RadialGradient {
        center: size * 0.5,
        inner_radius: radius * config.vignette_inner,
        outer_radius: radius,
        stops: vec![
            ColorStop { offset: 0.0, color: Rgba::TRANSPARENT },
            ColorStop { offset: 1.0, color: Rgba::new(0, 0, 0, config.vignette_alpha) },
        ],
    };
    painter.fill_gradient_rect(&gradient, Vec2::ZERO, size)
}
