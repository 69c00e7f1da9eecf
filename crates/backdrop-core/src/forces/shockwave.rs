use glam::Vec2;
use std::collections::VecDeque;

/// Radial impulse spawned by a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shockwave {
    /// Origin in device pixels
    pub origin: Vec2,
    /// Creation time in seconds since loop start
    pub time: f64,
}

impl Shockwave {
    #[inline]
    pub fn age(&self, now: f64) -> f32 {
        (now - self.time) as f32
    }
}

/// Bounded FIFO of live shockwaves.
///
/// Spawning at capacity evicts the oldest entry first. Entries whose age
/// reaches the duration are removed by [`sweep`](Self::sweep).
#[derive(Clone, Debug)]
pub struct ShockwaveRegistry {
    capacity: usize,
    duration: f32,
    waves: VecDeque<Shockwave>,
}

impl ShockwaveRegistry {
    pub fn new(capacity: usize, duration: f32) -> Self {
        Self {
            capacity,
            duration,
            waves: VecDeque::with_capacity(capacity),
        }
    }

    pub fn spawn(&mut self, origin: Vec2, now: f64) {
        if self.capacity == 0 {
            return;
        }
        while self.waves.len() >= self.capacity {
            self.waves.pop_front();
        }
        self.waves.push_back(Shockwave { origin, time: now });
    }

    /// Drop every shockwave whose age is at or past the duration.
    pub fn sweep(&mut self, now: f64) {
        let duration = self.duration;
        self.waves.retain(|sw| sw.age(now) < duration);
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Live shockwaves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Shockwave> {
        self.waves.iter()
    }
}

/// Parameters shared by every shockwave in a frame, already device-scaled.
#[derive(Clone, Copy, Debug)]
pub struct RingParams {
    /// Ring expansion speed in device pixels per second
    pub speed: f32,
    /// Half-width of the band around the ring front, device pixels
    pub width: f32,
    pub force: f32,
    pub duration: f32,
}

/// Outward push on a particle from one shockwave.
///
/// Only particles within `width` of the expanding ring front are affected.
/// The push fades both with distance from the front and with the age of
/// the wave.
pub fn shockwave_nudge(pos: Vec2, wave: &Shockwave, now: f64, ring: &RingParams) -> Vec2 {
    let age = wave.age(now);
    if age < 0.0 || age >= ring.duration {
        return Vec2::ZERO;
    }
    let ring_radius = age * ring.speed;
    let offset = pos - wave.origin;
    let dist = offset.length();
    let from_ring = (dist - ring_radius).abs();
    if !(from_ring < ring.width && dist > 0.0) {
        return Vec2::ZERO;
    }
    let strength =
        (1.0 - from_ring / ring.width) * (1.0 - age / ring.duration) * ring.force;
    offset / dist * strength
}
