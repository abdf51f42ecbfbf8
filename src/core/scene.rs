// Scene records and the per-frame bookkeeping that spawns and retires them.
//
// Timestamps are milliseconds on a monotonic clock and positions are CSS
// pixels relative to the canvas origin. The frame loop drives one
// `SceneState` with `begin_frame` before painting and `prune` after.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// An expanding ring spawned by a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec2,
    pub start_ms: f64,
    pub max_radius: f32,
}

impl Ripple {
    /// Fraction of the lifetime elapsed at `now_ms`; 0 before the start, unbounded above.
    #[inline]
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / RIPPLE_LIFETIME_MS).max(0.0)
    }

    #[inline]
    pub fn radius(&self, now_ms: f64) -> f32 {
        self.progress(now_ms) as f32 * self.max_radius
    }

    #[inline]
    pub fn opacity(&self, now_ms: f64) -> f32 {
        (1.0 - self.progress(now_ms) as f32).max(0.0)
    }

    #[inline]
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// A drifting dot that fades out over its lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2, // px per frame
    pub size: f32,
    pub born_ms: f64,
    pub lifetime_ms: f64,
}

impl Particle {
    #[inline]
    pub fn age(&self, now_ms: f64) -> f64 {
        (now_ms - self.born_ms).max(0.0)
    }

    #[inline]
    pub fn alpha(&self, now_ms: f64) -> f32 {
        (1.0 - self.age(now_ms) / self.lifetime_ms).max(0.0) as f32
    }

    #[inline]
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.age(now_ms) > self.lifetime_ms
    }

    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }
}

/// Counts reported after a frame's prune pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub ripples: usize,
    pub particles: usize,
    pub retired: usize,
}

#[derive(Clone, Debug, Default)]
pub struct SceneState {
    pub ripples: Vec<Ripple>,
    pub particles: Vec<Particle>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty() && self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
        self.particles.clear();
    }

    /// Append one ripple near `point`. `base_radius` is shared by a burst and
    /// `index` pushes each successive ring a little further out.
    pub fn add_ripple<R: Rng + ?Sized>(
        &mut self,
        point: Vec2,
        index: usize,
        base_radius: f32,
        now_ms: f64,
        rng: &mut R,
    ) {
        let jitter = Vec2::new(
            rng.gen_range(-RIPPLE_JITTER_PX..RIPPLE_JITTER_PX),
            rng.gen_range(-RIPPLE_JITTER_PX..RIPPLE_JITTER_PX),
        );
        self.ripples.push(Ripple {
            origin: point + jitter,
            start_ms: now_ms,
            max_radius: base_radius + index as f32 * RIPPLE_RADIUS_STEP,
        });
    }

    /// Spawn the three-ring burst for a click at `point`.
    pub fn spawn_burst<R: Rng + ?Sized>(&mut self, point: Vec2, now_ms: f64, rng: &mut R) {
        let base_radius =
            RIPPLE_BASE_RADIUS_MIN + rng.gen::<f32>() * RIPPLE_BASE_RADIUS_SPAN;
        for i in 0..RIPPLES_PER_CLICK {
            self.add_ripple(point, i, base_radius, now_ms, rng);
        }
    }

    /// Roll the per-frame spawn chance and, on success, drop a particle
    /// somewhere inside `bounds` (width, height in CSS px).
    pub fn maybe_spawn_particle<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        bounds: Vec2,
        rng: &mut R,
    ) -> bool {
        if !rng.gen_bool(PARTICLE_SPAWN_PROBABILITY) {
            return false;
        }
        let position = Vec2::new(
            rng.gen::<f32>() * bounds.x.max(0.0),
            rng.gen::<f32>() * bounds.y.max(0.0),
        );
        let velocity = Vec2::new(
            rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
        );
        self.particles.push(Particle {
            position,
            velocity,
            size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
            born_ms: now_ms,
            lifetime_ms: PARTICLE_LIFETIME_MS,
        });
        true
    }

    /// Spawn step and particle motion; run before painting.
    pub fn begin_frame<R: Rng + ?Sized>(&mut self, now_ms: f64, bounds: Vec2, rng: &mut R) {
        self.maybe_spawn_particle(now_ms, bounds, rng);
        for p in &mut self.particles {
            p.advance();
        }
    }

    /// Drop every record whose lifetime has run out; run after painting so the
    /// final frame of each record is still drawn.
    pub fn prune(&mut self, now_ms: f64) -> FrameStats {
        let before = self.ripples.len() + self.particles.len();
        self.ripples.retain(|r| !r.is_expired(now_ms));
        self.particles.retain(|p| !p.is_expired(now_ms));
        FrameStats {
            ripples: self.ripples.len(),
            particles: self.particles.len(),
            retired: before - self.ripples.len() - self.particles.len(),
        }
    }
}
