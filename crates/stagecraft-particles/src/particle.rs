//! Particle state and the fixed-capacity pool

use stagecraft_core::{Rgb, Vec2};

/// Simulation and presentation state for one particle.
///
/// `slot` is assigned once at pool creation and travels with the particle
/// through swaps, so it can index a parallel array of visuals.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub slot: usize,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration_y: f32,
    /// Seconds since spawn
    pub age: f32,
    /// Seconds this particle lives
    pub lifetime: f32,
    pub initial_scale: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    pub alpha: f32,
    pub tint: Rgb,
}

impl Particle {
    pub fn idle(slot: usize) -> Self {
        Self {
            slot,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration_y: 0.0,
            age: 0.0,
            lifetime: 0.0,
            initial_scale: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            scale: 0.0,
            alpha: 0.0,
            tint: Rgb::WHITE,
        }
    }

    /// `age / lifetime`, not clamped; may exceed 1 on the tick a particle expires
    pub fn life_ratio(&self) -> f32 {
        if self.lifetime <= 0.0 {
            1.0
        } else {
            self.age / self.lifetime
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }
}

/// Fixed-capacity pool. The first `active_count` entries are active, the
/// rest idle, so the two sets are disjoint and always sum to capacity.
pub struct ParticlePool {
    particles: Vec<Particle>,
    active_count: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: (0..capacity).map(Particle::idle).collect(),
            active_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn idle_count(&self) -> usize {
        self.particles.len() - self.active_count
    }

    /// Move one idle particle to the active set, returning it for re-initialization.
    /// Returns None when every particle is active.
    pub fn spawn(&mut self) -> Option<&mut Particle> {
        if self.active_count >= self.particles.len() {
            return None;
        }
        let idx = self.active_count;
        self.active_count += 1;
        Some(&mut self.particles[idx])
    }

    /// Return every expired active particle to the idle set via swap-remove.
    /// State is left as-is; it is reset on the next spawn.
    pub fn recycle_expired(&mut self) -> usize {
        let mut recycled = 0;
        let mut i = 0;
        while i < self.active_count {
            if self.particles[i].is_expired() {
                self.active_count -= 1;
                if i < self.active_count {
                    self.particles.swap(i, self.active_count);
                }
                recycled += 1;
                // Don't increment i; the swapped-in particle needs checking
            } else {
                i += 1;
            }
        }
        recycled
    }

    pub fn active(&self) -> &[Particle] {
        &self.particles[..self.active_count]
    }

    pub fn active_mut(&mut self) -> &mut [Particle] {
        &mut self.particles[..self.active_count]
    }

    pub fn idle(&self) -> &[Particle] {
        &self.particles[self.active_count..]
    }
}
