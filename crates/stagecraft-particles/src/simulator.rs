//! Per-tick particle simulation: spawn, integrate, derive visuals, recycle

use crate::curves::lerp_rgb;
use crate::emitter::EmitterConfig;
use crate::particle::{Particle, ParticlePool};
use stagecraft_core::{Rgb, SceneRng, Vec2};

/// What happened during one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub spawned: usize,
    pub recycled: usize,
}

/// Runs one emitter's particles from a fixed anchor point.
pub struct ParticleSimulator {
    config: EmitterConfig,
    pool: ParticlePool,
    anchor: Vec2,
    color_start: Rgb,
    color_end: Rgb,
}

impl ParticleSimulator {
    pub fn new(config: EmitterConfig, anchor: Vec2) -> Self {
        let pool = ParticlePool::new(config.capacity);
        let color_start = config.start_color();
        let color_end = config.end_color();
        Self {
            config,
            pool,
            anchor,
            color_start,
            color_end,
        }
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn active(&self) -> &[Particle] {
        self.pool.active()
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&mut self, rng: &mut SceneRng, dt: f32) -> StepStats {
        let mut stats = StepStats::default();

        // Spawn until every pooled particle is active
        while self.pool.active_count() < self.pool.capacity() {
            let Some(p) = self.pool.spawn() else {
                break;
            };
            reset_particle(p, &self.config, self.anchor, self.color_start, rng);
            stats.spawned += 1;
        }

        for p in self.pool.active_mut() {
            integrate(p, dt);
            let ratio = p.life_ratio();
            p.scale = self.config.scale_curve.evaluate(p.initial_scale, ratio);
            p.alpha = self.config.alpha_curve.evaluate(ratio);
            p.tint = lerp_rgb(self.color_start, self.color_end, ratio);
        }

        stats.recycled = self.pool.recycle_expired();
        stats
    }
}

fn reset_particle(p: &mut Particle, config: &EmitterConfig, anchor: Vec2, tint: Rgb, rng: &mut SceneRng) {
    p.position = Vec2::new(
        anchor.x + rng.spread(config.jitter),
        anchor.y + rng.spread(config.jitter),
    );
    p.velocity = Vec2::new(
        rng.spread(config.horizontal_spread),
        -rng.range(config.speed_min, config.speed_max),
    );
    p.acceleration_y = config.acceleration_y;
    p.lifetime = rng.range(config.lifetime_min, config.lifetime_max);
    p.age = 0.0;
    p.initial_scale = rng.range(config.scale_min, config.scale_max);
    p.scale = p.initial_scale;
    p.rotation = 0.0;
    p.rotation_speed = rng.spread(config.rotation_speed);
    p.alpha = 1.0;
    p.tint = tint;
}

fn integrate(p: &mut Particle, dt: f32) {
    p.velocity.y += p.acceleration_y * dt;
    p.position += p.velocity * dt;
    p.rotation += p.rotation_speed * dt;
    p.age += dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_lifetime(capacity: usize, lifetime: f32) -> EmitterConfig {
        EmitterConfig {
            capacity,
            lifetime_min: lifetime,
            lifetime_max: lifetime,
            ..Default::default()
        }
    }

    #[test]
    fn first_update_fills_pool() {
        let mut sim = ParticleSimulator::new(EmitterConfig::default(), Vec2::new(320.0, 400.0));
        let mut rng = SceneRng::new(42);
        let stats = sim.update(&mut rng, 1.0 / 60.0);
        assert_eq!(stats.spawned, 10);
        assert_eq!(sim.pool().active_count(), 10);
        assert_eq!(sim.pool().idle_count(), 0);
    }

    #[test]
    fn pool_conservation_over_many_ticks() {
        let mut sim = ParticleSimulator::new(EmitterConfig::default(), Vec2::ZERO);
        let mut rng = SceneRng::new(7);
        for _ in 0..600 {
            sim.update(&mut rng, 1.0 / 60.0);
            let pool = sim.pool();
            assert_eq!(pool.active_count() + pool.idle_count(), pool.capacity());
        }
    }

    #[test]
    fn pool_of_two_drains_after_lifetimes() {
        let mut sim = ParticleSimulator::new(fixed_lifetime(2, 0.5), Vec2::ZERO);
        let mut rng = SceneRng::new(1);

        let stats = sim.update(&mut rng, 0.1);
        assert_eq!(stats.spawned, 2);
        assert_eq!(sim.pool().active_count(), 2);

        // Large step pushes both past their lifetime in one go
        let stats = sim.update(&mut rng, 1.0);
        assert_eq!(stats.recycled, 2);
        assert_eq!(sim.pool().idle_count(), 2);
        assert_eq!(sim.pool().active_count(), 0);
    }

    #[test]
    fn recycled_exactly_when_age_reaches_lifetime() {
        let mut sim = ParticleSimulator::new(fixed_lifetime(1, 0.5), Vec2::ZERO);
        let mut rng = SceneRng::new(3);

        let first = sim.update(&mut rng, 0.25);
        assert_eq!(first.recycled, 0);
        assert_eq!(sim.pool().active_count(), 1);

        let second = sim.update(&mut rng, 0.25);
        assert_eq!(second.spawned, 0);
        assert_eq!(second.recycled, 1);
        assert_eq!(sim.pool().active_count(), 0);
    }

    #[test]
    fn particles_rise_and_accelerate_upward() {
        let anchor = Vec2::new(100.0, 300.0);
        let config = EmitterConfig {
            jitter: 0.0,
            lifetime_min: 10.0,
            lifetime_max: 10.0,
            ..Default::default()
        };
        let mut sim = ParticleSimulator::new(config, anchor);
        let mut rng = SceneRng::new(11);

        sim.update(&mut rng, 0.0);
        let before: Vec<f32> = sim.active().iter().map(|p| p.velocity.y).collect();
        sim.update(&mut rng, 0.5);

        for (p, vy0) in sim.active().iter().zip(before) {
            assert!(p.velocity.y < vy0, "acceleration should push upward");
            assert!(p.position.y < anchor.y);
        }
    }

    #[test]
    fn derived_visuals_stay_in_bounds() {
        let mut sim = ParticleSimulator::new(EmitterConfig::default(), Vec2::ZERO);
        let mut rng = SceneRng::new(5);
        for _ in 0..300 {
            sim.update(&mut rng, 1.0 / 30.0);
            for p in sim.active() {
                assert!((0.0..=1.0).contains(&p.alpha));
                assert!(p.scale >= 0.0 && p.scale <= p.initial_scale);
                assert!(p.age >= 0.0 && p.age < p.lifetime);
            }
        }
    }

    #[test]
    fn tint_moves_toward_end_color() {
        let config = EmitterConfig {
            color_start: 0xFFFFFF,
            color_end: 0x000000,
            lifetime_min: 1.0,
            lifetime_max: 1.0,
            ..Default::default()
        };
        let mut sim = ParticleSimulator::new(config, Vec2::ZERO);
        let mut rng = SceneRng::new(9);
        sim.update(&mut rng, 0.5);
        for p in sim.active() {
            assert_eq!(p.tint, Rgb::new(128, 128, 128));
        }
    }
}
