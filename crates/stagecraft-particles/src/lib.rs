//! Stagecraft Particles - pooled 2D particle simulation
//!
//! Provides fixed-capacity particle simulation with:
//! - A pool partitioned into active and idle particles, no allocation after creation
//! - Swap-remove recycling once a particle's age reaches its lifetime
//! - Constant-acceleration integration of position, velocity and rotation
//! - Scale, alpha and tint derived from the age/lifetime ratio
//!
//! The simulator knows nothing about stages or nodes; callers map each
//! particle's `slot` to whatever visual they own.

pub mod curves;
pub mod emitter;
pub mod particle;
pub mod simulator;

pub use curves::{AlphaCurve, ScaleCurve};
pub use emitter::{ensure_finite, EmitterConfig};
pub use particle::{Particle, ParticlePool};
pub use simulator::{ParticleSimulator, StepStats};
