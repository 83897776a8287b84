//! Emitter configuration

use crate::curves::{AlphaCurve, ScaleCurve};
use serde::{Deserialize, Serialize};
use stagecraft_core::{Result, Rgb, StageError};

/// Upper bound on pool size
pub const MAX_CAPACITY: usize = 10_000;

/// Spawn and presentation parameters for one particle emitter.
///
/// Units are stage pixels and seconds; y grows downward, so upward motion
/// uses negative velocities and accelerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub capacity: usize,
    pub lifetime_min: f32,
    pub lifetime_max: f32,
    /// Upward launch speed range (magnitude, px/s)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Horizontal velocity is drawn from [-spread, spread]
    pub horizontal_spread: f32,
    /// Constant vertical acceleration; negative pulls upward
    pub acceleration_y: f32,
    /// Spawn position jitter around the anchor, per axis
    pub jitter: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    /// Rotation speed drawn from [-rotation_speed, rotation_speed] (rad/s)
    pub rotation_speed: f32,
    /// 0xRRGGBB tint at birth
    pub color_start: u32,
    /// 0xRRGGBB tint at end of life
    pub color_end: u32,
    pub scale_curve: ScaleCurve,
    pub alpha_curve: AlphaCurve,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            lifetime_min: 0.8,
            lifetime_max: 1.6,
            speed_min: 60.0,
            speed_max: 140.0,
            horizontal_spread: 30.0,
            acceleration_y: -50.0,
            jitter: 8.0,
            scale_min: 0.4,
            scale_max: 0.8,
            rotation_speed: 1.5,
            color_start: 0xFFDD77,
            color_end: 0xFF3300,
            scale_curve: ScaleCurve::Linear,
            alpha_curve: AlphaCurve::FadeOut,
        }
    }
}

impl EmitterConfig {
    pub fn start_color(&self) -> Rgb {
        Rgb::from_hex(self.color_start)
    }

    pub fn end_color(&self) -> Rgb {
        Rgb::from_hex(self.color_end)
    }

    /// Reject configurations the simulator cannot run
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(StageError::ValueOutOfRange {
                field: "particles.capacity".into(),
                min: 1.0,
                max: MAX_CAPACITY as f64,
                value: self.capacity as f64,
            });
        }
        ensure_finite(&[
            ("particles.lifetime_min", self.lifetime_min),
            ("particles.lifetime_max", self.lifetime_max),
            ("particles.speed_min", self.speed_min),
            ("particles.speed_max", self.speed_max),
            ("particles.horizontal_spread", self.horizontal_spread),
            ("particles.acceleration_y", self.acceleration_y),
            ("particles.jitter", self.jitter),
            ("particles.scale_min", self.scale_min),
            ("particles.scale_max", self.scale_max),
            ("particles.rotation_speed", self.rotation_speed),
        ])?;
        if self.lifetime_min <= 0.0 {
            return Err(StageError::InvalidConfig(
                "particles.lifetime_min must be positive".into(),
            ));
        }
        check_range("particles.lifetime", self.lifetime_min, self.lifetime_max)?;
        check_range("particles.speed", self.speed_min, self.speed_max)?;
        check_range("particles.scale", self.scale_min, self.scale_max)?;
        if self.scale_min < 0.0 {
            return Err(StageError::InvalidConfig(
                "particles.scale_min must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// NaN slips past every ordered comparison, so reject it up front
pub fn ensure_finite(fields: &[(&str, f32)]) -> Result<()> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(StageError::InvalidConfig(format!(
            "{name} must be a finite number, got {value}"
        ))),
        None => Ok(()),
    }
}

fn check_range(name: &str, min: f32, max: f32) -> Result<()> {
    if min > max {
        return Err(StageError::InvalidConfig(format!(
            "{name}: min {min} is greater than max {max}"
        )));
    }
    Ok(())
}
