//! Value-over-lifetime curves

use serde::{Deserialize, Serialize};
use stagecraft_core::Rgb;

/// How strongly the eased scale curves shrink a particle by end of life
const EASED_SHRINK: f32 = 0.7;

/// Linear interpolation between two floats
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-channel linear interpolation, each channel clamped to [0, 255].
/// `t` may leave [0, 1]; the clamp keeps the result a valid color.
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let channel = |x: u8, y: u8| lerp_f32(f32::from(x), f32::from(y), t).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

/// Scale as a function of life ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleCurve {
    /// `initial * (1 - ratio)`
    #[default]
    Linear,
    /// Holds size early, shrinks late: `initial * (1 - 0.7 * ratio²)`
    EaseIn,
    /// Shrinks early, settles late: `initial * (1 - 0.7 * (1 - (1 - ratio)²))`
    EaseOut,
}

impl ScaleCurve {
    /// Always within [0, initial]
    pub fn evaluate(self, initial: f32, ratio: f32) -> f32 {
        let shrink = match self {
            Self::Linear => ratio,
            Self::EaseIn => EASED_SHRINK * ratio * ratio,
            Self::EaseOut => {
                let inv = 1.0 - ratio.min(1.0);
                EASED_SHRINK * (1.0 - inv * inv)
            }
        };
        (initial * (1.0 - shrink)).clamp(0.0, initial.max(0.0))
    }
}

/// Opacity as a function of life ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaCurve {
    /// Monotonic fade from 1 to 0
    #[default]
    FadeOut,
    /// Fades in to 1 at half-life, then out, symmetric around 0.5
    Pulse,
}

impl AlphaCurve {
    /// Always within [0, 1]
    pub fn evaluate(self, ratio: f32) -> f32 {
        let alpha = match self {
            Self::FadeOut => 1.0 - ratio,
            Self::Pulse => 1.0 - (2.0 * ratio - 1.0).abs(),
        };
        alpha.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_f32_endpoints() {
        assert!((lerp_f32(0.0, 10.0, 0.0) - 0.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 1.0) - 10.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_rgb_midpoint_and_clamp() {
        let white = Rgb::WHITE;
        let black = Rgb::BLACK;
        assert_eq!(lerp_rgb(white, black, 0.5), Rgb::new(128, 128, 128));
        // Past the end the channels clamp instead of wrapping
        assert_eq!(lerp_rgb(white, black, 1.5), Rgb::BLACK);
        assert_eq!(lerp_rgb(black, white, 2.0), Rgb::WHITE);
        assert_eq!(lerp_rgb(black, white, -1.0), Rgb::BLACK);
    }

    #[test]
    fn scale_curves_stay_in_bounds() {
        for curve in [ScaleCurve::Linear, ScaleCurve::EaseIn, ScaleCurve::EaseOut] {
            for step in 0..=30 {
                let ratio = step as f32 * 0.05; // runs to 1.5
                let s = curve.evaluate(0.8, ratio);
                assert!((0.0..=0.8).contains(&s), "{curve:?} at {ratio}: {s}");
            }
            assert!((curve.evaluate(0.8, 0.0) - 0.8).abs() < 1e-6);
        }
    }

    #[test]
    fn eased_curves_are_damped() {
        assert!((ScaleCurve::EaseIn.evaluate(1.0, 1.0) - 0.3).abs() < 1e-6);
        assert!((ScaleCurve::EaseOut.evaluate(1.0, 1.0) - 0.3).abs() < 1e-6);
        assert!(ScaleCurve::EaseIn.evaluate(1.0, 0.5) > ScaleCurve::EaseOut.evaluate(1.0, 0.5));
        assert_eq!(ScaleCurve::Linear.evaluate(1.0, 1.0), 0.0);
    }

    #[test]
    fn alpha_curves() {
        assert_eq!(AlphaCurve::FadeOut.evaluate(0.0), 1.0);
        assert_eq!(AlphaCurve::FadeOut.evaluate(1.2), 0.0);
        assert_eq!(AlphaCurve::Pulse.evaluate(0.0), 0.0);
        assert_eq!(AlphaCurve::Pulse.evaluate(0.5), 1.0);
        assert!((AlphaCurve::Pulse.evaluate(0.25) - AlphaCurve::Pulse.evaluate(0.75)).abs() < 1e-6);
        assert_eq!(AlphaCurve::Pulse.evaluate(1.5), 0.0);
    }
}
