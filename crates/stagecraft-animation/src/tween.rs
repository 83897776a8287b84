//! Position tween between two fixed anchors

use crate::easing::Easing;
use stagecraft_core::Vec2;

/// Moves a point from `from` to `to` over `duration_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: Vec2,
    pub to: Vec2,
    pub duration_ms: f32,
    pub easing: Easing,
    elapsed_ms: f32,
}

impl Tween {
    pub fn new(from: Vec2, to: Vec2, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
        }
    }

    /// Normalized progress in [0, 1]. A non-positive duration is already done.
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).min(1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current eased position
    pub fn position(&self) -> Vec2 {
        self.from.lerp(self.to, self.easing.apply(self.progress()))
    }

    /// Advance time and return the new position
    pub fn advance(&mut self, delta_ms: f32) -> Vec2 {
        self.elapsed_ms += delta_ms.max(0.0);
        self.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_tween_halfway() {
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(100.0, 50.0), 1000.0, Easing::Linear);
        let pos = tween.advance(500.0);
        assert!((pos.x - 50.0).abs() < 1e-4);
        assert!((pos.y - 25.0).abs() < 1e-4);
        assert!(!tween.is_finished());
    }

    #[test]
    fn overshoot_is_clamped() {
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(10.0, 0.0), 100.0, Easing::QuadOut);
        let pos = tween.advance(250.0);
        assert_eq!(pos, Vec2::new(10.0, 0.0));
        assert_eq!(tween.progress(), 1.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let tween = Tween::new(Vec2::ZERO, Vec2::ONE, 0.0, Easing::Linear);
        assert!(tween.is_finished());
        assert_eq!(tween.position(), Vec2::ONE);
    }

    #[test]
    fn eased_tween_lags_linear() {
        let mut linear = Tween::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 1000.0, Easing::Linear);
        let mut eased = Tween::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 1000.0, Easing::QuadIn);
        assert!(eased.advance(300.0).x < linear.advance(300.0).x);
    }
}
