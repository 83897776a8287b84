//! Frame clock producing tick signals

use crate::tick::Tick;
use std::time::Instant;

/// Longest frame ever reported, to avoid huge catch-up steps after a stall
const MAX_FRAME_MS: f64 = 250.0;

/// Produces [`Tick`]s either at a fixed simulated rate (headless) or from
/// wall-clock time.
pub struct FrameClock {
    /// Total elapsed time in milliseconds
    pub total_ms: f64,
    /// Duration of the last frame in milliseconds
    pub delta_ms: f64,
    /// Frames produced so far
    pub frames: u64,
    target_fps: f64,
    last_instant: Instant,
    first_tick: bool,
}

impl FrameClock {
    /// Clock that advances exactly `1000 / fps` ms per frame
    pub fn fixed(fps: f64) -> Self {
        Self {
            total_ms: 0.0,
            delta_ms: 0.0,
            frames: 0,
            target_fps: fps.max(1.0),
            last_instant: Instant::now(),
            first_tick: true,
        }
    }

    pub fn target_fps(&self) -> f64 {
        self.target_fps
    }

    pub fn frame_duration_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    /// Advance by one simulated frame
    pub fn step_fixed(&mut self) -> Tick {
        self.delta_ms = self.frame_duration_ms();
        self.total_ms += self.delta_ms;
        self.frames += 1;
        Tick::new(self.delta_ms as f32, self.target_fps as f32)
    }

    /// Advance by the wall-clock time since the previous call.
    /// The first call reports a zero delta.
    pub fn tick_realtime(&mut self) -> Tick {
        let now = Instant::now();
        self.frames += 1;

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_ms = 0.0;
            return Tick::new(0.0, 0.0);
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;
        self.delta_ms = elapsed.min(MAX_FRAME_MS);
        self.total_ms += self.delta_ms;

        let fps = if self.delta_ms > 0.0 {
            1000.0 / self.delta_ms
        } else {
            0.0
        };
        Tick::new(self.delta_ms as f32, fps as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_advances_by_frame_duration() {
        let mut clock = FrameClock::fixed(50.0);
        let tick = clock.step_fixed();
        assert!((tick.delta_ms - 20.0).abs() < 1e-4);
        assert_eq!(tick.fps, 50.0);
        clock.step_fixed();
        assert!((clock.total_ms - 40.0).abs() < 1e-9);
        assert_eq!(clock.frames, 2);
    }

    #[test]
    fn first_realtime_tick_has_zero_delta() {
        let mut clock = FrameClock::fixed(60.0);
        let tick = clock.tick_realtime();
        assert_eq!(tick.delta_ms, 0.0);
        assert_eq!(clock.total_ms, 0.0);
    }

    #[test]
    fn realtime_delta_is_clamped() {
        let mut clock = FrameClock::fixed(60.0);
        clock.tick_realtime();
        clock.last_instant = Instant::now() - std::time::Duration::from_secs(2);
        let tick = clock.tick_realtime();
        assert!((tick.delta_ms as f64 - MAX_FRAME_MS).abs() < 1e-3);
    }

    #[test]
    fn zero_fps_is_floored() {
        let clock = FrameClock::fixed(0.0);
        assert_eq!(clock.target_fps(), 1.0);
    }
}
