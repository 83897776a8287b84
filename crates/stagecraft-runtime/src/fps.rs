//! Rolling frame-rate average

use crate::tick::Tick;

/// Averages instantaneous FPS samples over a fixed wall-clock window.
pub struct FpsMeter {
    window_ms: f32,
    elapsed_ms: f32,
    sum: f32,
    samples: u32,
}

impl FpsMeter {
    pub fn new(window_ms: f32) -> Self {
        Self {
            window_ms,
            elapsed_ms: 0.0,
            sum: 0.0,
            samples: 0,
        }
    }

    /// Record one tick. Returns the rounded average when a window closes;
    /// both accumulators reset at that point.
    pub fn record(&mut self, tick: Tick) -> Option<u32> {
        self.sum += tick.fps;
        self.samples += 1;
        self.elapsed_ms += tick.delta_ms;

        if self.elapsed_ms < self.window_ms {
            return None;
        }

        let average = (self.sum / self.samples as f32).round().max(0.0) as u32;
        self.sum = 0.0;
        self.samples = 0;
        self.elapsed_ms = 0.0;
        Some(average)
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new(500.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_once_per_window() {
        let mut meter = FpsMeter::new(500.0);
        let mut emitted = Vec::new();
        for _ in 0..50 {
            if let Some(avg) = meter.record(Tick::new(20.0, 50.0)) {
                emitted.push(avg);
            }
        }
        // 50 frames at 20ms is one second: two windows
        assert_eq!(emitted, vec![50, 50]);
    }

    #[test]
    fn average_is_rounded() {
        let mut meter = FpsMeter::new(100.0);
        assert_eq!(meter.record(Tick::new(50.0, 59.0)), None);
        assert_eq!(meter.record(Tick::new(50.0, 60.0)), Some(60));
    }

    #[test]
    fn accumulators_reset_after_emit() {
        let mut meter = FpsMeter::new(100.0);
        meter.record(Tick::new(100.0, 10.0));
        assert_eq!(meter.record(Tick::new(100.0, 30.0)), Some(30));
    }
}
