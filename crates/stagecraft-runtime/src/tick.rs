//! Per-frame tick signal

/// One frame delivered by the external render loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Milliseconds since the previous frame
    pub delta_ms: f32,
    /// Instantaneous frames per second reported by the driver
    pub fps: f32,
}

impl Tick {
    pub fn new(delta_ms: f32, fps: f32) -> Self {
        Self { delta_ms, fps }
    }

    pub fn delta_secs(&self) -> f32 {
        self.delta_ms / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_secs_converts_from_ms() {
        let tick = Tick::new(16.0, 62.5);
        assert!((tick.delta_secs() - 0.016).abs() < 1e-6);
    }
}
