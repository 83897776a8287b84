//! Lightweight xorshift32 PRNG, no external crate needed

/// Deterministic generator shared by spawners and layout pickers.
///
/// The same seed always produces the same sequence, which keeps headless
/// runs and tests reproducible.
#[derive(Debug, Clone)]
pub struct SceneRng {
    state: u32,
}

impl SceneRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // 24 mantissa bits keep the result strictly below 1.0
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns a float in [-extent, extent)
    pub fn spread(&mut self, extent: f32) -> f32 {
        self.range(-extent, extent)
    }

    /// Uniform index in [0, len). `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() on empty range");
        ((self.next_f32() * len as f32) as usize).min(len.saturating_sub(1))
    }

    /// Uniformly pick one element, or `None` for an empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }
}
