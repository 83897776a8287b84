//! Animation helpers for Stagecraft scenes
//!
//! - `Easing`: pluggable strategy mapping linear progress to an interpolation factor
//! - `Tween`: elapsed/duration progress between two positions, clamped so it never overshoots

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::Tween;
