//! Stagecraft Core - Foundational types for the Stagecraft scene runtime
//!
//! This crate provides the core types that all other Stagecraft crates depend on:
//! - `NodeId`, `TextureId` - Stage-scoped identifiers
//! - `Vec2`, `Rgb` - 2D spatial and color types
//! - `SceneRng` - Deterministic xorshift PRNG for spawn jitter and layout picks
//! - Error types and Result alias

mod error;
mod id;
pub mod rand;
mod types;

pub use error::{Result, StageError};
pub use id::{NodeId, TextureId};
pub use rand::SceneRng;
pub use types::{Rgb, Vec2};
