//! Stagecraft Runtime - Scene lifecycle infrastructure
//!
//! Provides the building blocks every scene runs on:
//! - `Scene` / `SceneContext`: the start/tick/destroy contract and its explicit context
//! - `SceneHost`: owns at most one active scene and forwards ticks to it
//! - `TextureLoads` / `Pending`: cooperative single-threaded texture loading
//! - `Liveness`: revoked on destroy so late load completions are dropped
//! - `FpsMeter`: rolling frame-rate average over a fixed window
//! - `FrameClock`: produces `Tick`s for headless or wall-clock drivers

mod clock;
mod fps;
mod host;
mod liveness;
mod loading;
mod scene;
mod tick;

pub use clock::FrameClock;
pub use fps::FpsMeter;
pub use host::{SceneFactory, SceneHost};
pub use liveness::Liveness;
pub use loading::{Pending, TextureLoads};
pub use scene::{Scene, SceneContext, ScenePhase};
pub use tick::Tick;
