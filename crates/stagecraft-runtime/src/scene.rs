//! The scene lifecycle contract

use crate::liveness::Liveness;
use crate::loading::{Pending, TextureLoads};
use crate::tick::Tick;
use stagecraft_core::Result;
use stagecraft_stage::{Stage, TextureHandle};

/// Where a scene is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    /// Constructed, `start` not called yet
    Idle,
    /// Started, waiting for resources; ticks are no-ops
    Loading,
    /// Resources loaded, nodes built, ticking
    Ready,
    /// Started but a resource load failed; stays visually empty
    Failed,
    /// Torn down; every owned node has been removed
    Destroyed,
}

/// Everything a scene may touch during `start` and `tick`.
///
/// Passed in explicitly on every call instead of being captured as ambient
/// application state.
pub struct SceneContext<'a> {
    pub stage: &'a mut dyn Stage,
    loads: &'a TextureLoads,
    liveness: &'a Liveness,
}

impl<'a> SceneContext<'a> {
    pub fn new(stage: &'a mut dyn Stage, loads: &'a TextureLoads, liveness: &'a Liveness) -> Self {
        Self {
            stage,
            loads,
            liveness,
        }
    }

    /// Begin an async texture load tied to this scene's lifetime
    pub fn load_texture(&self, path: &str) -> Result<Pending<TextureHandle>> {
        self.loads.request(path, self.liveness)
    }

    /// Begin loading several textures at once
    pub fn load_textures(&self, paths: &[String]) -> Result<Pending<Vec<TextureHandle>>> {
        self.loads.request_all(paths, self.liveness)
    }
}

/// A self-contained animated presentation.
///
/// The host guarantees: `start` is called once, `tick` only between `start`
/// and `destroy`, and `destroy` once. A destroyed scene is never ticked again.
pub trait Scene {
    /// Human-readable name
    fn name(&self) -> &str;

    fn phase(&self) -> ScenePhase;

    /// Kick off resource loads and build whatever needs no resources
    fn start(&mut self, ctx: &mut SceneContext<'_>) -> Result<()>;

    /// Advance one frame. Must be a no-op until resources are ready.
    fn tick(&mut self, ctx: &mut SceneContext<'_>, tick: Tick);

    /// Remove every node this scene added and release pooled objects
    fn destroy(&mut self, stage: &mut dyn Stage);
}

