//! Scene host: owns the active scene and mediates switching

use crate::liveness::Liveness;
use crate::loading::TextureLoads;
use crate::scene::{Scene, SceneContext, ScenePhase};
use crate::tick::Tick;
use stagecraft_stage::{Stage, TextureLoader};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Builds scenes from identifiers. Returns `None` for identifiers it does not know.
pub trait SceneFactory {
    fn create(&self, id: &str) -> Option<Box<dyn Scene>>;
}

struct ActiveScene {
    scene: Box<dyn Scene>,
    liveness: Liveness,
    generation: u64,
    /// `start` returned an error; the scene is never ticked
    start_failed: bool,
}

/// Owns at most one active scene and forwards the external tick to it.
///
/// Switching is synchronous destroy-then-start; the previous scene is fully
/// torn down before the next one starts.
pub struct SceneHost<F: SceneFactory> {
    factory: F,
    loads: TextureLoads,
    current: Option<ActiveScene>,
    generation: u64,
}

impl<F: SceneFactory> SceneHost<F> {
    pub fn new(factory: F, loader: Rc<dyn TextureLoader>) -> Self {
        Self {
            factory,
            loads: TextureLoads::new(loader),
            current: None,
            generation: 0,
        }
    }

    /// Replace the active scene with the one named `id`.
    ///
    /// Unknown identifiers are ignored: the current scene keeps running and
    /// `false` is returned.
    pub fn switch_to(&mut self, id: &str, stage: &mut dyn Stage) -> bool {
        let Some(mut scene) = self.factory.create(id) else {
            debug!(target: "stagecraft::host", id, "ignoring unknown scene id");
            return false;
        };

        self.destroy_current(stage);

        self.generation += 1;
        let liveness = Liveness::new();
        info!(target: "stagecraft::host", scene = scene.name(), generation = self.generation, "starting scene");

        let mut ctx = SceneContext::new(stage, &self.loads, &liveness);
        let start_failed = match scene.start(&mut ctx) {
            Ok(()) => false,
            Err(err) => {
                warn!(target: "stagecraft::host", scene = scene.name(), %err, "scene start failed; scene stays empty");
                true
            }
        };

        self.current = Some(ActiveScene {
            scene,
            liveness,
            generation: self.generation,
            start_failed,
        });
        true
    }

    /// Deliver one frame: finish any pending loads, then tick the active scene.
    pub fn on_tick(&mut self, delta_ms: f32, fps: f32, stage: &mut dyn Stage) {
        self.loads.pump();

        let Some(active) = self.current.as_mut().filter(|a| !a.start_failed) else {
            return;
        };
        let mut ctx = SceneContext::new(stage, &self.loads, &active.liveness);
        active.scene.tick(&mut ctx, Tick::new(delta_ms, fps));
    }

    /// Destroy the active scene, if any. Used when the surrounding app tears down.
    pub fn shutdown(&mut self, stage: &mut dyn Stage) {
        self.destroy_current(stage);
    }

    fn destroy_current(&mut self, stage: &mut dyn Stage) {
        if let Some(mut active) = self.current.take() {
            active.liveness.revoke();
            active.scene.destroy(stage);
            info!(target: "stagecraft::host", scene = active.scene.name(), generation = active.generation, "destroyed scene");
        }
    }

    pub fn has_scene(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.scene.name())
    }

    pub fn current_phase(&self) -> Option<ScenePhase> {
        self.current.as_ref().map(|a| {
            if a.start_failed {
                ScenePhase::Failed
            } else {
                a.scene.phase()
            }
        })
    }

    /// Number of scenes started so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loads(&self) -> &TextureLoads {
        &self.loads
    }
}
