//! Particle fountain scene

use crate::config::ParticlesConfig;
use stagecraft_core::{NodeId, SceneRng, Vec2};
use stagecraft_particles::ParticleSimulator;
use stagecraft_runtime::{Pending, Scene, SceneContext, ScenePhase, Tick};
use stagecraft_stage::{Stage, TextureHandle, VisualNode};
use tracing::{info, warn};

/// Drives a [`ParticleSimulator`] and mirrors it onto one sprite per pool slot.
pub struct ParticlesScene {
    config: ParticlesConfig,
    phase: ScenePhase,
    rng: SceneRng,
    texture: Option<Pending<TextureHandle>>,
    simulator: Option<ParticleSimulator>,
    /// Sprite per particle slot; idle slots stay hidden
    nodes: Vec<NodeId>,
}

impl ParticlesScene {
    pub fn new(config: ParticlesConfig, seed: u32) -> Self {
        Self {
            config,
            phase: ScenePhase::Idle,
            rng: SceneRng::new(seed),
            texture: None,
            simulator: None,
            nodes: Vec::new(),
        }
    }

    pub fn simulator(&self) -> Option<&ParticleSimulator> {
        self.simulator.as_ref()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn build(&mut self, stage: &mut dyn Stage, texture: TextureHandle) {
        let size = stage.size();
        let anchor = Vec2::new(size.x * self.config.anchor[0], size.y * self.config.anchor[1]);
        let simulator = ParticleSimulator::new(self.config.emitter.clone(), anchor);

        self.nodes = (0..simulator.pool().capacity())
            .map(|_| {
                stage.add_node(
                    VisualNode::sprite(texture.clone())
                        .at(anchor)
                        .anchored(Vec2::new(0.5, 0.5))
                        .hidden(),
                )
            })
            .collect();

        info!(target: "stagecraft::particles", capacity = self.nodes.len(), "particle pool allocated");
        self.simulator = Some(simulator);
    }

    fn sync_nodes(&self, stage: &mut dyn Stage) {
        let Some(sim) = self.simulator.as_ref() else {
            return;
        };
        for p in sim.pool().active() {
            if let Some(node) = self.nodes.get(p.slot).and_then(|id| stage.node_mut(*id)) {
                node.visible = true;
                node.position = p.position;
                node.scale = p.scale;
                node.rotation = p.rotation;
                node.alpha = p.alpha;
                node.tint = p.tint;
            }
        }
        for p in sim.pool().idle() {
            if let Some(node) = self.nodes.get(p.slot).and_then(|id| stage.node_mut(*id)) {
                node.visible = false;
            }
        }
    }

    fn poll_texture(&mut self, stage: &mut dyn Stage) {
        let Some(result) = self.texture.as_ref().and_then(|p| p.take()) else {
            return;
        };
        self.texture = None;
        match result {
            Ok(texture) => {
                self.build(stage, texture);
                self.phase = ScenePhase::Ready;
            }
            Err(err) => {
                warn!(target: "stagecraft::particles", %err, "particle texture failed to load");
                self.phase = ScenePhase::Failed;
            }
        }
    }
}

impl Scene for ParticlesScene {
    fn name(&self) -> &str {
        "Particles"
    }

    fn phase(&self) -> ScenePhase {
        self.phase
    }

    fn start(&mut self, ctx: &mut SceneContext<'_>) -> stagecraft_core::Result<()> {
        self.phase = ScenePhase::Loading;
        self.texture = Some(ctx.load_texture(&self.config.texture)?);
        Ok(())
    }

    fn tick(&mut self, ctx: &mut SceneContext<'_>, tick: Tick) {
        match self.phase {
            ScenePhase::Loading => {
                self.poll_texture(ctx.stage);
                return;
            }
            ScenePhase::Ready => {}
            _ => return,
        }

        if let Some(sim) = self.simulator.as_mut() {
            sim.update(&mut self.rng, tick.delta_secs());
        }
        self.sync_nodes(ctx.stage);
    }

    fn destroy(&mut self, stage: &mut dyn Stage) {
        for id in self.nodes.drain(..) {
            stage.remove_node(id);
        }
        self.simulator = None;
        self.texture = None;
        self.phase = ScenePhase::Destroyed;
    }
}
