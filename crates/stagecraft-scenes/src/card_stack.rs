//! Card stack: cards fly one at a time from a left stack to a right stack

use crate::config::CardStackConfig;
use stagecraft_animation::Tween;
use stagecraft_core::{NodeId, Vec2};
use stagecraft_runtime::{FpsMeter, Pending, Scene, SceneContext, ScenePhase, Tick};
use stagecraft_stage::{Stage, TextureHandle, VisualNode};
use tracing::{debug, info, warn};

const FPS_LABEL_SIZE: f32 = 16.0;
const FPS_LABEL_POSITION: Vec2 = Vec2::new(8.0, 8.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// Still on the left stack
    Idle,
    /// Triggered, moving toward the right stack
    InFlight,
    /// Arrived on the right stack; never moves again
    Settled,
}

#[derive(Debug)]
struct Card {
    node: NodeId,
    initial: Vec2,
    target: Vec2,
    tween: Option<Tween>,
    state: CardState,
}

pub struct CardStackScene {
    config: CardStackConfig,
    phase: ScenePhase,
    texture: Option<Pending<TextureHandle>>,
    /// Indexed by creation order; index doubles as z-order on the left stack
    cards: Vec<Card>,
    fps_label: Option<NodeId>,
    fps: FpsMeter,
    left_count: usize,
    right_count: usize,
    since_last_move_ms: f32,
    left_anchor: Vec2,
    right_anchor: Vec2,
}

impl CardStackScene {
    pub fn new(config: CardStackConfig) -> Self {
        let fps = FpsMeter::new(config.fps_window_ms);
        Self {
            left_count: config.total_cards,
            config,
            phase: ScenePhase::Idle,
            texture: None,
            cards: Vec::new(),
            fps_label: None,
            fps,
            right_count: 0,
            since_last_move_ms: 0.0,
            left_anchor: Vec2::ZERO,
            right_anchor: Vec2::ZERO,
        }
    }

    /// Cards still waiting on the left stack
    pub fn left_count(&self) -> usize {
        self.left_count
    }

    /// Cards that have landed on the right stack
    pub fn right_count(&self) -> usize {
        self.right_count
    }

    pub fn in_flight_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.state == CardState::InFlight)
            .count()
    }

    /// Cards that have left the left stack, landed or not
    pub fn triggered(&self) -> usize {
        self.config.total_cards - self.left_count
    }

    pub fn card_state(&self, index: usize) -> Option<CardState> {
        self.cards.get(index).map(|c| c.state)
    }

    pub fn card_node(&self, index: usize) -> Option<NodeId> {
        self.cards.get(index).map(|c| c.node)
    }

    pub fn fps_label(&self) -> Option<NodeId> {
        self.fps_label
    }

    fn build(&mut self, stage: &mut dyn Stage, texture: TextureHandle) {
        let size = stage.size();
        self.left_anchor = Vec2::new(
            size.x * self.config.left_anchor[0],
            size.y * self.config.left_anchor[1],
        );
        self.right_anchor = Vec2::new(
            size.x * self.config.right_anchor[0],
            size.y * self.config.right_anchor[1],
        );

        self.cards = (0..self.config.total_cards)
            .map(|index| {
                let position = self.left_anchor + Vec2::new(0.0, index as f32 * self.config.card_offset);
                let node = stage.add_node(
                    VisualNode::sprite(texture.clone())
                        .at(position)
                        .with_z(index as i32),
                );
                Card {
                    node,
                    initial: position,
                    target: position,
                    tween: None,
                    state: CardState::Idle,
                }
            })
            .collect();

        self.fps_label = Some(stage.add_node(
            VisualNode::text("FPS: --", FPS_LABEL_SIZE)
                .at(FPS_LABEL_POSITION)
                .with_z(i32::MAX),
        ));

        info!(target: "stagecraft::card_stack", cards = self.cards.len(), "card stack ready");
    }

    /// Launch the top card of the left stack toward the right stack
    fn trigger_next(&mut self, stage: &mut dyn Stage) {
        let Some(index) = self.left_count.checked_sub(1) else {
            return;
        };
        let moved = self.triggered();
        let target = self.right_anchor + Vec2::new(0.0, moved as f32 * self.config.card_offset);
        let z = (self.config.total_cards + moved) as i32;

        let card = &mut self.cards[index];
        card.target = target;
        card.tween = Some(Tween::new(
            card.initial,
            target,
            self.config.move_duration_ms,
            self.config.easing,
        ));
        card.state = CardState::InFlight;
        if let Some(node) = stage.node_mut(card.node) {
            node.z_index = z;
        }

        self.left_count -= 1;
        debug!(target: "stagecraft::card_stack", index, remaining = self.left_count, "card launched");
    }

    fn advance_in_flight(&mut self, stage: &mut dyn Stage, delta_ms: f32) {
        for card in &mut self.cards {
            if card.state != CardState::InFlight {
                continue;
            }
            let Some(tween) = card.tween.as_mut() else {
                continue;
            };
            let position = tween.advance(delta_ms);
            let finished = tween.is_finished();

            if let Some(node) = stage.node_mut(card.node) {
                node.position = position;
            }

            if finished {
                card.initial = card.target;
                card.tween = None;
                card.state = CardState::Settled;
                self.right_count += 1;
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
                warn!(target: "stagecraft::card_stack", %err, "card texture failed to load");
                self.phase = ScenePhase::Failed;
            }
        }
    }
}

impl Scene for CardStackScene {
    fn name(&self) -> &str {
        "Card Stack"
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

        if let (Some(average), Some(id)) = (self.fps.record(tick), self.fps_label) {
            if let Some(label) = ctx.stage.node_mut(id) {
                label.set_text(&format!("FPS: {average}"));
            }
        }

        self.since_last_move_ms += tick.delta_ms;
        if self.since_last_move_ms >= self.config.move_interval_ms && self.left_count > 0 {
            self.trigger_next(ctx.stage);
            self.since_last_move_ms = 0.0;
        }

        self.advance_in_flight(ctx.stage, tick.delta_ms);
    }

    fn destroy(&mut self, stage: &mut dyn Stage) {
        for card in self.cards.drain(..) {
            stage.remove_node(card.node);
        }
        if let Some(label) = self.fps_label.take() {
            stage.remove_node(label);
        }
        self.texture = None;
        self.phase = ScenePhase::Destroyed;
    }
}
