//! Text + images: a freshly composed mixed row every interval

use crate::config::TextImagesConfig;
use crate::layout::{arrange_row, compose_row, LayoutRow, RowCatalog, RowContent};
use stagecraft_core::{NodeId, SceneRng};
use stagecraft_runtime::{Pending, Scene, SceneContext, ScenePhase, Tick};
use stagecraft_stage::{Stage, TextureHandle, VisualNode};
use tracing::{debug, warn};

pub struct TextImagesScene {
    config: TextImagesConfig,
    phase: ScenePhase,
    rng: SceneRng,
    textures: Option<Pending<Vec<TextureHandle>>>,
    images: Vec<TextureHandle>,
    /// Nodes of the row currently on stage
    row_nodes: Vec<NodeId>,
    since_last_row_ms: f32,
    rows_generated: usize,
}

impl TextImagesScene {
    pub fn new(config: TextImagesConfig, seed: u32) -> Self {
        Self {
            config,
            phase: ScenePhase::Idle,
            rng: SceneRng::new(seed),
            textures: None,
            images: Vec::new(),
            row_nodes: Vec::new(),
            since_last_row_ms: 0.0,
            rows_generated: 0,
        }
    }

    pub fn rows_generated(&self) -> usize {
        self.rows_generated
    }

    pub fn row_nodes(&self) -> &[NodeId] {
        &self.row_nodes
    }

    fn clear_row(&mut self, stage: &mut dyn Stage) {
        for id in self.row_nodes.drain(..) {
            stage.remove_node(id);
        }
    }

    fn compose(&mut self, stage: &dyn Stage) -> Option<LayoutRow> {
        let catalog = RowCatalog {
            texts: &self.config.texts,
            images: &self.images,
            layouts: &self.config.layouts,
            font_size_min: self.config.font_size_min,
            font_size_max: self.config.font_size_max,
            base_font_size: self.config.base_font_size,
            base_image_size: self.config.base_image_size,
        };
        let mut row = compose_row(&mut self.rng, &catalog, |content, font_size| {
            stage.measure_text(content, font_size)
        })?;
        arrange_row(&mut row, stage.size());
        Some(row)
    }

    /// Replace the current row with a new one
    fn next_row(&mut self, stage: &mut dyn Stage) {
        self.clear_row(stage);

        let Some(row) = self.compose(stage) else {
            debug!(target: "stagecraft::text_images", "catalog cannot fill layout; row left empty");
            return;
        };

        for element in row.elements {
            let node = match element.content {
                RowContent::Text { content, font_size } => VisualNode::text(content, font_size),
                RowContent::Image { texture, scale } => VisualNode::sprite(texture).scaled(scale),
            };
            let id = stage.add_node(node.at(element.position));
            self.row_nodes.push(id);
        }
        self.rows_generated += 1;
    }

    fn poll_textures(&mut self, stage: &mut dyn Stage) {
        let Some(result) = self.textures.as_ref().and_then(|p| p.take()) else {
            return;
        };
        self.textures = None;
        match result {
            Ok(images) => {
                self.images = images;
                self.phase = ScenePhase::Ready;
                self.next_row(stage);
            }
            Err(err) => {
                warn!(target: "stagecraft::text_images", %err, "image textures failed to load");
                self.phase = ScenePhase::Failed;
            }
        }
    }
}

impl Scene for TextImagesScene {
    fn name(&self) -> &str {
        "Text + Images"
    }

    fn phase(&self) -> ScenePhase {
        self.phase
    }

    fn start(&mut self, ctx: &mut SceneContext<'_>) -> stagecraft_core::Result<()> {
        self.phase = ScenePhase::Loading;
        self.textures = Some(ctx.load_textures(&self.config.images)?);
        Ok(())
    }

    fn tick(&mut self, ctx: &mut SceneContext<'_>, tick: Tick) {
        match self.phase {
            ScenePhase::Loading => {
                self.poll_textures(ctx.stage);
                return;
            }
            ScenePhase::Ready => {}
            _ => return,
        }

        self.since_last_row_ms += tick.delta_ms;
        if self.since_last_row_ms >= self.config.interval_ms {
            self.since_last_row_ms = 0.0;
            self.next_row(ctx.stage);
        }
    }

    fn destroy(&mut self, stage: &mut dyn Stage) {
        self.clear_row(stage);
        self.textures = None;
        self.phase = ScenePhase::Destroyed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagecraft_runtime::{Liveness, TextureLoads};
    use stagecraft_stage::{MemoryStage, NodeKind, StaticTextureLoader};
    use std::rc::Rc;

    struct Harness {
        stage: MemoryStage,
        loads: TextureLoads,
        liveness: Liveness,
        scene: TextImagesScene,
    }

    impl Harness {
        fn with_loader(config: TextImagesConfig, loader: StaticTextureLoader) -> Self {
            let mut h = Self {
                stage: MemoryStage::new(640.0, 480.0, 1.0),
                loads: TextureLoads::new(Rc::new(loader)),
                liveness: Liveness::new(),
                scene: TextImagesScene::new(config, 7),
            };
            let mut ctx = SceneContext::new(&mut h.stage, &h.loads, &h.liveness);
            h.scene.start(&mut ctx).unwrap();
            h
        }

        fn new(config: TextImagesConfig) -> Self {
            let mut loader = StaticTextureLoader::new();
            for image in &config.images {
                loader.insert(image, 64.0, 64.0);
            }
            Self::with_loader(config, loader)
        }

        fn tick(&mut self, delta_ms: f32) {
            self.loads.pump();
            let mut ctx = SceneContext::new(&mut self.stage, &self.loads, &self.liveness);
            self.scene.tick(&mut ctx, Tick::new(delta_ms, 60.0));
        }
    }

    #[test]
    fn first_row_appears_once_images_load() {
        let mut h = Harness::new(TextImagesConfig::default());
        assert_eq!(h.scene.phase(), ScenePhase::Loading);
        assert_eq!(h.stage.node_count(), 0);

        h.tick(16.0);
        assert_eq!(h.scene.phase(), ScenePhase::Ready);
        assert_eq!(h.scene.rows_generated(), 1);
        assert!(h.stage.node_count() >= 2);
        assert_eq!(h.stage.node_count(), h.scene.row_nodes().len());
    }

    #[test]
    fn row_replaced_every_interval() {
        let mut h = Harness::new(TextImagesConfig::default());
        h.tick(0.0);
        let first: Vec<_> = h.scene.row_nodes().to_vec();

        h.tick(1999.0);
        assert_eq!(h.scene.rows_generated(), 1);
        assert_eq!(h.scene.row_nodes(), first.as_slice());

        h.tick(1.0);
        assert_eq!(h.scene.rows_generated(), 2);
        for id in &first {
            assert!(!h.stage.contains(*id));
        }
        assert_eq!(h.stage.node_count(), h.scene.row_nodes().len());
    }

    #[test]
    fn single_text_row_is_centered() {
        let config = TextImagesConfig {
            texts: vec!["Hi".to_string()],
            images: Vec::new(),
            layouts: vec![vec![crate::layout::SlotKind::Text]],
            font_size_min: 20.0,
            font_size_max: 20.0,
            ..Default::default()
        };
        let mut h = Harness::new(config);
        h.tick(0.0);
        let node = h.stage.node(h.scene.row_nodes()[0]).unwrap();
        let size = h.stage.measure_text("Hi", 20.0);
        assert!(matches!(node.kind, NodeKind::Text { .. }));
        assert!((node.position.x - (640.0 - size.x) / 2.0).abs() < 1e-3);
        assert!((node.position.y - (480.0 - size.y) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn image_scales_to_preceding_text() {
        use crate::layout::SlotKind::{Image, Text};
        let config = TextImagesConfig {
            texts: vec!["Big".to_string()],
            images: vec!["emoji/star.png".to_string()],
            layouts: vec![vec![Text, Image]],
            font_size_min: 32.0,
            font_size_max: 32.0,
            base_image_size: 64.0,
            ..Default::default()
        };
        let mut h = Harness::new(config);
        h.tick(0.0);
        let image = h.stage.node(h.scene.row_nodes()[1]).unwrap();
        assert!((image.scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn missing_image_fails_scene() {
        let mut h = Harness::with_loader(TextImagesConfig::default(), StaticTextureLoader::new());
        h.tick(16.0);
        assert_eq!(h.scene.phase(), ScenePhase::Failed);
        assert_eq!(h.stage.node_count(), 0);
        h.tick(5000.0);
        assert_eq!(h.scene.rows_generated(), 0);
    }

    #[test]
    fn destroy_clears_row() {
        let mut h = Harness::new(TextImagesConfig::default());
        h.tick(0.0);
        h.scene.destroy(&mut h.stage);
        assert_eq!(h.stage.node_count(), 0);
        assert_eq!(h.scene.phase(), ScenePhase::Destroyed);
    }
}
