//! Showcase configuration loaded from TOML
//!
//! Every section is optional; missing keys fall back to the defaults the
//! demo ships with.

use crate::layout::SlotKind;
use serde::{Deserialize, Serialize};
use stagecraft_animation::Easing;
use stagecraft_core::{Result, StageError};
use stagecraft_particles::{ensure_finite, EmitterConfig};
use stagecraft_stage::StaticTextureLoader;
use std::path::Path;

/// Top-level config file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Seed for every scene's PRNG
    pub seed: u32,
    pub stage: StageConfig,
    pub card_stack: CardStackConfig,
    pub particles: ParticlesConfig,
    pub text_images: TextImagesConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED_1234,
            stage: StageConfig::default(),
            card_stack: CardStackConfig::default(),
            particles: ParticlesConfig::default(),
            text_images: TextImagesConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub width: f32,
    pub height: f32,
    pub resolution: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            resolution: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStackConfig {
    pub total_cards: usize,
    /// Minimum time between two card launches
    pub move_interval_ms: f32,
    /// Flight time of one card
    pub move_duration_ms: f32,
    /// Vertical offset between neighbouring cards in a stack
    pub card_offset: f32,
    pub easing: Easing,
    pub fps_window_ms: f32,
    pub texture: String,
    /// Top of the left stack, as a fraction of stage size
    pub left_anchor: [f32; 2],
    /// Top of the right stack, as a fraction of stage size
    pub right_anchor: [f32; 2],
}

impl Default for CardStackConfig {
    fn default() -> Self {
        Self {
            total_cards: 144,
            move_interval_ms: 1000.0,
            move_duration_ms: 2000.0,
            card_offset: 2.0,
            easing: Easing::Linear,
            fps_window_ms: 500.0,
            texture: "cards/card.png".to_string(),
            left_anchor: [0.15, 0.05],
            right_anchor: [0.6, 0.05],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub texture: String,
    /// Emitter origin as a fraction of stage size
    pub anchor: [f32; 2],
    pub emitter: EmitterConfig,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            texture: "particles/flame.png".to_string(),
            anchor: [0.5, 0.8],
            emitter: EmitterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextImagesConfig {
    pub interval_ms: f32,
    pub font_size_min: f32,
    pub font_size_max: f32,
    /// Font size images are matched to when no text precedes them in a row
    pub base_font_size: f32,
    /// Image edge length that corresponds to a scale of 1 at `base_font_size`
    pub base_image_size: f32,
    pub texts: Vec<String>,
    pub images: Vec<String>,
    pub layouts: Vec<Vec<SlotKind>>,
}

impl Default for TextImagesConfig {
    fn default() -> Self {
        use SlotKind::{Image, Text};
        Self {
            interval_ms: 2000.0,
            font_size_min: 16.0,
            font_size_max: 48.0,
            base_font_size: 24.0,
            base_image_size: 64.0,
            texts: ["Hello", "World", "Lorem ipsum", "Rust", "Stagecraft", "Fun!"]
                .into_iter()
                .map(String::from)
                .collect(),
            images: vec![
                "emoji/smile.png".to_string(),
                "emoji/star.png".to_string(),
                "emoji/heart.png".to_string(),
            ],
            layouts: vec![
                vec![Text, Image],
                vec![Image, Text],
                vec![Text, Image, Text],
                vec![Image, Text, Image],
                vec![Text, Text, Image],
            ],
        }
    }
}

/// Natural sizes of the textures the default config refers to
const CARD_SIZE: (f32, f32) = (100.0, 140.0);
const PARTICLE_SIZE: (f32, f32) = (32.0, 32.0);
const IMAGE_SIZE: (f32, f32) = (64.0, 64.0);

impl ShowcaseConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        let cards = &self.card_stack;
        let ti = &self.text_images;
        let anchors = [
            ("card_stack.left_anchor", cards.left_anchor),
            ("card_stack.right_anchor", cards.right_anchor),
            ("particles.anchor", self.particles.anchor),
        ];
        ensure_finite(&[
            ("stage.width", self.stage.width),
            ("stage.height", self.stage.height),
            ("stage.resolution", self.stage.resolution),
            ("card_stack.move_interval_ms", cards.move_interval_ms),
            ("card_stack.move_duration_ms", cards.move_duration_ms),
            ("card_stack.card_offset", cards.card_offset),
            ("card_stack.fps_window_ms", cards.fps_window_ms),
            ("text_images.interval_ms", ti.interval_ms),
            ("text_images.font_size_min", ti.font_size_min),
            ("text_images.font_size_max", ti.font_size_max),
            ("text_images.base_font_size", ti.base_font_size),
            ("text_images.base_image_size", ti.base_image_size),
        ])?;
        for (name, [x, y]) in anchors {
            ensure_finite(&[(name, x), (name, y)])?;
        }

        if self.stage.width <= 0.0 || self.stage.height <= 0.0 || self.stage.resolution <= 0.0 {
            return Err(StageError::InvalidConfig(
                "stage width, height and resolution must be positive".into(),
            ));
        }

        if cards.total_cards == 0 {
            return Err(StageError::InvalidConfig(
                "card_stack.total_cards must be at least 1".into(),
            ));
        }
        if cards.move_interval_ms <= 0.0 || cards.fps_window_ms <= 0.0 {
            return Err(StageError::InvalidConfig(
                "card_stack intervals must be positive".into(),
            ));
        }
        if cards.move_duration_ms < 0.0 {
            return Err(StageError::InvalidConfig(
                "card_stack.move_duration_ms must not be negative".into(),
            ));
        }

        self.particles.emitter.validate()?;

        if ti.interval_ms <= 0.0 {
            return Err(StageError::InvalidConfig(
                "text_images.interval_ms must be positive".into(),
            ));
        }
        if ti.font_size_min <= 0.0 || ti.font_size_min > ti.font_size_max {
            return Err(StageError::InvalidConfig(format!(
                "text_images font size range {}..{} is invalid",
                ti.font_size_min, ti.font_size_max
            )));
        }
        if ti.base_font_size <= 0.0 || ti.base_image_size <= 0.0 {
            return Err(StageError::InvalidConfig(
                "text_images base sizes must be positive".into(),
            ));
        }
        if ti.layouts.is_empty() {
            return Err(StageError::InvalidConfig(
                "text_images.layouts must not be empty".into(),
            ));
        }
        for layout in &ti.layouts {
            if !(2..=3).contains(&layout.len()) {
                return Err(StageError::ValueOutOfRange {
                    field: "text_images.layouts[].len".into(),
                    min: 2.0,
                    max: 3.0,
                    value: layout.len() as f64,
                });
            }
            if layout.contains(&SlotKind::Text) && ti.texts.is_empty() {
                return Err(StageError::InvalidConfig(
                    "text_images.texts must not be empty when a layout has a text slot".into(),
                ));
            }
            if layout.contains(&SlotKind::Image) && ti.images.is_empty() {
                return Err(StageError::InvalidConfig(
                    "text_images.images must not be empty when a layout has an image slot".into(),
                ));
            }
        }
        Ok(())
    }

    /// In-memory catalog covering every texture this config refers to.
    /// Used when no asset directory is available.
    pub fn builtin_textures(&self) -> StaticTextureLoader {
        let mut loader = StaticTextureLoader::new();
        loader.insert(&self.card_stack.texture, CARD_SIZE.0, CARD_SIZE.1);
        loader.insert(&self.particles.texture, PARTICLE_SIZE.0, PARTICLE_SIZE.1);
        for image in &self.text_images.images {
            loader.insert(image, IMAGE_SIZE.0, IMAGE_SIZE.1);
        }
        loader
    }
}
