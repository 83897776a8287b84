//! Stagecraft Scenes - The showcase scenes and their registry
//!
//! Three demo scenes built on the runtime's lifecycle contract:
//! - `CardStackScene`: cards flying between two stacks, with an FPS label
//! - `TextImagesScene`: a randomly composed row of text and images
//! - `ParticlesScene`: a pooled particle fountain
//!
//! `ShowcaseScenes` maps scene ids to fresh scene instances for a `SceneHost`.

pub mod card_stack;
pub mod config;
pub mod layout;
pub mod particles;
pub mod text_images;

pub use card_stack::{CardStackScene, CardState};
pub use config::{CardStackConfig, ParticlesConfig, ShowcaseConfig, StageConfig, TextImagesConfig};
pub use layout::{arrange_row, compose_row, LayoutRow, RowCatalog, RowContent, RowElement, SlotKind};
pub use particles::ParticlesScene;
pub use text_images::TextImagesScene;

use stagecraft_runtime::{Scene, SceneFactory, SceneHost};
use stagecraft_stage::TextureLoader;
use std::fmt;
use std::rc::Rc;

/// Identifiers of the selectable scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    CardStack,
    TextImages,
    Particles,
}

impl SceneId {
    /// Menu order
    pub const ALL: [SceneId; 3] = [SceneId::CardStack, SceneId::TextImages, SceneId::Particles];

    pub fn as_str(&self) -> &'static str {
        match self {
            SceneId::CardStack => "CardStack",
            SceneId::TextImages => "TextImages",
            SceneId::Particles => "Particles",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SceneId::CardStack => "Card Stack",
            SceneId::TextImages => "Text + Images",
            SceneId::Particles => "Particles",
        }
    }

    /// Exact, case-sensitive match against [`SceneId::as_str`]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds showcase scenes from a shared config
pub struct ShowcaseScenes {
    config: ShowcaseConfig,
}

impl ShowcaseScenes {
    pub fn new(config: ShowcaseConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, id: SceneId) -> Box<dyn Scene> {
        let seed = self.config.seed;
        match id {
            SceneId::CardStack => Box::new(CardStackScene::new(self.config.card_stack.clone())),
            SceneId::TextImages => Box::new(TextImagesScene::new(
                self.config.text_images.clone(),
                seed.wrapping_add(1),
            )),
            SceneId::Particles => {
                Box::new(ParticlesScene::new(self.config.particles.clone(), seed))
            }
        }
    }
}

impl SceneFactory for ShowcaseScenes {
    fn create(&self, id: &str) -> Option<Box<dyn Scene>> {
        SceneId::parse(id).map(|id| self.build(id))
    }
}

/// A host wired to the showcase scenes
pub fn showcase_host(
    config: ShowcaseConfig,
    loader: Rc<dyn TextureLoader>,
) -> SceneHost<ShowcaseScenes> {
    SceneHost::new(ShowcaseScenes::new(config), loader)
}
