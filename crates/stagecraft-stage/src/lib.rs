//! Stagecraft Stage - the render surface seen by scenes
//!
//! Scenes never talk to a concrete renderer. They consume:
//! - `Stage`: add/remove/mutate visual nodes, query dimensions and resolution
//! - `VisualNode`: a sprite or text node with transform, tint and z-order
//! - `TextureLoader`: asynchronous texture loading resolving to a `TextureHandle`
//!
//! `MemoryStage` is a headless stage used by the CLI driver and tests.

mod memory;
mod node;
mod stage;
mod texture;

pub use memory::MemoryStage;
pub use node::{NodeKind, VisualNode};
pub use stage::Stage;
pub use texture::{FileTextureLoader, StaticTextureLoader, TextureHandle, TextureLoader};
