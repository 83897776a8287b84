//! The render-surface trait consumed by scenes

use crate::node::VisualNode;
use stagecraft_core::{NodeId, Vec2};

/// Average glyph advance as a fraction of the font size, used when a stage
/// has no real font metrics.
const GLYPH_ADVANCE: f32 = 0.55;
/// Line height as a multiple of the font size
const LINE_HEIGHT: f32 = 1.2;

/// The active render surface.
///
/// Nodes added by a scene belong to that scene; the scene is responsible for
/// removing every node it added when it is destroyed.
pub trait Stage {
    /// Attach a node and return its handle
    fn add_node(&mut self, node: VisualNode) -> NodeId;

    /// Detach a node, returning it if it was still attached
    fn remove_node(&mut self, id: NodeId) -> Option<VisualNode>;

    fn node(&self, id: NodeId) -> Option<&VisualNode>;

    fn node_mut(&mut self, id: NodeId) -> Option<&mut VisualNode>;

    /// Number of attached nodes
    fn node_count(&self) -> usize;

    /// Logical width and height in stage pixels
    fn size(&self) -> Vec2;

    /// Device pixel density factor
    fn resolution(&self) -> f32;

    /// Width and height a single line of text occupies at `font_size`.
    fn measure_text(&self, content: &str, font_size: f32) -> Vec2 {
        let glyphs = content.chars().count() as f32;
        Vec2::new(glyphs * font_size * GLYPH_ADVANCE, font_size * LINE_HEIGHT)
    }
}
