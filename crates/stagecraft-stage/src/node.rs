//! Visual node types placed on a stage

use crate::texture::TextureHandle;
use serde::Serialize;
use stagecraft_core::{Rgb, Vec2};

/// What a node draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NodeKind {
    /// A textured quad, natural size taken from the texture
    Sprite { texture: TextureHandle },
    /// A single line of text
    Text { content: String, font_size: f32 },
}

/// A node on the stage. Position is the top-left corner unless `anchor` says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualNode {
    pub kind: NodeKind,
    pub position: Vec2,
    /// Normalized pivot inside the node's bounds (0,0 = top-left, 0.5,0.5 = center)
    pub anchor: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub alpha: f32,
    pub tint: Rgb,
    pub z_index: i32,
    pub visible: bool,
}

impl VisualNode {
    fn with_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            anchor: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            alpha: 1.0,
            tint: Rgb::WHITE,
            z_index: 0,
            visible: true,
        }
    }

    pub fn sprite(texture: TextureHandle) -> Self {
        Self::with_kind(NodeKind::Sprite { texture })
    }

    pub fn text(content: impl Into<String>, font_size: f32) -> Self {
        Self::with_kind(NodeKind::Text {
            content: content.into(),
            font_size,
        })
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn anchored(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_z(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Replace the text of a text node. No-op on sprites.
    pub fn set_text(&mut self, text: &str) {
        if let NodeKind::Text { content, .. } = &mut self.kind {
            content.clear();
            content.push_str(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagecraft_core::TextureId;

    #[test]
    fn builder_sets_fields() {
        let tex = TextureHandle::new(TextureId(1), "card.png", 64.0, 96.0);
        let node = VisualNode::sprite(tex.clone())
            .at(Vec2::new(10.0, 20.0))
            .anchored(Vec2::new(0.5, 0.5))
            .with_z(7)
            .hidden();
        assert_eq!(node.position, Vec2::new(10.0, 20.0));
        assert_eq!(node.z_index, 7);
        assert!(!node.visible);
        assert_eq!(node.kind, NodeKind::Sprite { texture: tex });
    }

    #[test]
    fn set_text_only_touches_text_nodes() {
        let mut label = VisualNode::text("FPS: 0", 16.0);
        label.set_text("FPS: 60");
        assert_eq!(
            label.kind,
            NodeKind::Text {
                content: "FPS: 60".into(),
                font_size: 16.0
            }
        );

        let tex = TextureHandle::new(TextureId(2), "spark.png", 8.0, 8.0);
        let mut sprite = VisualNode::sprite(tex);
        sprite.set_text("ignored");
        assert!(matches!(sprite.kind, NodeKind::Sprite { .. }));
    }
}
