//! Headless in-memory stage

use crate::node::VisualNode;
use crate::stage::Stage;
use stagecraft_core::{NodeId, Vec2};
use std::collections::BTreeMap;

/// A stage that keeps nodes in memory and draws nothing.
///
/// Node ids increase monotonically and are never reused, so tests can assert
/// that a removed node stays gone.
pub struct MemoryStage {
    nodes: BTreeMap<NodeId, VisualNode>,
    next_id: u64,
    size: Vec2,
    resolution: f32,
}

impl MemoryStage {
    pub fn new(width: f32, height: f32, resolution: f32) -> Self {
        Self {
            nodes: BTreeMap::new(),
            next_id: 1,
            size: Vec2::new(width, height),
            resolution,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn visible_count(&self) -> usize {
        self.nodes.values().filter(|n| n.visible).count()
    }
}

impl Default for MemoryStage {
    fn default() -> Self {
        Self::new(640.0, 480.0, 1.0)
    }
}

impl Stage for MemoryStage {
    fn add_node(&mut self, node: VisualNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    fn remove_node(&mut self, id: NodeId) -> Option<VisualNode> {
        self.nodes.remove(&id)
    }

    fn node(&self, id: NodeId) -> Option<&VisualNode> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut VisualNode> {
        self.nodes.get_mut(&id)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn resolution(&self) -> f32 {
        self.resolution
    }
}
