use serde::Serialize;

use crate::codegen::sanitize::{sanitize, should_visit};
use crate::scene::scene_model::SceneNode;

/// Geometry of one node, captured at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundsRecord {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundsRecord {
    pub fn of(node: &SceneNode) -> Self {
        Self {
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
        }
    }

    /// Fields in emission order: x, y, width, height.
    pub fn as_array(&self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

/// An identifier paired with the bounds it names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedBounds {
    pub identifier: String,
    pub bounds: BoundsRecord,
}

/// Walk `node` and its visible descendants in pre-order.
///
/// `node` itself is always emitted; children whose name starts with `_` are
/// skipped together with their subtree. Sibling order follows the host.
pub fn collect(prefix: &str, node: &SceneNode) -> Vec<NamedBounds> {
    let mut out = Vec::new();
    collect_into(prefix, node, &mut out);
    out
}

fn collect_into(prefix: &str, node: &SceneNode, out: &mut Vec<NamedBounds>) {
    let identifier = format!("{}_{}", prefix, sanitize(&node.name));
    out.push(NamedBounds {
        identifier: identifier.clone(),
        bounds: BoundsRecord::of(node),
    });

    for child in node.children().iter().filter(|c| should_visit(c)) {
        collect_into(&identifier, child, out);
    }
}
