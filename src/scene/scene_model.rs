use serde::{Deserialize, Serialize};

/// One element of an exported design-document scene graph.
///
/// Whether a node can hold children is decided once, when the host
/// document is read, and recorded in [`NodeKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub struct SceneNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Leaf,
    Container(Vec<SceneNode>),
}

impl SceneNode {
    pub fn leaf(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
            kind: NodeKind::Leaf,
        }
    }

    /// Attach children. An empty list keeps the node a leaf.
    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.kind = if children.is_empty() {
            NodeKind::Leaf
        } else {
            NodeKind::Container(children)
        };
        self
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container(_))
    }

    /// Children in host order; empty for leaves.
    pub fn children(&self) -> &[SceneNode] {
        match &self.kind {
            NodeKind::Leaf => &[],
            NodeKind::Container(children) => children,
        }
    }
}

/// Wire shape of a node as exported by the host: `children` may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawNode {
    name: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<SceneNode>>,
}

impl From<RawNode> for SceneNode {
    fn from(raw: RawNode) -> Self {
        SceneNode::leaf(raw.name, raw.x, raw.y, raw.width, raw.height)
            .with_children(raw.children.unwrap_or_default())
    }
}

impl From<SceneNode> for RawNode {
    fn from(node: SceneNode) -> Self {
        let children = match node.kind {
            NodeKind::Leaf => None,
            NodeKind::Container(children) => Some(children),
        };
        RawNode {
            name: node.name,
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
            children,
        }
    }
}

/// The caller-chosen roots to generate from, in selection order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub page: Option<String>,
    pub roots: Vec<SceneNode>,
}

impl Selection {
    pub fn new(roots: Vec<SceneNode>) -> Self {
        Self { page: None, roots }
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }
}

/// Top-level document shapes accepted from the host.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SceneDocument {
    Page {
        #[serde(default)]
        page: Option<String>,
        selection: Vec<SceneNode>,
    },
    Roots(Vec<SceneNode>),
    Single(SceneNode),
}

impl From<SceneDocument> for Selection {
    fn from(doc: SceneDocument) -> Self {
        match doc {
            SceneDocument::Page { page, selection } => Selection {
                page,
                roots: selection,
            },
            SceneDocument::Roots(roots) => Selection::new(roots),
            SceneDocument::Single(node) => Selection::new(vec![node]),
        }
    }
}
