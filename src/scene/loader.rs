use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::scene::scene_model::{SceneDocument, SceneNode, Selection};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON scene: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML scene: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("node '{path}' has non-finite {field}")]
    NonFiniteGeometry { path: String, field: &'static str },
}

/// Scene source format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    Json,
    Yaml,
}

impl SceneFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => SceneFormat::Yaml,
            _ => SceneFormat::Json,
        }
    }
}

/// Load a selection from an exported scene file (JSON or YAML).
pub fn load_selection(path: &Path) -> Result<Selection, SceneError> {
    let content = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let format = SceneFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading scene");
    parse_selection(&content, format)
}

/// Parse a selection from scene text and check its geometry.
pub fn parse_selection(content: &str, format: SceneFormat) -> Result<Selection, SceneError> {
    let doc: SceneDocument = match format {
        SceneFormat::Json => serde_json::from_str(content)?,
        SceneFormat::Yaml => serde_yaml::from_str(content)?,
    };
    let selection = Selection::from(doc);

    for root in &selection.roots {
        check_geometry(root, &root.name)?;
    }

    Ok(selection)
}

fn check_geometry(node: &SceneNode, path: &str) -> Result<(), SceneError> {
    let fields = [
        ("x", node.x),
        ("y", node.y),
        ("width", node.width),
        ("height", node.height),
    ];
    if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
        return Err(SceneError::NonFiniteGeometry {
            path: path.to_string(),
            field: *field,
        });
    }

    for child in node.children() {
        check_geometry(child, &format!("{}/{}", path, child.name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(SceneFormat::from_path(Path::new("a.yaml")), SceneFormat::Yaml);
        assert_eq!(SceneFormat::from_path(Path::new("a.yml")), SceneFormat::Yaml);
        assert_eq!(SceneFormat::from_path(Path::new("a.json")), SceneFormat::Json);
        assert_eq!(SceneFormat::from_path(Path::new("scene")), SceneFormat::Json);
    }
}
