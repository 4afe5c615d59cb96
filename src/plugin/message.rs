use serde::{Deserialize, Serialize};

/// Request sent from the UI side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PluginRequest {
    Generate,
    Cancel,
}

/// Response posted back to the UI side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PluginResponse {
    /// Generated header text, ready to be saved.
    SaveText { payload: String },
    /// User-facing error message.
    Error { payload: String },
}
