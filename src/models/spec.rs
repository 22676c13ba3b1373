use serde::{Deserialize, Serialize};

use super::family::ModelFamily;

pub type ModelId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub id: ModelId,
    pub family: ModelFamily,
    pub version: ModelVersion,
    pub capabilities: Capabilities,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseChannel {
    #[default]
    Stable,
    Preview,
    Experimental,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelVersion {
    pub version: String,
    pub channel: ReleaseChannel,
    /// Month-day snapshot tag for preview and experimental releases, e.g. `05-06`.
    pub snapshot: Option<String>,
}

/// Limits a generate-content config is checked against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Capabilities {
    pub context_window: u64,
    pub max_output_tokens: u64,
    pub thinking: bool,
    pub video_input: bool,
    pub structured_output: bool,
}

impl ModelSpec {
    pub fn supports_thinking(&self) -> bool {
        self.capabilities.thinking
    }
}
