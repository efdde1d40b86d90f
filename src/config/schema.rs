use crate::core::resolve_path;
use crate::node::kind::NodeKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GlobalConfig {
    /// Directory holding the candidate files. Defaults to the binary's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_dir: Option<String>,
    #[serde(default)]
    pub python: PythonConfig,
    #[serde(default)]
    pub wheel: NodeConfig,
    #[serde(default)]
    pub package: NodeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PythonConfig {
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
        }
    }
}

/// Per-node settings; unset fields fall back to the node kind's defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NodeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

fn default_interpreter() -> String {
    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

impl GlobalConfig {
    pub fn node(&self, kind: NodeKind) -> &NodeConfig {
        match kind {
            NodeKind::Wheel => &self.wheel,
            NodeKind::Package => &self.package,
        }
    }

    pub fn timeout(&self, kind: NodeKind) -> Duration {
        self.node(kind)
            .timeout_seconds
            .map(Duration::from_secs)
            .unwrap_or_else(|| kind.default_timeout())
    }

    pub fn candidates_path(&self, kind: NodeKind, nodes_dir: &Path) -> PathBuf {
        let file = self
            .node(kind)
            .config_file
            .as_deref()
            .unwrap_or_else(|| kind.default_config_file());
        resolve_path(nodes_dir, file)
    }

    /// Written by `init` so users can see every knob.
    pub fn with_explicit_defaults() -> Self {
        let explicit = |kind: NodeKind| NodeConfig {
            config_file: Some(kind.default_config_file().to_string()),
            timeout_seconds: Some(kind.default_timeout().as_secs()),
        };

        Self {
            nodes_dir: None,
            python: PythonConfig::default(),
            wheel: explicit(NodeKind::Wheel),
            package: explicit(NodeKind::Package),
        }
    }
}
