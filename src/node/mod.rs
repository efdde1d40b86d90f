pub mod kind;
pub mod schema;

pub use kind::NodeKind;
pub use schema::{InputField, NodeSchema, OutputField, OutputType};

use crate::config::{load_candidates, CandidateList, GlobalConfig};
use crate::pip::{CommandRunner, InstallOutcome, InstallRequest, Installer, SystemRunner};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The two values a node hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeResult {
    pub status_message: String,
    pub success: bool,
}

impl NodeResult {
    pub fn from_outcome(outcome: &InstallOutcome, request: &InstallRequest) -> Self {
        Self {
            status_message: outcome.status_message(request),
            success: outcome.is_success(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeFlags {
    pub force_reinstall: bool,
    pub upgrade: bool,
}

/// An installer node bound to its candidate file.
pub struct Node<R = SystemRunner> {
    kind: NodeKind,
    candidates_path: PathBuf,
    installer: Installer<R>,
}

impl Node<SystemRunner> {
    pub fn from_config(kind: NodeKind, config: &GlobalConfig, nodes_dir: &Path) -> Self {
        let installer = Installer::new(
            SystemRunner,
            config.python.interpreter.clone(),
            config.timeout(kind),
        );
        Self::new(kind, config.candidates_path(kind, nodes_dir), installer)
    }
}

impl<R: CommandRunner> Node<R> {
    pub fn new(kind: NodeKind, candidates_path: PathBuf, installer: Installer<R>) -> Self {
        Self {
            kind,
            candidates_path,
            installer,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn candidates_path(&self) -> &Path {
        &self.candidates_path
    }

    pub fn installer(&self) -> &Installer<R> {
        &self.installer
    }

    /// Re-reads the candidate file on every call.
    pub async fn candidates(&self) -> CandidateList {
        load_candidates(self.kind, &self.candidates_path).await
    }

    pub async fn describe(&self) -> NodeSchema {
        let options = self.candidates().await.options(self.kind);
        NodeSchema::new(self.kind, options)
    }

    pub fn request(&self, selection: &str, flags: NodeFlags) -> InstallRequest {
        let selection = if selection.trim().is_empty() {
            self.kind.empty_sentinel()
        } else {
            selection
        };

        match self.kind {
            NodeKind::Wheel => InstallRequest::wheel(selection, flags.force_reinstall),
            NodeKind::Package => {
                InstallRequest::package(selection, flags.force_reinstall, flags.upgrade)
            }
        }
    }

    pub async fn execute(&self, selection: &str, flags: NodeFlags) -> NodeResult {
        let request = self.request(selection, flags);
        let outcome = self.installer.install(&request).await;
        let result = NodeResult::from_outcome(&outcome, &request);

        if result.success {
            info!("{}", result.status_message);
        } else {
            warn!("{}", result.status_message);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pip::installer::tests::StubRunner;
    use std::time::Duration;

    fn node(kind: NodeKind, dir: &Path, runner: StubRunner) -> Node<StubRunner> {
        let path = dir.join(kind.default_config_file());
        Node::new(
            kind,
            path,
            Installer::new(runner, "python3", kind.default_timeout()),
        )
    }

    #[tokio::test]
    async fn fresh_node_offers_only_the_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let node = node(NodeKind::Wheel, dir.path(), StubRunner::exit(0, "", ""));

        let schema = node.describe().await;
        match &schema.required[0] {
            InputField::Options {
                options, default, ..
            } => {
                assert_eq!(options, &vec!["No wheels configured".to_string()]);
                assert_eq!(default, "No wheels configured");
            }
            other => panic!("unexpected field: {:?}", other),
        }
        assert!(node.candidates_path().exists());

        let result = node.execute(default_of(&schema), NodeFlags::default()).await;
        assert_eq!(
            result,
            NodeResult {
                status_message: "No wheels configured".to_string(),
                success: false,
            }
        );
        assert_eq!(node.installer().runner().call_count(), 0);
    }

    fn default_of(schema: &NodeSchema) -> &str {
        match &schema.required[0] {
            InputField::Options { default, .. } => default,
            _ => "",
        }
    }

    #[tokio::test]
    async fn edits_to_the_file_show_up_on_next_describe() {
        let dir = tempfile::tempdir().unwrap();
        let node = node(NodeKind::Package, dir.path(), StubRunner::exit(0, "", ""));

        node.describe().await;
        tokio::fs::write(node.candidates_path(), "numpy\n# later\ntorch==2.1.0\n")
            .await
            .unwrap();

        let schema = node.describe().await;
        assert_eq!(default_of(&schema), "numpy");
        assert_eq!(node.candidates().await.len(), 2);
    }

    #[tokio::test]
    async fn package_node_installs_selection() {
        let dir = tempfile::tempdir().unwrap();
        let node = node(NodeKind::Package, dir.path(), StubRunner::exit(0, "ok", ""));

        let result = node
            .execute(
                "torch==2.1.0",
                NodeFlags {
                    force_reinstall: false,
                    upgrade: true,
                },
            )
            .await;

        assert!(result.success);
        assert_eq!(result.status_message, "Successfully installed: torch==2.1.0");
        assert_eq!(
            node.installer().runner().last_args(),
            vec!["-m", "pip", "install", "--upgrade", "torch==2.1.0"]
        );
    }

    #[tokio::test]
    async fn blank_selection_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let node = node(NodeKind::Package, dir.path(), StubRunner::exit(0, "", ""));

        let result = node.execute("   ", NodeFlags::default()).await;

        assert!(!result.success);
        assert_eq!(result.status_message, "No packages configured");
        assert_eq!(node.installer().runner().call_count(), 0);
    }

    #[test]
    fn from_config_uses_configured_limits() {
        let mut config = GlobalConfig::default();
        config.wheel.timeout_seconds = Some(12);
        config.wheel.config_file = Some("lists/wheels.txt".to_string());

        let node = Node::from_config(NodeKind::Wheel, &config, Path::new("/srv/nodes"));

        assert_eq!(node.installer().timeout(), Duration::from_secs(12));
        assert_eq!(
            node.candidates_path(),
            Path::new("/srv/nodes").join("lists/wheels.txt")
        );
    }

    #[test]
    fn results_serialize_with_output_names() {
        let result = NodeResult {
            status_message: "Successfully installed: rich".to_string(),
            success: true,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status_message"], "Successfully installed: rich");
        assert_eq!(json["success"], true);
    }
}
