use crate::config::schema::GlobalConfig;
use crate::core::error::{PipNodesError, Result};
use crate::node::kind::NodeKind;

pub fn validate_global_config(config: &GlobalConfig) -> Result<()> {
    if config.python.interpreter.trim().is_empty() {
        return Err(PipNodesError::Config(
            "python.interpreter cannot be empty".to_string(),
        ));
    }

    if let Some(dir) = config.nodes_dir.as_deref() {
        if dir.trim().is_empty() {
            return Err(PipNodesError::Config(
                "nodes_dir cannot be empty when set".to_string(),
            ));
        }
    }

    for kind in NodeKind::ALL {
        let node = config.node(kind);

        if node.timeout_seconds == Some(0) {
            return Err(PipNodesError::Config(format!(
                "{}.timeout_seconds must be > 0",
                kind
            )));
        }

        if node
            .config_file
            .as_deref()
            .is_some_and(|f| f.trim().is_empty())
        {
            return Err(PipNodesError::Config(format!(
                "{}.config_file cannot be empty",
                kind
            )));
        }
    }

    Ok(())
}
