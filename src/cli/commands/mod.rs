pub mod doctor;
pub mod init;
pub mod install;
pub mod options;

use crate::config::{resolve_nodes_dir, GlobalConfig, GlobalConfigManager};
use crate::core::error::Result;
use std::path::{Path, PathBuf};

pub(crate) struct Context {
    pub manager: GlobalConfigManager,
    pub config: GlobalConfig,
    pub nodes_dir: PathBuf,
}

pub(crate) async fn load_context(node_dir: Option<&Path>) -> Result<Context> {
    let manager = GlobalConfigManager::new()?;
    let config = manager.load().await?;
    let nodes_dir = resolve_nodes_dir(node_dir, &config);

    Ok(Context {
        manager,
        config,
        nodes_dir,
    })
}
