use crate::config::overrides::EnvOverrides;
use crate::config::schema::GlobalConfig;
use crate::config::validate_global_config;
use crate::core::error::Result;
use crate::core::executable_dir;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tokio::fs;

const GLOBAL_CONFIG_FILE: &str = "config.toml";

pub struct GlobalConfigManager {
    config_dir: PathBuf,
    config_path: PathBuf,
}

impl GlobalConfigManager {
    pub fn new() -> Result<Self> {
        Ok(Self::with_dir(Self::get_config_dir()))
    }

    pub fn with_dir(config_dir: PathBuf) -> Self {
        let config_path = config_dir.join(GLOBAL_CONFIG_FILE);
        Self {
            config_dir,
            config_path,
        }
    }

    fn get_config_dir() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "pip-nodes", "pip-nodes") {
            proj_dirs.config_dir().to_path_buf()
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pip-nodes")
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the file as-is; a missing file yields defaults.
    pub async fn load_file(&self) -> Result<GlobalConfig> {
        if !self.config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let config: GlobalConfig = toml::from_str(&content)?;
        validate_global_config(&config)?;
        Ok(config)
    }

    /// Loads the file and applies environment overrides.
    pub async fn load(&self) -> Result<GlobalConfig> {
        let mut config = self.load_file().await?;
        EnvOverrides::from_env().apply(&mut config);
        validate_global_config(&config)?;
        Ok(config)
    }

    pub async fn save(&self, config: &GlobalConfig) -> Result<()> {
        validate_global_config(config)?;
        fs::create_dir_all(&self.config_dir).await?;
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await?;
        Ok(())
    }

    /// Returns true when a new file was written.
    pub async fn ensure_initialized(&self) -> Result<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }
        self.save(&GlobalConfig::with_explicit_defaults()).await?;
        Ok(true)
    }
}

/// Picks the candidate directory: explicit flag, then config, then the binary's directory.
pub fn resolve_nodes_dir(cli_override: Option<&Path>, config: &GlobalConfig) -> PathBuf {
    if let Some(dir) = cli_override {
        return dir.to_path_buf();
    }

    match config.nodes_dir.as_deref() {
        Some(dir) => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            crate::core::resolve_path(&cwd, dir)
        }
        None => executable_dir(),
    }
}
