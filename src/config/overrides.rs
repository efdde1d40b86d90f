use crate::config::schema::GlobalConfig;

pub const PYTHON_ENV: &str = "PIP_NODES_PYTHON";
pub const NODES_DIR_ENV: &str = "PIP_NODES_DIR";

/// Settings taken from the process environment, applied over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub interpreter: Option<String>,
    pub nodes_dir: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            interpreter: non_blank(PYTHON_ENV),
            nodes_dir: non_blank(NODES_DIR_ENV),
        }
    }

    pub fn apply(&self, config: &mut GlobalConfig) {
        if let Some(interpreter) = &self.interpreter {
            config.python.interpreter = interpreter.clone();
        }
        if let Some(dir) = &self.nodes_dir {
            config.nodes_dir = Some(dir.clone());
        }
    }
}
