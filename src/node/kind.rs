use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Prefix of the option shown when the candidate file could not be read.
pub const CONFIG_ERROR_PREFIX: &str = "Error reading config";

/// Option prefixes that stand for "nothing to install" rather than a target.
pub const SENTINEL_PREFIXES: [&str; 3] = ["No wheels", "No packages", CONFIG_ERROR_PREFIX];

const WHEEL_TEMPLATE: &str = "# Add wheel URLs here, one per line\n\
                              # Lines starting with # are comments\n";

const PACKAGE_TEMPLATE: &str = "# Add package names here, one per line\n\
                                # Lines starting with # are comments\n\
                                # You can specify versions: numpy==1.24.0\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Wheel,
    Package,
}

impl NodeKind {
    pub const ALL: [NodeKind; 2] = [NodeKind::Wheel, NodeKind::Package];

    pub fn noun(&self) -> &'static str {
        match self {
            NodeKind::Wheel => "wheel",
            NodeKind::Package => "package",
        }
    }

    /// Name of the selectable input carrying the candidate.
    pub fn selection_field(&self) -> &'static str {
        match self {
            NodeKind::Wheel => "wheel_url",
            NodeKind::Package => "package_name",
        }
    }

    pub fn default_config_file(&self) -> &'static str {
        match self {
            NodeKind::Wheel => "wheel_urls.txt",
            NodeKind::Package => "package_names.txt",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            NodeKind::Wheel => WHEEL_TEMPLATE,
            NodeKind::Package => PACKAGE_TEMPLATE,
        }
    }

    pub fn empty_sentinel(&self) -> &'static str {
        match self {
            NodeKind::Wheel => "No wheels configured",
            NodeKind::Package => "No packages configured",
        }
    }

    pub fn default_timeout(&self) -> Duration {
        match self {
            NodeKind::Wheel => Duration::from_secs(300),
            NodeKind::Package => Duration::from_secs(600),
        }
    }

    pub fn supports_upgrade(&self) -> bool {
        matches!(self, NodeKind::Package)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}
