pub mod candidates;
pub mod global;
pub mod overrides;
pub mod schema;
pub mod validation;

pub use candidates::{load_candidates, CandidateList};
pub use global::{resolve_nodes_dir, GlobalConfigManager};
pub use overrides::EnvOverrides;
pub use schema::{GlobalConfig, NodeConfig, PythonConfig};
pub use validation::validate_global_config;
