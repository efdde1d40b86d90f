//! Wheel and pip package installer nodes.
//!
//! Each node reads a line-oriented candidate list, offers it as a selectable
//! option, and runs `<python> -m pip install` for the chosen entry, reporting
//! a status message and a success flag.

pub mod cli;
pub mod config;
pub mod core;
pub mod node;
pub mod pip;

pub use crate::config::{CandidateList, GlobalConfig};
pub use crate::core::{PipNodesError, Result};
pub use crate::node::{Node, NodeFlags, NodeKind, NodeResult, NodeSchema};
pub use crate::pip::{InstallOutcome, InstallRequest, Installer};
