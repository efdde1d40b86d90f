use crate::core::{write_new_file, PipNodesError};
use crate::node::kind::{NodeKind, CONFIG_ERROR_PREFIX};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Install candidates read from a node's list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateList {
    Candidates(Vec<String>),
    Empty,
    ConfigError(String),
}

impl CandidateList {
    pub fn parse(content: &str) -> Self {
        let candidates: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if candidates.is_empty() {
            CandidateList::Empty
        } else {
            CandidateList::Candidates(candidates)
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, CandidateList::Candidates(_))
    }

    pub fn len(&self) -> usize {
        match self {
            CandidateList::Candidates(c) => c.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zero-based lookup into the configured candidates.
    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            CandidateList::Candidates(c) => c.get(index).map(String::as_str),
            _ => None,
        }
    }

    /// The list as the host shows it. Never empty.
    pub fn options(&self, kind: NodeKind) -> Vec<String> {
        match self {
            CandidateList::Candidates(c) => c.clone(),
            CandidateList::Empty => vec![kind.empty_sentinel().to_string()],
            CandidateList::ConfigError(e) => vec![format!("{}: {}", CONFIG_ERROR_PREFIX, e)],
        }
    }
}

/// Reads the candidate file for `kind`, creating it from the template when absent.
///
/// Never fails: every problem is folded into the returned list.
pub async fn load_candidates(kind: NodeKind, path: &Path) -> CandidateList {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let list = CandidateList::parse(&content);
            debug!("Loaded {} {} candidate(s) from {}", list.len(), kind, path.display());
            list
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found. Creating default file.", path.display());
            match write_new_file(path, kind.template()).await {
                Ok(()) => {}
                Err(PipNodesError::Io(e)) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("{} appeared while creating template", path.display());
                }
                Err(e) => warn!("Could not create {}: {}", path.display(), e),
            }
            CandidateList::Empty
        }
        Err(e) => {
            warn!("Error reading {}: {}", path.display(), e);
            CandidateList::ConfigError(e.to_string())
        }
    }
}
