use crate::node::kind::{NodeKind, SENTINEL_PREFIXES};

/// A value chosen from a node's option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Target(String),
    /// A placeholder option ("No wheels configured", "Error reading config: ...").
    Sentinel(String),
}

impl Selection {
    pub fn parse(raw: &str) -> Self {
        if SENTINEL_PREFIXES.iter().any(|p| raw.starts_with(p)) {
            Selection::Sentinel(raw.to_string())
        } else {
            Selection::Target(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::Target(s) | Selection::Sentinel(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub kind: NodeKind,
    pub selection: Selection,
    pub force_reinstall: bool,
    /// Ignored for wheels.
    pub upgrade: bool,
}

impl InstallRequest {
    pub fn wheel(url: &str, force_reinstall: bool) -> Self {
        Self {
            kind: NodeKind::Wheel,
            selection: Selection::parse(url),
            force_reinstall,
            upgrade: false,
        }
    }

    pub fn package(name: &str, force_reinstall: bool, upgrade: bool) -> Self {
        Self {
            kind: NodeKind::Package,
            selection: Selection::parse(name),
            force_reinstall,
            upgrade,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match &self.selection {
            Selection::Target(t) => Some(t),
            Selection::Sentinel(_) => None,
        }
    }

    /// Interpreter arguments for `python -m pip install`, or `None` for a sentinel.
    pub fn pip_args(&self) -> Option<Vec<String>> {
        let target = self.target()?;

        let mut args: Vec<String> = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];

        if self.force_reinstall {
            args.push("--force-reinstall".to_string());
        }

        if self.upgrade && self.kind.supports_upgrade() {
            args.push("--upgrade".to_string());
        }

        args.push(target.to_string());
        Some(args)
    }
}
