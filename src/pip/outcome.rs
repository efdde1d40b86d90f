use crate::node::kind::NodeKind;
use crate::pip::request::InstallRequest;
use std::path::Path;
use std::time::Duration;

/// How a single install attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The selection was a placeholder; nothing was run.
    Rejected(String),
    Success { stdout: String },
    NonZeroExit { code: i32, stderr: String },
    Timeout(Duration),
    LaunchFailure(String),
}

impl InstallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InstallOutcome::Success { .. })
    }

    pub fn status_message(&self, request: &InstallRequest) -> String {
        match self {
            InstallOutcome::Rejected(sentinel) => sentinel.clone(),
            InstallOutcome::Success { .. } => {
                let target = request.target().unwrap_or_default();
                let shown = match request.kind {
                    NodeKind::Wheel => wheel_filename(target),
                    NodeKind::Package => target.to_string(),
                };
                format!("Successfully installed: {}", shown)
            }
            InstallOutcome::NonZeroExit { stderr, .. } => format!(
                "Failed to install {}. Error: {}",
                request.kind.noun(),
                stderr
            ),
            InstallOutcome::Timeout(limit) => format!(
                "Installation timed out (exceeded {})",
                describe_limit(*limit)
            ),
            InstallOutcome::LaunchFailure(cause) => {
                format!("Error during installation: {}", cause)
            }
        }
    }
}

/// Last non-empty path segment of a wheel URL, or the URL itself.
pub fn wheel_filename(url: &str) -> String {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
    };

    Path::new(&path)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| url.to_string())
}

fn describe_limit(limit: Duration) -> String {
    let secs = limit.as_secs();
    match secs {
        60 => "1 minute".to_string(),
        s if s > 0 && s % 60 == 0 => format!("{} minutes", s / 60),
        1 => "1 second".to_string(),
        s => format!("{} seconds", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_last_segment() {
        assert_eq!(
            wheel_filename("https://host.test/dir/pkg-1.0-py3-none-any.whl"),
            "pkg-1.0-py3-none-any.whl"
        );
        assert_eq!(
            wheel_filename("https://host.test/dir/pkg-1.0-py3-none-any.whl?token=abc#sha256=00"),
            "pkg-1.0-py3-none-any.whl"
        );
    }

    #[test]
    fn filename_falls_back_to_url_without_path() {
        assert_eq!(wheel_filename("https://host.test"), "https://host.test");
        assert_eq!(wheel_filename("https://host.test/"), "https://host.test/");
    }

    #[test]
    fn filename_of_local_path() {
        assert_eq!(
            wheel_filename("./wheels/local-0.1-py3-none-any.whl"),
            "local-0.1-py3-none-any.whl"
        );
    }

    #[test]
    fn timeout_messages_match_node_defaults() {
        let wheel = InstallRequest::wheel("https://h.test/a.whl", false);
        let package = InstallRequest::package("numpy", false, false);

        assert_eq!(
            InstallOutcome::Timeout(NodeKind::Wheel.default_timeout()).status_message(&wheel),
            "Installation timed out (exceeded 5 minutes)"
        );
        assert_eq!(
            InstallOutcome::Timeout(NodeKind::Package.default_timeout()).status_message(&package),
            "Installation timed out (exceeded 10 minutes)"
        );
        assert_eq!(
            InstallOutcome::Timeout(Duration::from_secs(90)).status_message(&package),
            "Installation timed out (exceeded 90 seconds)"
        );
        assert_eq!(
            InstallOutcome::Timeout(Duration::from_secs(60)).status_message(&package),
            "Installation timed out (exceeded 1 minute)"
        );
    }

    #[test]
    fn failure_embeds_stderr() {
        let request = InstallRequest::package("nope", false, false);
        let outcome = InstallOutcome::NonZeroExit {
            code: 1,
            stderr: "ERROR: No matching distribution".to_string(),
        };
        assert_eq!(
            outcome.status_message(&request),
            "Failed to install package. Error: ERROR: No matching distribution"
        );
        assert!(!outcome.is_success());
    }
}
